use crate::core::data::screen_point::ScreenPoint;

/// Smallest zoom the engine will carry. A zoom of zero or below is a contract
/// violation at the gesture boundary; clamping here keeps the screen-to-plane
/// mapping finite.
pub const MIN_ZOOM: f64 = 1e-12;

/// The current pan/zoom parameters: which region of the complex plane is
/// visible. `center` is a screen-space point, not a plane point; the mapping
/// is anchored so the default view covers roughly real ∈ [-2, 1],
/// imag ∈ [-1, 1] at zoom 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center: ScreenPoint,
    pub zoom: f64,
}

impl ViewState {
    #[must_use]
    pub fn new(center: ScreenPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.max(MIN_ZOOM),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: ScreenPoint::default(),
            zoom: 1.0,
        }
    }
}
