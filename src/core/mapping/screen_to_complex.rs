use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;

/// Horizontal and vertical centre weighting. With these and `PLANE_SCALE`, a
/// view centred on the middle of a typical portrait viewport covers roughly
/// real ∈ [-2, 1], imag ∈ [-1, 1] at zoom 1.
pub const KX: f64 = 1.33;
pub const KY: f64 = 1.00;

/// Pixels per plane unit at zoom 1.
pub const PLANE_SCALE: f64 = 160.0;

/// Maps one pixel coordinate to its point in the complex plane.
///
/// Pure and stateless; preview and detailed passes share it unchanged, only
/// `center` and `zoom` vary between passes.
#[must_use]
pub fn screen_to_complex(x: u32, y: u32, center: ScreenPoint, zoom: f64) -> Complex {
    Complex {
        real: (f64::from(x) - KX * center.x) / PLANE_SCALE / zoom,
        imag: (f64::from(y) - KY * center.y) / PLANE_SCALE / zoom,
    }
}
