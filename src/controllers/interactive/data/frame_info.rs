use crate::core::data::view_state::ViewState;
use std::time::Duration;

/// Metadata accompanying a completed render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInfo {
    pub generation: u64,
    /// The view the pass actually rendered (its dispatch-time snapshot).
    pub view: ViewState,
    pub max_iterations: u32,
    /// Pixels classified as set members during this pass only.
    pub in_set_pixels: u64,
    pub render_duration: Duration,
}
