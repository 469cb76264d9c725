use crate::core::data::view_state::ViewState;

/// Snapshot of everything one render pass needs, taken at dispatch time.
///
/// `generation` increases strictly with every dispatched job and is used to
/// detect staleness downstream; the view is never read again once the job is
/// built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderJob {
    pub view: ViewState,
    pub max_iterations: u32,
    pub generation: u64,
}
