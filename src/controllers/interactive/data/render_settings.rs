const DEFAULT_MAX_ITERATIONS: u32 = 10_000;
const DEFAULT_PREVIEW_ITERATIONS: u32 = 10;

/// Iteration budgets for the two render passes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Detail/cost trade-off for full renders.
    pub max_iterations: u32,
    /// Cost of in-gesture feedback; kept tiny so previews finish quickly.
    pub preview_iterations: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            preview_iterations: DEFAULT_PREVIEW_ITERATIONS,
        }
    }
}
