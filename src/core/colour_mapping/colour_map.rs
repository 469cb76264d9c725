use crate::core::data::colour::Colour;
use crate::core::escape::escape_time::IterationResult;

/// Maps an escape-time classification to a display colour.
///
/// Implementations must be monotonic in `iterations / max_iterations` for
/// escaped points and must map set members to a single solid colour. The
/// evaluator is total, so the mapping has no failure modes.
pub trait IterationColourMap: Send + Sync {
    fn map(&self, result: IterationResult, max_iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
