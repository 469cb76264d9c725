use crate::core::colour_mapping::colour_map::IterationColourMap;
use crate::core::data::colour::Colour;
use crate::core::escape::escape_time::IterationResult;

/// Set members are solid black; escaped points fade from black towards white
/// as their escape step approaches the budget.
#[derive(Debug, Default, Clone, Copy)]
pub struct GrayscaleGradient;

impl IterationColourMap for GrayscaleGradient {
    fn map(&self, result: IterationResult, max_iterations: u32) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        let t = f64::from(result.iterations) / f64::from(max_iterations.max(1));
        Colour::grey((255.0 * t) as u8)
    }

    fn display_name(&self) -> &str {
        "Grayscale gradient"
    }
}
