use crate::core::data::complex::Complex;

/// Classification of one complex point after a bounded escape-time run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationResult {
    /// False means the point survived the whole iteration budget. This is a
    /// bounded-iteration approximation of set membership, not a proof.
    pub escaped: bool,
    pub iterations: u32,
}

/// Escape-time iteration z ← z² + c starting from z = 0.
///
/// Divergence is detected when the squared magnitude strictly exceeds 4,
/// which is |z| > 2 without a square root per step. `iterations` is the
/// 1-based step at which escape was detected, or `max_iterations` when the
/// point never escaped. Total over its domain; overflow is impossible inside
/// the budget because the loop exits as soon as divergence is detected.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> IterationResult {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;

    for step in 1..=max_iterations {
        let next_x = x * x - y * y + c.real;
        let next_y = 2.0 * x * y + c.imag;

        if next_x * next_x + next_y * next_y > 4.0 {
            return IterationResult {
                escaped: true,
                iterations: step,
            };
        }

        x = next_x;
        y = next_y;
    }

    IterationResult {
        escaped: false,
        iterations: max_iterations,
    }
}
