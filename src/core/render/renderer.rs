use rayon::prelude::*;

use crate::core::colour_mapping::colour_map::IterationColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::render_job::RenderJob;
use crate::core::escape::escape_time::escape_time;
use crate::core::mapping::screen_to_complex::screen_to_complex;

/// Renders every pixel of the buffer for one job: coordinate mapping, then
/// escape-time evaluation, then colour mapping.
///
/// Pixels are independent, so rows are partitioned across rayon's thread
/// pool; the scan has no shared mutable state beyond the disjoint row slices.
/// Returns the number of pixels classified as set members, a statistic local
/// to this invocation. An empty buffer renders nothing.
pub fn render_into<M>(job: &RenderJob, buffer: &mut PixelBuffer, map: &M) -> u64
where
    M: IterationColourMap,
{
    if buffer.is_empty() {
        return 0;
    }

    let row_bytes = buffer.width() as usize * BYTES_PER_PIXEL;
    let center = job.view.center;
    let zoom = job.view.zoom;
    let max_iterations = job.max_iterations;

    buffer
        .data_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .map(|(y, row)| {
            let mut in_set = 0_u64;

            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let c = screen_to_complex(x as u32, y as u32, center, zoom);
                let result = escape_time(c, max_iterations);

                if !result.escaped {
                    in_set += 1;
                }

                let colour = map.map(result, max_iterations);
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
                pixel[3] = colour.a;
            }

            in_set
        })
        .sum()
}
