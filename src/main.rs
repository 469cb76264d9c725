use std::time::Instant;

use mandelbrot_touch::{
    GrayscaleGradient, PixelBuffer, RenderJob, ScreenPoint, ViewState, ViewportSize, render_into,
    write_ppm,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let viewport = ViewportSize::new(800, 600);
    let center = ScreenPoint::new(
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
    );
    let job = RenderJob {
        view: ViewState::new(center, 1.0),
        max_iterations: 500,
        generation: 1,
    };
    let mut buffer = PixelBuffer::new(viewport);

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", viewport.width, viewport.height);
    println!("Max iterations: {}", job.max_iterations);

    let start = Instant::now();
    let in_set = render_into(&job, &mut buffer, &GrayscaleGradient);
    println!("Duration:   {:?}", start.elapsed());
    println!("Pixels in set: {in_set}");

    std::fs::create_dir_all("output")?;
    write_ppm(&buffer, "output/mandelbrot.ppm")?;
    println!("Saved to output/mandelbrot.ppm");

    Ok(())
}
