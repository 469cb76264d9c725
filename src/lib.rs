mod controllers;
mod core;
mod presenters;

pub use crate::controllers::interactive::{
    FrameInfo, FrameSink, InteractionController, RenderDetail, RenderScheduler, RenderService,
    RenderSettings, SchedulerAction, SchedulerState,
};
pub use crate::core::colour_mapping::colour_map::IterationColourMap;
pub use crate::core::colour_mapping::grayscale::GrayscaleGradient;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::render_job::RenderJob;
pub use crate::core::data::screen_point::ScreenPoint;
pub use crate::core::data::view_state::{MIN_ZOOM, ViewState};
pub use crate::core::data::viewport::ViewportSize;
pub use crate::core::escape::escape_time::{IterationResult, escape_time};
pub use crate::core::mapping::screen_to_complex::screen_to_complex;
pub use crate::core::render::renderer::render_into;
pub use crate::presenters::file::ppm::write_ppm;
