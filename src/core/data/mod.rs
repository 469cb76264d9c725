pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod render_job;
pub mod screen_point;
pub mod view_state;
pub mod viewport;
