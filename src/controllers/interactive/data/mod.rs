pub mod frame_info;
pub mod render_settings;
