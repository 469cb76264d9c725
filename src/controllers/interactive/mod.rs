//! Interactive engine for real-time Mandelbrot exploration.
//!
//! This module is the application layer between gesture input and the
//! presentation layer:
//! - **Input**: tap and pinch events delivered to [`InteractionController`]
//! - **Output**: the [`FrameSink`] port, notified whenever a pass completes
//! - **Core**: [`RenderScheduler`] decides what runs when; [`RenderService`]
//!   executes renders on a worker thread so the interaction thread never
//!   blocks on pixel work.

mod controller;
pub mod data;
pub mod ports;
mod scheduler;
mod service;

pub use controller::InteractionController;
pub use data::frame_info::FrameInfo;
pub use data::render_settings::RenderSettings;
pub use ports::frame_sink::FrameSink;
pub use scheduler::{RenderDetail, RenderScheduler, SchedulerAction, SchedulerState};
pub use service::RenderService;
