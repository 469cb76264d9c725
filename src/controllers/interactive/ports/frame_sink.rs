use crate::controllers::interactive::data::frame_info::FrameInfo;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Presentation-side port, called off the interaction thread once a render
/// pass has fully completed. The buffer is complete when observed; no call
/// ever exposes a half-written pass.
pub trait FrameSink: Send + Sync {
    fn frame_ready(&self, buffer: &PixelBuffer, frame: FrameInfo);
}
