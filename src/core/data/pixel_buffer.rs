use crate::core::data::colour::Colour;
use crate::core::data::viewport::ViewportSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn viewport_to_buffer_size(viewport: ViewportSize) -> usize {
    viewport.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    SizeMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport needs {} bytes but buffer holds {}",
                    viewport_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// An owned RGBA raster with the same dimensions as the viewport.
///
/// Exactly one render pass writes it at a time; readers only observe it
/// between passes. The allocation is reused across passes and recreated only
/// when the viewport dimensions change.
#[derive(Debug)]
pub struct PixelBuffer {
    viewport: ViewportSize,
    data: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            data: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    pub fn from_data(
        viewport: ViewportSize,
        data: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let viewport_size = viewport_to_buffer_size(viewport);

        if viewport_size != data.len() {
            return Err(PixelBufferError::SizeMismatch {
                viewport_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self { viewport, data })
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewport.is_empty()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Adopts new dimensions, reallocating only when they actually changed.
    /// Returns whether a reallocation happened; unchanged dimensions leave
    /// the previous contents in place for the next pass to overwrite.
    pub fn resize(&mut self, viewport: ViewportSize) -> bool {
        if viewport == self.viewport {
            return false;
        }

        self.viewport = viewport;
        self.data = vec![0; viewport_to_buffer_size(viewport)];
        true
    }

    /// Reads one pixel, or None when the coordinate is out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }

        let index = (y as usize * self.viewport.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
            a: self.data[index + 3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(ViewportSize::new(10, 10));

        assert_eq!(buffer.data().len(), 400); // 10 * 10 * 4
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_with_empty_viewport_allocates_nothing() {
        let buffer = PixelBuffer::new(ViewportSize::new(0, 100));

        assert!(buffer.is_empty());
        assert_eq!(buffer.data().len(), 0);
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
            0, 0, 255, 255, // (0,1) blue
            255, 255, 0, 255, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(ViewportSize::new(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.data(), &data[..]);
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(ViewportSize::new(2, 2), vec![0; 3]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::SizeMismatch {
                viewport_size: 16,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_resize_to_same_dimensions_keeps_contents() {
        let mut buffer = PixelBuffer::new(ViewportSize::new(2, 2));
        buffer.data_mut()[0] = 42;

        let reallocated = buffer.resize(ViewportSize::new(2, 2));

        assert!(!reallocated);
        assert_eq!(buffer.data()[0], 42);
    }

    #[test]
    fn test_resize_to_new_dimensions_reallocates() {
        let mut buffer = PixelBuffer::new(ViewportSize::new(2, 2));
        buffer.data_mut()[0] = 42;

        let reallocated = buffer.resize(ViewportSize::new(3, 3));

        assert!(reallocated);
        assert_eq!(buffer.data().len(), 36); // 3 * 3 * 4
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_reads_rgba_at_coordinate() {
        let mut buffer = PixelBuffer::new(ViewportSize::new(3, 3));
        let index = (1 * 3 + 2) * BYTES_PER_PIXEL; // (x=2, y=1)
        buffer.data_mut()[index] = 10;
        buffer.data_mut()[index + 1] = 20;
        buffer.data_mut()[index + 2] = 30;
        buffer.data_mut()[index + 3] = 40;

        assert_eq!(
            buffer.pixel(2, 1),
            Some(Colour {
                r: 10,
                g: 20,
                b: 30,
                a: 40
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(ViewportSize::new(3, 3));

        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 3), None);
    }
}
