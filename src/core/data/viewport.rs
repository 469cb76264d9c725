/// Dimensions of the render target in pixels.
///
/// A viewport with a zero dimension is valid and simply has nothing to draw;
/// renders against it are no-ops rather than errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Host window systems may report signed dimensions; anything
    /// non-positive collapses to an empty viewport.
    #[must_use]
    pub fn from_signed(width: i64, height: i64) -> Self {
        Self {
            width: u32::try_from(width.max(0)).unwrap_or(u32::MAX),
            height: u32::try_from(height.max(0)).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
