use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::controllers::interactive::scheduler::{RenderDetail, SchedulerAction};
use crate::controllers::interactive::service::RenderService;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::view_state::{MIN_ZOOM, ViewState};
use crate::core::data::viewport::ViewportSize;
use std::sync::Arc;

/// Translates raw gesture events into view-state updates and render requests.
///
/// All methods are meant to be called from the interaction thread; none of
/// them block on render work. View mutations are therefore naturally
/// sequenced: whatever the view is when a request dispatches is what the
/// render job snapshots.
pub struct InteractionController {
    service: RenderService,
    view: ViewState,
    last_zoom: f64,
}

impl InteractionController {
    #[must_use]
    pub fn new(
        settings: RenderSettings,
        viewport: ViewportSize,
        frame_sink: Arc<dyn FrameSink>,
    ) -> Self {
        Self {
            service: RenderService::new(settings, viewport, frame_sink),
            view: ViewState::default(),
            last_zoom: 1.0,
        }
    }

    /// A tap recenters the view. Taps are discrete, low-frequency events, so
    /// the render goes straight to full detail with no preview stage.
    pub fn on_tap(&mut self, point: ScreenPoint) -> SchedulerAction {
        self.view.center = point;
        self.service.request_render(self.view, RenderDetail::Full)
    }

    /// Continuous phase of a pinch. The zoom is always derived from the zoom
    /// committed at the end of the previous gesture, not compounded per
    /// event, and the render is a cheap preview for live feedback.
    pub fn on_pinch_changed(&mut self, point: ScreenPoint, scale: f64) -> SchedulerAction {
        self.apply_pinch(point, scale);
        self.service.request_render(self.view, RenderDetail::Preview)
    }

    /// Final phase of a pinch: commits the zoom and requests full detail.
    /// If a preview is still in flight the scheduler records the detail as
    /// owed instead of dispatching twice.
    pub fn on_pinch_ended(&mut self, point: ScreenPoint, scale: f64) -> SchedulerAction {
        self.apply_pinch(point, scale);
        self.last_zoom = self.view.zoom;
        self.service.request_render(self.view, RenderDetail::Full)
    }

    /// Forwards new viewport dimensions; they apply from the next render.
    pub fn resize(&self, viewport: ViewportSize) {
        self.service.set_viewport(viewport);
    }

    /// Read access to the latest completed frame; see
    /// [`RenderService::with_frame`].
    pub fn with_frame<R>(&self, f: impl FnOnce(&PixelBuffer) -> R) -> Option<R> {
        self.service.with_frame(f)
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn shutdown(&mut self) {
        self.service.shutdown();
    }

    fn apply_pinch(&mut self, point: ScreenPoint, scale: f64) {
        // A non-positive scale from the recognizer is a contract violation;
        // clamp here so the mapper never sees a zoom <= 0.
        self.view.zoom = (self.last_zoom * scale).max(MIN_ZOOM);
        self.view.center = point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::frame_info::FrameInfo;
    use std::sync::Mutex;
    use std::thread;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct RecordingSink {
        frames: Mutex<Vec<FrameInfo>>,
    }

    impl RecordingSink {
        fn frames(&self) -> Vec<FrameInfo> {
            self.frames.lock().unwrap().clone()
        }
    }

    impl FrameSink for RecordingSink {
        fn frame_ready(&self, _buffer: &PixelBuffer, frame: FrameInfo) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    fn settings() -> RenderSettings {
        RenderSettings {
            max_iterations: 300,
            preview_iterations: 10,
        }
    }

    fn controller(sink: &Arc<RecordingSink>) -> InteractionController {
        InteractionController::new(
            settings(),
            ViewportSize::new(16, 16),
            Arc::clone(sink) as Arc<dyn FrameSink>,
        )
    }

    fn wait_until(sink: &RecordingSink, timeout: Duration, done: impl Fn(&[FrameInfo]) -> bool) {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if done(&sink.frames()) {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_tap_recenters_and_renders_full_detail() {
        let sink = Arc::new(RecordingSink::default());
        let mut controller = controller(&sink);

        controller.on_tap(ScreenPoint::new(40.0, 30.0));

        assert_eq!(controller.view().center, ScreenPoint::new(40.0, 30.0));
        assert_eq!(controller.view().zoom, 1.0);

        wait_until(&sink, Duration::from_secs(2), |frames| !frames.is_empty());
        let frames = sink.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].max_iterations, 300);
        assert_eq!(frames[0].view.center, ScreenPoint::new(40.0, 30.0));

        controller.shutdown();
    }

    #[test]
    fn test_pinch_scale_applies_to_committed_zoom() {
        let sink = Arc::new(RecordingSink::default());
        let mut controller = controller(&sink);

        controller.on_pinch_changed(ScreenPoint::new(10.0, 10.0), 2.0);
        assert_eq!(controller.view().zoom, 2.0);

        // Still relative to the committed zoom of 1.0, not the live 2.0.
        controller.on_pinch_changed(ScreenPoint::new(10.0, 10.0), 3.0);
        assert_eq!(controller.view().zoom, 3.0);

        controller.on_pinch_ended(ScreenPoint::new(10.0, 10.0), 3.0);
        assert_eq!(controller.view().zoom, 3.0);

        // The next gesture compounds on the committed 3.0.
        controller.on_pinch_changed(ScreenPoint::new(10.0, 10.0), 2.0);
        assert_eq!(controller.view().zoom, 6.0);

        controller.shutdown();
    }

    #[test]
    fn test_non_positive_pinch_scale_is_clamped() {
        let sink = Arc::new(RecordingSink::default());
        let mut controller = controller(&sink);

        controller.on_pinch_changed(ScreenPoint::new(0.0, 0.0), 0.0);
        assert_eq!(controller.view().zoom, MIN_ZOOM);

        controller.on_pinch_changed(ScreenPoint::new(0.0, 0.0), -1.0);
        assert_eq!(controller.view().zoom, MIN_ZOOM);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_pinch_ends_in_exactly_one_full_detail_frame() {
        let sink = Arc::new(RecordingSink::default());
        let mut controller = controller(&sink);

        // Simulated gesture drag: five rapid preview requests, then the end.
        for step in 1..=5 {
            let scale = 1.0 + f64::from(step) * 0.2;
            controller.on_pinch_changed(ScreenPoint::new(50.0, 60.0), scale);
        }
        controller.on_pinch_ended(ScreenPoint::new(55.0, 65.0), 2.5);

        wait_until(&sink, Duration::from_secs(5), |frames| {
            frames.iter().any(|f| f.max_iterations == 300)
        });
        // Give any erroneous extra render time to surface.
        thread::sleep(Duration::from_millis(100));

        let frames = sink.frames();
        let full: Vec<_> = frames.iter().filter(|f| f.max_iterations == 300).collect();

        assert_eq!(full.len(), 1, "exactly one full-detail render");
        assert_eq!(full[0].view.center, ScreenPoint::new(55.0, 65.0));
        assert_eq!(full[0].view.zoom, 2.5);

        // The full-detail frame is the newest one.
        assert_eq!(
            frames.last().map(|f| f.generation),
            Some(full[0].generation)
        );

        controller.shutdown();
    }

    #[test]
    fn test_resize_applies_to_the_next_render() {
        let sink = Arc::new(RecordingSink::default());
        let mut controller = controller(&sink);

        controller.resize(ViewportSize::new(8, 4));
        controller.on_tap(ScreenPoint::new(0.0, 0.0));

        wait_until(&sink, Duration::from_secs(2), |frames| !frames.is_empty());
        assert!(!sink.frames().is_empty(), "expected a rendered frame");

        // Once a frame was observed, the next buffer read sees the resized
        // raster; the worker only holds it back while a pass is writing.
        let start = Instant::now();
        let dims = loop {
            if let Some(dims) = controller.with_frame(|b| (b.width(), b.height())) {
                break dims;
            }
            assert!(
                start.elapsed() < Duration::from_secs(2),
                "buffer never returned"
            );
            thread::sleep(Duration::from_millis(5));
        };

        assert_eq!(dims, (8, 4));

        controller.shutdown();
    }
}
