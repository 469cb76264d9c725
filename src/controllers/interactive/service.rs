use crate::controllers::interactive::data::frame_info::FrameInfo;
use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::controllers::interactive::scheduler::{RenderDetail, RenderScheduler, SchedulerAction};
use crate::core::colour_mapping::grayscale::GrayscaleGradient;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_job::RenderJob;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::ViewportSize;
use crate::core::render::renderer::render_into;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct Inner {
    scheduler: RenderScheduler,
    next_job: Option<RenderJob>,
    viewport: ViewportSize,
    /// None exactly while a pass is writing it; the worker owns it then.
    buffer: Option<PixelBuffer>,
}

struct SharedState {
    inner: Mutex<Inner>,
    wake: Condvar,
    shutdown: AtomicBool,
    frame_sink: Arc<dyn FrameSink>,
}

/// Executes render passes on a worker thread.
///
/// The interaction thread only ever records state and wakes the worker; it
/// never blocks on pixel work. There is no mid-render cancellation: a
/// dispatched pass runs to completion and a stale result is superseded by the
/// follow-up the scheduler issues on completion.
pub struct RenderService {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderService {
    #[must_use]
    pub fn new(
        settings: RenderSettings,
        viewport: ViewportSize,
        frame_sink: Arc<dyn FrameSink>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            inner: Mutex::new(Inner {
                scheduler: RenderScheduler::new(settings),
                next_job: None,
                viewport,
                buffer: Some(PixelBuffer::new(viewport)),
            }),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            frame_sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Feeds one request through the scheduler, waking the worker when a job
    /// was dispatched. Returns what the scheduler decided.
    pub fn request_render(&self, view: ViewState, detail: RenderDetail) -> SchedulerAction {
        let mut inner = self.shared.inner.lock().unwrap();
        let action = inner.scheduler.request(view, detail);

        if let SchedulerAction::Dispatch(job) = action {
            inner.next_job = Some(job);
            self.shared.wake.notify_one();
        }

        action
    }

    /// Takes effect when the next pass is dispatched. The buffer is only
    /// recreated when the dimensions actually changed.
    pub fn set_viewport(&self, viewport: ViewportSize) {
        let mut inner = self.shared.inner.lock().unwrap();
        inner.viewport = viewport;
    }

    /// Runs `f` against the most recently completed frame. Returns None while
    /// a pass is writing the buffer; readers never observe partial writes.
    pub fn with_frame<R>(&self, f: impl FnOnce(&PixelBuffer) -> R) -> Option<R> {
        let inner = self.shared.inner.lock().unwrap();
        inner.buffer.as_ref().map(f)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job, mut buffer) = {
                let mut inner = shared.inner.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = inner.next_job.take() {
                        let viewport = inner.viewport;
                        let mut buffer = inner
                            .buffer
                            .take()
                            .expect("buffer is present whenever no pass is in flight");
                        buffer.resize(viewport);
                        break (job, buffer);
                    }

                    inner = shared.wake.wait(inner).unwrap();
                }
            };

            let start = Instant::now();
            let in_set_pixels = render_into(&job, &mut buffer, &GrayscaleGradient);
            let render_duration = start.elapsed();

            // An empty viewport has nothing to display; skip the notification
            // but still complete below so the scheduler cannot wedge.
            if !buffer.is_empty() {
                shared.frame_sink.frame_ready(
                    &buffer,
                    FrameInfo {
                        generation: job.generation,
                        view: job.view,
                        max_iterations: job.max_iterations,
                        in_set_pixels,
                        render_duration,
                    },
                );
            }

            let mut inner = shared.inner.lock().unwrap();
            inner.buffer = Some(buffer);
            if let Some(follow_up) = inner.scheduler.complete() {
                inner.next_job = Some(follow_up);
            }
        }
    }
}

impl Drop for RenderService {
    fn drop(&mut self) {
        self.shutdown();
    }
}
