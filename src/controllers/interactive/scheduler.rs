use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::core::data::render_job::RenderJob;
use crate::core::data::view_state::ViewState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Rendering,
}

/// How much detail a request wants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderDetail {
    /// Cheap in-gesture feedback pass; disposable.
    Preview,
    /// Full iteration budget; if it cannot run now it is owed later.
    Full,
}

/// What the scheduler decided to do with one request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SchedulerAction {
    /// Start this job now.
    Dispatch(RenderJob),
    /// A render is in flight; a full-detail follow-up is now owed.
    Coalesced,
    /// A render is in flight and this preview is simply superseded.
    Dropped,
}

/// The coalescing state machine at the heart of the engine.
///
/// Gestures fire at high frequency; rendering the full budget per event would
/// starve the interaction thread. This machine guarantees at most one render
/// in flight, no backlog of queued jobs, and that the user eventually sees a
/// full-detail render of wherever the gesture ended: any number of requests
/// arriving mid-render collapse into at most one follow-up that snapshots the
/// most recent view.
///
/// Pure and synchronous; [`RenderService`](super::RenderService) drives it
/// from the threads involved.
pub struct RenderScheduler {
    state: SchedulerState,
    pending_detailed: bool,
    latest_view: ViewState,
    generation: u64,
    settings: RenderSettings,
}

impl RenderScheduler {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            state: SchedulerState::Idle,
            pending_detailed: false,
            latest_view: ViewState::default(),
            generation: 0,
            settings,
        }
    }

    /// Records a request against the current state.
    ///
    /// Idle: dispatches immediately with the requested detail. Rendering:
    /// drops previews outright and records full-detail requests as owed; in
    /// both cases only the view is remembered, never the request itself.
    pub fn request(&mut self, view: ViewState, detail: RenderDetail) -> SchedulerAction {
        self.latest_view = view;

        match self.state {
            SchedulerState::Idle => SchedulerAction::Dispatch(self.dispatch(detail)),
            SchedulerState::Rendering => match detail {
                RenderDetail::Full => {
                    self.pending_detailed = true;
                    SchedulerAction::Coalesced
                }
                RenderDetail::Preview => SchedulerAction::Dropped,
            },
        }
    }

    /// Observes completion of the in-flight render.
    ///
    /// Returns the owed full-detail follow-up when there is one. The
    /// follow-up snapshots the latest view at this moment, which may have
    /// moved further since the detail was marked owed — never the view any
    /// earlier coalesced request carried.
    pub fn complete(&mut self) -> Option<RenderJob> {
        self.state = SchedulerState::Idle;

        if !self.pending_detailed {
            return None;
        }

        self.pending_detailed = false;
        Some(self.dispatch(RenderDetail::Full))
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn detail_owed(&self) -> bool {
        self.pending_detailed
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.generation
    }

    fn dispatch(&mut self, detail: RenderDetail) -> RenderJob {
        self.generation += 1;
        self.state = SchedulerState::Rendering;

        RenderJob {
            view: self.latest_view,
            max_iterations: match detail {
                RenderDetail::Preview => self.settings.preview_iterations,
                RenderDetail::Full => self.settings.max_iterations,
            },
            generation: self.generation,
        }
    }
}
