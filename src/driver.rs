//! Frame-driven loop control
//!
//! The driver owns the simulation state and at most one pending frame request.
//! Every restart cancels the pending request before ticking again, and frames
//! carrying any other handle are dropped, so two tick chains can never overlap.

use crate::platform::FrameScheduler;
use crate::sim::{
    DialId, DialSnapshot, LoopPhase, Segments, SimulationConfig, SimulationState, TickOutcome,
    tick,
};

pub struct Driver<S: FrameScheduler> {
    state: SimulationState,
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> Driver<S> {
    pub fn new(config: SimulationConfig, scheduler: S) -> Self {
        Self {
            state: SimulationState::new(config),
            scheduler,
            pending: None,
        }
    }

    /// Run the first tick and start the frame chain
    pub fn start(&mut self) -> TickOutcome {
        if self.pending.is_some() {
            log::debug!("start ignored, loop already scheduled");
            return TickOutcome::Continue;
        }
        log::info!(
            "Starting trace (increments {} / {})",
            self.state.first.angle_increment,
            self.state.second.angle_increment
        );
        self.run_tick()
    }

    /// Handle a fired frame. Returns false for a stale handle.
    pub fn on_frame(&mut self, handle: S::Handle) -> bool {
        if self.pending != Some(handle) {
            log::debug!("Dropping stale frame {:?} (pending {:?})", handle, self.pending);
            return false;
        }
        self.pending = None;
        self.run_tick();
        true
    }

    /// Restart the trace at the current increments
    pub fn reset(&mut self) -> TickOutcome {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.state.reset();
        log::info!(
            "Trace restarted (increments {} / {})",
            self.state.first.angle_increment,
            self.state.second.angle_increment
        );
        self.run_tick()
    }

    /// Change one dial's speed by `delta` degrees per tick and restart
    pub fn set_increment(&mut self, id: DialId, delta: i32) -> TickOutcome {
        let dial = self.state.dial_mut(id);
        dial.adjust_increment(delta);
        log::debug!("{} dial increment now {}", id.as_str(), dial.angle_increment);
        self.reset()
    }

    fn run_tick(&mut self) -> TickOutcome {
        let outcome = tick(&mut self.state);
        if outcome.should_continue() {
            self.pending = Some(self.scheduler.schedule());
        }
        outcome
    }

    pub fn increment(&self, id: DialId) -> f32 {
        self.state.dial(id).angle_increment
    }

    pub fn dial_state(&self, id: DialId) -> DialSnapshot {
        self.state.dial_state(id)
    }

    pub fn traced_segments(&self) -> Segments<'_> {
        self.state.traced_segments()
    }

    pub fn phase(&self) -> LoopPhase {
        self.state.phase
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl Driver<crate::platform::ManualScheduler> {
    /// Deliver due frames until the loop halts or `max_frames` have fired.
    /// Returns the number of frames delivered.
    pub fn run_frames(&mut self, max_frames: u64) -> u64 {
        let mut delivered = 0;
        while delivered < max_frames {
            let Some(ticket) = self.scheduler.take_due() else {
                break;
            };
            if self.on_frame(ticket) {
                delivered += 1;
            }
        }
        delivered
    }
}
