//! Simulation state and core types
//!
//! Everything the loop mutates lives in `SimulationState`, owned by a single
//! driver. There is no ambient state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::dial::{Dial, DialId, DialLayout, DialSnapshot};
use super::trace::{Segments, TraceBuffer};
use crate::consts::*;

/// Current phase of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopPhase {
    /// Ticking every frame
    Running,
    /// Figure closed, no further ticks until a restart
    Halted,
}

/// Fixed parameters chosen at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub layout: DialLayout,
    pub first_increment: f32,
    pub second_increment: f32,
    /// Stop ticking once the trace returns to its first point
    pub halt_on_closure: bool,
}

impl SimulationConfig {
    /// Reference setup for a square drawing area of side `size`
    pub fn for_size(size: f32) -> Self {
        Self {
            layout: DialLayout::for_size(size),
            first_increment: FIRST_DIAL_INCREMENT,
            second_increment: SECOND_DIAL_INCREMENT,
            halt_on_closure: true,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub first: Dial,
    pub second: Dial,
    pub trace: TraceBuffer,
    pub phase: LoopPhase,
    pub halt_on_closure: bool,
    /// Ticks since the last reset
    pub time_ticks: u64,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Self {
        let layout = config.layout;
        Self {
            first: Dial::new(layout.first_center, layout.radius, config.first_increment),
            second: Dial::new(layout.second_center, layout.radius, config.second_increment),
            trace: TraceBuffer::new(),
            phase: LoopPhase::Running,
            halt_on_closure: config.halt_on_closure,
            time_ticks: 0,
        }
    }

    pub fn dial(&self, id: DialId) -> &Dial {
        match id {
            DialId::First => &self.first,
            DialId::Second => &self.second,
        }
    }

    pub fn dial_mut(&mut self, id: DialId) -> &mut Dial {
        match id {
            DialId::First => &mut self.first,
            DialId::Second => &mut self.second,
        }
    }

    pub fn dial_state(&self, id: DialId) -> DialSnapshot {
        self.dial(id).snapshot()
    }

    pub fn traced_segments(&self) -> Segments<'_> {
        self.trace.segments()
    }

    /// Newest tracer point as a vector
    pub fn tracer(&self) -> Option<Vec2> {
        self.trace.last().map(|p| p.as_vec2())
    }

    /// Both angles to zero, empty trace, running again. Increments are kept.
    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.trace.reset();
        self.phase = LoopPhase::Running;
        self.time_ticks = 0;
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TracerPoint;

    #[test]
    fn test_new_state_reference_config() {
        let state = SimulationState::new(SimulationConfig::for_size(400.0));
        assert_eq!(state.phase, LoopPhase::Running);
        assert!(state.trace.is_empty());

        let first = state.dial_state(DialId::First);
        assert_eq!(first.center, Vec2::new(100.0, 100.0));
        assert_eq!(first.radius, 75.0);
        assert_eq!(first.angle, 0.0);
        assert_eq!(first.angle_increment, 4.0);

        let second = state.dial_state(DialId::Second);
        assert_eq!(second.center, Vec2::new(300.0, 300.0));
        assert_eq!(second.angle_increment, 3.0);
    }

    #[test]
    fn test_reset_idempotent() {
        let mut state = SimulationState::new(SimulationConfig::for_size(400.0));
        state.first.update();
        state.second.update();
        state.trace.append(TracerPoint::new(1.0, 1.0));
        state.phase = LoopPhase::Halted;

        state.reset();
        let once = state.clone();
        state.reset();

        for s in [&once, &state] {
            assert!(s.trace.is_empty());
            assert_eq!(s.first.angle(), 0.0);
            assert_eq!(s.second.angle(), 0.0);
            assert_eq!(s.phase, LoopPhase::Running);
        }
        assert_eq!(once.first, state.first);
        assert_eq!(once.second, state.second);
    }
}
