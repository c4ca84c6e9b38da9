//! Single simulation tick
//!
//! Advances both dials, samples one tracer point and decides whether the loop
//! keeps running.

use super::sampler::{is_closed, sample};
use super::state::{LoopPhase, SimulationState};

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule another tick
    Continue,
    /// The figure closed on this tick
    Closed,
    /// The loop was already halted; nothing happened
    Idle,
}

impl TickOutcome {
    pub fn should_continue(&self) -> bool {
        matches!(self, TickOutcome::Continue)
    }
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimulationState) -> TickOutcome {
    if state.phase == LoopPhase::Halted {
        return TickOutcome::Idle;
    }

    state.time_ticks += 1;
    state.first.update();
    state.second.update();

    let point = sample(&state.first, &state.second);
    state.trace.append(point);

    if state.halt_on_closure && is_closed(&state.trace, &point) {
        state.phase = LoopPhase::Halted;
        log::info!(
            "Trace closed after {} ticks ({} segments)",
            state.time_ticks,
            state.trace.len() - 1
        );
        return TickOutcome::Closed;
    }

    TickOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{DialId, SimulationConfig, TracerPoint};

    fn reference_state() -> SimulationState {
        SimulationState::new(SimulationConfig::for_size(400.0))
    }

    fn run_until_halt(state: &mut SimulationState, cap: u64) -> u64 {
        while tick(state).should_continue() {
            assert!(state.time_ticks < cap, "loop did not halt within {cap} ticks");
        }
        state.time_ticks
    }

    #[test]
    fn test_first_tick() {
        let mut state = reference_state();
        assert_eq!(tick(&mut state), TickOutcome::Continue);

        assert_eq!(state.first.angle(), 4.0);
        assert_eq!(state.second.angle(), 3.0);
        assert_eq!(state.trace.len(), 1);
        assert_eq!(state.phase, LoopPhase::Running);

        let first = state.dial_state(DialId::First);
        let second = state.dial_state(DialId::Second);
        assert_eq!(
            state.trace.first(),
            Some(&TracerPoint::new(second.tip.x, first.tip.y))
        );
        let expected_x = 300.0 + 75.0 * 3.0_f32.to_radians().cos();
        let expected_y = 100.0 + 75.0 * 4.0_f32.to_radians().sin();
        assert!((second.tip.x - expected_x).abs() < 1e-3);
        assert!((first.tip.y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn test_reference_figure_period() {
        let mut state = reference_state();
        let ticks = run_until_halt(&mut state, 10_000);

        // 360 / gcd(4, 3) ticks per period; the closing tick re-samples point one
        assert_eq!(ticks, 361);
        assert_eq!(state.trace.len(), 361);
        assert_eq!(state.traced_segments().count(), 360);
        assert_eq!(state.phase, LoopPhase::Halted);
        assert_eq!(state.first.angle(), 4.0);
        assert_eq!(state.second.angle(), 3.0);
    }

    #[test]
    fn test_gcd_shortens_period() {
        let mut config = SimulationConfig::for_size(400.0);
        config.first_increment = 8.0;
        config.second_increment = 6.0;
        let mut state = SimulationState::new(config);
        // 360 / gcd(8, 6) = 180
        assert_eq!(run_until_halt(&mut state, 10_000), 181);
    }

    #[test]
    fn test_zero_increments_halt_on_second_tick() {
        let mut config = SimulationConfig::for_size(400.0);
        config.first_increment = 0.0;
        config.second_increment = 0.0;
        let mut state = SimulationState::new(config);

        assert_eq!(tick(&mut state), TickOutcome::Continue);
        assert_eq!(tick(&mut state), TickOutcome::Closed);
        assert_eq!(state.trace.len(), 2);
        assert_eq!(state.phase, LoopPhase::Halted);
    }

    #[test]
    fn test_halted_tick_is_idle() {
        let mut config = SimulationConfig::for_size(400.0);
        config.first_increment = 0.0;
        config.second_increment = 0.0;
        let mut state = SimulationState::new(config);
        run_until_halt(&mut state, 10);

        let before = state.trace.len();
        assert_eq!(tick(&mut state), TickOutcome::Idle);
        assert_eq!(state.trace.len(), before);
    }

    #[test]
    fn test_no_halt_when_disabled() {
        let mut config = SimulationConfig::for_size(400.0);
        config.halt_on_closure = false;
        let mut state = SimulationState::new(config);
        for _ in 0..1000 {
            assert_eq!(tick(&mut state), TickOutcome::Continue);
        }
        assert_eq!(state.trace.len(), 1000);
        assert!(state.is_running());
    }

    #[test]
    fn test_negative_increment_closes() {
        let mut config = SimulationConfig::for_size(400.0);
        config.first_increment = -4.0;
        let mut state = SimulationState::new(config);
        assert_eq!(run_until_halt(&mut state, 10_000), 361);
    }
}
