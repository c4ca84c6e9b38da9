//! Deterministic simulation module
//!
//! All dial and trace logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - No rendering or platform dependencies

pub mod dial;
pub mod sampler;
pub mod state;
pub mod tick;
pub mod trace;

pub use dial::{Dial, DialId, DialLayout, DialSnapshot};
pub use sampler::{is_closed, sample};
pub use state::{LoopPhase, SimulationConfig, SimulationState};
pub use tick::{TickOutcome, tick};
pub use trace::{Segments, TraceBuffer, TracerPoint};
