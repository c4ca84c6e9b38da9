//! Twin Dials - two rotating dials tracing a Lissajous figure
//!
//! Core modules:
//! - `sim`: Deterministic simulation (dials, trace buffer, closure detection)
//! - `driver`: Frame-driven loop control with cancellable scheduling
//! - `platform`: Host scheduling primitives (manual/native, requestAnimationFrame)
//! - `renderer`: Canvas abstraction, scene drawing and the WebGPU pipeline
//! - `settings`: User configuration

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Default angular increment of the first dial (degrees per tick)
    pub const FIRST_DIAL_INCREMENT: f32 = 4.0;
    /// Default angular increment of the second dial (degrees per tick)
    pub const SECOND_DIAL_INCREMENT: f32 = 3.0;

    /// Degrees in a full turn
    pub const FULL_TURN_DEGREES: f32 = 360.0;

    /// Dial radius as a fraction of the square drawing area
    pub const DIAL_RADIUS_RATIO: f32 = 3.0 / 16.0;
    /// First dial center as a fraction of the square drawing area (both axes)
    pub const FIRST_DIAL_CENTER_RATIO: f32 = 1.0 / 4.0;
    /// Second dial center as a fraction of the square drawing area (both axes)
    pub const SECOND_DIAL_CENTER_RATIO: f32 = 3.0 / 4.0;
}

/// Convert an angle in degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    (degrees / 180.0) * std::f32::consts::PI
}
