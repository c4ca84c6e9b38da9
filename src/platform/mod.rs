//! Platform abstraction layer
//!
//! The simulation never waits on its own. A host scheduling primitive calls
//! back once per display refresh:
//! - `ManualScheduler`: frames delivered by the caller (native runs, tests)
//! - `AnimationFrameScheduler`: `requestAnimationFrame` in the browser

pub mod manual;
pub mod slot;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use manual::{FrameTicket, ManualScheduler};
pub use slot::FrameSlot;
#[cfg(target_arch = "wasm32")]
pub use web::AnimationFrameScheduler;

use std::fmt::Debug;

/// A host primitive that calls back once on the next frame
///
/// The host delivers the returned handle to `Driver::on_frame` when the frame
/// fires. A cancelled handle must never be delivered.
pub trait FrameScheduler {
    type Handle: Copy + Eq + Debug;

    /// Request a callback on the next frame
    fn schedule(&mut self) -> Self::Handle;

    /// Withdraw a request that has not fired yet
    fn cancel(&mut self, handle: Self::Handle);
}
