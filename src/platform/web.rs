//! `requestAnimationFrame` scheduling for the browser

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{FrameScheduler, FrameSlot};

/// Called when a requested frame fires, with the rAF id and timestamp
pub type FrameCallback = Rc<dyn Fn(i32, f64)>;

/// Scheduler backed by `window.requestAnimationFrame`
///
/// Owns exactly one JS closure, created up front and handed to every request.
/// It lives as long as the scheduler and is never forgotten, so neither
/// delivered nor cancelled frames allocate anything. Dropping the scheduler
/// cancels the outstanding request before the closure is freed.
pub struct AnimationFrameScheduler {
    window: web_sys::Window,
    slot: FrameSlot,
    closure: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    pub fn new(window: web_sys::Window, on_frame: FrameCallback) -> Self {
        let slot = FrameSlot::new();
        let fired = slot.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            if let Some(id) = fired.fire() {
                on_frame(id, time);
            }
        });
        Self {
            window,
            slot,
            closure,
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> i32 {
        match self
            .window
            .request_animation_frame(self.closure.as_ref().unchecked_ref())
        {
            Ok(handle) => {
                self.slot.arm(handle);
                handle
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                // Never delivered, so the driver simply stops ticking
                -1
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if !self.slot.disarm(handle) {
            return;
        }
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

impl Drop for AnimationFrameScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.slot.pending() {
            self.cancel(handle);
        }
    }
}
