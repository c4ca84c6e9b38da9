//! Pending-frame bookkeeping shared between a scheduler and its callback
//!
//! The host fires a frame into a callback that cannot borrow the scheduler, so
//! the id of the one outstanding request lives in a shared cell.

use std::cell::Cell;
use std::rc::Rc;

/// The id of the single outstanding frame request, if any
#[derive(Debug, Clone, Default)]
pub struct FrameSlot {
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly requested frame, replacing any earlier one
    pub fn arm(&self, id: i32) {
        self.pending.set(Some(id));
    }

    /// Forget `id` if it is the outstanding request
    pub fn disarm(&self, id: i32) -> bool {
        if self.pending.get() == Some(id) {
            self.pending.set(None);
            true
        } else {
            false
        }
    }

    /// The frame fired: take its id, leaving the slot empty
    pub fn fire(&self) -> Option<i32> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending.get()
    }
}
