//! Caller-driven frame scheduling

use std::collections::VecDeque;

use super::FrameScheduler;

/// Opaque handle issued by [`ManualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTicket(u64);

/// Scheduler whose frames fire only when the caller asks for them
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<FrameTicket>,
    cancelled_count: u64,
    last_cancelled: Option<FrameTicket>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest outstanding request, as if its frame fired
    pub fn take_due(&mut self) -> Option<FrameTicket> {
        self.queue.pop_front()
    }

    /// Number of requests that have neither fired nor been cancelled
    pub fn outstanding(&self) -> usize {
        self.queue.len()
    }

    /// How many requests have been withdrawn
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled_count
    }

    /// Most recently withdrawn handle
    pub fn last_cancelled(&self) -> Option<FrameTicket> {
        self.last_cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameTicket;

    fn schedule(&mut self) -> FrameTicket {
        let ticket = FrameTicket(self.next_id);
        self.next_id += 1;
        self.queue.push_back(ticket);
        ticket
    }

    fn cancel(&mut self, handle: FrameTicket) {
        self.queue.retain(|t| *t != handle);
        self.cancelled_count += 1;
        self.last_cancelled = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_and_cancel() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule();
        let b = scheduler.schedule();
        assert_ne!(a, b);
        assert_eq!(scheduler.outstanding(), 2);

        scheduler.cancel(a);
        assert_eq!(scheduler.last_cancelled(), Some(a));
        assert_eq!(scheduler.cancelled_count(), 1);
        assert_eq!(scheduler.take_due(), Some(b));
        assert_eq!(scheduler.take_due(), None);
    }

    #[test]
    fn test_cancel_bookkeeping_stays_constant() {
        let mut scheduler = ManualScheduler::new();
        let mut last = None;
        for _ in 0..10_000 {
            let ticket = scheduler.schedule();
            scheduler.cancel(ticket);
            last = Some(ticket);
        }
        assert_eq!(scheduler.cancelled_count(), 10_000);
        assert_eq!(scheduler.last_cancelled(), last);
        assert_eq!(scheduler.outstanding(), 0);
    }
}
