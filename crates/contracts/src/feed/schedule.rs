//! Tick scheduling capability.
//!
//! A feed never owns a process-wide timer: it is driven by whatever
//! [`TickScheduler`] the host wires in, and the returned [`TickHandle`] is
//! the single owned, cancellable grip on the pending ticks. The browser
//! frontend backs this with `gloo_timers`; tests drive ticks by hand with
//! [`ManualScheduler`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Cancellable grip on a scheduled tick stream. Cancelling is idempotent;
/// after `cancel` no further ticks are delivered.
pub trait TickHandle {
    fn cancel(&mut self);
}

/// Repeating-timer capability: deliver `tick` every `interval` until the
/// returned handle is cancelled.
pub trait TickScheduler {
    fn every(&self, interval: Duration, tick: Box<dyn FnMut()>) -> Box<dyn TickHandle>;
}

struct ManualSlot {
    tick: Box<dyn FnMut()>,
    cancelled: Rc<Cell<bool>>,
}

/// Deterministic scheduler: callbacks registered with [`TickScheduler::every`]
/// fire only when [`ManualScheduler::fire`] is called, in registration order,
/// ignoring the requested interval. Intended for tests and non-browser hosts.
#[derive(Default)]
pub struct ManualScheduler {
    slots: Rc<RefCell<Vec<ManualSlot>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one tick to every non-cancelled callback.
    pub fn fire(&self) {
        let mut slots = self.slots.borrow_mut();
        for slot in slots.iter_mut() {
            if !slot.cancelled.get() {
                (slot.tick)();
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| !slot.cancelled.get())
            .count()
    }
}

struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TickHandle for ManualHandle {
    fn cancel(&mut self) {
        self.cancelled.set(true);
    }
}

impl TickScheduler for ManualScheduler {
    fn every(&self, _interval: Duration, tick: Box<dyn FnMut()>) -> Box<dyn TickHandle> {
        let cancelled = Rc::new(Cell::new(false));
        self.slots.borrow_mut().push(ManualSlot {
            tick,
            cancelled: Rc::clone(&cancelled),
        });
        Box::new(ManualHandle { cancelled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_fire_in_registration_order() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        let _a = scheduler.every(
            Duration::from_millis(2000),
            Box::new(move || first.borrow_mut().push("a")),
        );
        let second = Rc::clone(&seen);
        let _b = scheduler.every(
            Duration::from_millis(5000),
            Box::new(move || second.borrow_mut().push("b")),
        );

        scheduler.fire();
        scheduler.fire();
        assert_eq!(*seen.borrow(), vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn test_cancelled_handle_receives_no_further_ticks() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&count);
        let mut handle = scheduler.every(
            Duration::from_millis(2000),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.fire();
        handle.cancel();
        scheduler.fire();
        scheduler.fire();
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.active_count(), 0);

        // Cancelling twice is a no-op.
        handle.cancel();
    }
}
