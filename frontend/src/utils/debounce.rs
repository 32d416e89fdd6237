use super::timer::{Scheduler, TimerHandle};
use std::{cell::RefCell, rc::Rc, time::Duration};

/// Runs the most recently submitted task once `delay` has passed without a
/// newer submission.
///
/// At most one task is pending at a time: [`Debouncer::call`] cancels the
/// previous one before arming the next. Dropping the debouncer cancels
/// whatever is still pending.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();

        let slot = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                let fired = slot.borrow_mut().take();
                drop(fired);
                task();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
        log::debug!("debounced task scheduled in {}ms", self.delay.as_millis());
    }

    /// Cancels the pending task. Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(handle) => {
                handle.cancel();
                log::trace!("pending debounced task cancelled");
                true
            }
            None => false,
        }
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
