use gloo_timers::callback::Timeout;
use std::time::Duration;

pub type TimerTask = Box<dyn FnOnce() + 'static>;

/// Source of one-shot timers.
///
/// Every call to [`Scheduler::schedule`] arms exactly one timer. The returned
/// handle is the only way to stop it; once [`TimerHandle::cancel`] returns the
/// task must never run.
pub trait Scheduler: 'static {
    type Handle: TimerHandle + 'static;

    fn schedule(&self, delay: Duration, task: TimerTask) -> Self::Handle;
}

pub trait TimerHandle {
    fn cancel(self);
}

/// Schedules tasks on the browser event loop via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub struct BrowserTimer(Timeout);

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&self, delay: Duration, task: TimerTask) -> BrowserTimer {
        BrowserTimer(Timeout::new(delay_millis(delay), task))
    }
}

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        // The returned closure is dropped here along with the timer id.
        let _ = self.0.cancel();
    }
}

fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_millis_saturates_at_u32_max() {
        assert_eq!(delay_millis(Duration::from_millis(500)), 500);
        assert_eq!(delay_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
    }
}
