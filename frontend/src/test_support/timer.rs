use crate::utils::timer::{Scheduler, TimerHandle, TimerTask};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

/// Virtual clock for driving timers deterministically in tests.
///
/// Nothing fires until [`ManualScheduler::advance`] moves time past a
/// task's due instant. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    queue: Vec<Scheduled>,
}

struct Scheduled {
    id: u64,
    due: Duration,
    task: TimerTask,
}

pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Moves the clock forward, running due tasks in due order. Tasks may
    /// schedule further timers; those fire too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<TimerTask> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= target)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.id))
            .map(|(index, _)| index)?;
        let scheduled = clock.queue.remove(index);
        clock.now = scheduled.due;
        Some(scheduled.task)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, task: TimerTask) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.queue.push(Scheduled { id, due, task });
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().queue.retain(|scheduled| scheduled.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn fires_in_due_order_and_tracks_time() {
        let clock = ManualScheduler::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, ms) in [("late", 300), ("early", 100), ("mid", 200)] {
            let order = Rc::clone(&order);
            let _ = clock.schedule(
                Duration::from_millis(ms),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }

        clock.advance(Duration::from_millis(250));
        assert_eq!(*order.borrow(), vec!["early", "mid"]);
        assert_eq!(clock.now(), Duration::from_millis(250));
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn cancelled_timer_is_removed() {
        let clock = ManualScheduler::default();
        let timer = clock.schedule(Duration::from_millis(10), Box::new(|| panic!("fired")));
        timer.cancel();
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_millis(20));
    }
}
