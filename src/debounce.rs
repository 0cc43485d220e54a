//! Trailing-edge debounce over a pluggable timer.

use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Schedules one-shot callbacks. Cancelling a handle that already fired is
/// a no-op.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}

/// Coalesces bursts of triggers into one run of `action`, fired `wait_ms`
/// after the last trigger. Dropping the debouncer cancels a pending run.
pub struct Debouncer<T: Timer> {
    timer: T,
    wait_ms: u32,
    pending: Option<T::Handle>,
    action: Rc<dyn Fn()>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, wait_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            timer,
            wait_ms,
            pending: None,
            action: Rc::new(action),
        }
    }

    pub fn trigger(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
        let action = self.action.clone();
        self.pending = Some(self.timer.schedule(self.wait_ms, Box::new(move || action())));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }
}

impl<T: Timer> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Timer;

    struct Scheduled {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        queue: Vec<Scheduled>,
    }

    /// Virtual-time timer: nothing fires until `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualTimer {
        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().queue.len()
        }

        /// Moves time forward, firing due callbacks in deadline order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.due <= target)
                        .min_by_key(|(_, s)| (s.due, s.id))
                        .map(|(i, _)| i);
                    let callback = match due {
                        Some(i) => {
                            let scheduled = clock.queue.remove(i);
                            clock.now = scheduled.due;
                            Some(scheduled.callback)
                        }
                        None => None,
                    };
                    callback
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Timer for ManualTimer {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.queue.push(Scheduled { id, due, callback });
            id
        }

        fn cancel(&self, handle: u64) {
            self.clock.borrow_mut().queue.retain(|s| s.id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::ManualTimer;
    use super::*;

    fn counting(timer: &ManualTimer, wait_ms: u32) -> (Debouncer<ManualTimer>, Rc<Cell<u32>>) {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let debouncer = Debouncer::new(timer.clone(), wait_ms, move || counter.set(counter.get() + 1));
        (debouncer, runs)
    }

    #[test]
    fn burst_coalesces_into_one_run() {
        let timer = ManualTimer::default();
        let (mut debouncer, runs) = counting(&timer, 10);

        for _ in 0..25 {
            debouncer.trigger();
            timer.advance(3);
        }
        assert_eq!(runs.get(), 0);
        assert_eq!(timer.pending(), 1);

        timer.advance(6);
        assert_eq!(runs.get(), 0);
        timer.advance(1);
        assert_eq!(runs.get(), 1);

        timer.advance(100);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn run_lands_one_window_after_last_trigger() {
        let timer = ManualTimer::default();
        let fired_at = Rc::new(Cell::new(None));
        let (clock, slot) = (timer.clone(), fired_at.clone());
        let mut debouncer = Debouncer::new(timer.clone(), 20, move || slot.set(Some(clock.now())));

        debouncer.trigger();
        timer.advance(15);
        debouncer.trigger();
        timer.advance(50);

        assert_eq!(fired_at.get(), Some(35));
    }

    #[test]
    fn separated_triggers_run_separately() {
        let timer = ManualTimer::default();
        let (mut debouncer, runs) = counting(&timer, 10);

        debouncer.trigger();
        timer.advance(10);
        debouncer.trigger();
        timer.advance(10);

        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn cancel_drops_pending_run() {
        let timer = ManualTimer::default();
        let (mut debouncer, runs) = counting(&timer, 10);

        debouncer.trigger();
        debouncer.cancel();
        timer.advance(50);

        assert_eq!(runs.get(), 0);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn dropping_debouncer_cancels_pending_run() {
        let timer = ManualTimer::default();
        let (mut debouncer, runs) = counting(&timer, 10);

        debouncer.trigger();
        drop(debouncer);
        timer.advance(50);

        assert_eq!(runs.get(), 0);
    }
}
