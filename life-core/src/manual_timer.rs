//! A virtual clock timer backend for driving debounced code in tests.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::timer::TimerBackend;

struct Entry {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Inner {
    now: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Entry>>,
}

#[derive(Clone, Default)]
pub struct ManualTimers(Rc<Inner>);

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualTimers {
    pub fn now(&self) -> u64 {
        self.0.now.get()
    }

    /// Number of scheduled callbacks that neither fired nor got cancelled.
    pub fn pending(&self) -> usize {
        self.0
            .queue
            .borrow()
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    /// Moves the clock forward to `time`, firing due callbacks in deadline
    /// order. Callbacks may schedule new timers, which fire too if they are
    /// due by `time`.
    pub fn advance_to(&self, time: u64) {
        assert!(time >= self.now(), "clock cannot go backwards");
        loop {
            let next = {
                let mut queue = self.0.queue.borrow_mut();
                queue.retain(|entry| !entry.cancelled.get());
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= time)
                    .min_by_key(|(_, entry)| (entry.due, entry.seq))
                    .map(|(idx, _)| idx);
                earliest.map(|idx| queue.swap_remove(idx))
            };
            let Some(entry) = next else { break };
            self.0.now.set(entry.due);
            (entry.callback)();
        }
        self.0.now.set(time);
    }
}

impl TimerBackend for ManualTimers {
    type Handle = ManualHandle;

    fn schedule(&self, delay_millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.0.next_seq.get();
        self.0.next_seq.set(seq + 1);
        self.0.queue.borrow_mut().push(Entry {
            due: self.now() + delay_millis as u64,
            seq,
            cancelled: Rc::clone(&cancelled),
            callback,
        });
        ManualHandle { cancelled }
    }
}
