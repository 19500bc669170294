use std::{cell::RefCell, rc::Rc};

/// Something that can run a callback once after a delay.
///
/// Dropping the returned handle cancels the callback if it has not fired yet,
/// which is how `gloo::timers::callback::Timeout` behaves.
pub trait TimerBackend {
    type Handle: 'static;

    fn schedule(&self, delay_millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Runs `action` once the debouncer has not been triggered for `delay_millis`.
///
/// Holds at most one pending timer. Every `trigger` cancels the pending one
/// and starts a fresh delay, so only the trailing edge of a burst fires.
pub struct Debouncer<B: TimerBackend> {
    backend: B,
    delay_millis: u32,
    pending: Rc<RefCell<Option<B::Handle>>>,
    action: Rc<dyn Fn()>,
}

impl<B: TimerBackend> Debouncer<B> {
    pub fn new(backend: B, delay_millis: u32, action: impl Fn() + 'static) -> Self {
        Self {
            backend,
            delay_millis,
            pending: Rc::new(RefCell::new(None)),
            action: Rc::new(action),
        }
    }

    pub fn trigger(&self) {
        self.cancel();
        let pending = Rc::downgrade(&self.pending);
        let action = Rc::clone(&self.action);
        let handle = self.backend.schedule(
            self.delay_millis,
            Box::new(move || {
                if let Some(pending) = pending.upgrade() {
                    let fired = pending.borrow_mut().take();
                    drop(fired);
                }
                action();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
