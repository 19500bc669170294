use std::rc::Rc;

use piet::kurbo::Size;

use crate::timer::{Debouncer, TimerBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<CanvasSize> for Size {
    fn from(size: CanvasSize) -> Self {
        Size::new(size.width as f64, size.height as f64)
    }
}

/// A drawable surface whose pixel size follows its container.
pub trait CanvasSurface {
    /// Client size of the element the surface should fill.
    fn container_size(&self) -> CanvasSize;

    fn set_size(&self, size: CanvasSize);
}

impl<S: CanvasSurface + ?Sized> CanvasSurface for Rc<S> {
    fn container_size(&self) -> CanvasSize {
        (**self).container_size()
    }

    fn set_size(&self, size: CanvasSize) {
        (**self).set_size(size)
    }
}

/// Stretches the surface to its container and returns the new size.
pub fn maximize<S: CanvasSurface + ?Sized>(surface: &S) -> CanvasSize {
    let size = surface.container_size();
    surface.set_size(size);
    size
}

/// Keeps a surface maximized across resize notifications.
///
/// The surface is resized once on installation. Afterwards each burst of
/// [`ResizeController::notify_resize`] calls results in one resize and one
/// callback, `timeout_millis` after the last notification.
pub struct ResizeController<B: TimerBackend> {
    debouncer: Debouncer<B>,
    initial_size: CanvasSize,
}

impl<B: TimerBackend> ResizeController<B> {
    pub fn install<S, F>(surface: S, timers: B, timeout_millis: u32, callback: F) -> Self
    where
        S: CanvasSurface + 'static,
        F: Fn(CanvasSize) + 'static,
    {
        let initial_size = maximize(&surface);
        let debouncer = Debouncer::new(timers, timeout_millis, move || {
            let size = maximize(&surface);
            callback(size);
        });
        Self {
            debouncer,
            initial_size,
        }
    }

    pub fn notify_resize(&self) {
        self.debouncer.trigger();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Size set by the synchronous resize during installation.
    pub fn initial_size(&self) -> CanvasSize {
        self.initial_size
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::manual_timer::ManualTimers;
    use assert2::{assert, check};

    #[derive(Default)]
    struct FakeCanvas {
        body: Cell<CanvasSize>,
        canvas: Cell<CanvasSize>,
        writes: Cell<u32>,
    }

    impl CanvasSurface for FakeCanvas {
        fn container_size(&self) -> CanvasSize {
            self.body.get()
        }

        fn set_size(&self, size: CanvasSize) {
            self.canvas.set(size);
            self.writes.set(self.writes.get() + 1);
        }
    }

    struct Fixture {
        timers: ManualTimers,
        canvas: Rc<FakeCanvas>,
        calls: Rc<RefCell<Vec<(u64, CanvasSize)>>>,
        controller: ResizeController<ManualTimers>,
    }

    fn install(timeout: u32) -> Fixture {
        let timers = ManualTimers::default();
        let canvas = Rc::new(FakeCanvas::default());
        canvas.body.set(CanvasSize::new(640, 480));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let controller = {
            let timers_for_cb = timers.clone();
            let calls = Rc::clone(&calls);
            ResizeController::install(Rc::clone(&canvas), timers.clone(), timeout, move |size| {
                calls.borrow_mut().push((timers_for_cb.now(), size))
            })
        };
        Fixture {
            timers,
            canvas,
            calls,
            controller,
        }
    }

    #[test]
    fn maximize_copies_container_size() {
        let canvas = FakeCanvas::default();
        canvas.body.set(CanvasSize::new(300, 200));
        check!(maximize(&canvas) == CanvasSize::new(300, 200));
        check!(canvas.canvas.get() == CanvasSize::new(300, 200));
        check!(maximize(&canvas) == CanvasSize::new(300, 200));
        check!(canvas.canvas.get() == CanvasSize::new(300, 200));
    }

    #[test]
    fn install_resizes_once_immediately() {
        let fixture = install(100);
        check!(fixture.canvas.writes.get() == 1);
        check!(fixture.canvas.canvas.get() == CanvasSize::new(640, 480));
        check!(fixture.controller.initial_size() == CanvasSize::new(640, 480));
        check!(!fixture.controller.is_pending());
        fixture.timers.advance_to(10_000);
        check!(fixture.calls.borrow().is_empty());
    }

    #[test]
    fn events_within_timeout_fire_once() {
        let fixture = install(100);
        fixture.controller.notify_resize();
        fixture.timers.advance_to(50);
        fixture.canvas.body.set(CanvasSize::new(800, 600));
        fixture.controller.notify_resize();
        check!(fixture.controller.is_pending());

        fixture.timers.advance_to(149);
        check!(fixture.calls.borrow().is_empty());
        fixture.timers.advance_to(150);
        assert!(*fixture.calls.borrow() == vec![(150, CanvasSize::new(800, 600))]);
        check!(fixture.canvas.writes.get() == 2);
        check!(fixture.canvas.canvas.get() == CanvasSize::new(800, 600));
        check!(!fixture.controller.is_pending());
    }

    #[test]
    fn separated_events_fire_independently() {
        let fixture = install(100);
        fixture.controller.notify_resize();
        fixture.timers.advance_to(50);
        fixture.controller.notify_resize();
        fixture.timers.advance_to(200);
        fixture.canvas.body.set(CanvasSize::new(1024, 768));
        fixture.controller.notify_resize();
        fixture.timers.advance_to(1_000);

        let calls = fixture.calls.borrow();
        check!(
            *calls
                == vec![
                    (150, CanvasSize::new(640, 480)),
                    (300, CanvasSize::new(1024, 768))
                ]
        );
        check!(fixture.canvas.writes.get() == 3);
    }

    #[test]
    fn long_burst_fires_after_last_event() {
        let fixture = install(100);
        for t in (0..1_000).step_by(20) {
            fixture.timers.advance_to(t);
            fixture.controller.notify_resize();
        }
        fixture.timers.advance_to(5_000);
        let calls = fixture.calls.borrow();
        check!(calls.len() == 1);
        check!(calls[0].0 == 1_080);
    }

    #[test]
    fn dropping_controller_cancels_pending_resize() {
        let fixture = install(100);
        fixture.controller.notify_resize();
        let Fixture {
            timers,
            canvas,
            calls,
            controller,
        } = fixture;
        drop(controller);
        timers.advance_to(1_000);
        check!(calls.borrow().is_empty());
        check!(canvas.writes.get() == 1);
    }
}
