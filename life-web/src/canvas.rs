use std::rc::Rc;

use gloo::{
    events::EventListener,
    timers::callback::Timeout,
    utils::{document, window},
};
use life_core::{maximize, CanvasSize, CanvasSurface, ResizeController, TimerBackend};
use log::debug;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::Callback;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("no element with id \"{0}\"")]
    NotFound(String),
    #[error("element \"{0}\" is not a canvas")]
    NotACanvas(String),
    #[error("document has no body")]
    NoBody,
}

pub type Result<T> = std::result::Result<T, CanvasError>;

/// A canvas element sized after the document body.
pub struct DomCanvas {
    canvas: HtmlCanvasElement,
    body: HtmlElement,
}

impl DomCanvas {
    pub fn find(id: &str) -> Result<Self> {
        let element = document()
            .get_element_by_id(id)
            .ok_or_else(|| CanvasError::NotFound(id.to_string()))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CanvasError::NotACanvas(id.to_string()))?;
        let body = document().body().ok_or(CanvasError::NoBody)?;
        Ok(Self { canvas, body })
    }
}

impl CanvasSurface for DomCanvas {
    fn container_size(&self) -> CanvasSize {
        CanvasSize::new(
            self.body.client_width().max(0) as u32,
            self.body.client_height().max(0) as u32,
        )
    }

    fn set_size(&self, size: CanvasSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }
}

/// Browser timers through `setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct GlooTimers;

impl TimerBackend for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_millis, callback)
    }
}

/// Sets the canvas with the given id to the body's client size.
pub fn maximize_canvas(id: &str) -> Result<CanvasSize> {
    let canvas = DomCanvas::find(id)?;
    Ok(maximize(&canvas))
}

/// Keeps a canvas maximized while the window is resized.
///
/// Dropping the handler removes the window listener and cancels a pending
/// resize.
pub struct ResizeHandler {
    controller: Rc<ResizeController<GlooTimers>>,
    _listener: EventListener,
}

impl ResizeHandler {
    pub fn initial_size(&self) -> CanvasSize {
        self.controller.initial_size()
    }

    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }
}

/// Maximizes the canvas now, then again `timeout_millis` after each burst of
/// window resize events, emitting the new size to `callback`.
pub fn set_resize_handler(
    id: &str,
    callback: Callback<CanvasSize>,
    timeout_millis: u32,
) -> Result<ResizeHandler> {
    let canvas = DomCanvas::find(id)?;
    let controller = Rc::new(ResizeController::install(
        canvas,
        GlooTimers,
        timeout_millis,
        move |size| {
            debug!("canvas resized to {}x{}", size.width, size.height);
            callback.emit(size)
        },
    ));
    let listener = {
        let controller = Rc::clone(&controller);
        EventListener::new(&window(), "resize", move |_| controller.notify_resize())
    };
    Ok(ResizeHandler {
        controller,
        _listener: listener,
    })
}
