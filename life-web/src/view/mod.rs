use std::{cell::RefCell, rc::Rc};

use anyhow::{anyhow, Result};
use gloo::{
    render::{request_animation_frame, AnimationFrame},
    timers::callback::Interval,
};
use guard::guard;
use life_core::{CanvasSize, Gesture, Life, LifeConfig, Supervisor, Viewport};
use log::{debug, error, info, warn};
use piet::kurbo::{Point, Size};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};
use yew::{html, Component, Context, Html, NodeRef};

use self::settings::{Settings, SettingsAction, SettingsPanel};
use crate::{
    canvas::{set_resize_handler, ResizeHandler},
    config,
    render::GridRenderer,
    util::{OptionExt, ResultExt, Shared},
};

mod settings;

pub const CANVAS_ID: &str = "canvas";

pub struct World {
    pub supervisor: Supervisor<Life>,
    pub viewport: Viewport,
}

impl World {
    fn new(config: &LifeConfig) -> life_core::Result<Self> {
        Ok(Self {
            supervisor: Supervisor::new(config.grid_width, config.grid_height)?,
            viewport: Viewport::default(),
        })
    }
}

pub struct App {
    config: LifeConfig,
    settings: Settings,
    world: Shared<World>,
    canvas: NodeRef,
    renderer: Option<Shared<GridRenderer>>,
    _resize_handler: Option<ResizeHandler>,
    animation_handle: Option<AnimationFrame>,
    ticker: Option<Interval>,
    mouse_down_at: Option<Point>,
}

pub enum AppMsg {
    MouseDown(MouseEvent),
    MouseUp(MouseEvent),
    Wheel(WheelEvent),
    Resized(CanvasSize),
    Tick,
    Action(SettingsAction),
}

fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

impl App {
    fn setup_canvas(&mut self, ctx: &Context<Self>) -> Result<()> {
        let canvas = self
            .canvas
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| anyhow!("canvas is not mounted"))?;
        let context2d: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| anyhow!("cannot get 2d context"))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into()
            .map_err(|_| anyhow!("2d context has an unexpected type"))?;
        self.renderer = Some(Rc::new(RefCell::new(GridRenderer::new(context2d))));

        let handler = set_resize_handler(
            CANVAS_ID,
            ctx.link().callback(AppMsg::Resized),
            self.config.resize_debounce_millis,
        )?;
        ctx.link().send_message(AppMsg::Resized(handler.initial_size()));
        self._resize_handler = Some(handler);
        Ok(())
    }

    fn request_redraw(&mut self) {
        guard!(let Some(renderer) = self.renderer.clone() else {
            debug!("renderer is not ready");
            return;
        });
        let world = self.world.clone();
        self.animation_handle = Some(request_animation_frame(move |_| {
            let world = world.borrow();
            renderer
                .borrow_mut()
                .render(&world.supervisor, &world.viewport);
        }));
    }

    fn restart_ticker(&mut self, ctx: &Context<Self>) {
        self.ticker = if self.settings.auto_run() {
            let link = ctx.link().clone();
            Some(Interval::new(self.config.tick_millis, move || {
                link.send_message(AppMsg::Tick)
            }))
        } else {
            None
        };
    }

    fn canvas_size(&self) -> Option<Size> {
        let canvas = self.canvas.cast::<HtmlCanvasElement>()?;
        Some(Size::new(canvas.width() as f64, canvas.height() as f64))
    }

    fn click_or_drag(&mut self, from: Point, to: Point) {
        let mut world = self.world.borrow_mut();
        match world.viewport.gesture(from, to) {
            Gesture::Click((x, y)) => world.supervisor.toggle(x, y),
            Gesture::Drag(diff) => world.viewport.pan(diff),
        }
    }

    fn apply_settings(&mut self, ctx: &Context<Self>, action: SettingsAction) {
        use SettingsAction::*;
        match action {
            ToggleVisible => self.settings.toggle(),
            ToggleAutoRun => {
                self.settings.toggle_auto_run();
                info!("auto run {}", if self.settings.auto_run() { "on" } else { "off" });
                self.restart_ticker(ctx);
            }
            ResetZoom => {
                if let Some(target) = self.canvas_size().log_none("canvas is not mounted") {
                    let mut world = self.world.borrow_mut();
                    let world_size = world.supervisor.world_size();
                    world.viewport.reset_zoom(world_size, target);
                }
            }
            Step => self.world.borrow_mut().supervisor.step(),
            Clear => self.world.borrow_mut().supervisor.clear(),
            Randomize => self
                .world
                .borrow_mut()
                .supervisor
                .randomize(&mut rand::thread_rng(), self.config.seed_density),
            Faster | Slower => {
                if action == Faster {
                    self.config.faster();
                } else {
                    self.config.slower();
                }
                debug!("tick interval is now {} ms", self.config.tick_millis);
                let _ = config::save(&self.config).log_err();
                self.restart_ticker(ctx);
            }
        }
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load();
        let (config, world) = match World::new(&config) {
            Ok(world) => (config, world),
            Err(err) => {
                warn!("cannot build world ({err}), using defaults");
                let config = LifeConfig::default();
                let world = World::new(&config).expect("default config is valid");
                (config, world)
            }
        };
        Self {
            config,
            settings: Settings::default(),
            world: Rc::new(RefCell::new(world)),
            canvas: NodeRef::default(),
            renderer: None,
            _resize_handler: None,
            animation_handle: None,
            ticker: None,
            mouse_down_at: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use AppMsg::*;
        let rerender = match msg {
            MouseDown(event) => {
                self.mouse_down_at = Some(mouse_point(&event));
                return false;
            }
            MouseUp(event) => {
                guard!(let Some(from) = self.mouse_down_at.take() else { return false });
                self.click_or_drag(from, mouse_point(&event));
                false
            }
            Wheel(event) => {
                self.world
                    .borrow_mut()
                    .viewport
                    .zoom_at(mouse_point(&event), event.delta_y());
                false
            }
            Resized(size) => {
                let mut world = self.world.borrow_mut();
                let world_size = world.supervisor.world_size();
                if world.viewport.on_resize(world_size, size.into()) {
                    debug!("zoom refitted to {}x{}", size.width, size.height);
                }
                false
            }
            Tick => {
                self.world.borrow_mut().supervisor.step();
                self.settings.visible()
            }
            Action(action) => {
                self.apply_settings(ctx, action);
                true
            }
        };
        self.request_redraw();
        rerender
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Err(err) = self.setup_canvas(ctx) {
            error!("cannot set up canvas: {err}");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onmousedown = ctx.link().callback(AppMsg::MouseDown);
        let onmouseup = ctx.link().callback(AppMsg::MouseUp);
        let onwheel = ctx.link().callback(AppMsg::Wheel);
        let on_action = ctx.link().callback(AppMsg::Action);
        let generation = self.world.borrow().supervisor.generation();
        html! {
            <>
                <canvas ref={self.canvas.clone()} id={CANVAS_ID}
                        {onmousedown} {onmouseup} {onwheel} />
                <SettingsPanel settings={self.settings} {generation}
                    tick_millis={self.config.tick_millis} {on_action} />
            </>
        }
    }
}
