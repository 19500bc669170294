use gloo::utils::window;
use life_core::{constants::CELL_WIDTH, Automaton, Supervisor, Viewport};
use piet::{
    kurbo::{Point, Rect},
    Color, RenderContext,
};
use piet_web::WebRenderContext;
use web_sys::CanvasRenderingContext2d;

const BACKGROUND_COLOR: Color = Color::rgb8(40, 40, 40);
/// Gap, in world units, left around every cell.
const CELL_MARGIN: f64 = 1.0;

pub struct GridRenderer {
    ctx: WebRenderContext<'static>,
}

impl GridRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx: WebRenderContext::new(ctx, window()),
        }
    }

    pub fn render<A: Automaton>(&mut self, supervisor: &Supervisor<A>, viewport: &Viewport) {
        draw_world(&mut self.ctx, supervisor, viewport);
        if let Err(err) = self.ctx.finish() {
            log::error!("render failed: {err}");
        }
    }
}

/// Paints every cell of the front buffer onto `rc` through `viewport`.
pub fn draw_world<R, A>(rc: &mut R, supervisor: &Supervisor<A>, viewport: &Viewport)
where
    R: RenderContext,
    A: Automaton,
{
    rc.clear(None, BACKGROUND_COLOR);
    let side = (CELL_WIDTH as f64 - 2.0 * CELL_MARGIN) * viewport.scale().raw();
    for ((x, y), state) in supervisor.front_buf().cells() {
        let origin = viewport.to_screen(Point::new(
            (x as usize * CELL_WIDTH) as f64 + CELL_MARGIN,
            (y as usize * CELL_WIDTH) as f64 + CELL_MARGIN,
        ));
        let brush = rc.solid_brush(A::color(state));
        rc.fill(Rect::from_origin_size(origin, (side, side)), &brush);
    }
}
