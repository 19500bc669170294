use std::mem;

use getset::{CopyGetters, Getters};
use piet::kurbo::{Point, Size, Vec2};
use rand::Rng;

use crate::{
    automaton::Automaton,
    constants::{CELL_WIDTH, MIN_DRAG, MIN_SCALE, ZOOM_SPEED},
    error::Result,
    grid::Grid,
};

/// Drives an automaton over a double-buffered grid.
#[derive(Getters, CopyGetters)]
pub struct Supervisor<A: Automaton> {
    #[getset(get = "pub")]
    front_buf: Grid<A::State>,
    swap_buf: Grid<A::State>,
    #[getset(get_copy = "pub")]
    generation: u64,
}

impl<A: Automaton> Supervisor<A> {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        Ok(Self {
            front_buf: grid.clone(),
            swap_buf: grid,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.front_buf.width()
    }

    pub fn height(&self) -> usize {
        self.front_buf.height()
    }

    pub fn step(&mut self) {
        mem::swap(&mut self.front_buf, &mut self.swap_buf);
        for pos in self.front_buf.positions() {
            self.front_buf[pos] = A::update(pos, &self.swap_buf);
        }
        self.generation += 1;
    }

    pub fn toggle(&mut self, x: isize, y: isize) {
        let old = self.front_buf[(x, y)].clone();
        self.front_buf[(x, y)] = A::toggle(old);
    }

    pub fn clear(&mut self) {
        self.front_buf.reset();
        self.generation = 0;
    }

    /// Reseeds every cell, each one alive with probability `density`.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        for cell in self.front_buf.cells_mut() {
            *cell = A::seed(rng.gen_bool(density));
        }
        self.generation = 0;
    }

    /// Size of the whole board in world units.
    pub fn world_size(&self) -> Size {
        Size::new(
            (self.width() * CELL_WIDTH) as f64,
            (self.height() * CELL_WIDTH) as f64,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Manual(f64),
    Auto(f64),
}

impl Scale {
    pub fn raw(self) -> f64 {
        match self {
            Self::Manual(s) | Self::Auto(s) => s,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

/// What a mouse press followed by a release amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Released within `MIN_DRAG` pixels on both axes; carries the cell under the release.
    Click((isize, isize)),
    /// Screen offset from press to release.
    Drag(Vec2),
}

/// Maps world coordinates of the board to canvas pixels:
/// `screen = scale * (world + trans)`.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Viewport {
    trans: Vec2,
    scale: Scale,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            trans: Vec2::ZERO,
            scale: Scale::Auto(1.0),
        }
    }
}

impl Viewport {
    pub fn to_screen(&self, world: Point) -> Point {
        ((world + self.trans).to_vec2() * self.scale.raw()).to_point()
    }

    pub fn from_screen(&self, screen: Point) -> Point {
        (screen.to_vec2() / self.scale.raw()).to_point() - self.trans
    }

    /// Fits a board of `world` size into `target`, centered, and switches
    /// back to automatic scaling.
    pub fn reset_zoom(&mut self, world: Size, target: Size) {
        let scale = (target.width / world.width).min(target.height / world.height);
        let scale = scale.max(MIN_SCALE);
        self.scale = Scale::Auto(scale);
        self.trans = Vec2::new(
            (target.width / scale - world.width) / 2.0,
            (target.height / scale - world.height) / 2.0,
        );
    }

    /// Zooms by a wheel `delta` while the world point under `mouse` stays put.
    pub fn zoom_at(&mut self, mouse: Point, delta: f64) {
        let anchor = self.from_screen(mouse);
        let scale = (self.scale.raw() + ZOOM_SPEED * delta).max(MIN_SCALE);
        self.scale = Scale::Manual(scale);
        self.trans = (mouse.to_vec2() / scale) - anchor.to_vec2();
    }

    pub fn pan(&mut self, screen_delta: Vec2) {
        self.trans += screen_delta / self.scale.raw();
    }

    /// Re-fits the board after the canvas changed size, unless the user
    /// zoomed by hand. Returns whether the zoom was reset.
    pub fn on_resize(&mut self, world: Size, target: Size) -> bool {
        if !self.scale.is_auto() {
            return false;
        }
        self.reset_zoom(world, target);
        true
    }

    pub fn gesture(&self, from: Point, to: Point) -> Gesture {
        let diff = to - from;
        if diff.x.abs() <= MIN_DRAG && diff.y.abs() <= MIN_DRAG {
            Gesture::Click(self.cell_at(to))
        } else {
            Gesture::Drag(diff)
        }
    }

    /// Cell coordinates under a canvas pixel. These may lie outside the
    /// board; the grid wraps them.
    pub fn cell_at(&self, screen: Point) -> (isize, isize) {
        let world = self.from_screen(screen);
        (
            (world.x / CELL_WIDTH as f64).floor() as isize,
            (world.y / CELL_WIDTH as f64).floor() as isize,
        )
    }
}
