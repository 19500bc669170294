/// Side length of a cell in world units.
pub const CELL_WIDTH: usize = 50;

pub const MIN_SCALE: f64 = 0.01;
/// Scale change per pixel of wheel delta.
pub const ZOOM_SPEED: f64 = 0.001;

/// Mouse movement, in pixels per axis, below which a press is a click
/// rather than a drag.
pub const MIN_DRAG: f64 = 5.0;

/// Largest accepted grid side, in cells.
pub const MAX_GRID_SIDE: usize = 1_000;

pub const MIN_TICK_MILLIS: u32 = 10;
pub const MAX_TICK_MILLIS: u32 = 5_000;
