use std::ops::{Index, IndexMut};

use getset::CopyGetters;
use itertools::iproduct;

use crate::error::{Error, Result};

/// A `width` by `height` torus of cells. Indexing with any `(x, y)` wraps
/// around both edges.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct Grid<State> {
    #[getset(get_copy = "pub")]
    width: usize,
    #[getset(get_copy = "pub")]
    height: usize,
    cells: Vec<State>,
}

impl<State: Default> Grid<State> {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(Error::GridTooLarge { width, height })?;
        let cells = (0..len).map(|_| State::default()).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = State::default());
    }
}

impl<State> Grid<State> {
    fn to_idx(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        x + y * self.width
    }

    /// All in-bound coordinates, row by row.
    pub fn positions(&self) -> impl Iterator<Item = (isize, isize)> {
        iproduct!(0..self.height as isize, 0..self.width as isize).map(|(y, x)| (x, y))
    }

    pub fn cells(&self) -> impl Iterator<Item = ((isize, isize), &State)> {
        self.positions().zip(self.cells.iter())
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut State> {
        self.cells.iter_mut()
    }
}

impl<State> Index<(isize, isize)> for Grid<State> {
    type Output = State;

    fn index(&self, (x, y): (isize, isize)) -> &Self::Output {
        &self.cells[self.to_idx(x, y)]
    }
}

impl<State> IndexMut<(isize, isize)> for Grid<State> {
    fn index_mut(&mut self, (x, y): (isize, isize)) -> &mut Self::Output {
        let idx = self.to_idx(x, y);
        &mut self.cells[idx]
    }
}
