use piet::Color;

use crate::{grid::Grid, neighbors::MooreNeighbors};

/// A cellular automaton rule over a toroidal grid.
pub trait Automaton {
    type State: Default + Clone;

    /// Computes the next state of the cell at `pos` from the previous generation.
    fn update(pos: (isize, isize), grid: &Grid<Self::State>) -> Self::State;

    fn toggle(curr: Self::State) -> Self::State;

    fn color(curr: &Self::State) -> Color;

    /// Picks a state for a randomly seeded cell; `alive` is drawn with the
    /// configured seed density.
    fn seed(alive: bool) -> Self::State;
}

pub struct Life;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeState {
    #[default]
    Dead,
    Alive,
}

const DEAD_COLOR: Color = Color::rgb8(0x1d, 0x20, 0x21);
const ALIVE_COLOR: Color = Color::rgb8(0xeb, 0xdb, 0xb2);

impl Automaton for Life {
    type State = LifeState;

    fn update((pos_x, pos_y): (isize, isize), grid: &Grid<Self::State>) -> Self::State {
        let sum: u8 = MooreNeighbors::<1>::new()
            .filter(|&(x, y)| x != 0 || y != 0)
            .map(|(x, y)| match grid[(x + pos_x, y + pos_y)] {
                LifeState::Dead => 0,
                LifeState::Alive => 1,
            })
            .sum();
        match (sum, grid[(pos_x, pos_y)]) {
            (2..=3, LifeState::Alive) => LifeState::Alive,
            (3, LifeState::Dead) => LifeState::Alive,
            _ => LifeState::Dead,
        }
    }

    fn toggle(curr: Self::State) -> Self::State {
        match curr {
            LifeState::Dead => LifeState::Alive,
            LifeState::Alive => LifeState::Dead,
        }
    }

    fn color(curr: &Self::State) -> Color {
        match curr {
            LifeState::Dead => DEAD_COLOR,
            LifeState::Alive => ALIVE_COLOR,
        }
    }

    fn seed(alive: bool) -> Self::State {
        if alive {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn grid_with(alive: &[(isize, isize)]) -> Grid<LifeState> {
        let mut grid = Grid::new(6, 6).unwrap();
        for &pos in alive {
            grid[pos] = LifeState::Alive;
        }
        grid
    }

    #[test]
    fn lonely_cell_dies() {
        let grid = grid_with(&[(2, 2), (3, 2)]);
        check!(Life::update((2, 2), &grid) == LifeState::Dead);
    }

    #[test]
    fn cell_with_two_or_three_neighbors_survives() {
        let grid = grid_with(&[(1, 1), (2, 2), (3, 3)]);
        check!(Life::update((2, 2), &grid) == LifeState::Alive);
        let grid = grid_with(&[(1, 1), (2, 2), (3, 3), (1, 3)]);
        check!(Life::update((2, 2), &grid) == LifeState::Alive);
    }

    #[test]
    fn crowded_cell_dies() {
        let grid = grid_with(&[(1, 1), (2, 1), (3, 1), (1, 2), (2, 2)]);
        check!(Life::update((2, 2), &grid) == LifeState::Dead);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let grid = grid_with(&[(1, 1), (2, 1), (3, 1)]);
        check!(Life::update((2, 2), &grid) == LifeState::Alive);
        check!(Life::update((2, 0), &grid) == LifeState::Alive);
        check!(Life::update((1, 2), &grid) == LifeState::Dead);
    }

    #[test]
    fn neighbors_wrap_around_the_edges() {
        let grid = grid_with(&[(5, 0), (5, 1), (5, 5)]);
        check!(Life::update((0, 0), &grid) == LifeState::Alive);
    }

    #[test]
    fn toggle_flips_state() {
        check!(Life::toggle(LifeState::Dead) == LifeState::Alive);
        check!(Life::toggle(LifeState::Alive) == LifeState::Dead);
    }

    #[test]
    fn states_have_distinct_colors() {
        check!(Life::color(&LifeState::Dead) != Life::color(&LifeState::Alive));
    }
}
