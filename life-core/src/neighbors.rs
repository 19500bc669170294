/// Offsets of the Moore neighbourhood with Chebyshev radius `RANGE`, the
/// center included, in row-major order.
pub struct MooreNeighbors<const RANGE: u16> {
    curr_x: isize,
    curr_y: isize,
    done: bool,
}

impl<const RANGE: u16> MooreNeighbors<RANGE> {
    pub fn new() -> Self {
        let min = -(RANGE as isize);
        Self {
            curr_x: min,
            curr_y: min,
            done: false,
        }
    }
}

impl<const RANGE: u16> Default for MooreNeighbors<RANGE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RANGE: u16> Iterator for MooreNeighbors<RANGE> {
    type Item = (isize, isize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let range = RANGE as isize;
        let item = (self.curr_x, self.curr_y);
        if self.curr_x < range {
            self.curr_x += 1;
        } else if self.curr_y < range {
            self.curr_x = -range;
            self.curr_y += 1;
        } else {
            self.done = true;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use assert2::check;
    use itertools::iproduct;

    #[test]
    fn range_zero_is_only_the_center() {
        let neighs: Vec<_> = MooreNeighbors::<0>::new().collect();
        check!(neighs == vec![(0, 0)]);
    }

    #[test]
    fn range_one_covers_the_square() {
        let neighs: HashSet<_> = MooreNeighbors::<1>::new().collect();
        let expected: HashSet<(isize, isize)> = iproduct!(-1..=1, -1..=1).collect();
        check!(neighs == expected);
    }

    #[test]
    fn range_two_covers_the_square() {
        let neighs: Vec<_> = MooreNeighbors::<2>::new().collect();
        check!(neighs.len() == 25);
        let expected: HashSet<(isize, isize)> = iproduct!(-2..=2, -2..=2).collect();
        check!(neighs.into_iter().collect::<HashSet<_>>() == expected);
    }

    #[test]
    fn iterates_row_by_row() {
        let neighs: Vec<_> = MooreNeighbors::<1>::new().take(4).collect();
        check!(neighs == vec![(-1, -1), (0, -1), (1, -1), (-1, 0)]);
    }
}
