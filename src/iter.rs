use crate::grid::IndexBox;
use crate::traits::StructuredGrid;

/// Iterator over the cells of an [`IndexBox`].
///
/// Cells are produced with the first axis fastest: `k` is the outermost loop, then `j`, then
/// `i`. For 2D boxes the `k` loop runs once. The mesh export and the field export both walk
/// boxes with this iterator, so element `n` of a mesh and sample `n` of a cell field always
/// describe the same cell.
#[derive(Debug, Clone)]
pub struct Cells {
    lower: [i64; 3],
    upper: [i64; 3],
    next: Option<[i64; 3]>,
}

impl Cells {
    pub fn new(b: &IndexBox) -> Self {
        let next = if b.is_empty() {
            None
        } else {
            Some(b.lower_corner())
        };

        Self {
            lower: b.lower_corner(),
            upper: b.upper_corner(),
            next,
        }
    }
}

impl Iterator for Cells {
    type Item = [i64; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut following = current;
        self.next = None;

        for axis in 0..3 {
            if following[axis] < self.upper[axis] {
                following[axis] += 1;
                self.next = Some(following);
                break;
            }
            following[axis] = self.lower[axis];
        }

        Some(current)
    }
}

impl IndexBox {
    /// iterate the cells of this box, see [`Cells`]
    pub fn cells(&self) -> Cells {
        Cells::new(self)
    }
}

/// Every box of the grid tagged with its part, parts first, boxes in order within a part.
pub fn grid_boxes<G: StructuredGrid + ?Sized>(
    grid: &G,
) -> impl Iterator<Item = (usize, &IndexBox)> + '_ {
    (0..grid.nparts()).flat_map(move |part| grid.boxes(part).iter().map(move |b| (part, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{BoxGrid, Part};

    #[test]
    fn first_axis_is_fastest() {
        let b = IndexBox::new_3d([0, 0, 0], [1, 1, 1]);
        let cells: Vec<_> = b.cells().collect();

        assert_eq!(
            cells,
            vec![
                [0, 0, 0],
                [1, 0, 0],
                [0, 1, 0],
                [1, 1, 0],
                [0, 0, 1],
                [1, 0, 1],
                [0, 1, 1],
                [1, 1, 1],
            ]
        );
    }

    #[test]
    fn two_dimensional_box_runs_k_once() {
        let b = IndexBox::new_2d([-1, 2], [0, 3]);
        let cells: Vec<_> = b.cells().collect();
        assert_eq!(cells, vec![[-1, 2, 0], [0, 2, 0], [-1, 3, 0], [0, 3, 0]]);
    }

    #[test]
    fn count_matches_volume() {
        let b = IndexBox::new_3d([2, -3, 5], [6, 0, 7]);
        assert_eq!(b.cells().count(), b.volume());
    }

    #[test]
    fn empty_box_has_no_cells() {
        let b = IndexBox::new_2d([0, 0], [-1, 5]);
        assert_eq!(b.cells().count(), 0);
    }

    #[test]
    fn iteration_is_restartable() {
        let b = IndexBox::new_2d([0, 0], [2, 1]);
        let first: Vec<_> = b.cells().collect();
        let second: Vec<_> = b.cells().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn boxes_are_visited_part_by_part() {
        let a = IndexBox::new_2d([0, 0], [0, 0]);
        let b = IndexBox::new_2d([1, 0], [1, 0]);
        let c = IndexBox::new_2d([5, 5], [6, 6]);

        let grid = BoxGrid::new(2)
            .with_part(Part::new(vec![a, b]))
            .with_part(Part::default())
            .with_part(Part::new(vec![c]));

        let visited: Vec<_> = grid_boxes(&grid).map(|(part, b)| (part, *b)).collect();
        assert_eq!(visited, vec![(0, a), (0, b), (2, c)]);
    }
}
