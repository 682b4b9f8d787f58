//! # Box grids
//!
//! A structured grid is described as a list of *parts*, each of which is a union of
//! axis-aligned [`IndexBox`]es of cells. This is the shape of the semi-structured grids
//! produced by multi-block solvers: every process owns some boxes of some parts, and only
//! those are ever exported by that process.
//!
//! [`BoxGrid`] is a plain in-memory implementation of [`StructuredGrid`]. A single-part grid
//! (a "struct" grid) is simply a `BoxGrid` with one part, see [`BoxGrid::single_part`].

mod index_box;

pub use index_box::IndexBox;

use crate::prelude::*;

/// One logical block of a grid: an ordered list of boxes
#[derive(Debug, Clone, Default, PartialEq, Constructor)]
pub struct Part {
    boxes: Vec<IndexBox>,
}

impl Part {
    /// append a box to the part, builder style
    pub fn with_box(mut self, b: IndexBox) -> Self {
        self.boxes.push(b);
        self
    }

    pub fn push_box(&mut self, b: IndexBox) {
        self.boxes.push(b);
    }

    pub fn boxes(&self) -> &[IndexBox] {
        &self.boxes
    }

    /// number of cells in all boxes of the part
    pub fn num_cells(&self) -> usize {
        self.boxes.iter().map(IndexBox::volume).sum()
    }
}

/// In-memory multi-part box grid
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGrid {
    ndim: usize,
    parts: Vec<Part>,
}

impl BoxGrid {
    /// create an empty grid of the given dimensionality
    pub fn new(ndim: usize) -> Self {
        Self {
            ndim,
            parts: Vec::new(),
        }
    }

    /// a grid with one part holding `boxes`
    pub fn single_part(ndim: usize, boxes: Vec<IndexBox>) -> Self {
        Self::new(ndim).with_part(Part::new(boxes))
    }

    /// append a part, builder style
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// append a part and return its index
    pub fn add_part(&mut self, part: Part) -> usize {
        self.parts.push(part);
        self.parts.len() - 1
    }

    pub fn part(&self, part: usize) -> Option<&Part> {
        self.parts.get(part)
    }

    pub fn part_mut(&mut self, part: usize) -> Option<&mut Part> {
        self.parts.get_mut(part)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl StructuredGrid for BoxGrid {
    fn ndim(&self) -> usize {
        self.ndim
    }

    fn nparts(&self) -> usize {
        self.parts.len()
    }

    fn boxes(&self, part: usize) -> &[IndexBox] {
        self.parts
            .get(part)
            .map(Part::boxes)
            .unwrap_or_default()
    }
}

/// Check that the grid is 2D or 3D and that every box agrees with it. Returns the
/// dimensionality on success.
pub fn validate_dimension<G: StructuredGrid + ?Sized>(grid: &G) -> Result<usize, Error> {
    let ndim = grid.ndim();

    if ndim != 2 && ndim != 3 {
        return Err(Error::UnsupportedDimension(ndim));
    }

    for part in 0..grid.nparts() {
        for (index, b) in grid.boxes(part).iter().enumerate() {
            if b.ndim() != ndim {
                return Err(Error::InconsistentGridDimension {
                    expected: ndim,
                    found: b.ndim(),
                    part,
                    index,
                });
            }
        }
    }

    Ok(ndim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_part_grid() -> BoxGrid {
        BoxGrid::new(2)
            .with_part(
                Part::default()
                    .with_box(IndexBox::new_2d([0, 0], [1, 1]))
                    .with_box(IndexBox::new_2d([2, 0], [4, 0])),
            )
            .with_part(Part::default().with_box(IndexBox::new_2d([0, 0], [0, 3])))
    }

    #[test]
    fn counts_cells_over_parts() {
        let grid = two_part_grid();
        assert_eq!(grid.nparts(), 2);
        assert_eq!(grid.parts()[0].num_cells(), 7);
        assert_eq!(grid.num_cells(), 11);
    }

    #[test]
    fn missing_part_has_no_boxes() {
        let grid = two_part_grid();
        assert!(grid.boxes(5).is_empty());
    }

    #[test]
    fn consistent_grid_validates() {
        assert_eq!(validate_dimension(&two_part_grid()).unwrap(), 2);
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        let mut grid = two_part_grid();
        grid.part_mut(1)
            .unwrap()
            .push_box(IndexBox::new_3d([0, 0, 0], [1, 1, 1]));

        match validate_dimension(&grid) {
            Err(Error::InconsistentGridDimension {
                expected,
                found,
                part,
                index,
            }) => {
                assert_eq!((expected, found, part, index), (2, 3, 1, 1));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn one_dimensional_grid_is_rejected() {
        let grid = BoxGrid::new(1);
        assert!(matches!(
            validate_dimension(&grid),
            Err(Error::UnsupportedDimension(1))
        ));
    }
}
