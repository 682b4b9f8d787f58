//! # Traits
//!
//! The conversion routines never look inside a concrete grid or field library. Instead they
//! talk to two small collaborator traits:
//!
//! * [`StructuredGrid`] enumerates the parts of a box grid and the boxes inside each part.
//! * [`FieldSource`] hands out a dense buffer of values for an index range of one part.
//!
//! [`BoxGrid`](crate::BoxGrid) and [`BoxVector`](crate::BoxVector) are in-memory
//! implementations. If your data already lives in another container, write an adapter that
//! implements these traits and every exporter in this crate will work with it:
//!
//! ```ignore
//! struct SolverState { /* ... */ }
//!
//! impl glvis::FieldSource for SolverState {
//!     type Num = f64;
//!
//!     fn variable_kind(&self, var: usize) -> Option<glvis::VariableKind> {
//!         Some(glvis::VariableKind::Cell)
//!     }
//!
//!     fn box_values(
//!         &self,
//!         part: usize,
//!         range: &glvis::IndexBox,
//!         var: usize,
//!     ) -> Result<Vec<f64>, glvis::Error> {
//!         // copy the values out of the solver in `i + j*ni + k*ni*nj` order
//!         todo!()
//!     }
//! }
//! ```

use crate::grid::IndexBox;
use crate::Error;
use crate::VariableKind;

use std::fmt::Debug;

/// Floating point types that can be stored in a field and written as text.
///
/// Implemented for `f32` and `f64`. Values are always widened to `f64` before they are
/// formatted.
pub trait Numeric: num_traits::Float + num_traits::AsPrimitive<f64> + Debug + Default {}

impl Numeric for f32 {}
impl Numeric for f64 {}

/// Read access to a (possibly multi-part) structured grid made of integer boxes.
///
/// Parts are visited in `0..nparts()` order and the boxes of a part in slice order. Both the
/// mesh export and the field export rely on this order being stable between calls.
pub trait StructuredGrid {
    /// dimensionality of the grid (2 or 3)
    fn ndim(&self) -> usize;

    /// number of parts in the grid
    fn nparts(&self) -> usize;

    /// the ordered boxes owned by `part`
    fn boxes(&self, part: usize) -> &[IndexBox];

    /// total number of cells over all boxes of all parts
    fn num_cells(&self) -> usize {
        (0..self.nparts())
            .flat_map(|part| self.boxes(part).iter())
            .map(IndexBox::volume)
            .sum()
    }
}

/// Read access to a field sampled on a [`StructuredGrid`].
pub trait FieldSource {
    type Num: Numeric;

    /// where the samples of variable `var` live, or `None` if the variable does not exist
    fn variable_kind(&self, var: usize) -> Option<VariableKind>;

    /// Copy the values of variable `var` on `part` covering `range` into a dense buffer.
    ///
    /// The buffer must hold exactly `range.volume()` values laid out with the first axis
    /// fastest: `i + j*ni + k*ni*nj`, where `ni`, `nj` are the sizes of `range`.
    fn box_values(
        &self,
        part: usize,
        range: &IndexBox,
        var: usize,
    ) -> Result<Vec<Self::Num>, Error>;
}

/// Maps a raw index-space position to physical coordinates.
///
/// The third output component is ignored for 2D grids.
pub trait CoordinateMap {
    fn apply(&self, ijk: [i64; 3]) -> [f64; 3];
}

/// Construct a container from a dense buffer laid out over `SPAN`.
pub trait FromBuffer<NUM, SPAN>: Sized {
    fn from_buffer(buffer: Vec<NUM>, span: &SPAN) -> Result<Self, ndarray::ShapeError>;
}
