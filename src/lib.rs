#![doc = include_str!("../README.md")]

pub mod array;
mod data;
mod extract;
pub mod grid;
mod iter;
pub mod mesh;
pub mod parse;
pub mod prelude;
mod traits;
mod transform;
mod utils;
mod write_glvis;

pub use traits::CoordinateMap;
pub use traits::FieldSource;
pub use traits::FromBuffer;
pub use traits::Numeric;
pub use traits::StructuredGrid;

pub use data::{GlvisData, GridFunction};

pub use grid::{BoxGrid, IndexBox, Part};
pub use iter::{grid_boxes, Cells};
pub use mesh::{build_mesh, Element, Geometry, UnstructuredMesh};
pub use mesh::{cubic_mesh, local_square_mesh, rhombus_mesh, square_mesh};

pub use array::{BoxValues, BoxVector};
pub use extract::{extract_grid_function, FeCollection, VariableKind};
pub use transform::{AffineTransform, Placement, UniformSpacing};

pub use utils::format_scientific;
pub use write_glvis::{print_glvis, print_grid, print_grid_function, print_mesh, print_vector};
pub use write_glvis::{write_data, write_grid_function, write_mesh, OutputTarget};

pub use parse::{read_grid_function, read_mesh, ParseError};

pub use ndarray;

use std::path::PathBuf;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Error while parsing GLVis text: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("can't open output file {}: {source}", .path.display())]
    OutputUnopenable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported variable type `{kind}`, only cell and node variables can be exported")]
    UnsupportedFieldKind { kind: VariableKind },
    #[error("variable {var} is not defined on the field")]
    UnknownVariable { var: usize },
    #[error("grids must be 2D or 3D, got a {0}D grid")]
    UnsupportedDimension(usize),
    #[error("box {index} of part {part} is {found}D inside a {expected}D grid")]
    InconsistentGridDimension {
        expected: usize,
        found: usize,
        part: usize,
        index: usize,
    },
    #[error("no coordinate transform for part {part} ({available} transforms given)")]
    MissingTransform { part: usize, available: usize },
    #[error("coordinate transform of part {part} is {found}D, expected {expected}D")]
    TransformDimension {
        part: usize,
        expected: usize,
        found: usize,
    },
    #[error("part {part} returned {found} values for an index range holding {expected}")]
    BufferSize {
        part: usize,
        expected: usize,
        found: usize,
    },
    #[error("field holds no values of variable {var} on part {part} covering `{range}`")]
    MissingValues {
        part: usize,
        var: usize,
        range: IndexBox,
    },
    #[error("mesh has {found} elements but the grid boxes hold {expected} cells")]
    ElementCount { expected: usize, found: usize },
}
