//! # Mesh Information
//!
//! An [`UnstructuredMesh`] is the in-memory form of an MFEM `mesh v1.0` file: a list of
//! elements, each referencing its corner vertices by id, and a flat list of vertex
//! coordinates.
//!
//! There are two ways to produce one:
//!
//! * [`build_mesh`] converts a box grid into a mesh where *every cell owns its own vertices*.
//!   Cells sharing a corner each get a private copy of it, so a grid of `C` cells always
//!   yields `C` elements and `C * cellNV` vertices. This makes the mesh trivial to pair with
//!   node-centered data copied out box by box, at the price of a larger file.
//! * The lattice generators ([`square_mesh`], [`local_square_mesh`], [`rhombus_mesh`] and
//!   [`cubic_mesh`]) build a single rectangular block directly with shared vertices.
//!
//! Both use the same corner order for an element. In 2D the corners of cell `(i, j)` are
//!
//! ```text
//! (i,j) -> (i+1,j) -> (i+1,j+1) -> (i,j+1)
//! ```
//!
//! and in 3D the same four corners at `k` are followed by the same four at `k+1`.

mod dim_2;
mod dim_3;

pub use dim_2::{local_square_mesh, rhombus_mesh, square_mesh};
pub use dim_3::cubic_mesh;

use crate::grid::{self, IndexBox};
use crate::prelude::*;

/// attribute written for every element
pub const DEFAULT_ATTRIBUTE: u32 = 1;

/// Element geometries, numbered the way MFEM numbers them in mesh files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// a quadrilateral, MFEM geometry 3
    Square,
    /// a hexahedron, MFEM geometry 5
    Cube,
}

impl Geometry {
    /// the cell geometry of an `ndim` dimensional box grid
    pub fn for_dim(ndim: usize) -> Result<Self, Error> {
        match ndim {
            2 => Ok(Geometry::Square),
            3 => Ok(Geometry::Cube),
            _ => Err(Error::UnsupportedDimension(ndim)),
        }
    }

    /// the integer written in the element table, `2 * ndim - 1`
    pub fn tag(self) -> u32 {
        match self {
            Geometry::Square => 3,
            Geometry::Cube => 5,
        }
    }

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            3 => Some(Geometry::Square),
            5 => Some(Geometry::Cube),
            _ => None,
        }
    }

    pub fn ndim(self) -> usize {
        match self {
            Geometry::Square => 2,
            Geometry::Cube => 3,
        }
    }

    /// number of corner vertices (`cellNV`)
    pub fn num_vertices(self) -> usize {
        self.corners().len()
    }

    /// index offsets of the corners of a cell, in element order
    pub(crate) fn corners(self) -> &'static [[i64; 3]] {
        match self {
            Geometry::Square => &dim_2::CORNERS,
            Geometry::Cube => &dim_3::CORNERS,
        }
    }
}

/// One line of the element table
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Element {
    pub attribute: u32,
    pub geometry: Geometry,
    pub vertices: Vec<usize>,
}

/// Elements and vertex coordinates of an MFEM mesh
#[derive(Debug, Clone, PartialEq)]
pub struct UnstructuredMesh {
    ndim: usize,
    elements: Vec<Element>,
    vertices: Vec<[f64; 3]>,
}

impl UnstructuredMesh {
    /// Assemble a mesh from its parts. Vertices always carry three coordinates, the third
    /// is ignored for 2D meshes.
    pub fn new(ndim: usize, elements: Vec<Element>, vertices: Vec<[f64; 3]>) -> Self {
        Self {
            ndim,
            elements,
            vertices,
        }
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn vertices(&self) -> &[[f64; 3]] {
        &self.vertices
    }

    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// the first `ndim` coordinates of vertex `id`
    pub fn vertex(&self, id: usize) -> Option<&[f64]> {
        self.vertices.get(id).map(|v| &v[..self.ndim])
    }
}

/// Convert a box grid into a mesh with one element and `cellNV` private vertices per cell.
///
/// Parts are visited in order and the boxes of each part in order; inside a box cells are
/// visited with the first axis fastest (see [`Cells`](crate::Cells)). Element `n` references
/// vertices `n*cellNV .. (n+1)*cellNV`. Vertex positions come from `placement`.
pub fn build_mesh<G: StructuredGrid + ?Sized>(
    grid: &G,
    placement: &Placement,
) -> Result<UnstructuredMesh, Error> {
    let ndim = grid::validate_dimension(grid)?;
    let geometry = Geometry::for_dim(ndim)?;
    let cell_nv = geometry.num_vertices();

    let expected = grid.num_cells();
    let mut elements = Vec::with_capacity(expected);
    let mut vertices = Vec::with_capacity(expected * cell_nv);

    for (part, b) in iter::grid_boxes(grid) {
        let map = placement.map_for_part(part, ndim)?;

        log::debug!("meshing box `{}` of part {}", b, part);

        for cell in b.cells() {
            let first = vertices.len();

            for corner in geometry.corners() {
                vertices.push(map.apply(offset(cell, corner)));
            }

            elements.push(Element::new(
                DEFAULT_ATTRIBUTE,
                geometry,
                (first..first + cell_nv).collect(),
            ));
        }
    }

    if elements.len() != expected {
        return Err(Error::ElementCount {
            expected,
            found: elements.len(),
        });
    }

    Ok(UnstructuredMesh::new(ndim, elements, vertices))
}

pub(crate) fn offset(cell: [i64; 3], corner: &[i64; 3]) -> [i64; 3] {
    [cell[0] + corner[0], cell[1] + corner[1], cell[2] + corner[2]]
}

/// A single block of `sizes[0] x sizes[1] (x sizes[2])` cells with shared vertices. Vertices
/// are numbered with the first axis fastest, and `position` maps each lattice point to
/// physical coordinates.
fn lattice_mesh<F>(geometry: Geometry, sizes: [usize; 3], position: F) -> UnstructuredMesh
where
    F: Fn([i64; 3]) -> [f64; 3],
{
    let [nx, ny, nz] = sizes.map(|n| n as i64);

    let (points, cells) = match geometry {
        Geometry::Square => (
            IndexBox::new_2d([0, 0], [nx, ny]),
            IndexBox::new_2d([0, 0], [nx - 1, ny - 1]),
        ),
        Geometry::Cube => (
            IndexBox::new_3d([0, 0, 0], [nx, ny, nz]),
            IndexBox::new_3d([0, 0, 0], [nx - 1, ny - 1, nz - 1]),
        ),
    };

    let stride = [1, nx + 1, (nx + 1) * (ny + 1)];

    let vertices = points.cells().map(position).collect();

    let elements = cells
        .cells()
        .map(|cell| {
            let ids = geometry
                .corners()
                .iter()
                .map(|corner| {
                    let p = offset(cell, corner);
                    (p[0] * stride[0] + p[1] * stride[1] + p[2] * stride[2]) as usize
                })
                .collect();

            Element::new(DEFAULT_ATTRIBUTE, geometry, ids)
        })
        .collect();

    UnstructuredMesh::new(geometry.ndim(), elements, vertices)
}
