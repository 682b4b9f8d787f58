use super::{lattice_mesh, Geometry, UnstructuredMesh};
use crate::prelude::*;

/// corner offsets of a hexahedral cell: the bottom quad at `k`, then the top quad at `k+1`
pub(crate) const CORNERS: [[i64; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// A structured `nx x ny x nz` mesh of cubes of size `h` translated by `origin`.
pub fn cubic_mesh(nx: usize, ny: usize, nz: usize, h: f64, origin: [f64; 3]) -> UnstructuredMesh {
    let spacing = UniformSpacing::new(origin, h);
    lattice_mesh(Geometry::Cube, [nx, ny, nz], |ijk| spacing.apply(ijk))
}
