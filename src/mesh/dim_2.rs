use super::{lattice_mesh, Geometry, UnstructuredMesh};
use crate::prelude::*;

/// corner offsets of a quadrilateral cell, counter-clockwise from the lower left
pub(crate) const CORNERS: [[i64; 3]; 4] = [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]];

/// A structured `n x n` mesh of square elements covering the unit square.
///
/// ## Panics
///
/// Panics if `n` is zero.
pub fn square_mesh(n: usize) -> UnstructuredMesh {
    assert!(n > 0, "a unit square mesh needs at least one cell per side");

    let h = 1.0 / n as f64;
    local_square_mesh(n, n, h, [0.0, 0.0])
}

/// A structured `nx x ny` mesh of square elements of size `h` translated by `origin`.
///
/// Used when every process owns one rectangular piece of a larger square grid.
pub fn local_square_mesh(nx: usize, ny: usize, h: f64, origin: [f64; 2]) -> UnstructuredMesh {
    let spacing = UniformSpacing::new([origin[0], origin[1], 0.0], h);
    lattice_mesh(Geometry::Square, [nx, ny, 0], |ijk| spacing.apply(ijk))
}

/// A structured `n x n` mesh of rhombi with angle `gamma` on the unit lattice, rotated as a
/// whole by `gamma * rank`. Pieces written by consecutive ranks fan out around the origin.
///
/// ## Panics
///
/// Panics if `n` is zero.
pub fn rhombus_mesh(n: usize, rank: u32, gamma: f64) -> UnstructuredMesh {
    assert!(n > 0, "a rhombus mesh needs at least one cell per side");

    let h = 1.0 / n as f64;
    let rho = gamma * rank as f64;
    let (sg, cg) = gamma.sin_cos();
    let (sr, cr) = rho.sin_cos();

    lattice_mesh(Geometry::Square, [n, n, 0], |[i, j, _]| {
        let (i, j) = (i as f64, j as f64);
        let x = i * h + cg * j * h;
        let y = sg * j * h;
        [cr * x - sr * y, sr * x + cr * y, 0.0]
    })
}
