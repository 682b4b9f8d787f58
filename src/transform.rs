//! Index space to physical space.
//!
//! Every mesh vertex is generated from an integer corner `(i, j[, k])`. By default the corner is
//! scaled by a uniform step `h` and shifted by an origin ([`UniformSpacing`]). Multi-block
//! grids usually need each part placed and rotated on its own, which is what the per-part
//! [`AffineTransform`]s of [`Placement::Affine`] are for.

use crate::prelude::*;

/// `pos = origin + ijk * h`
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct UniformSpacing {
    pub origin: [f64; 3],
    pub h: f64,
}

impl Default for UniformSpacing {
    fn default() -> Self {
        Self {
            origin: [0.0; 3],
            h: 1.0,
        }
    }
}

impl CoordinateMap for UniformSpacing {
    fn apply(&self, ijk: [i64; 3]) -> [f64; 3] {
        [
            self.origin[0] + ijk[0] as f64 * self.h,
            self.origin[1] + ijk[1] as f64 * self.h,
            self.origin[2] + ijk[2] as f64 * self.h,
        ]
    }
}

/// `pos = M * ijk + O` with a row-major `ndim x ndim` matrix `M`
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform {
    ndim: usize,
    matrix: [[f64; 3]; 3],
    offset: [f64; 3],
}

impl AffineTransform {
    pub fn new_2d(matrix: [[f64; 2]; 2], offset: [f64; 2]) -> Self {
        Self {
            ndim: 2,
            matrix: [
                [matrix[0][0], matrix[0][1], 0.0],
                [matrix[1][0], matrix[1][1], 0.0],
                [0.0, 0.0, 0.0],
            ],
            offset: [offset[0], offset[1], 0.0],
        }
    }

    pub fn new_3d(matrix: [[f64; 3]; 3], offset: [f64; 3]) -> Self {
        Self {
            ndim: 3,
            matrix,
            offset,
        }
    }

    /// the identity map of the given dimensionality
    pub fn identity(ndim: usize) -> Self {
        let mut matrix = [[0.0; 3]; 3];
        for (d, row) in matrix.iter_mut().enumerate().take(ndim) {
            row[d] = 1.0;
        }

        Self {
            ndim,
            matrix,
            offset: [0.0; 3],
        }
    }

    /// Build a transform from a flat row-major matrix of `ndim * ndim` values and an offset
    /// of `ndim` values. Returns `None` when the lengths do not match `ndim`.
    pub fn from_slices(ndim: usize, matrix: &[f64], offset: &[f64]) -> Option<Self> {
        if !(ndim == 2 || ndim == 3) || matrix.len() != ndim * ndim || offset.len() != ndim {
            return None;
        }

        let mut out = Self::identity(ndim);
        for row in 0..ndim {
            for col in 0..ndim {
                out.matrix[row][col] = matrix[row * ndim + col];
            }
            out.offset[row] = offset[row];
        }

        Some(out)
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.matrix
    }

    pub fn offset(&self) -> [f64; 3] {
        self.offset
    }
}

impl CoordinateMap for AffineTransform {
    fn apply(&self, ijk: [i64; 3]) -> [f64; 3] {
        let x = [ijk[0] as f64, ijk[1] as f64, ijk[2] as f64];
        let mut out = [0.0; 3];

        for row in 0..self.ndim {
            let mut acc = self.matrix[row][0] * x[0];
            for col in 1..self.ndim {
                acc += self.matrix[row][col] * x[col];
            }
            out[row] = acc + self.offset[row];
        }

        out
    }
}

/// How the cells of every part are placed in physical space
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// the same uniform spacing for every part
    Uniform(UniformSpacing),
    /// one transform per part, indexed by part number
    Affine(Vec<AffineTransform>),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Uniform(UniformSpacing::default())
    }
}

impl Placement {
    /// Split flat per-part buffers into transforms: part `p` uses
    /// `trans[p*ndim*ndim..(p+1)*ndim*ndim]` and `origin[p*ndim..(p+1)*ndim]`.
    /// Trailing values that do not fill a whole part are ignored.
    pub fn from_flat(ndim: usize, trans: &[f64], origin: &[f64]) -> Result<Self, Error> {
        if ndim != 2 && ndim != 3 {
            return Err(Error::UnsupportedDimension(ndim));
        }

        let transforms = trans
            .chunks_exact(ndim * ndim)
            .zip(origin.chunks_exact(ndim))
            .filter_map(|(matrix, offset)| AffineTransform::from_slices(ndim, matrix, offset))
            .collect();

        Ok(Placement::Affine(transforms))
    }

    /// the transform of part `part`, if this placement is per-part
    pub fn transform_for_part(&self, part: usize) -> Option<&AffineTransform> {
        match self {
            Placement::Uniform(_) => None,
            Placement::Affine(transforms) => transforms.get(part),
        }
    }

    /// the coordinate map to use for `part` of an `ndim` dimensional grid
    pub(crate) fn map_for_part(
        &self,
        part: usize,
        ndim: usize,
    ) -> Result<&dyn CoordinateMap, Error> {
        match self {
            Placement::Uniform(spacing) => Ok(spacing as &dyn CoordinateMap),
            Placement::Affine(transforms) => {
                let transform = transforms.get(part).ok_or(Error::MissingTransform {
                    part,
                    available: transforms.len(),
                })?;

                if transform.ndim() != ndim {
                    return Err(Error::TransformDimension {
                        part,
                        expected: ndim,
                        found: transform.ndim(),
                    });
                }

                Ok(transform as &dyn CoordinateMap)
            }
        }
    }
}
