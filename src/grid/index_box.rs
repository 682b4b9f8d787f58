use crate::parse::error::{BadNumber, UnexpectedEnd};
use crate::parse::ParseError;

use std::fmt;

/// An axis-aligned box of integer cell indices with inclusive bounds on every axis.
///
/// 2D boxes keep a degenerate third axis `[0, 0]` so that loops over `k` run exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexBox {
    ndim: usize,
    lower: [i64; 3],
    upper: [i64; 3],
}

impl IndexBox {
    /// create a 2D box from its lower and upper (inclusive) corners
    pub fn new_2d(lower: [i64; 2], upper: [i64; 2]) -> Self {
        Self {
            ndim: 2,
            lower: [lower[0], lower[1], 0],
            upper: [upper[0], upper[1], 0],
        }
    }

    /// create a 3D box from its lower and upper (inclusive) corners
    pub fn new_3d(lower: [i64; 3], upper: [i64; 3]) -> Self {
        Self {
            ndim: 3,
            lower,
            upper,
        }
    }

    /// Parse a box from a VTK-style extent string: `"x_start x_end y_start y_end"` for a
    /// 2D box or `"x_start x_end y_start y_end z_start z_end"` for a 3D box.
    ///
    /// # Example
    /// ```
    /// let b = glvis::IndexBox::from_span_string("0 9 0 19").unwrap();
    /// assert_eq!(b.volume(), 200);
    /// ```
    pub fn from_span_string(span_string: &str) -> Result<Self, ParseError> {
        let values = span_string
            .split_ascii_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| BadNumber::new(0, token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [x0, x1, y0, y1] => Ok(Self::new_2d([*x0, *y0], [*x1, *y1])),
            [x0, x1, y0, y1, z0, z1] => Ok(Self::new_3d([*x0, *y0, *z0], [*x1, *y1, *z1])),
            _ => Err(UnexpectedEnd::new("4 or 6 extent values".to_string()).into()),
        }
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// lower (inclusive) index on `axis`
    pub fn lower(&self, axis: usize) -> i64 {
        self.lower[axis]
    }

    /// upper (inclusive) index on `axis`
    pub fn upper(&self, axis: usize) -> i64 {
        self.upper[axis]
    }

    pub fn lower_corner(&self) -> [i64; 3] {
        self.lower
    }

    pub fn upper_corner(&self) -> [i64; 3] {
        self.upper
    }

    /// number of cells along `axis`, zero if the box is empty on that axis
    pub fn size(&self, axis: usize) -> usize {
        (self.upper[axis] - self.lower[axis] + 1).max(0) as usize
    }

    /// `[ni, nj, nk]`, with `nk == 1` for 2D boxes
    pub fn sizes(&self) -> [usize; 3] {
        [self.size(0), self.size(1), self.size(2)]
    }

    /// number of cells in the box
    pub fn volume(&self) -> usize {
        self.sizes().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.volume() == 0
    }

    /// true if every index of `other` is also inside `self`
    pub fn contains(&self, other: &IndexBox) -> bool {
        (0..3).all(|axis| {
            self.lower[axis] <= other.lower[axis] && other.upper[axis] <= self.upper[axis]
        })
    }

    /// Grow the upper bound of every active axis by `by`. The degenerate third axis of a 2D
    /// box is left alone.
    pub fn grow_upper(&self, by: i64) -> Self {
        let mut grown = *self;
        for axis in 0..self.ndim {
            grown.upper[axis] += by;
        }
        grown
    }

    /// Format the box as an extent string, the inverse of [`IndexBox::from_span_string`]
    pub fn span_string(&self) -> String {
        (0..self.ndim)
            .map(|axis| format!("{} {}", self.lower[axis], self.upper[axis]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for IndexBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.span_string())
    }
}
