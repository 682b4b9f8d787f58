//! container types for field values copied out of a box grid

mod box_vector;

pub use box_vector::BoxVector;

use crate::prelude::*;

#[derive(Deref, Into, Clone, PartialEq, Debug)]
/// The dense values of one variable over one index range.
///
/// The wrapped array has shape `(nk, nj, ni)` in standard (row major) layout, which is exactly
/// the `i + j*ni + k*ni*nj` buffer layout handed out by a [`FieldSource`]. For 2D ranges
/// `nk == 1`.
///
/// Values are looked up by offsets relative to the lower corner of the range with
/// [`BoxValues::at`].
pub struct BoxValues<NUM>(Array3<NUM>);

impl<NUM> BoxValues<NUM>
where
    NUM: Numeric,
{
    /// get the array that this type wraps.
    pub fn inner(self) -> Array3<NUM> {
        self.0
    }

    /// the value at local offset `(i, j, k)` from the lower corner of the range
    ///
    /// ## Panics
    ///
    /// Panics if the offset is outside the range.
    #[inline]
    pub fn at(&self, local: [i64; 3]) -> NUM {
        self.0[[local[2] as usize, local[1] as usize, local[0] as usize]]
    }
}

impl<NUM> FromBuffer<NUM, IndexBox> for BoxValues<NUM>
where
    NUM: Numeric,
{
    fn from_buffer(buffer: Vec<NUM>, range: &IndexBox) -> Result<Self, ndarray::ShapeError> {
        let [ni, nj, nk] = range.sizes();
        let arr = Array3::from_shape_vec((nk, nj, ni), buffer)?;
        Ok(Self(arr))
    }
}
