use crate::prelude::*;

use ndarray::s;
use std::collections::HashMap;

/// values of one variable on one part over a rectangular extent
#[derive(Debug, Clone, PartialEq)]
struct Block<NUM> {
    extent: IndexBox,
    values: Array3<NUM>,
}

/// In-memory field over a multi-part box grid.
///
/// Every `(part, variable)` pair stores one dense block of values over an extent that must
/// cover every range later requested through [`FieldSource::box_values`]. For node-centered
/// variables this means one extra index at the upper end of every axis.
///
/// ```
/// use glvis::prelude::*;
///
/// let cells = IndexBox::new_2d([0, 0], [3, 3]);
/// let field = BoxVector::<f64>::new(vec![VariableKind::Node])
///     .with_values(0, 0, cells.grow_upper(1), |[i, j, _]| (i + j) as f64);
///
/// let values = field.box_values(0, &IndexBox::new_2d([0, 0], [1, 0]), 0).unwrap();
/// assert_eq!(values, vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxVector<NUM> {
    kinds: Vec<VariableKind>,
    blocks: HashMap<(usize, usize), Block<NUM>>,
}

impl<NUM> BoxVector<NUM>
where
    NUM: Numeric,
{
    /// a field with one variable per entry of `kinds` and no values yet
    pub fn new(kinds: Vec<VariableKind>) -> Self {
        Self {
            kinds,
            blocks: HashMap::new(),
        }
    }

    /// Store `values` (shape `(nk, nj, ni)` of `extent`) for variable `var` on `part`,
    /// replacing anything stored before.
    pub fn insert_block(
        &mut self,
        part: usize,
        var: usize,
        extent: IndexBox,
        values: Array3<NUM>,
    ) -> Result<(), Error> {
        let [ni, nj, nk] = extent.sizes();
        if values.dim() != (nk, nj, ni) {
            return Err(Error::BufferSize {
                part,
                expected: extent.volume(),
                found: values.len(),
            });
        }

        self.blocks.insert((part, var), Block { extent, values });
        Ok(())
    }

    /// Fill variable `var` on `part` over `extent` by evaluating `f` at every index.
    pub fn insert_with<F>(&mut self, part: usize, var: usize, extent: IndexBox, mut f: F)
    where
        F: FnMut([i64; 3]) -> NUM,
    {
        let [ni, nj, nk] = extent.sizes();
        let lower = extent.lower_corner();

        let values = Array3::from_shape_fn((nk, nj, ni), |(k, j, i)| {
            f([
                lower[0] + i as i64,
                lower[1] + j as i64,
                lower[2] + k as i64,
            ])
        });

        self.blocks.insert((part, var), Block { extent, values });
    }

    /// builder style [`BoxVector::insert_with`]
    pub fn with_values<F>(mut self, part: usize, var: usize, extent: IndexBox, f: F) -> Self
    where
        F: FnMut([i64; 3]) -> NUM,
    {
        self.insert_with(part, var, extent, f);
        self
    }

    pub fn num_variables(&self) -> usize {
        self.kinds.len()
    }
}

impl<NUM> FieldSource for BoxVector<NUM>
where
    NUM: Numeric,
{
    type Num = NUM;

    fn variable_kind(&self, var: usize) -> Option<VariableKind> {
        self.kinds.get(var).copied()
    }

    fn box_values(&self, part: usize, range: &IndexBox, var: usize) -> Result<Vec<NUM>, Error> {
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let block = self
            .blocks
            .get(&(part, var))
            .filter(|block| block.extent.contains(range))
            .ok_or(Error::MissingValues {
                part,
                var,
                range: *range,
            })?;

        let start = |axis: usize| (range.lower(axis) - block.extent.lower(axis)) as usize;
        let end = |axis: usize| start(axis) + range.size(axis);

        let view = block
            .values
            .slice(s![start(2)..end(2), start(1)..end(1), start(0)..end(0)]);

        Ok(view.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ijk: [i64; 3]) -> f64 {
        (ijk[0] + 10 * ijk[1] + 100 * ijk[2]) as f64
    }

    #[test]
    fn sub_range_is_row_major() {
        let extent = IndexBox::new_3d([-1, -1, -1], [3, 3, 3]);
        let field = BoxVector::new(vec![VariableKind::Cell]).with_values(0, 0, extent, linear);

        let range = IndexBox::new_3d([0, 1, 2], [1, 2, 2]);
        let values = field.box_values(0, &range, 0).unwrap();

        assert_eq!(values, vec![210.0, 211.0, 220.0, 221.0]);
    }

    #[test]
    fn out_of_extent_is_an_error() {
        let extent = IndexBox::new_2d([0, 0], [1, 1]);
        let field = BoxVector::new(vec![VariableKind::Cell]).with_values(0, 0, extent, linear);

        let err = field
            .box_values(0, &IndexBox::new_2d([0, 0], [2, 1]), 0)
            .unwrap_err();
        assert!(matches!(err, Error::MissingValues { part: 0, var: 0, .. }));

        assert!(field.box_values(1, &extent, 0).is_err());
    }

    #[test]
    fn insert_block_checks_shape() {
        let mut field = BoxVector::<f32>::new(vec![VariableKind::Cell]);
        let extent = IndexBox::new_2d([0, 0], [2, 1]);

        assert!(field
            .insert_block(0, 0, extent, Array3::zeros((1, 3, 2)))
            .is_err());
        assert!(field
            .insert_block(0, 0, extent, Array3::zeros((1, 2, 3)))
            .is_ok());
        assert_eq!(field.box_values(0, &extent, 0).unwrap().len(), 6);
    }

    #[test]
    fn variable_kinds() {
        let field = BoxVector::<f64>::new(vec![VariableKind::Cell, VariableKind::XFace]);
        assert_eq!(field.num_variables(), 2);
        assert_eq!(field.variable_kind(1), Some(VariableKind::XFace));
        assert_eq!(field.variable_kind(2), None);
    }
}
