//! Field values in element order.
//!
//! A box grid stores one value per cell (cell-centered variables) or one value per cell corner
//! index (node-centered variables). The mesh written by [`build_mesh`](crate::build_mesh) has
//! one element per cell and private vertices for every element, so the values are copied out
//! box by box and re-ordered to match:
//!
//! * cell-centered: one value per element, in cell order;
//! * node-centered: `cellNV` values per element, in the element's corner order. A node shared
//!   by several cells is repeated once for each of them.
//!
//! Values are requested from the [`FieldSource`] one box at a time and the buffer of a box is
//! dropped before the next box is requested.

use crate::array::BoxValues;
use crate::data::GridFunction;
use crate::grid::{self, IndexBox};
use crate::mesh::{self, Geometry};
use crate::prelude::*;

use num_traits::AsPrimitive;

/// Where the samples of a variable live relative to the cells of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum VariableKind {
    #[display(fmt = "cell")]
    Cell,
    #[display(fmt = "node")]
    Node,
    #[display(fmt = "x-face")]
    XFace,
    #[display(fmt = "y-face")]
    YFace,
    #[display(fmt = "z-face")]
    ZFace,
    #[display(fmt = "x-edge")]
    XEdge,
    #[display(fmt = "y-edge")]
    YEdge,
    #[display(fmt = "z-edge")]
    ZEdge,
}

/// The finite element collection a grid function is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeCollection {
    /// piecewise constant, one value per element (`Local_L2_*_P0`)
    L2P0,
    /// piecewise multilinear, one value per element corner (`Local_H1_*_P1`)
    H1P1,
}

impl FeCollection {
    /// the collection matching a variable kind, failing for anything but cells and nodes
    pub fn for_kind(kind: VariableKind) -> Result<Self, Error> {
        match kind {
            VariableKind::Cell => Ok(FeCollection::L2P0),
            VariableKind::Node => Ok(FeCollection::H1P1),
            kind => Err(Error::UnsupportedFieldKind { kind }),
        }
    }

    /// the name written in the `FiniteElementCollection:` line
    pub fn name(self, ndim: usize) -> String {
        match self {
            FeCollection::L2P0 => format!("Local_L2_{}D_P0", ndim),
            FeCollection::H1P1 => format!("Local_H1_{}D_P1", ndim),
        }
    }

    /// Parse a collection name back into the collection and its dimension
    pub fn from_name(name: &str) -> Option<(Self, usize)> {
        let rest = name.strip_prefix("Local_")?;

        let (collection, rest) = if let Some(rest) = rest.strip_prefix("L2_") {
            (FeCollection::L2P0, rest.strip_suffix("D_P0")?)
        } else if let Some(rest) = rest.strip_prefix("H1_") {
            (FeCollection::H1P1, rest.strip_suffix("D_P1")?)
        } else {
            return None;
        };

        let ndim = rest.parse().ok()?;
        Some((collection, ndim))
    }

    /// values written per element of an `ndim` dimensional box mesh
    pub fn values_per_element(self, geometry: Geometry) -> usize {
        match self {
            FeCollection::L2P0 => 1,
            FeCollection::H1P1 => geometry.num_vertices(),
        }
    }
}

/// Copy variable `var` of `field` out of every box of `grid` in mesh element order.
///
/// Fails with [`Error::UnsupportedFieldKind`] before any value is requested if the variable is
/// neither cell- nor node-centered.
pub fn extract_grid_function<G, F>(grid: &G, field: &F, var: usize) -> Result<GridFunction, Error>
where
    G: StructuredGrid + ?Sized,
    F: FieldSource + ?Sized,
{
    let ndim = grid::validate_dimension(grid)?;
    let geometry = Geometry::for_dim(ndim)?;

    let kind = field
        .variable_kind(var)
        .ok_or(Error::UnknownVariable { var })?;

    let collection = FeCollection::for_kind(kind).map_err(|e| {
        log::error!("unsupported variable type `{}` for variable {}", kind, var);
        e
    })?;

    let mut values =
        Vec::with_capacity(grid.num_cells() * collection.values_per_element(geometry));

    for (part, b) in iter::grid_boxes(grid) {
        extract_box(field, part, b, var, collection, geometry, &mut values)?;
    }

    Ok(GridFunction::new(ndim, collection, values))
}

/// the index range that must be requested to cover every sample of the cells in `b`
pub(crate) fn request_range(b: &IndexBox, collection: FeCollection) -> IndexBox {
    match collection {
        FeCollection::L2P0 => *b,
        FeCollection::H1P1 => b.grow_upper(1),
    }
}

fn extract_box<F>(
    field: &F,
    part: usize,
    b: &IndexBox,
    var: usize,
    collection: FeCollection,
    geometry: Geometry,
    out: &mut Vec<f64>,
) -> Result<(), Error>
where
    F: FieldSource + ?Sized,
{
    if b.is_empty() {
        return Ok(());
    }

    let range = request_range(b, collection);
    log::debug!("requesting `{}` of variable {} on part {}", range, var, part);

    let buffer = field.box_values(part, &range, var)?;
    let found = buffer.len();

    let values = BoxValues::from_buffer(buffer, &range).map_err(|_| Error::BufferSize {
        part,
        expected: range.volume(),
        found,
    })?;

    let lower = b.lower_corner();

    for cell in b.cells() {
        let local = [
            cell[0] - lower[0],
            cell[1] - lower[1],
            cell[2] - lower[2],
        ];

        match collection {
            FeCollection::L2P0 => out.push(values.at(local).as_()),
            FeCollection::H1P1 => {
                for corner in geometry.corners() {
                    out.push(values.at(mesh::offset(local, corner)).as_());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{BoxGrid, Part};

    #[test]
    fn collection_names() {
        assert_eq!(FeCollection::L2P0.name(2), "Local_L2_2D_P0");
        assert_eq!(FeCollection::H1P1.name(3), "Local_H1_3D_P1");
        assert_eq!(
            FeCollection::from_name("Local_H1_2D_P1"),
            Some((FeCollection::H1P1, 2))
        );
        assert_eq!(FeCollection::from_name("L2_2D_P0"), None);
        assert_eq!(FeCollection::from_name("Local_L2_2D_P1"), None);
    }

    #[test]
    fn only_cells_and_nodes_are_supported() {
        assert!(FeCollection::for_kind(VariableKind::Cell).is_ok());
        assert!(FeCollection::for_kind(VariableKind::Node).is_ok());
        for kind in [
            VariableKind::XFace,
            VariableKind::YFace,
            VariableKind::ZFace,
            VariableKind::XEdge,
            VariableKind::YEdge,
            VariableKind::ZEdge,
        ] {
            assert!(matches!(
                FeCollection::for_kind(kind),
                Err(Error::UnsupportedFieldKind { .. })
            ));
        }
    }

    #[test]
    fn node_request_grows_upper_bound() {
        let b = IndexBox::new_3d([1, 2, 3], [4, 5, 6]);
        assert_eq!(request_range(&b, FeCollection::L2P0), b);
        assert_eq!(
            request_range(&b, FeCollection::H1P1),
            IndexBox::new_3d([1, 2, 3], [5, 6, 7])
        );
    }

    #[test]
    fn cell_values_follow_cell_order_in_3d() {
        let b = IndexBox::new_3d([0, 0, 0], [1, 1, 1]);
        let grid = BoxGrid::single_part(3, vec![b]);
        let field = BoxVector::new(vec![VariableKind::Cell])
            .with_values(0, 0, b, |[i, j, k]| (i + 2 * j + 4 * k) as f64);

        let gf = extract_grid_function(&grid, &field, 0).unwrap();

        assert_eq!(gf.collection(), FeCollection::L2P0);
        assert_eq!(gf.values(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn node_values_follow_corner_order() {
        let b = IndexBox::new_2d([0, 0], [0, 0]);
        let grid = BoxGrid::single_part(2, vec![b]);
        let field = BoxVector::new(vec![VariableKind::Node])
            .with_values(0, 0, b.grow_upper(1), |[i, j, _]| (10 * j + i) as f64);

        let gf = extract_grid_function(&grid, &field, 0).unwrap();

        // (0,0) (1,0) (1,1) (0,1)
        assert_eq!(gf.values(), &[0.0, 1.0, 11.0, 10.0]);
    }

    #[test]
    fn shared_nodes_are_repeated() {
        let b = IndexBox::new_2d([0, 0], [1, 0]);
        let grid = BoxGrid::single_part(2, vec![b]);
        let field = BoxVector::new(vec![VariableKind::Node])
            .with_values(0, 0, b.grow_upper(1), |[i, j, _]| (10 * j + i) as f64);

        let gf = extract_grid_function(&grid, &field, 0).unwrap();

        assert_eq!(
            gf.values(),
            &[0.0, 1.0, 11.0, 10.0, 1.0, 2.0, 12.0, 11.0]
        );
    }

    #[test]
    fn f32_fields_are_widened() {
        let b = IndexBox::new_2d([0, 0], [0, 0]);
        let grid = BoxGrid::single_part(2, vec![b]);
        let field = BoxVector::new(vec![VariableKind::Cell]).with_values(0, 0, b, |_| 0.1f32);

        let gf = extract_grid_function(&grid, &field, 0).unwrap();
        let widened: f64 = 0.1f32.as_();
        assert_eq!(gf.values(), &[widened]);
    }

    #[test]
    fn parts_are_visited_in_order() {
        let b = IndexBox::new_2d([0, 0], [0, 0]);
        let grid = BoxGrid::new(2)
            .with_part(Part::new(vec![b]))
            .with_part(Part::new(vec![b]));

        let field = BoxVector::new(vec![VariableKind::Cell])
            .with_values(0, 0, b, |_| 1.0)
            .with_values(1, 0, b, |_| 2.0);

        let gf = extract_grid_function(&grid, &field, 0).unwrap();
        assert_eq!(gf.values(), &[1.0, 2.0]);
    }

    #[test]
    fn face_variables_fail_before_requesting_values() {
        struct Panicking;

        impl FieldSource for Panicking {
            type Num = f64;

            fn variable_kind(&self, _var: usize) -> Option<VariableKind> {
                Some(VariableKind::YFace)
            }

            fn box_values(&self, _: usize, _: &IndexBox, _: usize) -> Result<Vec<f64>, Error> {
                panic!("values must not be requested for unsupported variables")
            }
        }

        let grid = BoxGrid::single_part(2, vec![IndexBox::new_2d([0, 0], [3, 3])]);
        assert!(matches!(
            extract_grid_function(&grid, &Panicking, 0),
            Err(Error::UnsupportedFieldKind {
                kind: VariableKind::YFace
            })
        ));
    }

    #[test]
    fn unknown_variable() {
        let grid = BoxGrid::single_part(2, vec![IndexBox::new_2d([0, 0], [0, 0])]);
        let field = BoxVector::<f64>::new(vec![VariableKind::Cell]);
        assert!(matches!(
            extract_grid_function(&grid, &field, 3),
            Err(Error::UnknownVariable { var: 3 })
        ));
    }

    #[test]
    fn short_buffers_are_rejected() {
        struct Short;

        impl FieldSource for Short {
            type Num = f64;

            fn variable_kind(&self, _var: usize) -> Option<VariableKind> {
                Some(VariableKind::Cell)
            }

            fn box_values(&self, _: usize, range: &IndexBox, _: usize) -> Result<Vec<f64>, Error> {
                Ok(vec![0.0; range.volume() - 1])
            }
        }

        let grid = BoxGrid::single_part(2, vec![IndexBox::new_2d([0, 0], [1, 1])]);
        assert!(matches!(
            extract_grid_function(&grid, &Short, 0),
            Err(Error::BufferSize {
                part: 0,
                expected: 4,
                found: 3
            })
        ));
    }
}
