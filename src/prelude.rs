//! Common traits and types that are useful for working with `glvis`
#![allow(unused_imports)]

pub use crate::array::{BoxValues, BoxVector};
pub use crate::data::{GlvisData, GridFunction};
pub use crate::grid::{BoxGrid, IndexBox, Part};
pub use crate::traits::{CoordinateMap, FieldSource, FromBuffer, Numeric, StructuredGrid};
pub use crate::transform::{AffineTransform, Placement, UniformSpacing};
pub use crate::{FeCollection, VariableKind};

pub(crate) use crate::Error;
pub(crate) use std::io::Write;

pub(crate) use crate::{iter, mesh, utils};

pub(crate) use derive_more::{Constructor, Deref, Display, From, Into};

pub(crate) use ndarray::Array3;
