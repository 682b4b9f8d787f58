use crate::extract;
use crate::mesh::UnstructuredMesh;
use crate::prelude::*;

/// Scalar values attached to the elements or element corners of a mesh, the in-memory form of
/// an MFEM grid function file.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFunction {
    ndim: usize,
    collection: FeCollection,
    values: Vec<f64>,
}

impl GridFunction {
    pub fn new(ndim: usize, collection: FeCollection, values: Vec<f64>) -> Self {
        Self {
            ndim,
            collection,
            values,
        }
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn collection(&self) -> FeCollection {
        self.collection
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// the name written in the `FiniteElementCollection:` header line
    pub fn collection_name(&self) -> String {
        self.collection.name(self.ndim)
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
/// Container pairing a mesh with a field on it, ready to be written to disk.
///
/// `GlvisData` contains two objects: the `mesh` describing the geometry and a `solution` holding
/// the values. GLVis reads them as a pair of files (`glvis -m mesh.000000 -g sol.000000`), so
/// both are always produced from the same grid traversal. See [`GlvisData::from_grid`].
pub struct GlvisData<MESH = UnstructuredMesh, D = GridFunction> {
    pub mesh: MESH,
    pub solution: D,
}

impl<MESH, D> GlvisData<MESH, D> {
    /// Construct a container for writing to a file
    pub fn new(mesh: MESH, solution: D) -> GlvisData<MESH, D> {
        GlvisData { mesh, solution }
    }

    /// change the solution stored in this container while leaving the
    /// mesh constant
    pub fn new_solution<T>(self, solution: T) -> GlvisData<MESH, T> {
        GlvisData {
            mesh: self.mesh,
            solution,
        }
    }
}

impl GlvisData {
    /// Build the mesh of `grid` and the values of variable `var` of `field` in matching order.
    ///
    /// Nothing is written; any error (unsupported variable kind, inconsistent grid, ...) is
    /// reported before a file could be created.
    pub fn from_grid<G, F>(
        grid: &G,
        placement: &Placement,
        field: &F,
        var: usize,
    ) -> Result<Self, Error>
    where
        G: StructuredGrid + ?Sized,
        F: FieldSource + ?Sized,
    {
        let solution = extract::extract_grid_function(grid, field, var)?;
        let mesh = mesh::build_mesh(grid, placement)?;

        Ok(Self::new(mesh, solution))
    }
}
