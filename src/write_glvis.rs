use crate::data::GridFunction;
use crate::extract;
use crate::mesh::UnstructuredMesh;
use crate::parse::{COLLECTION_PREFIX, MESH_HEADER, ORDERING_LINE, SPACE_HEADER, VDIM_LINE};
use crate::prelude::*;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Where a process writes one artifact: `prefix.NNNNNN` with `NNNNNN` the zero padded rank
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct OutputTarget {
    pub prefix: PathBuf,
    pub rank: u32,
}

impl OutputTarget {
    /// the rank suffixed file this target writes to
    pub fn path(&self) -> PathBuf {
        utils::rank_suffixed(&self.prefix, self.rank)
    }
}

/// Write a mesh in MFEM `mesh v1.0` text format to a `Writer`
pub fn write_mesh<W: Write>(mut writer: W, mesh: &UnstructuredMesh) -> Result<(), Error> {
    let ndim = mesh.ndim();

    writeln!(writer, "{}\n", MESH_HEADER)?;
    writeln!(writer, "dimension\n{}\n", ndim)?;

    writeln!(writer, "elements\n{}", mesh.num_elements())?;
    for element in mesh.elements() {
        write!(writer, "{} {}", element.attribute, element.geometry.tag())?;
        for vertex in &element.vertices {
            write!(writer, " {}", vertex)?;
        }
        writeln!(writer)?;
    }

    // boundary faces are never generated
    writeln!(writer, "\nboundary\n0\n")?;

    writeln!(writer, "vertices\n{}\n{}", mesh.num_vertices(), ndim)?;
    for vertex in mesh.vertices() {
        utils::write_row(&mut writer, &vertex[..ndim])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write a scalar grid function in MFEM text format to a `Writer`
pub fn write_grid_function<W: Write>(mut writer: W, gf: &GridFunction) -> Result<(), Error> {
    writeln!(writer, "{}", SPACE_HEADER)?;
    writeln!(writer, "{} {}", COLLECTION_PREFIX, gf.collection_name())?;
    writeln!(writer, "{}", VDIM_LINE)?;
    writeln!(writer, "{}\n", ORDERING_LINE)?;

    for value in gf.values() {
        writeln!(writer, "{}", utils::format_scientific(*value))?;
    }

    writer.flush()?;

    Ok(())
}

/// Write a mesh to `target`. Returns the path written.
pub fn print_mesh(target: &OutputTarget, mesh: &UnstructuredMesh) -> Result<PathBuf, Error> {
    let path = target.path();
    let writer = create_output(&path)?;

    write_mesh(writer, mesh)?;

    log::info!(
        "wrote mesh {} ({} elements, {} vertices)",
        path.display(),
        mesh.num_elements(),
        mesh.num_vertices()
    );

    Ok(path)
}

/// Write a grid function to `target`. Returns the path written.
pub fn print_grid_function(target: &OutputTarget, gf: &GridFunction) -> Result<PathBuf, Error> {
    let path = target.path();
    let writer = create_output(&path)?;

    write_grid_function(writer, gf)?;

    log::info!(
        "wrote grid function {} ({}, {} values)",
        path.display(),
        gf.collection_name(),
        gf.values().len()
    );

    Ok(path)
}

/// Build the mesh of `grid` and write it to `target`.
///
/// The mesh is built completely before the file is created, so an invalid grid leaves no
/// file behind.
pub fn print_grid<G>(
    grid: &G,
    target: &OutputTarget,
    placement: &Placement,
) -> Result<PathBuf, Error>
where
    G: StructuredGrid + ?Sized,
{
    let mesh = mesh::build_mesh(grid, placement)?;
    print_mesh(target, &mesh)
}

/// Extract variable `var` of `field` over `grid` and write it to `target`.
///
/// Unsupported variable kinds are reported before the file is created.
pub fn print_vector<G, F>(
    grid: &G,
    field: &F,
    var: usize,
    target: &OutputTarget,
) -> Result<PathBuf, Error>
where
    G: StructuredGrid + ?Sized,
    F: FieldSource + ?Sized,
{
    let gf = extract::extract_grid_function(grid, field, var)?;
    print_grid_function(target, &gf)
}

/// Write both halves of a [`GlvisData`] container. Returns the mesh and solution paths.
pub fn print_glvis(
    data: &GlvisData,
    mesh_target: &OutputTarget,
    solution_target: &OutputTarget,
) -> Result<(PathBuf, PathBuf), Error> {
    let mesh_path = print_mesh(mesh_target, &data.mesh)?;
    let solution_path = print_grid_function(solution_target, &data.solution)?;
    Ok((mesh_path, solution_path))
}

/// Write the auxiliary data file `np <nprocs>` to `path`.
///
/// Only rank 0 writes; every other rank returns `Ok(None)` without touching the file system.
pub fn write_data(path: &Path, rank: u32, nprocs: u32) -> Result<Option<PathBuf>, Error> {
    if rank != 0 {
        return Ok(None);
    }

    let mut writer = create_output(path)?;
    writeln!(writer, "np {}", nprocs)?;
    writer.flush()?;

    log::info!("wrote data file {} for {} processes", path.display(), nprocs);

    Ok(Some(path.to_path_buf()))
}

fn create_output(path: &Path) -> Result<BufWriter<File>, Error> {
    match File::create(path) {
        Ok(file) => Ok(BufWriter::new(file)),
        Err(source) => {
            log::error!("can't open output file {}", path.display());
            Err(Error::OutputUnopenable {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
