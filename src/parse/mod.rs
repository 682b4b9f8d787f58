//! reading GLVis text artifacts back into memory
//!
//! The readers accept exactly what [`write_mesh`](crate::write_mesh) and
//! [`write_grid_function`](crate::write_grid_function) produce, plus blank lines and `#`
//! comment lines anywhere. They are line based: every keyword, count and table row sits on
//! its own line.

pub(crate) mod error;

pub use error::ParseError;

use error::{BadNumber, UnexpectedEnd, UnexpectedLine, UnknownCollection, UnknownGeometry};

use crate::data::GridFunction;
use crate::mesh::{Element, Geometry, UnstructuredMesh};
use crate::prelude::*;

use std::io::BufRead;
use std::str::FromStr;

pub(crate) const MESH_HEADER: &str = "MFEM mesh v1.0";
pub(crate) const SPACE_HEADER: &str = "FiniteElementSpace";
pub(crate) const COLLECTION_PREFIX: &str = "FiniteElementCollection:";
pub(crate) const VDIM_LINE: &str = "VDim: 1";
pub(crate) const ORDERING_LINE: &str = "Ordering: 0";

/// Parse an MFEM `mesh v1.0` text artifact.
///
/// Boundary elements are read and discarded, the mesh types of this crate carry none.
pub fn read_mesh<R: BufRead>(reader: R) -> Result<UnstructuredMesh, ParseError> {
    let mut lines = Lines::new(reader);

    lines.expect(MESH_HEADER)?;

    lines.expect("dimension")?;
    let (line, ndim) = lines.number::<usize>("the mesh dimension")?;
    let geometry = match ndim {
        2 => Geometry::Square,
        3 => Geometry::Cube,
        _ => {
            return Err(
                UnexpectedLine::new(line, "dimension 2 or 3".into(), ndim.to_string()).into(),
            )
        }
    };

    lines.expect("elements")?;
    let (_, num_elements) = lines.number::<usize>("the element count")?;
    let mut elements = Vec::with_capacity(num_elements);

    for _ in 0..num_elements {
        let (line, row) = lines.numbers::<usize>("an element")?;

        let (attribute, tag, vertices) = match row.as_slice() {
            [attribute, tag, vertices @ ..] => (*attribute as u32, *tag as u32, vertices),
            _ => {
                return Err(UnexpectedLine::new(
                    line,
                    "<attribute> <geometry> <vertices..>".into(),
                    format!("{:?}", row),
                )
                .into())
            }
        };

        let element_geometry =
            Geometry::from_tag(tag).ok_or_else(|| UnknownGeometry::new(line, tag))?;

        if element_geometry != geometry || vertices.len() != geometry.num_vertices() {
            return Err(UnexpectedLine::new(
                line,
                format!(
                    "geometry {} with {} vertices",
                    geometry.tag(),
                    geometry.num_vertices()
                ),
                format!("geometry {} with {} vertices", tag, vertices.len()),
            )
            .into());
        }

        elements.push(Element::new(attribute, geometry, vertices.to_vec()));
    }

    lines.expect("boundary")?;
    let (_, num_boundary) = lines.number::<usize>("the boundary element count")?;
    for _ in 0..num_boundary {
        lines.next_line("a boundary element")?;
    }

    lines.expect("vertices")?;
    let (_, num_vertices) = lines.number::<usize>("the vertex count")?;
    let (line, vdim) = lines.number::<usize>("the vertex dimension")?;
    if vdim != ndim {
        return Err(UnexpectedLine::new(line, ndim.to_string(), vdim.to_string()).into());
    }

    let mut vertices = Vec::with_capacity(num_vertices);
    for _ in 0..num_vertices {
        let (line, row) = lines.numbers::<f64>("a vertex")?;
        if row.len() != ndim {
            return Err(UnexpectedLine::new(
                line,
                format!("{} coordinates", ndim),
                format!("{} coordinates", row.len()),
            )
            .into());
        }

        let mut vertex = [0.0; 3];
        vertex[..ndim].copy_from_slice(&row);
        vertices.push(vertex);
    }

    if let Some((line, text)) = lines.try_next_line()? {
        return Err(UnexpectedLine::new(line, "end of mesh".into(), text).into());
    }

    Ok(UnstructuredMesh::new(ndim, elements, vertices))
}

/// Parse a scalar grid function artifact: the `FiniteElementSpace` header followed by one
/// value per line until the end of the input.
pub fn read_grid_function<R: BufRead>(reader: R) -> Result<GridFunction, ParseError> {
    let mut lines = Lines::new(reader);

    lines.expect(SPACE_HEADER)?;

    let (line, text) = lines.next_line(COLLECTION_PREFIX)?;
    let name = text
        .strip_prefix(COLLECTION_PREFIX)
        .ok_or_else(|| UnexpectedLine::new(line, COLLECTION_PREFIX.into(), text.clone()))?
        .trim();
    let (collection, ndim) =
        FeCollection::from_name(name).ok_or_else(|| UnknownCollection::new(name.to_string()))?;

    lines.expect(VDIM_LINE)?;
    lines.expect(ORDERING_LINE)?;

    let mut values = Vec::new();
    while let Some((line, text)) = lines.try_next_line()? {
        values.push(parse_token(line, &text)?);
    }

    Ok(GridFunction::new(ndim, collection, values))
}

fn parse_token<T: FromStr>(line: usize, token: &str) -> Result<T, BadNumber> {
    token
        .parse()
        .map_err(|_| BadNumber::new(line, token.to_string()))
}

/// non-empty, non-comment lines of the input with their 1-based line numbers
struct Lines<R> {
    inner: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn try_next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        for text in &mut self.inner {
            let text = text?;
            self.line += 1;

            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return Ok(Some((self.line, trimmed.to_string())));
        }

        Ok(None)
    }

    fn next_line(&mut self, expected: &str) -> Result<(usize, String), ParseError> {
        self.try_next_line()?
            .ok_or_else(|| UnexpectedEnd::new(expected.to_string()).into())
    }

    fn expect(&mut self, keyword: &str) -> Result<(), ParseError> {
        let (line, text) = self.next_line(keyword)?;

        if text != keyword {
            return Err(UnexpectedLine::new(line, keyword.to_string(), text).into());
        }

        Ok(())
    }

    fn number<T: FromStr>(&mut self, expected: &str) -> Result<(usize, T), ParseError> {
        let (line, text) = self.next_line(expected)?;
        let value = parse_token(line, &text)?;
        Ok((line, value))
    }

    fn numbers<T: FromStr>(&mut self, expected: &str) -> Result<(usize, Vec<T>), ParseError> {
        let (line, text) = self.next_line(expected)?;
        let values = text
            .split_ascii_whitespace()
            .map(|token| parse_token(line, token))
            .collect::<Result<Vec<T>, _>>()?;
        Ok((line, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_SQUARE: &str = "MFEM mesh v1.0

dimension
2

elements
1
1 3 0 1 2 3

boundary
0

vertices
4
2
0.00000000000000e+00 0.00000000000000e+00
1.00000000000000e+00 0.00000000000000e+00
1.00000000000000e+00 1.00000000000000e+00
0.00000000000000e+00 1.00000000000000e+00
";

    #[test]
    fn single_square() {
        let mesh = read_mesh(SINGLE_SQUARE.as_bytes()).unwrap();

        assert_eq!(mesh.ndim(), 2);
        assert_eq!(mesh.num_elements(), 1);
        assert_eq!(mesh.elements()[0].geometry, Geometry::Square);
        assert_eq!(mesh.elements()[0].vertices, vec![0, 1, 2, 3]);
        assert_eq!(mesh.vertex(2), Some([1.0, 1.0].as_ref()));
    }

    #[test]
    fn comments_and_boundary_are_skipped() {
        let text = SINGLE_SQUARE
            .replace("dimension", "# written by hand\ndimension")
            .replace("boundary\n0", "boundary\n1\n1 1 0 1");

        let mesh = read_mesh(text.as_bytes()).unwrap();
        assert_eq!(mesh.num_vertices(), 4);
    }

    #[test]
    fn truncated_mesh() {
        let text = &SINGLE_SQUARE[..SINGLE_SQUARE.len() - 50];
        let err = read_mesh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd(_)), "{}", err);
    }

    #[test]
    fn wrong_header() {
        let err = read_mesh("MFEM mesh v1.2\n".as_bytes()).unwrap_err();
        match err {
            ParseError::UnexpectedLine(inner) => {
                assert_eq!(inner.line, 1);
                assert_eq!(inner.actual, "MFEM mesh v1.2");
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[test]
    fn unknown_geometry() {
        let text = SINGLE_SQUARE.replace("1 3 0 1 2 3", "1 2 0 1 2");
        let err = read_mesh(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::UnknownGeometry(_)), "{}", err);
    }

    #[test]
    fn bad_coordinate() {
        let text = SINGLE_SQUARE.replace("1.00000000000000e+00 1.00000000000000e+00", "1.0 one");
        let err = read_mesh(text.as_bytes()).unwrap_err();
        match err {
            ParseError::BadNumber(inner) => {
                assert_eq!(inner.token, "one");
                assert_eq!(inner.line, 18);
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[test]
    fn grid_function() {
        let text = "FiniteElementSpace
FiniteElementCollection: Local_H1_3D_P1
VDim: 1
Ordering: 0

1.00000000000000e+00
-2.50000000000000e-01
";
        let gf = read_grid_function(text.as_bytes()).unwrap();
        assert_eq!(gf.ndim(), 3);
        assert_eq!(gf.collection(), FeCollection::H1P1);
        assert_eq!(gf.values(), &[1.0, -0.25]);
    }

    #[test]
    fn unknown_collection() {
        let text = "FiniteElementSpace\nFiniteElementCollection: RT_2D_P1\nVDim: 1\nOrdering: 0\n";
        let err = read_grid_function(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::UnknownCollection(_)), "{}", err);
    }
}
