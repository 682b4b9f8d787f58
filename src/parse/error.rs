use crate::prelude::*;

#[derive(Debug, thiserror::Error, From)]
pub enum ParseError {
    #[error("io error while reading GLVis text: {0}")]
    Io(std::io::Error),
    #[error("{0}")]
    UnexpectedLine(UnexpectedLine),
    #[error("{0}")]
    BadNumber(BadNumber),
    #[error("{0}")]
    UnexpectedEnd(UnexpectedEnd),
    #[error("{0}")]
    UnknownGeometry(UnknownGeometry),
    #[error("{0}")]
    UnknownCollection(UnknownCollection),
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "line {line}: expected `{expected}`, got `{actual}`")]
pub struct UnexpectedLine {
    pub(crate) line: usize,
    pub(crate) expected: String,
    pub(crate) actual: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "line {line}: `{token}` is not a number")]
pub struct BadNumber {
    pub(crate) line: usize,
    pub(crate) token: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "input ended while expecting {expected}")]
pub struct UnexpectedEnd {
    pub(crate) expected: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "line {line}: unknown element geometry {tag}")]
pub struct UnknownGeometry {
    pub(crate) line: usize,
    pub(crate) tag: u32,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "unknown finite element collection `{name}`")]
pub struct UnknownCollection {
    pub(crate) name: String,
}
