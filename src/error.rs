//! Error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from vector arithmetic that has no defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("cannot normalize a vector with a non-finite length")]
    NonFinite,
}

/// Which per-corner index of a face is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Vertex,
    Texture,
    Normal,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Vertex => write!(f, "vertex"),
            IndexKind::Texture => write!(f, "texture"),
            IndexKind::Normal => write!(f, "normal"),
        }
    }
}

/// Errors that violate the mesh invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("face {face}: {kind} index {index} is out of range ({len} available)")]
    IndexOutOfRange {
        face: usize,
        kind: IndexKind,
        index: usize,
        len: usize,
    },
}

/// Errors that can occur while reading model text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read model data: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed `{directive}` record: {reason}")]
    Malformed {
        line: usize,
        directive: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors that can occur when loading a model from a file path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Errors from framebuffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("row pitch {pitch} is smaller than the width {width}")]
    PitchTooSmall { width: u32, pitch: u32 },

    #[error("a {width}x{height} framebuffer does not fit in memory")]
    TooLarge { width: u32, height: u32 },
}
