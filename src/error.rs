// ==============================================================================
// error.rs — LOAD / MESH / VISUALIZATION ERRORS
// ------------------------------------------------------------------------------
// - TireLoadError: anything wrong with a tire description. Always names the
//   offending field path (e.g. "Contact Material.Coefficient of Friction").
// - MeshLoadError: mesh resource could not be read or parsed.
// - VisualizationError: an attach call failed. Nothing was registered.
// ==============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-load failure for a tire description.
#[derive(Error, Debug)]
pub enum TireLoadError {
    #[error("failed to read tire file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tire document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tire document root must be an object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` must be {expected}")]
    WrongType { field: String, expected: &'static str },

    #[error("unknown tire template `{0}` (expected RigidTire or LugreTire)")]
    UnknownTemplate(String),

    #[error("field `{field}` must be positive, got {value}")]
    NonPositive { field: String, value: f64 },

    #[error("field `{field}` must be non-negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("field `{field}` must lie in [{min}, {max}], got {value}")]
    OutOfRange { field: String, value: f64, min: f64, max: f64 },

    #[error("field `{field}` must be at least 1, got {value}")]
    InvalidDiscCount { field: String, value: i64 },

    #[error("field `{field}` declares {declared} discs but lists {found}")]
    DiscCountMismatch { field: String, declared: usize, found: usize },
}

impl TireLoadError {
    /// Field path the error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            TireLoadError::MissingField(field) => Some(field.as_str()),
            TireLoadError::WrongType { field, .. }
            | TireLoadError::NonPositive { field, .. }
            | TireLoadError::Negative { field, .. }
            | TireLoadError::OutOfRange { field, .. }
            | TireLoadError::InvalidDiscCount { field, .. }
            | TireLoadError::DiscCountMismatch { field, .. } => Some(field.as_str()),
            TireLoadError::UnknownTemplate(_) => Some("Template"),
            TireLoadError::Io { .. } | TireLoadError::Json(_) | TireLoadError::NotAnObject => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum MeshLoadError {
    #[error("failed to read mesh {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Parse { path: PathBuf, line: usize, message: String },

    #[error("mesh {0} contains no triangles")]
    Empty(PathBuf),
}

#[derive(Error, Debug)]
pub enum VisualizationError {
    #[error("failed to load mesh `{name}`: {source}")]
    Mesh {
        name: String,
        #[source]
        source: MeshLoadError,
    },
}
