use std::path::PathBuf;

/// Errors raised by move application and the search engine.
///
/// Every variant is a caller contract violation; none is recoverable by
/// retrying the same call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} is full or out of range")]
    InvalidColumn { column: usize },

    #[error("no legal move: the game is already over")]
    NoLegalMove,

    #[error("grid is {found_rows}x{found_columns}, engine expects {rows}x{columns}")]
    GeometryMismatch {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },

    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("invalid board geometry {rows}x{columns}")]
    InvalidGeometry { rows: usize, columns: usize },
}

/// Errors produced when building a grid from its external representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell value {value} at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: u8,
    },

    #[error("failed to parse board: {0}")]
    Parse(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
