use std::path::PathBuf;

use crate::core::level_draft::{MAX_DRAFT_COLS, MAX_DRAFT_ROWS};

/// Every reason the level parser rejects a file.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapFormatError {
    #[error("{field} header is not an integer: {value:?}")]
    BadHeader { field: &'static str, value: String },
    #[error("map must have at least one row and one column, found {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("expected {expected} rows but found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("row {row} has length {found}, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
    #[error("unexpected content after the last row at line {line}")]
    TrailingContent { line: usize },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("map has no player")]
    MissingPlayer,
    #[error("map has {count} players")]
    MultiplePlayers { count: usize },
    #[error("map has no crates")]
    NoCrates,
    #[error("map has {crates} crates but {destinations} destinations")]
    Unbalanced { crates: usize, destinations: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("invalid map format: {0}")]
    InvalidMapFormat(#[from] MapFormatError),
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i32, col: i32 },
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no map directory configured")]
    NoMapDirectory,
    #[error("level name {name:?} is not a plain file name in the map directory")]
    InvalidLevelName { name: String },
    #[error("no level is loaded")]
    NoCurrentLevel,
    #[error("level draft cannot be saved: {0}")]
    InvalidDraft(#[from] DraftError),
    #[error("internal consistency error: {0}")]
    InconsistentState(String),
}

impl GameError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> GameError {
        GameError::Io { path: path.into(), source }
    }

    /// Storage problems: the caller may want a different directory rather than a different file.
    pub fn is_io(&self) -> bool {
        matches!(self, GameError::Io { .. } | GameError::NoMapDirectory)
    }

    pub fn is_format(&self) -> bool {
        matches!(self, GameError::InvalidMapFormat(_))
    }
}

/// Reasons a level draft cannot be saved.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("please create at least 1 crate and destination")]
    NoCratesOrDestinations,
    #[error("imbalanced number of crates ({crates}) and destinations ({destinations})")]
    Unbalanced { crates: usize, destinations: usize },
    #[error("please add a player")]
    NoPlayer,
    #[error("minimum size is 3 rows and 3 cols, found {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("maximum size is {} rows and {} cols, found {rows}x{cols}", MAX_DRAFT_ROWS, MAX_DRAFT_COLS)]
    TooLarge { rows: usize, cols: usize },
}
