mod bounded_grid;
mod bounds;
mod errors;
mod heuristics;
pub mod level_draft;
pub mod level_format;
mod level_manager;
mod map;
mod model_helpers;
mod models;
mod session;
mod timer;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use errors::{DraftError, GameError, MapFormatError};
pub use heuristics::{frozen_crates, is_deadlocked, is_win, level_status};
pub use level_draft::{Brush, LevelDraft};
pub use level_manager::{LevelManager, LevelStats};
pub use map::Map;
pub use models::{
    BlockReason, Cell, Direction, Floor, GameChangeType, GameUpdate, LevelStatus, Occupant,
    OpenCell, UserAction, Vec2,
};
pub use session::Session;
pub use timer::LevelTimer;
pub use update::step;
