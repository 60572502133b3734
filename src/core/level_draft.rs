use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::errors::{DraftError, GameError};
use crate::core::level_format::parse;
use crate::core::map::Map;
use crate::core::models::{Cell, Floor, Occupant, Vec2};

pub const MIN_DRAFT_ROWS: usize = 3;
pub const MIN_DRAFT_COLS: usize = 3;
pub const MAX_DRAFT_ROWS: usize = 256;
pub const MAX_DRAFT_COLS: usize = 256;

/// One paintable symbol of the level alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brush {
    Tile,
    PlayerOnTile,
    PlayerOnDest,
    CrateOnTile,
    CrateOnDest,
    Wall,
    Dest,
}

impl Brush {
    pub const ALL: [Brush; 7] = [
        Brush::Tile,
        Brush::PlayerOnTile,
        Brush::PlayerOnDest,
        Brush::CrateOnTile,
        Brush::CrateOnDest,
        Brush::Wall,
        Brush::Dest,
    ];

    pub fn cell(self) -> Cell {
        match self {
            Brush::Tile => Cell::TILE,
            Brush::PlayerOnTile => Cell::open(Floor::Tile, Some(Occupant::Player)),
            Brush::PlayerOnDest => Cell::open(Floor::Destination, Some(Occupant::Player)),
            Brush::CrateOnTile => Cell::open(Floor::Tile, Some(Occupant::Crate)),
            Brush::CrateOnDest => Cell::open(Floor::Destination, Some(Occupant::Crate)),
            Brush::Wall => Cell::Wall,
            Brush::Dest => Cell::DESTINATION,
        }
    }

    pub fn symbol(self) -> char {
        self.cell().symbol()
    }

    pub fn from_symbol(symbol: char) -> Option<Brush> {
        Brush::ALL.into_iter().find(|brush| brush.symbol() == symbol)
    }

    pub fn label(self) -> &'static str {
        match self {
            Brush::Tile => "Tile",
            Brush::PlayerOnTile => "Player on Tile",
            Brush::PlayerOnDest => "Player on Destination",
            Brush::CrateOnTile => "Crate on Tile",
            Brush::CrateOnDest => "Crate on Destination",
            Brush::Wall => "Wall",
            Brush::Dest => "Destination",
        }
    }

    fn is_player(self) -> bool {
        matches!(self, Brush::PlayerOnTile | Brush::PlayerOnDest)
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A level being drawn in an editor. Unlike `Map` it may be incomplete at any moment;
/// `validate` decides when it is good enough to save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelDraft {
    grid: BoundedGrid<Brush>,
    player: Option<Vec2>,
}

impl LevelDraft {
    /// An all-tile draft. Sizes above `MAX_DRAFT_ROWS` x `MAX_DRAFT_COLS` are refused.
    pub fn new(rows: usize, cols: usize) -> Result<LevelDraft, DraftError> {
        if rows > MAX_DRAFT_ROWS || cols > MAX_DRAFT_COLS {
            return Err(DraftError::TooLarge { rows, cols });
        }
        Ok(LevelDraft {
            grid: BoundedGrid::new(BoundsOriginRoot::new(rows as i32, cols as i32), Brush::Tile),
            player: None,
        })
    }

    /// Changes the size and clears everything back to tiles. A refused size keeps the draft as it was.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), DraftError> {
        *self = LevelDraft::new(rows, cols)?;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.grid.size().rows as usize
    }

    pub fn col_count(&self) -> usize {
        self.grid.size().cols as usize
    }

    pub fn brush_at(&self, pos: Vec2) -> Option<Brush> {
        self.grid.get(&pos).copied()
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.player
    }

    /// There is only ever one player: painting a new one restores the floor under the old one.
    pub fn paint(&mut self, pos: Vec2, brush: Brush) -> Result<(), GameError> {
        let current = self.grid.get(&pos).copied().ok_or(GameError::OutOfBounds {
            row: pos.i,
            col: pos.j,
        })?;

        if brush.is_player() {
            if let Some(old) = self.player {
                let left_behind = match self.grid[&old] {
                    Brush::PlayerOnDest => Brush::Dest,
                    _ => Brush::Tile,
                };
                self.grid[&old] = left_behind;
            }
            self.player = Some(pos);
        } else if current.is_player() {
            self.player = None;
        }

        self.grid[&pos] = brush;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let mut crates = 0;
        let mut destinations = 0;
        for row in self.grid.rows() {
            for brush in row {
                match brush {
                    Brush::CrateOnTile => crates += 1,
                    Brush::Dest | Brush::PlayerOnDest => destinations += 1,
                    Brush::CrateOnDest => {
                        crates += 1;
                        destinations += 1;
                    }
                    Brush::Tile | Brush::PlayerOnTile | Brush::Wall => {}
                }
            }
        }

        if crates == 0 || destinations == 0 {
            return Err(DraftError::NoCratesOrDestinations);
        }
        if crates != destinations {
            return Err(DraftError::Unbalanced { crates, destinations });
        }
        if self.player.is_none() {
            return Err(DraftError::NoPlayer);
        }
        let (rows, cols) = (self.row_count(), self.col_count());
        if rows < MIN_DRAFT_ROWS || cols < MIN_DRAFT_COLS {
            return Err(DraftError::TooSmall { rows, cols });
        }
        Ok(())
    }

    pub fn to_level_text(&self) -> Result<String, DraftError> {
        self.validate()?;
        let mut result = format!("{}\n{}\n", self.row_count(), self.col_count());
        for row in self.grid.rows() {
            result.extend(row.iter().map(|brush| brush.symbol()));
            result.push('\n');
        }
        Ok(result)
    }

    pub fn to_map(&self) -> Result<Map, GameError> {
        Ok(parse(&self.to_level_text()?)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let text = self.to_level_text()?;
        std::fs::write(path, text).map_err(|err| GameError::io(path, err))?;
        info!(path = %path.display(), rows = self.row_count(), cols = self.col_count(), "level draft saved");
        Ok(())
    }
}
