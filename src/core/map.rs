use crate::core::bounded_grid::BoundedGrid;
use crate::core::errors::{GameError, MapFormatError};
use crate::core::models::{Cell, Occupant, Vec2};

/// Fixed-shape grid of cells. Crate and destination totals never change after construction,
/// and exactly one cell holds the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    grid: BoundedGrid<Cell>,
    player: Vec2,
    crate_count: usize,
    destination_count: usize,
}

impl Map {
    /// Checks the occupant invariants over already-decoded rows. Rows must be rectangular.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Map, MapFormatError> {
        let grid = BoundedGrid::from_rows(rows);

        let mut players = Vec::new();
        let mut crate_count = 0;
        let mut destination_count = 0;
        for (pos, cell) in grid.iter_positions() {
            if cell.is_destination_kind() {
                destination_count += 1;
            }
            match cell.occupant() {
                Some(Occupant::Player) => players.push(pos),
                Some(Occupant::Crate) => crate_count += 1,
                None => {}
            }
        }

        let player = match players.as_slice() {
            [] => return Err(MapFormatError::MissingPlayer),
            [player] => *player,
            _ => return Err(MapFormatError::MultiplePlayers { count: players.len() }),
        };
        if crate_count == 0 {
            return Err(MapFormatError::NoCrates);
        }
        if crate_count != destination_count {
            return Err(MapFormatError::Unbalanced {
                crates: crate_count,
                destinations: destination_count,
            });
        }

        Ok(Map {
            grid,
            player,
            crate_count,
            destination_count,
        })
    }

    pub fn row_count(&self) -> usize {
        self.grid.size().rows as usize
    }

    pub fn col_count(&self) -> usize {
        self.grid.size().cols as usize
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        self.grid.contains(&pos)
    }

    pub fn cell_at(&self, pos: Vec2) -> Result<&Cell, GameError> {
        self.grid.get(&pos).ok_or(GameError::OutOfBounds {
            row: pos.i,
            col: pos.j,
        })
    }

    pub fn get(&self, pos: Vec2) -> Option<&Cell> {
        self.grid.get(&pos)
    }

    pub fn player_position(&self) -> Vec2 {
        self.player
    }

    /// Read-only rows for renderers.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Vec2, &Cell)> {
        self.grid.iter_positions()
    }

    pub fn crate_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.has_crate())
            .map(|(pos, _)| pos)
    }

    pub fn crate_count(&self) -> usize {
        self.crate_count
    }

    pub fn destination_count(&self) -> usize {
        self.destination_count
    }

    pub fn crates_on_destinations(&self) -> usize {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_destination_kind() && cell.has_crate())
            .count()
    }

    /// Moves whatever stands on `from` onto `to`. Nothing is mutated unless both ends are valid.
    pub(crate) fn relocate(&mut self, from: Vec2, to: Vec2) -> Result<Occupant, GameError> {
        if !self.cell_at(to)?.is_vacant() {
            return Err(GameError::InconsistentState(format!(
                "cannot relocate onto ({}, {}), it is a wall or occupied",
                to.i, to.j
            )));
        }
        let occupant = self.cell_at(from)?.occupant().ok_or_else(|| {
            GameError::InconsistentState(format!("nothing to relocate at ({}, {})", from.i, from.j))
        })?;

        if let Some(source) = self.grid[&from].as_open_mut() {
            source.clear_occupant();
        }
        if let Some(target) = self.grid[&to].as_open_mut() {
            target.set_occupant(occupant);
        }
        if occupant == Occupant::Player {
            self.player = to;
        }
        Ok(occupant)
    }
}
