use crate::core::errors::GameError;
use crate::core::heuristics::{is_deadlocked, is_win, level_status};
use crate::core::map::Map;
use crate::core::models::{Direction, GameChangeType, GameUpdate, LevelStatus, UserAction};
use crate::core::update::step;

/// One attempt at one level. Restarting or switching levels builds a new session
/// rather than rewinding this one.
#[derive(Clone, Debug)]
pub struct Session {
    name: String,
    map: Map,
    num_steps: u32,
    num_pushes: u32,
}

impl Session {
    pub fn new(name: impl Into<String>, map: Map) -> Session {
        Session {
            name: name.into(),
            map,
            num_steps: 0,
            num_pushes: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    pub fn num_pushes(&self) -> u32 {
        self.num_pushes
    }

    /// Returns true iff the board changed.
    pub fn make_move(&mut self, direction: Direction) -> Result<bool, GameError> {
        Ok(self.apply(UserAction::Move(direction))?.changed())
    }

    pub fn apply(&mut self, action: UserAction) -> Result<GameUpdate, GameError> {
        let update = step(&mut self.map, action)?;
        if let GameUpdate::Moved(change) = update {
            self.num_steps += 1;
            if change == GameChangeType::PlayerAndCrateMove {
                self.num_pushes += 1;
            }
        }
        Ok(update)
    }

    pub fn is_win(&self) -> bool {
        is_win(&self.map)
    }

    pub fn is_deadlocked(&self) -> bool {
        is_deadlocked(&self.map)
    }

    pub fn status(&self) -> LevelStatus {
        level_status(&self.map)
    }
}
