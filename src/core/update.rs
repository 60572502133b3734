use tracing::debug;

use crate::core::errors::GameError;
use crate::core::map::Map;
use crate::core::models::{BlockReason, Cell, GameChangeType, GameUpdate, Occupant, UserAction};

/// Resolves one action against the map in place. Blocked moves leave the map untouched.
pub fn step(map: &mut Map, action: UserAction) -> Result<GameUpdate, GameError> {
    let dir = match action {
        UserAction::Move(d) => d.delta(),
    };

    let player = map.player_position();
    let target = player + dir;
    let Some(dest) = map.get(target).copied() else {
        return Ok(blocked(action, BlockReason::OutOfBounds));
    };

    let change = match dest {
        Cell::Wall => return Ok(blocked(action, BlockReason::Wall)),
        Cell::Open(open) => match open.occupant() {
            None => {
                map.relocate(player, target)?;
                GameChangeType::PlayerMove
            }
            Some(Occupant::Crate) => {
                let beyond = target + dir;
                match map.get(beyond) {
                    None => return Ok(blocked(action, BlockReason::OutOfBounds)),
                    Some(Cell::Wall) => return Ok(blocked(action, BlockReason::Wall)),
                    Some(cell) if !cell.is_vacant() => {
                        return Ok(blocked(action, BlockReason::CrateBlocked));
                    }
                    Some(_) => {}
                }
                map.relocate(target, beyond)?;
                map.relocate(player, target)?;
                GameChangeType::PlayerAndCrateMove
            }
            Some(Occupant::Player) => {
                return Err(GameError::InconsistentState(format!(
                    "second player found at ({}, {})",
                    target.i, target.j
                )));
            }
        },
    };

    debug!(?action, ?change, row = target.i, col = target.j, "move applied");
    Ok(GameUpdate::Moved(change))
}

fn blocked(action: UserAction, reason: BlockReason) -> GameUpdate {
    debug!(?action, ?reason, "move blocked");
    GameUpdate::Blocked(reason)
}
