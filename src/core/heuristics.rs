use crate::core::map::Map;
use crate::core::models::{LevelStatus, Vec2};

const DIRECTIONS_AROUND: [Vec2; 4] = [
    Vec2 { i: 1, j: 0 },
    Vec2 { i: 0, j: 1 },
    Vec2 { i: -1, j: 0 },
    Vec2 { i: 0, j: -1 },
];

/// Won when every destination holds a crate.
pub fn is_win(map: &Map) -> bool {
    map.crates_on_destinations() == map.destination_count()
}

/// Conservative corner check: true when some crate off a destination is frozen.
/// Crates blocked only by other crates are not detected.
pub fn is_deadlocked(map: &Map) -> bool {
    !is_win(map) && frozen_crates(map).next().is_some()
}

pub fn frozen_crates(map: &Map) -> impl Iterator<Item = Vec2> + '_ {
    map.crate_positions().filter(move |&pos| is_crate_frozen(map, pos))
}

pub fn level_status(map: &Map) -> LevelStatus {
    if is_win(map) {
        LevelStatus::Won
    } else if is_deadlocked(map) {
        LevelStatus::Deadlocked
    } else {
        LevelStatus::InProgress
    }
}

/// a crate is frozen if it is not on a destination and a wall touches it on both axes
fn is_crate_frozen(map: &Map, game_crate: Vec2) -> bool {
    let on_destination = map.get(game_crate).is_some_and(|cell| cell.is_destination_kind());
    if on_destination {
        return false;
    }

    // any 2 consecutive directions pair one vertical with one horizontal neighbour
    let blocked_directions = DIRECTIONS_AROUND.map(|dir| blocks_pushes(map, game_crate + dir));

    (0..4).any(|i| blocked_directions[i] && blocked_directions[(i + 1) % 4])
}

/// The edge of the grid blocks a push exactly like a wall does.
fn blocks_pushes(map: &Map, pos: Vec2) -> bool {
    map.get(pos).is_none_or(|cell| cell.is_wall())
}
