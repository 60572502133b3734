use serde::{Deserialize, Serialize};
use std::ops::Add;

/// What can stand on an open cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Player,
    Crate,
}

/// The floor kind under an open cell. Fixed for the lifetime of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Floor {
    Tile,
    Destination,
}

/// An occupiable cell: a floor kind plus at most one occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpenCell {
    floor: Floor,
    occupant: Option<Occupant>,
}

impl OpenCell {
    pub fn new(floor: Floor, occupant: Option<Occupant>) -> OpenCell {
        OpenCell { floor, occupant }
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn occupant(&self) -> Option<Occupant> {
        self.occupant
    }

    pub(crate) fn set_occupant(&mut self, occupant: Occupant) {
        self.occupant = Some(occupant);
    }

    /// Clears the occupant and returns what was standing here.
    pub(crate) fn clear_occupant(&mut self) -> Option<Occupant> {
        self.occupant.take()
    }
}

/// A grid position. Walls can never hold an occupant, which the shape of this type enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Open(OpenCell),
}

impl Cell {
    pub const TILE: Cell = Cell::Open(OpenCell { floor: Floor::Tile, occupant: None });
    pub const DESTINATION: Cell = Cell::Open(OpenCell { floor: Floor::Destination, occupant: None });

    pub fn open(floor: Floor, occupant: Option<Occupant>) -> Cell {
        Cell::Open(OpenCell::new(floor, occupant))
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn is_destination_kind(&self) -> bool {
        matches!(self, Cell::Open(open) if open.floor == Floor::Destination)
    }

    pub fn occupant(&self) -> Option<Occupant> {
        match self {
            Cell::Wall => None,
            Cell::Open(open) => open.occupant,
        }
    }

    pub fn has_player(&self) -> bool {
        self.occupant() == Some(Occupant::Player)
    }

    pub fn has_crate(&self) -> bool {
        self.occupant() == Some(Occupant::Crate)
    }

    /// Open and nothing standing on it.
    pub fn is_vacant(&self) -> bool {
        matches!(self, Cell::Open(open) if open.occupant.is_none())
    }

    pub fn as_open(&self) -> Option<&OpenCell> {
        match self {
            Cell::Wall => None,
            Cell::Open(open) => Some(open),
        }
    }

    pub(crate) fn as_open_mut(&mut self) -> Option<&mut OpenCell> {
        match self {
            Cell::Wall => None,
            Cell::Open(open) => Some(open),
        }
    }
}

/// Grid coordinate. `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCrateMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    Wall,
    OutOfBounds,
    CrateBlocked,
}

/// Result of resolving one action against a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked(BlockReason),
}

impl GameUpdate {
    pub fn changed(&self) -> bool {
        matches!(self, GameUpdate::Moved(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelStatus {
    InProgress,
    Won,
    Deadlocked,
}
