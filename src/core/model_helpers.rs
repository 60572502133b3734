use crate::core::models::{Cell, Floor, Occupant, OpenCell};

impl Cell {
    /// Decodes one level-file symbol.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        let cell = match symbol {
            '.' => Cell::TILE,
            '@' => Cell::open(Floor::Tile, Some(Occupant::Player)),
            '&' => Cell::open(Floor::Destination, Some(Occupant::Player)),
            'c' => Cell::open(Floor::Tile, Some(Occupant::Crate)),
            '$' => Cell::open(Floor::Destination, Some(Occupant::Crate)),
            '#' => Cell::Wall,
            'C' => Cell::DESTINATION,
            _ => return None,
        };
        Some(cell)
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open(open) => open.symbol(),
        }
    }
}

impl OpenCell {
    pub fn symbol(&self) -> char {
        match (self.floor(), self.occupant()) {
            (Floor::Tile, None) => '.',
            (Floor::Tile, Some(Occupant::Player)) => '@',
            (Floor::Tile, Some(Occupant::Crate)) => 'c',
            (Floor::Destination, None) => 'C',
            (Floor::Destination, Some(Occupant::Player)) => '&',
            (Floor::Destination, Some(Occupant::Crate)) => '$',
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_symbol_decodes_to_itself() {
        for symbol in ['.', '@', '&', 'c', '$', '#', 'C'] {
            let cell = Cell::from_symbol(symbol).unwrap();
            assert_eq!(cell.symbol(), symbol);
        }
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        for symbol in [' ', '*', '+', 'x', '\t'] {
            assert_eq!(Cell::from_symbol(symbol), None, "{:?} should not decode", symbol);
        }
    }

    #[test]
    fn test_kind_queries() {
        let crate_on_goal = Cell::from_symbol('$').unwrap();
        assert!(crate_on_goal.is_destination_kind());
        assert!(crate_on_goal.has_crate());
        assert!(!crate_on_goal.is_vacant());

        let wall = Cell::from_symbol('#').unwrap();
        assert!(wall.is_wall());
        assert_eq!(wall.occupant(), None);
        assert!(!wall.is_vacant());

        assert!(Cell::from_symbol('&').unwrap().has_player());
    }
}
