#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::{GameTestState, assert_symbols_match};

    fn assert_level_status(expected: LevelStatus, level: &str) {
        let game = GameTestState::new(level);
        let status = game.session.status();

        assert_eq!(expected, status, "Expected {:?} but found {:?}, for level: {}", expected, status, level);
    }

    #[test]
    fn corner_crate_off_destination_is_deadlocked() {
        let game = GameTestState::new(r#"
####
#@c#
#.C#
####
"#);
        assert!(game.session.is_deadlocked());
        assert!(!game.session.is_win());
        assert_eq!(
            frozen_crates(game.session.map()).collect::<Vec<_>>(),
            vec![Vec2::new(1, 2)]
        );
    }

    #[test]
    fn corner_crate_cannot_be_moved_from_any_side() {
        let mut game = GameTestState::new(r#"
####
#@c#
#.C#
####
"#);
        for direction in Direction::ALL {
            game.try_step(UserAction::Move(direction));
        }
        game.try_step(UserAction::Move(Direction::Right));
        game.try_step(UserAction::Move(Direction::Up));

        assert!(game.session.map().get(Vec2::new(1, 2)).unwrap().has_crate());
        assert!(game.session.is_deadlocked());
    }

    #[test]
    fn free_crates_are_in_progress() {
        assert_level_status(LevelStatus::InProgress, r#"
#####
#@..#
#.c.#
#..C#
#####
"#);
        assert_level_status(LevelStatus::InProgress, r#"
#####
#@cC#
#####
"#);
        assert_level_status(LevelStatus::InProgress, r#"
######
#@Cc.#
#....#
######
"#);
    }

    #[test]
    fn crate_against_single_wall_is_not_frozen() {
        assert_level_status(LevelStatus::InProgress, r#"
#####
#.c.#
#...#
#@.C#
#####
"#);
        assert_level_status(LevelStatus::InProgress, r#"
#####
#...#
#c..#
#@.C#
#####
"#);
    }

    #[test]
    fn frozen_crate_in_each_corner_is_deadlocked() {
        assert_level_status(LevelStatus::Deadlocked, r#"
#####
#c..#
#...#
#@.C#
#####
"#);
        assert_level_status(LevelStatus::Deadlocked, r#"
#####
#..c#
#...#
#@.C#
#####
"#);
        assert_level_status(LevelStatus::Deadlocked, r#"
#####
#C..#
#...#
#@.c#
#####
"#);
        assert_level_status(LevelStatus::Deadlocked, r#"
#####
#..C#
#..@#
#c..#
#####
"#);
    }

    #[test]
    fn crate_on_destination_in_corner_is_not_deadlocked() {
        assert_level_status(LevelStatus::Won, r#"
####
#@$#
#..#
####
"#);
        assert_level_status(LevelStatus::InProgress, r#"
######
#$...#
#..@c#
#...C#
######
"#);
    }

    #[test]
    fn frozen_crate_deadlocks_regardless_of_other_crates() {
        assert_level_status(LevelStatus::Deadlocked, r#"
#######
#@c..C#
#..$..#
#c...C#
#######
"#);
    }

    #[test]
    fn grid_edge_counts_as_wall() {
        assert_level_status(LevelStatus::Deadlocked, r#"
c..
.@.
..C
"#);
    }

    #[test]
    fn crates_blocking_each_other_are_not_detected() {
        assert_level_status(LevelStatus::InProgress, r#"
#######
#.cc..#
#.....#
#@.CC.#
#######
"#);
    }

    #[test]
    fn win_is_not_deadlock() {
        let game = GameTestState::new(r#"
####
#@$#
#.$#
####
"#);
        assert!(game.session.is_win());
        assert!(!game.session.is_deadlocked());
    }

    #[test]
    fn frozen_crates_are_rendered_where_expected() {
        let game = GameTestState::new(r#"
#######
#c...c#
#..@..#
#c.CCC#
#######
"#);
        let frozen = frozen_crates(game.session.map()).collect();

        assert_symbols_match(r#"
_______
_*___*_
_______
_*_____
_______
"#, &game.render_where_present(frozen, '*', '_'));
    }
}
