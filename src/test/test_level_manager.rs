#[cfg(test)]
mod test {
    use crate::config::EngineConfig;
    use crate::core::*;
    use crate::test::test_util::{fixture_manager, fixtures_dir, scratch_dir};

    fn catalog(manager: &LevelManager) -> Vec<&str> {
        manager.level_names().iter().map(String::as_str).collect()
    }

    #[test]
    fn catalog_lists_level_files_in_name_order() {
        let mut manager = fixture_manager();
        assert!(manager.level_names().is_empty());

        manager.load_level_names_from_disk().unwrap();

        assert_eq!(
            catalog(&manager),
            vec!["00_short", "01_corridor", "02_corner", "03_two_crates"]
        );
    }

    #[test]
    fn catalog_honours_configured_extension() {
        let mut manager = LevelManager::new(&EngineConfig {
            map_directory: Some(fixtures_dir()),
            level_extension: "lvl".to_string(),
            ..EngineConfig::default()
        });

        manager.load_level_names_from_disk().unwrap();
        manager.set_level("notes").unwrap();

        assert_eq!(catalog(&manager), vec!["notes"]);
        assert_eq!(manager.session().unwrap().map().crate_count(), 2);
    }

    #[test]
    fn set_level_starts_a_playable_session() {
        let mut manager = fixture_manager();
        manager.set_level("01_corridor").unwrap();

        assert_eq!(manager.current_level_name(), Some("01_corridor"));
        assert!(manager.make_move(Direction::Right).unwrap());

        let session = manager.session().unwrap();
        assert!(session.is_win());
        assert_eq!(session.num_pushes(), 1);
    }

    #[test]
    fn invalid_level_keeps_previous_session() {
        let mut manager = fixture_manager();
        manager.set_level("02_corner").unwrap();
        assert!(manager.make_move(Direction::Down).unwrap());

        let err = manager.set_level("00_short").unwrap_err();

        assert!(err.is_format());
        assert!(matches!(
            err,
            GameError::InvalidMapFormat(MapFormatError::MissingRows { expected: 3, found: 2 })
        ));
        let session = manager.session().unwrap();
        assert_eq!(session.name(), "02_corner");
        assert_eq!(session.num_steps(), 1);
        assert_eq!(session.map().player_position(), Vec2::new(2, 1));
    }

    #[test]
    fn missing_level_is_io_error() {
        let mut manager = fixture_manager();

        let err = manager.set_level("99_missing").unwrap_err();

        assert!(err.is_io());
        assert!(manager.session().is_none());
    }

    #[test]
    fn names_outside_the_directory_are_refused() {
        let mut manager = fixture_manager();
        manager.set_level("01_corridor").unwrap();

        for name in ["../levels/01_first_push", "sub/01_corridor", "..", "/tmp/01_corridor", ""] {
            assert!(
                matches!(manager.set_level(name), Err(GameError::InvalidLevelName { .. })),
                "{:?} should be refused",
                name
            );
        }
        assert_eq!(manager.current_level_name(), Some("01_corridor"));
    }

    #[test]
    fn next_level_follows_catalog_order() {
        let mut manager = fixture_manager();
        manager.load_level_names_from_disk().unwrap();
        assert_eq!(manager.next_level_name(), None);

        manager.set_level("01_corridor").unwrap();
        assert_eq!(manager.next_level_name(), Some("02_corner"));

        manager.set_level("02_corner").unwrap();
        assert_eq!(manager.next_level_name(), Some("03_two_crates"));

        manager.set_level("03_two_crates").unwrap();
        assert_eq!(manager.next_level_name(), None);
    }

    #[test]
    fn next_level_is_none_outside_catalog() {
        let mut manager = fixture_manager();
        manager.set_level("01_corridor").unwrap();

        assert_eq!(manager.next_level_name(), None);
    }

    #[test]
    fn restart_reloads_board_and_keeps_restart_count() {
        let mut manager = fixture_manager();
        manager.set_level("03_two_crates").unwrap();
        manager.make_move(Direction::Right).unwrap();

        manager.restart_level().unwrap();
        manager.restart_level().unwrap();

        assert_eq!(manager.num_restarts(), 2);
        let session = manager.session().unwrap();
        assert_eq!(session.num_steps(), 0);
        assert_eq!(session.num_pushes(), 0);
        assert_eq!(session.map().player_position(), Vec2::new(3, 2));
        assert!(manager.timer().is_running());
        assert_eq!(manager.timer().elapsed_secs(), 0);

        manager.set_level("01_corridor").unwrap();
        assert_eq!(manager.num_restarts(), 0);
    }

    #[test]
    fn failed_restart_changes_nothing() {
        let dir = scratch_dir("failed-restart");
        std::fs::write(dir.join("only.txt"), "3\n5\n#####\n#@.cC\n#####\n").unwrap();
        let mut manager = LevelManager::new(&EngineConfig {
            map_directory: Some(dir.clone()),
            ..EngineConfig::default()
        });
        manager.set_level("only").unwrap();
        manager.make_move(Direction::Right).unwrap();
        manager.increment_num_restarts();

        std::fs::write(dir.join("only.txt"), "3\n5\n#####\n").unwrap();
        assert!(manager.restart_level().unwrap_err().is_format());

        assert_eq!(manager.num_restarts(), 1);
        assert_eq!(manager.session().unwrap().num_steps(), 1);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn advance_moves_to_next_level_and_resets_counters() {
        let mut manager = fixture_manager();
        manager.load_level_names_from_disk().unwrap();
        manager.set_level("02_corner").unwrap();
        manager.increment_num_restarts();

        let next = manager.advance_to_next_level().unwrap();

        assert_eq!(next.as_deref(), Some("03_two_crates"));
        assert_eq!(manager.current_level_name(), Some("03_two_crates"));
        assert_eq!(manager.num_restarts(), 0);
        assert!(manager.timer().is_running());

        assert_eq!(manager.advance_to_next_level().unwrap(), None);
        assert_eq!(manager.current_level_name(), Some("03_two_crates"));
    }

    #[test]
    fn timer_and_stats_track_the_level() {
        let mut manager = fixture_manager();
        assert_eq!(manager.stats(), None);
        manager.set_level("01_corridor").unwrap();

        assert!(!manager.tick());
        manager.start_level_timer();
        manager.tick();
        manager.tick();
        manager.tick();
        manager.make_move(Direction::Right).unwrap();
        manager.increment_num_restarts();

        assert_eq!(
            manager.stats(),
            Some(LevelStats {
                level_name: "01_corridor".to_string(),
                num_steps: 1,
                num_pushes: 1,
                num_restarts: 1,
                elapsed_secs: 3,
            })
        );

        manager.abandon_level();
        assert_eq!(manager.timer().elapsed_secs(), 0);
        assert!(!manager.timer().is_running());
        assert_eq!(manager.num_restarts(), 0);
    }

    #[test]
    fn no_directory_is_reported() {
        let mut manager = LevelManager::new(&EngineConfig::default());

        assert!(matches!(
            manager.load_level_names_from_disk(),
            Err(GameError::NoMapDirectory)
        ));
        assert!(matches!(manager.set_level("01_corridor"), Err(GameError::NoMapDirectory)));
        assert!(matches!(
            manager.make_move(Direction::Up),
            Err(GameError::NoCurrentLevel)
        ));
        assert!(matches!(manager.restart_level(), Err(GameError::NoCurrentLevel)));
    }

    #[test]
    fn changing_directory_clears_catalog() {
        let mut manager = fixture_manager();
        manager.load_level_names_from_disk().unwrap();

        manager.set_map_directory(fixtures_dir().join("does_not_exist"));

        assert!(manager.level_names().is_empty());
        assert!(manager.load_level_names_from_disk().unwrap_err().is_io());
    }
}
