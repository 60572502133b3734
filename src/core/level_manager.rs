use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::core::errors::GameError;
use crate::core::level_format::read_level_file;
use crate::core::models::Direction;
use crate::core::session::Session;
use crate::core::timer::LevelTimer;

/// Snapshot of the numbers a gameplay screen shows. Poll it after each move or tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    pub level_name: String,
    pub num_steps: u32,
    pub num_pushes: u32,
    pub num_restarts: u32,
    pub elapsed_secs: u64,
}

/// Owns the active session and everything needed to pick the next one.
/// Constructed once by the application and handed to whoever needs it.
#[derive(Debug)]
pub struct LevelManager {
    map_directory: Option<PathBuf>,
    level_extension: String,
    level_names: Vec<String>,
    session: Option<Session>,
    num_restarts: u32,
    timer: LevelTimer,
}

impl LevelManager {
    pub fn new(config: &EngineConfig) -> LevelManager {
        LevelManager {
            map_directory: config.map_directory.clone(),
            level_extension: config.level_extension.clone(),
            level_names: Vec::new(),
            session: None,
            num_restarts: 0,
            timer: LevelTimer::default(),
        }
    }

    /// Points at a new directory. The old catalog no longer applies and is cleared.
    pub fn set_map_directory(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        info!(directory = %path.display(), "map directory set");
        self.map_directory = Some(path);
        self.level_names.clear();
    }

    pub fn map_directory(&self) -> Option<&Path> {
        self.map_directory.as_deref()
    }

    /// Rescans the map directory. On failure the previous catalog is kept.
    pub fn load_level_names_from_disk(&mut self) -> Result<&[String], GameError> {
        let directory = self.map_directory.as_deref().ok_or(GameError::NoMapDirectory)?;
        let entries = std::fs::read_dir(directory).map_err(|err| GameError::io(directory, err))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| GameError::io(directory, err))?.path();
            if !path.is_file() || path.extension() != Some(OsStr::new(&self.level_extension)) {
                continue;
            }
            match path.file_stem().and_then(OsStr::to_str) {
                Some(name) => names.push(name.to_string()),
                None => warn!(path = %path.display(), "skipping level file with a non utf-8 name"),
            }
        }
        names.sort();

        info!(directory = %directory.display(), count = names.len(), "level catalog rebuilt");
        self.level_names = names;
        Ok(&self.level_names)
    }

    pub fn level_names(&self) -> &[String] {
        &self.level_names
    }

    /// Resolves a catalog name inside the map directory. Names that would reach outside it are refused.
    pub fn level_path(&self, name: &str) -> Result<PathBuf, GameError> {
        let directory = self.map_directory.as_deref().ok_or(GameError::NoMapDirectory)?;
        if name.is_empty() || Path::new(name).file_name() != Some(OsStr::new(name)) {
            return Err(GameError::InvalidLevelName { name: name.to_string() });
        }
        Ok(directory.join(format!("{}.{}", name, self.level_extension)))
    }

    /// Loads `name` into a fresh session. On any error the current session stays as it was.
    /// A successful load starts the restart count over.
    pub fn set_level(&mut self, name: &str) -> Result<(), GameError> {
        let path = self.level_path(name)?;
        let map = read_level_file(&path).inspect_err(|err| {
            warn!(level = name, error = %err, "level failed to load");
        })?;

        info!(
            level = name,
            rows = map.row_count(),
            cols = map.col_count(),
            crates = map.crate_count(),
            "level loaded"
        );
        self.session = Some(Session::new(name, map));
        self.num_restarts = 0;
        Ok(())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn current_level_name(&self) -> Option<&str> {
        self.session.as_ref().map(Session::name)
    }

    /// The catalog entry after the current level, if the current level is in the catalog
    /// and is not last.
    pub fn next_level_name(&self) -> Option<&str> {
        let current = self.current_level_name()?;
        let index = self.level_names.iter().position(|name| name == current)?;
        self.level_names.get(index + 1).map(String::as_str)
    }

    pub fn make_move(&mut self, direction: Direction) -> Result<bool, GameError> {
        self.session
            .as_mut()
            .ok_or(GameError::NoCurrentLevel)?
            .make_move(direction)
    }

    pub fn num_restarts(&self) -> u32 {
        self.num_restarts
    }

    pub fn increment_num_restarts(&mut self) {
        self.num_restarts += 1;
    }

    pub fn reset_num_restarts(&mut self) {
        self.num_restarts = 0;
    }

    pub fn timer(&self) -> &LevelTimer {
        &self.timer
    }

    pub fn start_level_timer(&mut self) {
        self.timer.start();
    }

    pub fn pause_level_timer(&mut self) {
        self.timer.pause();
    }

    pub fn reset_level_timer(&mut self) {
        self.timer.reset();
    }

    /// Forwarded from the application's once-per-second callback.
    pub fn tick(&mut self) -> bool {
        self.timer.tick()
    }

    /// Reloads the current level from disk, counting one more restart and restarting the clock.
    pub fn restart_level(&mut self) -> Result<(), GameError> {
        let name = self
            .current_level_name()
            .ok_or(GameError::NoCurrentLevel)?
            .to_string();
        let num_restarts = self.num_restarts + 1;

        self.set_level(&name)?;
        self.num_restarts = num_restarts;
        self.timer.reset();
        self.timer.start();
        info!(level = %name, num_restarts, "level restarted");
        Ok(())
    }

    /// Moves on to the next catalog level. `Ok(None)` when the current level is the last one.
    pub fn advance_to_next_level(&mut self) -> Result<Option<String>, GameError> {
        let Some(next) = self.next_level_name().map(str::to_string) else {
            return Ok(None);
        };

        self.set_level(&next)?;
        self.timer.reset();
        self.timer.start();
        Ok(Some(next))
    }

    /// Leaving a level for a menu forgets its clock and restarts.
    pub fn abandon_level(&mut self) {
        self.timer.reset();
        self.num_restarts = 0;
    }

    pub fn stats(&self) -> Option<LevelStats> {
        let session = self.session.as_ref()?;
        Some(LevelStats {
            level_name: session.name().to_string(),
            num_steps: session.num_steps(),
            num_pushes: session.num_pushes(),
            num_restarts: self.num_restarts,
            elapsed_secs: self.timer.elapsed_secs(),
        })
    }
}
