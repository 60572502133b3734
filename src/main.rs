// Terminal Sokoban over a directory of level files.
// Controls: W/A/S/D or arrow keys to move, R restart, N next level, Enter confirm, Q back/quit.

mod console_interface;
mod models;

use crate::console_interface::{
    ConsoleInput, ConsoleTerminal, cleanup_terminal, handle_input, render_game, render_level_select,
    setup_terminal,
};
use crate::models::{GameRenderState, LevelSelectRenderState, Screen};
use anyhow::Context;
use clap::Parser;
use sokoban_engine::config::EngineConfig;
use sokoban_engine::core::{
    Direction, GameChangeType, GameUpdate, LevelManager, LevelStatus, Map, UserAction,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL_DIRECTORY: &str = "levels";
const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "sokoban", about = "Play Sokoban levels from a directory in the terminal")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the level files, overrides the config
    #[arg(long)]
    levels: Option<PathBuf>,
    /// Level to start on instead of the level list
    level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(levels) = cli.levels {
        config.map_directory = Some(levels);
    }
    if config.map_directory.is_none() {
        config.map_directory = Some(PathBuf::from(DEFAULT_LEVEL_DIRECTORY));
    }
    init_tracing(&config.log_file)?;
    info!(?config, "starting");

    let mut manager = LevelManager::new(&config);
    manager
        .load_level_names_from_disk()
        .context("could not read the level directory")?;

    let mut app = App::new(manager, Duration::from_millis(config.tick_interval_ms));
    if let Some(level) = cli.level {
        app.manager
            .set_level(&level)
            .with_context(|| format!("could not load level {level}"))?;
        app.manager.start_level_timer();
        app.screen = Screen::Playing;
    }

    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal);
    cleanup_terminal()?;

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
    }
    result
}

/// The terminal owns stdout, so logs go to a file.
fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("could not create log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

/// The loaded board, but only while it belongs to the highlighted entry. A failed load
/// leaves the previous session in place, which must not be shown under another name.
fn level_preview(manager: &LevelManager, selected: usize) -> Option<&Map> {
    let highlighted = manager.level_names().get(selected)?;
    manager
        .session()
        .filter(|session| session.name() == highlighted.as_str())
        .map(|session| session.map())
}

struct App {
    manager: LevelManager,
    screen: Screen,
    selected: usize,
    message: Option<String>,
    last_change: Option<GameChangeType>,
    tick_interval: Duration,
}

enum Flow {
    Continue,
    Exit,
}

impl App {
    fn new(manager: LevelManager, tick_interval: Duration) -> App {
        App {
            manager,
            screen: Screen::LevelSelect,
            selected: 0,
            message: None,
            last_change: None,
            tick_interval,
        }
    }

    fn run(&mut self, terminal: &mut ConsoleTerminal) -> anyhow::Result<()> {
        if self.screen == Screen::LevelSelect {
            self.preview_selected();
        }
        let mut last_tick = Instant::now();

        loop {
            if last_tick.elapsed() >= self.tick_interval {
                last_tick = Instant::now();
                self.manager.tick();
            }
            self.render(terminal)?;

            let input = handle_input(INPUT_POLL)?;
            let flow = match self.screen {
                Screen::LevelSelect => self.on_level_select_input(input),
                Screen::Playing => self.on_gameplay_input(input),
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn render(&self, terminal: &mut ConsoleTerminal) -> std::io::Result<()> {
        match (self.screen, self.manager.session(), self.manager.stats()) {
            (Screen::Playing, Some(session), Some(stats)) => render_game(
                terminal,
                &GameRenderState {
                    map: session.map(),
                    stats,
                    elapsed: self.manager.timer().format(),
                    status: session.status(),
                    has_next: self.manager.next_level_name().is_some(),
                    error: self.message.clone(),
                    last_change: self.last_change,
                },
            ),
            _ => {
                let names = self.manager.level_names();
                render_level_select(
                    terminal,
                    &LevelSelectRenderState {
                        directory: self
                            .manager
                            .map_directory()
                            .map(|dir| dir.display().to_string())
                            .unwrap_or_default(),
                        level_names: names,
                        selected: (!names.is_empty()).then_some(self.selected),
                        preview: level_preview(&self.manager, self.selected),
                        message: self.message.clone(),
                    },
                )
            }
        }
    }

    fn on_level_select_input(&mut self, input: ConsoleInput) -> Flow {
        let count = self.manager.level_names().len();
        match input {
            ConsoleInput::Quit => return Flow::Exit,
            ConsoleInput::Move(Direction::Up) if self.selected > 0 => {
                self.selected -= 1;
                self.preview_selected();
            }
            ConsoleInput::Move(Direction::Down) if self.selected + 1 < count => {
                self.selected += 1;
                self.preview_selected();
            }
            ConsoleInput::Rescan => {
                self.message = match self.manager.load_level_names_from_disk() {
                    Ok(names) => Some(format!("found {} levels", names.len())),
                    Err(err) => Some(err.to_string()),
                };
                self.selected = 0;
                self.preview_selected();
            }
            ConsoleInput::Confirm => {
                let previewing = self.manager.current_level_name()
                    == self.manager.level_names().get(self.selected).map(String::as_str);
                if previewing {
                    self.manager.reset_level_timer();
                    self.manager.start_level_timer();
                    self.last_change = None;
                    self.message = None;
                    self.screen = Screen::Playing;
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Loads the highlighted level so its board can be shown before playing.
    fn preview_selected(&mut self) {
        let Some(name) = self.manager.level_names().get(self.selected).cloned() else {
            return;
        };
        self.message = self.manager.set_level(&name).err().map(|err| err.to_string());
    }

    fn on_gameplay_input(&mut self, input: ConsoleInput) -> Flow {
        let status = self
            .manager
            .session()
            .map_or(LevelStatus::InProgress, |session| session.status());
        match (status, input) {
            (LevelStatus::InProgress, ConsoleInput::Move(direction)) => self.make_move(direction),
            (LevelStatus::Won, ConsoleInput::Next) => {
                match self.manager.advance_to_next_level() {
                    Ok(_) => {
                        self.last_change = None;
                        self.message = None;
                    }
                    Err(err) => self.message = Some(err.to_string()),
                }
            }
            (_, ConsoleInput::Restart) if status != LevelStatus::Won => {
                self.last_change = None;
                self.message = self.manager.restart_level().err().map(|err| err.to_string());
            }
            (LevelStatus::InProgress, ConsoleInput::Quit)
            | (LevelStatus::Won | LevelStatus::Deadlocked, ConsoleInput::Confirm | ConsoleInput::Quit) => {
                self.manager.abandon_level();
                self.message = None;
                self.screen = Screen::LevelSelect;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn make_move(&mut self, direction: Direction) {
        let Some(session) = self.manager.session_mut() else {
            return;
        };
        match session.apply(UserAction::Move(direction)) {
            Ok(GameUpdate::Moved(change)) => {
                self.last_change = Some(change);
                self.message = None;
                let status = session.status();
                if status != LevelStatus::InProgress {
                    info!(?status, level = session.name(), "level finished");
                    self.manager.pause_level_timer();
                }
            }
            Ok(GameUpdate::Blocked(reason)) => self.message = Some(format!("Blocked: {:?}", reason)),
            Err(err) => {
                error!(error = %err, "move failed");
                self.message = Some(err.to_string());
            }
        }
    }
}
