use crate::models::{GameRenderState, LevelSelectRenderState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use sokoban_engine::core::level_format::render_rows;
use sokoban_engine::core::{Direction, LevelStatus};
use std::io;
use std::time::Duration;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn setup_terminal() -> io::Result<ConsoleTerminal> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_level_select(
    terminal: &mut ConsoleTerminal,
    state: &LevelSelectRenderState,
) -> io::Result<()> {
    terminal.draw(|f| {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());
        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[0]);

        let items = state
            .level_names
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect::<Vec<_>>();
        let title = format!("Levels ({})", state.directory);
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(state.selected);
        f.render_stateful_widget(list, columns[0], &mut list_state);

        let preview = state.preview.map(render_rows).unwrap_or_default();
        let preview_paragraph = Paragraph::new(preview)
            .block(Block::default().borders(Borders::ALL).title("Preview"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(preview_paragraph, columns[1]);

        let instructions = "Up/Down to choose, Enter to play, L to rescan directory, Q to quit";
        let instructions = match &state.message {
            Some(message) => format!("{} | {}", instructions, message),
            None => instructions.to_string(),
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, rows[1]);
    })?;
    Ok(())
}

pub fn render_game(terminal: &mut ConsoleTerminal, state: &GameRenderState) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        let game_paragraph = Paragraph::new(render_rows(state.map))
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let stats = &state.stats;
        let info = format!(
            "Level: {} | Time: {} | Steps: {} | Pushes: {} | Restarts: {}",
            stats.level_name, state.elapsed, stats.num_steps, stats.num_pushes, stats.num_restarts
        );
        let info_paragraph = Paragraph::new(info)
            .block(Block::default().borders(Borders::ALL).title("Stats"))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        f.render_widget(info_paragraph, chunks[1]);

        let instructions = match state.status {
            LevelStatus::Won if state.has_next => {
                "Level cleared! N for next level, Enter to return".to_string()
            }
            LevelStatus::Won => "Level cleared! That was the last one, Enter to return".to_string(),
            LevelStatus::Deadlocked => "Deadlocked! R to restart, Enter to return".to_string(),
            LevelStatus::InProgress => {
                "Controls: WASD or Arrow keys to move, R to restart, Q to quit to menu".to_string()
            }
        };
        let instructions = match &state.error {
            Some(err) => format!("{} | Error: {}", instructions, err),
            None => instructions,
        };
        let instructions = match &state.last_change {
            Some(change_type) => format!("{} | Last: {:?}", instructions, change_type),
            None => instructions,
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Move(Direction),
    Confirm,
    Restart,
    Next,
    Rescan,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(poll_timeout: Duration) -> io::Result<ConsoleInput> {
    if event::poll(poll_timeout)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::Next,
                KeyCode::Char('l') | KeyCode::Char('L') => ConsoleInput::Rescan,
                KeyCode::Enter => ConsoleInput::Confirm,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
