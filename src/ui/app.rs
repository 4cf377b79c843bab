use crate::game::{BlockReason, GameOutcome, GameTimeline, PlayOutcome, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    timeline: GameTimeline<Player>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(timeline: GameTimeline<Player>) -> Self {
        let selected_column = timeline.current_board().width() / 2;
        App {
            timeline,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn timeline(&self) -> &GameTimeline<Player> {
        &self.timeline
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.timeline.current_board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('u') => {
                if !self.timeline.undo() {
                    self.message = Some("Nothing to undo.".to_string());
                }
            }
            KeyCode::Char('y') => {
                if !self.timeline.redo() {
                    self.message = Some("Nothing to redo.".to_string());
                }
            }
            KeyCode::Home => {
                self.jump(0);
            }
            KeyCode::End => {
                self.jump(self.timeline.history_len() - 1);
            }
            KeyCode::Char('r') => {
                self.timeline.restart();
                self.message = Some("New game started!".to_string());
                info!("game restarted from the terminal");
            }
            _ => {}
        }
    }

    fn jump(&mut self, index: usize) {
        if let Err(err) = self.timeline.jump_to(index) {
            self.message = Some(err.to_string());
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.timeline.play(self.selected_column) {
            Ok(PlayOutcome::Placed { .. }) => {
                // Check if game just ended
                if let Some(outcome) = self.timeline.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Ok(PlayOutcome::Blocked(BlockReason::ColumnFull)) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(PlayOutcome::Blocked(BlockReason::GameDecided)) => {
                self.message = Some("Game over! Press 'u' to undo or 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.timeline, self.selected_column, &self.message);
    }
}
