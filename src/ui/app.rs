//! Main TUI application state and logic

use crate::input::KeyInterpreter;
use crate::session::{Session, Step};
use crate::ui::panes::{MessageKind, render_prompt_pane, render_status_bar};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;

/// The main application state
pub struct App<'a> {
    /// The session being driven
    session: &'a mut Session,

    /// Turns key presses into submissions
    keys: KeyInterpreter,

    /// Status message to display
    pub status_message: String,
    pub message_kind: MessageKind,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        App {
            session,
            keys: KeyInterpreter::new(),
            status_message: String::from("Ready!"),
            message_kind: MessageKind::Info,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        self.session
    }

    /// Run the TUI application. Blocks on each key press.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key);
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        render_prompt_pane(
            frame,
            chunks[0],
            self.session.current(),
            self.keys.pending(),
        );

        render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.message_kind,
            self.session.answered(),
        );
    }

    /// Handle keyboard events; only presses reach the session
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(submission) = self.keys.feed(key) else {
            return;
        };

        match self.session.handle(submission) {
            Step::Exit => {
                self.should_quit = true;
            }
            Step::Back { moved: true } => {
                self.keys.clear();
                self.set_status("Back to the previous prompt", MessageKind::Info);
            }
            Step::Back { moved: false } => {
                self.set_status("Can't go back any further", MessageKind::Info);
            }
            Step::Recorded => {
                self.keys.clear();
                self.set_status("Saved", MessageKind::Success);
            }
            Step::RecordFailed(err) => {
                self.keys.clear();
                self.set_status(
                    format!("could not record response to prompt: {}", err),
                    MessageKind::Error,
                );
            }
            Step::Rejected(err) => {
                self.set_status(format!("could not read input: {}", err), MessageKind::Error);
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>, kind: MessageKind) {
        self.status_message = message.into();
        self.message_kind = kind;
    }
}
