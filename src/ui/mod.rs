//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: key event loop driving a [`Session`](crate::session::Session)
//! - **[`panes`]**: stateless render functions for the prompt and the status bar
//! - **[`theme`]**: colour palette shared by the panes
//!
//! [`run`] sets the terminal up, runs the [`App`] and always restores the
//! terminal afterwards, also when the loop fails.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

use crate::session::Session;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run an interactive session until the user exits
pub fn run(session: &mut Session) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let mut app = App::new(session);
    let res = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
        .and_then(|mut terminal| {
            let res = app.run(&mut terminal);
            terminal.show_cursor()?;
            res
        });

    // Restore terminal
    let restored = run_all(&mut [
        &mut disable_raw_mode,
        &mut || execute!(stdout, LeaveAlternateScreen),
    ]);

    res.and(restored)
}

/// Run every step even if an earlier one fails, reporting the first error
fn run_all(steps: &mut [&mut dyn FnMut() -> io::Result<()>]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps.iter_mut() {
        let res = step();
        if first.is_ok() {
            first = res;
        }
    }
    first
}
