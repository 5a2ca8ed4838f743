//! Raw key handling
//!
//! Answer keys (`y`, `n`, `1`..`5`) only set a pending choice so the user can
//! change their mind; `Enter` submits it. `Esc` and `Backspace` are submitted
//! straight away. Anything else is ignored and the interpreter keeps waiting.

use super::InputEvent;
use crate::error::InputError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a single key to the event it stands for, if any
pub fn classify(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // raw mode swallows SIGINT, treat Ctrl-C like Esc
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Escape),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'y' => Some(InputEvent::Boolean(true)),
            'n' => Some(InputEvent::Boolean(false)),
            '1'..='5' => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(InputEvent::rating),
            _ => None,
        },
        _ => None,
    }
}

/// Accumulates answer keys until `Enter`
#[derive(Debug, Default)]
pub struct KeyInterpreter {
    pending: Option<InputEvent>,
}

impl KeyInterpreter {
    pub fn new() -> Self {
        KeyInterpreter { pending: None }
    }

    /// Choice currently echoed after the question
    pub fn pending(&self) -> Option<InputEvent> {
        self.pending
    }

    /// Drop the pending choice (the front prompt changed)
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Feed one key event.
    ///
    /// Returns `None` while still composing, otherwise the submission. The
    /// pending choice is consumed on every submission, accepted or not.
    pub fn feed(&mut self, key: KeyEvent) -> Option<Result<InputEvent, InputError>> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Enter {
            return Some(self.pending.take().ok_or(InputError::NothingSelected));
        }

        match classify(&key)? {
            event @ (InputEvent::Escape | InputEvent::Backspace) => {
                self.pending = None;
                Some(Ok(event))
            }
            answer => {
                self.pending = Some(answer);
                None
            }
        }
    }
}
