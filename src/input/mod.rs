//! Keystroke interpretation
//!
//! - [`InputEvent`]: the semantic event a keystroke (or confirmed choice) stands for
//! - [`keys`]: the [`KeyInterpreter`] that turns raw crossterm key events into
//!   submissions, holding the pending choice in between
//!
//! An answer is only accepted once [`InputEvent::validate`] agrees it fits the
//! active question: yes/no questions take [`InputEvent::Boolean`], rating
//! questions take [`InputEvent::Rating`]. `Escape` and `Backspace` always pass.

pub mod keys;

pub use keys::KeyInterpreter;

use crate::error::InputError;
use std::fmt;

/// Numeric value stored for a "yes"
pub const YES_VALUE: i64 = 5;

/// Numeric value stored for a "no"
pub const NO_VALUE: i64 = 0;

/// Lowest and highest rating on the 5-star scale
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// End the session
    Escape,
    /// Go back one prompt
    Backspace,
    /// Yes/no answer
    Boolean(bool),
    /// 5-star answer, always within [`RATING_RANGE`]
    Rating(u8),
}

impl InputEvent {
    /// Build a rating event, `None` outside 1..=5
    pub fn rating(value: u8) -> Option<Self> {
        RATING_RANGE
            .contains(&value)
            .then_some(InputEvent::Rating(value))
    }

    pub fn as_rating(&self) -> Option<u8> {
        match self {
            InputEvent::Rating(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            InputEvent::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The value written to storage: ratings verbatim, yes = 5, no = 0
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            InputEvent::Rating(value) => Some(i64::from(*value)),
            InputEvent::Boolean(true) => Some(YES_VALUE),
            InputEvent::Boolean(false) => Some(NO_VALUE),
            InputEvent::Escape | InputEvent::Backspace => None,
        }
    }

    /// Check the event against the kind of question being asked
    pub fn validate(self, is_binary: bool) -> Result<Self, InputError> {
        match (self, is_binary) {
            (InputEvent::Escape | InputEvent::Backspace, _) => Ok(self),
            (InputEvent::Boolean(_), true) | (InputEvent::Rating(_), false) => Ok(self),
            (InputEvent::Rating(_), true) => Err(InputError::ExpectedBoolean),
            (InputEvent::Boolean(_), false) => Err(InputError::ExpectedRating),
        }
    }
}

/// Echo text shown after the question
impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Escape => write!(f, "esc"),
            InputEvent::Backspace => write!(f, "back"),
            InputEvent::Boolean(true) => write!(f, "Y"),
            InputEvent::Boolean(false) => write!(f, "N"),
            InputEvent::Rating(value) => write!(f, "{}", value),
        }
    }
}
