//! # Introduction
//!
//! Quick Rater keeps asking one question about one item, picked at random, and
//! stores the answer in a local SQLite database. Answers are typed as single
//! keystrokes: `y`/`n` for yes/no questions, `1`..`5` for ratings, confirmed
//! with `Enter`. `Backspace` goes back one prompt to correct an answer, `Esc`
//! quits.
//!
//! ## Pipeline
//!
//! ```text
//! Storage → Catalog → PromptGenerator → NavigationQueue ─┐
//! Key press → KeyInterpreter → InputEvent → Session ─────┴→ Storage (answer)
//! ```
//!
//! 1. [`storage`]: schema, loading active elements and questions, recording answers.
//! 2. [`prompt`]: the data model and the random [`prompt::PromptGenerator`].
//! 3. [`navigation`]: the prompt queue with a single step of undo.
//! 4. [`input`]: key classification and answer validation.
//! 5. [`session`]: the state machine tying the above together.
//! 6. [`ui`]: ratatui front end; not part of the stable library API.

pub mod error;
pub mod input;
pub mod navigation;
pub mod prompt;
pub mod session;
pub mod storage;
pub mod ui;
