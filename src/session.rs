//! The rating session, independent of any terminal
//!
//! A [`Session`] owns the storage handle, the prompt generator and the
//! navigation queue. The front end feeds it one submission at a time and gets a
//! [`Step`] back telling it what happened:
//!
//! ```text
//! Escape          -> Exit             (no further writes)
//! Backspace       -> Back             (queue may restore the previous prompt)
//! valid answer    -> Recorded         (then advance)
//!                 -> RecordFailed     (logged, still advance)
//! invalid answer  -> Rejected         (same prompt, queue untouched)
//! ```

use crate::error::{InputError, StorageError};
use crate::input::InputEvent;
use crate::navigation::NavigationQueue;
use crate::prompt::{Prompt, PromptGenerator};
use crate::storage::Storage;
use log::{debug, info, warn};

/// Outcome of one submission
#[derive(Debug)]
pub enum Step {
    Exit,
    /// `moved` is false when there was nothing to go back to
    Back { moved: bool },
    Recorded,
    RecordFailed(StorageError),
    Rejected(InputError),
}

pub struct Session {
    storage: Storage,
    generator: PromptGenerator,
    queue: NavigationQueue<Prompt>,
    answered: usize,
    finished: bool,
}

impl Session {
    pub fn new(storage: Storage, mut generator: PromptGenerator) -> Self {
        let queue = NavigationQueue::new(generator.ask());
        info!("session started");
        Session {
            storage,
            generator,
            queue,
            answered: 0,
            finished: false,
        }
    }

    /// Prompt on screen
    pub fn current(&self) -> &Prompt {
        self.queue.peek_front()
    }

    /// Answers recorded during this session
    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn queue(&self) -> &NavigationQueue<Prompt> {
        &self.queue
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Apply one submission from the key interpreter
    pub fn handle(&mut self, submission: Result<InputEvent, InputError>) -> Step {
        if self.finished {
            return Step::Exit;
        }

        let event = match submission.and_then(|e| e.validate(self.current().question.is_binary)) {
            Ok(event) => event,
            Err(err) => {
                debug!("rejected input: {}", err);
                return Step::Rejected(err);
            }
        };

        match event {
            InputEvent::Escape => {
                self.finished = true;
                Step::Exit
            }
            InputEvent::Backspace => {
                let moved = self.queue.go_back();
                debug!("go back, moved = {}", moved);
                Step::Back { moved }
            }
            InputEvent::Boolean(_) | InputEvent::Rating(_) => {
                let Some(value) = event.as_numeric() else {
                    return Step::Rejected(InputError::NothingSelected);
                };
                let step = match self.storage.record_answer(self.queue.peek_front(), value) {
                    Ok(_) => {
                        self.answered += 1;
                        Step::Recorded
                    }
                    Err(err) => {
                        warn!("could not record response to prompt: {}", err);
                        Step::RecordFailed(err)
                    }
                };
                self.queue.advance(self.generator.ask());
                step
            }
        }
    }

    /// End the session and close storage
    pub fn close(self) -> Result<(), StorageError> {
        info!("session ended after {} answers", self.answered);
        self.storage.close()
    }
}
