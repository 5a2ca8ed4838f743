//! Elements, questions and the prompts drawn from them

use crate::error::StorageError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// The thing being rated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: i64,
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub text: String,
    /// Yes/no instead of a 1-5 rating
    pub is_binary: bool,
}

impl Question {
    /// Answer hint shown after the question text
    pub fn answer_hint(&self) -> &'static str {
        if self.is_binary {
            "[Y/n]"
        } else {
            "[1-5]"
        }
    }
}

/// One (element, question) pairing as shown to the user.
///
/// Two prompts compare equal only when they are the same draw: same sequence
/// number, pair and start instant. Drawing the same pair twice gives two
/// different prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub seq: u64,
    pub element: Element,
    pub question: Question,
    pub started_at: Instant,
}

impl Prompt {
    /// Milliseconds since the prompt was drawn
    pub fn elapsed_ms(&self) -> i64 {
        i64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(i64::MAX)
    }

    /// Same (element, question) pair, regardless of draw
    pub fn same_pair(&self, other: &Prompt) -> bool {
        self.element.id == other.element.id && self.question.id == other.question.id
    }
}

/// The active elements and questions, loaded once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    elements: Vec<Element>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Both sets must be non-empty, otherwise nothing can be asked
    pub fn new(elements: Vec<Element>, questions: Vec<Question>) -> Result<Self, StorageError> {
        if elements.is_empty() {
            return Err(StorageError::EmptyCatalog("elements"));
        }
        if questions.is_empty() {
            return Err(StorageError::EmptyCatalog("questions"));
        }
        Ok(Catalog {
            elements,
            questions,
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Draws random prompts from a [`Catalog`]
#[derive(Debug)]
pub struct PromptGenerator {
    catalog: Catalog,
    rng: StdRng,
    next_seq: u64,
}

impl PromptGenerator {
    /// Generator seeded from the current time
    pub fn new(catalog: Catalog) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        PromptGenerator {
            catalog,
            rng,
            next_seq: 0,
        }
    }

    /// Draw a question and an element independently and start the clock
    pub fn ask(&mut self) -> Prompt {
        let questions = &self.catalog.questions;
        let elements = &self.catalog.elements;
        let question = questions[self.rng.gen_range(0..questions.len())].clone();
        let element = elements[self.rng.gen_range(0..elements.len())].clone();

        let seq = self.next_seq;
        self.next_seq += 1;

        Prompt {
            seq,
            element,
            question,
            started_at: Instant::now(),
        }
    }
}
