//! Recording answers and reading them back

use super::Storage;
use crate::error::StorageError;
use crate::prompt::Prompt;
use chrono::{SecondsFormat, Utc};
use log::debug;
use rusqlite::{Transaction, params};

/// A stored answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRow {
    pub id: i64,
    pub element_id: i64,
    pub question_id: i64,
    pub value: i64,
    pub elapsed_ms: i64,
    pub created_at: String,
}

/// Per-question totals for `stats`
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSummary {
    pub question_id: i64,
    pub text: String,
    pub is_binary: bool,
    pub answers: i64,
    pub mean: Option<f64>,
}

/// Deletes the latest answer overall, but only when it is for this pair
const DELETE_LATEST_IF_MATCH: &str = "DELETE FROM answer \
     WHERE element_id = ?1 AND question_id = ?2 \
     AND id = (SELECT id FROM answer ORDER BY created_at DESC, id DESC LIMIT 1)";

const INSERT_ANSWER: &str = "INSERT INTO answer \
     (element_id, question_id, value, elapsed_ms, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5)";

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn delete_latest_if_match(tx: &Transaction<'_>, prompt: &Prompt) -> rusqlite::Result<usize> {
    tx.execute(
        DELETE_LATEST_IF_MATCH,
        params![prompt.element.id, prompt.question.id],
    )
}

fn insert_answer(
    tx: &Transaction<'_>,
    prompt: &Prompt,
    value: i64,
    elapsed_ms: i64,
) -> rusqlite::Result<i64> {
    tx.execute(
        INSERT_ANSWER,
        params![
            prompt.element.id,
            prompt.question.id,
            value,
            elapsed_ms,
            now_timestamp()
        ],
    )?;
    Ok(tx.last_insert_rowid())
}

impl Storage {
    /// Record `value` for `prompt`, timing it from the prompt's start.
    ///
    /// If the most recent answer row is for the same (element, question) pair it
    /// is replaced rather than kept alongside. Both steps run in one
    /// transaction: on any error nothing is written. Returns the new row id.
    pub fn record_answer(&mut self, prompt: &Prompt, value: i64) -> Result<i64, StorageError> {
        self.record_answer_with_elapsed(prompt, value, prompt.elapsed_ms())
    }

    pub fn record_answer_with_elapsed(
        &mut self,
        prompt: &Prompt,
        value: i64,
        elapsed_ms: i64,
    ) -> Result<i64, StorageError> {
        let tx = self.conn_mut().transaction().map_err(StorageError::Write)?;
        let replaced = delete_latest_if_match(&tx, prompt).map_err(StorageError::Write)?;
        let id = insert_answer(&tx, prompt, value, elapsed_ms).map_err(StorageError::Write)?;
        tx.commit().map_err(StorageError::Write)?;

        debug!(
            "answer {} for element {} question {} = {} ({} ms, replaced {})",
            id, prompt.element.id, prompt.question.id, value, elapsed_ms, replaced
        );
        Ok(id)
    }

    pub fn answer_count(&self) -> Result<i64, StorageError> {
        self.conn()
            .query_row("SELECT COUNT(*) FROM answer", [], |row| row.get(0))
            .map_err(|source| StorageError::Load {
                what: "answers",
                source,
            })
    }

    /// All answers for one pair, oldest first
    pub fn answers_for(
        &self,
        element_id: i64,
        question_id: i64,
    ) -> Result<Vec<AnswerRow>, StorageError> {
        let load = |source| StorageError::Load {
            what: "answers",
            source,
        };
        let mut stmt = self
            .conn()
            .prepare(
                "SELECT id, element_id, question_id, value, elapsed_ms, created_at \
                 FROM answer WHERE element_id = ?1 AND question_id = ?2 \
                 ORDER BY created_at, id",
            )
            .map_err(load)?;
        let rows = stmt
            .query_map(params![element_id, question_id], |row| {
                Ok(AnswerRow {
                    id: row.get(0)?,
                    element_id: row.get(1)?,
                    question_id: row.get(2)?,
                    value: row.get(3)?,
                    elapsed_ms: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })
            .map_err(load)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(load)
    }

    /// Answer count and mean value for every active question
    pub fn question_summaries(&self) -> Result<Vec<QuestionSummary>, StorageError> {
        let load = |source| StorageError::Load {
            what: "answer summaries",
            source,
        };
        let mut stmt = self
            .conn()
            .prepare(
                "SELECT q.id, q.text, q.is_binary, COUNT(a.id), AVG(a.value) \
                 FROM question q LEFT JOIN answer a ON a.question_id = q.id \
                 WHERE q.active = 1 \
                 GROUP BY q.id ORDER BY q.id",
            )
            .map_err(load)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(QuestionSummary {
                    question_id: row.get(0)?,
                    text: row.get(1)?,
                    is_binary: row.get(2)?,
                    answers: row.get(3)?,
                    mean: row.get(4)?,
                })
            })
            .map_err(load)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Element, Question};
    use std::time::Instant;

    fn prompt(seq: u64, element_id: i64, question_id: i64) -> Prompt {
        Prompt {
            seq,
            element: Element {
                id: element_id,
                title: String::new(),
                details: String::new(),
            },
            question: Question {
                id: question_id,
                text: String::new(),
                is_binary: false,
            },
            started_at: Instant::now(),
        }
    }

    fn seeded() -> Storage {
        let storage = Storage::open_in_memory().expect("open");
        storage.add_element("one", None).expect("add");
        storage.add_element("two", None).expect("add");
        storage.add_question("q1", false).expect("add");
        storage.add_question("q2", true).expect("add");
        storage
    }

    #[test]
    fn test_consecutive_answers_supersede() {
        let mut storage = seeded();
        let p1 = prompt(0, 1, 1);
        storage.record_answer(&p1, 4).expect("first");
        storage.record_answer(&p1, 2).expect("second");

        let rows = storage.answers_for(1, 1).expect("rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 2);
    }

    #[test]
    fn test_older_history_is_kept() {
        let mut storage = seeded();
        storage.record_answer(&prompt(0, 1, 1), 3).expect("a");
        storage.record_answer(&prompt(1, 2, 1), 5).expect("b");
        // same pair again, but not the latest row
        storage.record_answer(&prompt(2, 1, 1), 1).expect("c");

        let rows = storage.answers_for(1, 1).expect("rows");
        assert_eq!(
            rows.iter().map(|r| r.value).collect::<Vec<_>>(),
            vec![3, 1]
        );
        assert_eq!(storage.answer_count().expect("count"), 3);
    }

    #[test]
    fn test_elapsed_is_stored() {
        let mut storage = seeded();
        let id = storage
            .record_answer_with_elapsed(&prompt(0, 2, 2), 5, 1234)
            .expect("record");
        let rows = storage.answers_for(2, 2).expect("rows");
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].elapsed_ms, 1234);
        assert!(rows[0].created_at.ends_with('Z'));
    }

    #[test]
    fn test_failed_write_leaves_nothing_behind() {
        let mut storage = seeded();
        storage.record_answer(&prompt(0, 1, 1), 4).expect("first");

        // unknown element violates the foreign key
        let bogus = prompt(1, 99, 1);
        let err = storage.record_answer(&bogus, 2).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));

        assert_eq!(storage.answer_count().expect("count"), 1);
        assert_eq!(storage.answers_for(1, 1).expect("rows")[0].value, 4);
    }

    #[test]
    fn test_failed_replacement_keeps_previous_answer() {
        let mut storage = seeded();
        storage.record_answer(&prompt(0, 1, 1), 4).expect("first");
        storage
            .conn()
            .execute_batch(
                "CREATE TRIGGER no_fives BEFORE INSERT ON answer WHEN NEW.value = 5 \
                 BEGIN SELECT RAISE(ABORT, 'no fives'); END;",
            )
            .expect("trigger");

        let err = storage.record_answer(&prompt(0, 1, 1), 5).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        // the delete inside the failed transaction was rolled back
        let rows = storage.answers_for(1, 1).expect("rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 4);
    }

    #[test]
    fn test_question_summaries() {
        let mut storage = seeded();
        storage.record_answer(&prompt(0, 1, 1), 2).expect("a");
        storage.record_answer(&prompt(1, 2, 1), 4).expect("b");

        let summaries = storage.question_summaries().expect("summaries");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].answers, 2);
        assert_eq!(summaries[0].mean, Some(3.0));
        assert_eq!(summaries[1].answers, 0);
        assert_eq!(summaries[1].mean, None);
        assert!(summaries[1].is_binary);
    }

    fn insert_at(storage: &Storage, element_id: i64, question_id: i64, value: i64, at: &str) {
        storage
            .conn()
            .execute(
                "INSERT INTO answer (element_id, question_id, value, elapsed_ms, created_at) \
                 VALUES (?1, ?2, ?3, 0, ?4)",
                params![element_id, question_id, value, at],
            )
            .expect("insert");
    }

    fn values(storage: &Storage, element_id: i64, question_id: i64) -> Vec<i64> {
        storage
            .answers_for(element_id, question_id)
            .expect("rows")
            .iter()
            .map(|r| r.value)
            .collect()
    }

    #[test]
    fn test_same_timestamp_falls_back_to_highest_id() {
        let mut storage = seeded();
        // later than anything record_answer writes, so these rows stay newest
        let at = "2999-01-01T00:00:00.000Z";
        insert_at(&storage, 1, 1, 3, at);
        insert_at(&storage, 2, 1, 4, at);

        // (2, 1) has the higher id, so (1, 1) is not the latest and is kept
        storage.record_answer(&prompt(0, 1, 1), 1).expect("record");
        assert_eq!(values(&storage, 1, 1), vec![1, 3]);

        insert_at(&storage, 2, 2, 5, at);
        insert_at(&storage, 1, 2, 2, at);
        // (1, 2) now wins the tie and is replaced
        storage.record_answer(&prompt(1, 1, 2), 4).expect("record");
        assert_eq!(values(&storage, 1, 2), vec![4]);
        assert_eq!(values(&storage, 2, 2), vec![5]);
    }

    #[test]
    fn test_timestamp_beats_id_order() {
        let mut storage = seeded();
        // far-future row inserted first, so its id is lower
        insert_at(&storage, 1, 1, 3, "2999-01-01T00:00:00.000Z");
        insert_at(&storage, 2, 1, 4, "2020-01-01T00:00:00.000Z");

        storage.record_answer(&prompt(0, 1, 1), 1).expect("record");
        assert_eq!(values(&storage, 1, 1), vec![1]);
        assert_eq!(values(&storage, 2, 1), vec![4]);
    }
}
