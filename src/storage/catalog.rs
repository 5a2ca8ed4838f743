//! Reading and adding elements and questions

use super::Storage;
use crate::error::StorageError;
use crate::prompt::{Catalog, Element, Question};
use log::info;
use rusqlite::params;

impl Storage {
    /// Active elements, in id order
    pub fn load_elements(&self) -> Result<Vec<Element>, StorageError> {
        let load = |source| StorageError::Load {
            what: "elements",
            source,
        };
        let mut stmt = self
            .conn()
            .prepare("SELECT id, title, details FROM element WHERE active = 1 ORDER BY id")
            .map_err(load)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Element {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    details: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })
            .map_err(load)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(load)
    }

    /// Active questions, in id order
    pub fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let load = |source| StorageError::Load {
            what: "questions",
            source,
        };
        let mut stmt = self
            .conn()
            .prepare("SELECT id, text, is_binary FROM question WHERE active = 1 ORDER BY id")
            .map_err(load)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Question {
                    id: row.get(0)?,
                    text: row.get(1)?,
                    is_binary: row.get(2)?,
                })
            })
            .map_err(load)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(load)
    }

    /// Everything a session draws prompts from
    pub fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let elements = self.load_elements()?;
        let questions = self.load_questions()?;
        info!(
            "loaded {} elements and {} questions",
            elements.len(),
            questions.len()
        );
        Catalog::new(elements, questions)
    }

    pub fn add_element(&self, title: &str, details: Option<&str>) -> Result<i64, StorageError> {
        self.conn()
            .execute(
                "INSERT INTO element (title, details) VALUES (?1, ?2)",
                params![title, details],
            )
            .map_err(StorageError::Write)?;
        Ok(self.conn().last_insert_rowid())
    }

    pub fn add_question(&self, text: &str, is_binary: bool) -> Result<i64, StorageError> {
        self.conn()
            .execute(
                "INSERT INTO question (text, is_binary) VALUES (?1, ?2)",
                params![text, is_binary],
            )
            .map_err(StorageError::Write)?;
        Ok(self.conn().last_insert_rowid())
    }

    /// Hide an element from future sessions without touching its answers
    pub fn set_element_active(&self, id: i64, active: bool) -> Result<bool, StorageError> {
        let changed = self
            .conn()
            .execute(
                "UPDATE element SET active = ?1 WHERE id = ?2",
                params![active, id],
            )
            .map_err(StorageError::Write)?;
        Ok(changed > 0)
    }

    pub fn set_question_active(&self, id: i64, active: bool) -> Result<bool, StorageError> {
        let changed = self
            .conn()
            .execute(
                "UPDATE question SET active = ?1 WHERE id = ?2",
                params![active, id],
            )
            .map_err(StorageError::Write)?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_only_active_rows() {
        let storage = Storage::open_in_memory().expect("open");
        let kept = storage.add_element("Kept", Some("details")).expect("add");
        let hidden = storage.add_element("Hidden", None).expect("add");
        storage.set_element_active(hidden, false).expect("hide");

        let elements = storage.load_elements().expect("load");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id, kept);
        assert_eq!(elements[0].details, "details");
    }

    #[test]
    fn test_null_details_load_as_empty() {
        let storage = Storage::open_in_memory().expect("open");
        storage.add_element("Bare", None).expect("add");
        let elements = storage.load_elements().expect("load");
        assert_eq!(elements[0].details, "");
    }

    #[test]
    fn test_question_kind_round_trips() {
        let storage = Storage::open_in_memory().expect("open");
        storage.add_question("Would you?", true).expect("add");
        storage.add_question("How much?", false).expect("add");
        let questions = storage.load_questions().expect("load");
        assert!(questions[0].is_binary);
        assert!(!questions[1].is_binary);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let storage = Storage::open_in_memory().expect("open");
        storage.add_question("Would you?", true).expect("add");
        let err = storage.load_catalog().unwrap_err();
        assert!(matches!(err, StorageError::EmptyCatalog("elements")));
    }

    #[test]
    fn test_set_active_on_missing_row() {
        let storage = Storage::open_in_memory().expect("open");
        assert!(!storage.set_question_active(99, false).expect("update"));
    }
}
