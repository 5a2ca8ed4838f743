// Table definitions

/// `created_at` is written by the application (RFC 3339, UTC, milliseconds) so
/// that answers sort by creation time, then id.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS element (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    details TEXT,
    active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS question (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    is_binary INTEGER NOT NULL,
    active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS answer (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    element_id INTEGER NOT NULL,
    question_id INTEGER NOT NULL,
    value INTEGER NOT NULL,
    elapsed_ms INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (element_id) REFERENCES element(id),
    FOREIGN KEY (question_id) REFERENCES question(id)
);

CREATE INDEX IF NOT EXISTS idx_answer_created ON answer(created_at, id);
CREATE INDEX IF NOT EXISTS idx_answer_pair ON answer(element_id, question_id);
"#;
