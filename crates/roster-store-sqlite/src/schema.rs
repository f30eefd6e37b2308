//! SQL schema for the roster SQLite store.

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    age     INTEGER NOT NULL,
    country TEXT NOT NULL,
    degree  TEXT,
    status  TEXT,
    site    TEXT
);
";

/// Ids are never reused: `AUTOINCREMENT` always allocates above the largest
/// id ever handed out.
pub const INSERT_USER: &str = "
INSERT INTO users (name, age, country, degree, status, site)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";
