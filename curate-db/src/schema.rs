//! SQLite schema definitions for the curate store

/// Complete curate schema for SQLite
pub const CURATE_SCHEMA: &str = r#"
-- ============================================
-- Users Table (external identities, read-only here)
-- ============================================
CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL,
    email       TEXT NOT NULL,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_users_username ON users (username);

-- ============================================
-- Lists Table
-- ============================================
CREATE TABLE IF NOT EXISTS lists (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id    INTEGER NOT NULL REFERENCES users (id),
    name        TEXT NOT NULL,
    is_public   INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_lists_owner ON lists (owner_id);

-- ============================================
-- List Contributors Table (many-to-many join)
-- ============================================
-- (list_id, contributor_id) is intentionally NOT unique: duplicate
-- relationships are tolerated at this layer.
CREATE TABLE IF NOT EXISTS list_contributors (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id         INTEGER NOT NULL REFERENCES lists (id),
    contributor_id  INTEGER NOT NULL REFERENCES users (id),
    created_at      TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_contributors_list ON list_contributors (list_id);
"#;
