//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Wisdom cards submitted to the wall.
    ///
    /// Rows are never updated except for `votes`, and never deleted.
    submissions (id) {
        /// Primary key: UUID v4 assigned by the service.
        id -> Uuid,
        /// Author's name (1 to 100 characters).
        name -> Varchar,
        /// Author's role (1 to 150 characters).
        role -> Varchar,
        /// Advice text (1 to 300 characters).
        advice -> Varchar,
        /// Hiring trait (1 to 30 characters).
        hiring_trait -> Varchar,
        /// Card colour: `red`, `green` or `blue`.
        color -> Varchar,
        /// Vote counter; only ever incremented.
        votes -> Int8,
        /// Creation timestamp assigned by the service clock.
        created_at -> Timestamptz,
    }
}
