//! Data access for the inventory catalog.
//!
//! One file per query, all over a shared [`sqlx::SqlitePool`]. Each mutation
//! commits immediately; there is no transaction abstraction exposed to
//! callers.

pub mod init;
pub mod products;
