//! Domain types shared across the island tracker workspace.
//!
//! Holds the error taxonomy, id/timestamp aliases, island type constants,
//! input validation helpers, and the typed badge/challenge rules.

pub mod error;
pub mod island_types;
pub mod rules;
pub mod types;
pub mod validate;
