//! Duplicate detection module.
//!
//! Two files are duplicate candidates when their normalized, lowercased names
//! are equal. No content is compared.
//!
//! - [`matcher`]: intersection of two scan results into [`MatchRecord`]s

pub mod matcher;

pub use matcher::{find_matches, MatchError, MatchRecord, MatchReport};
