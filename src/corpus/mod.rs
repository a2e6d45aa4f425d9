//! Paper corpus data model
//!
//! This module implements the corpus the engine operates on:
//! - Papers with year/category/tags/familiarity metadata
//! - Directed, typed, strength-weighted relationships between papers
//! - An insertion-ordered in-memory store with endpoint validation

pub mod paper;
pub mod relationship;
pub mod store;
pub mod types;

// Re-export main types
pub use paper::Paper;
pub use relationship::{Relationship, STRENGTH_MAX, STRENGTH_MIN};
pub use store::{CorpusError, CorpusResult, CorpusStore};
pub use types::{Category, FamiliarityLevel, PaperId, RelationshipId, RelationshipType, Topic};
