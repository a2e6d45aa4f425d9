//! In-memory corpus storage
//!
//! Insertion order is visible behavior: the filter and connection-listing
//! contracts promise stable input order, so papers and relationships live
//! in `IndexMap`s rather than plain hash maps.

use super::paper::Paper;
use super::relationship::{Relationship, STRENGTH_MAX, STRENGTH_MIN};
use super::types::{PaperId, RelationshipId};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur while building a corpus
#[derive(Error, Debug, PartialEq)]
pub enum CorpusError {
    #[error("Paper {0} already exists")]
    DuplicatePaper(PaperId),

    #[error("Relationship {0} already exists")]
    DuplicateRelationship(RelationshipId),

    #[error("Invalid relationship: source paper {0} does not exist")]
    InvalidSource(PaperId),

    #[error("Invalid relationship: target paper {0} does not exist")]
    InvalidTarget(PaperId),

    #[error("Relationship strength {0} outside [{STRENGTH_MIN}, {STRENGTH_MAX}]")]
    StrengthOutOfRange(u8),
}

pub type CorpusResult<T> = Result<T, CorpusError>;

/// The full paper corpus: papers plus the relationships between them
///
/// The engine never mutates stored entities; the store only grows while an
/// external loader populates it, then serves read-only lookups.
#[derive(Debug, Default, Clone)]
pub struct CorpusStore {
    papers: IndexMap<PaperId, Paper>,
    relationships: IndexMap<RelationshipId, Relationship>,
}

impl CorpusStore {
    /// Create an empty corpus
    pub fn new() -> Self {
        CorpusStore {
            papers: IndexMap::new(),
            relationships: IndexMap::new(),
        }
    }

    /// Insert a paper; rejects duplicate ids
    pub fn add_paper(&mut self, paper: Paper) -> CorpusResult<PaperId> {
        let id = paper.id;
        if self.papers.contains_key(&id) {
            return Err(CorpusError::DuplicatePaper(id));
        }
        self.papers.insert(id, paper);
        Ok(id)
    }

    /// Insert a relationship; validates endpoints and strength
    pub fn add_relationship(&mut self, relationship: Relationship) -> CorpusResult<RelationshipId> {
        let id = relationship.id;
        if self.relationships.contains_key(&id) {
            return Err(CorpusError::DuplicateRelationship(id));
        }
        if !relationship.strength_in_range() {
            return Err(CorpusError::StrengthOutOfRange(relationship.strength));
        }
        if !self.papers.contains_key(&relationship.source) {
            return Err(CorpusError::InvalidSource(relationship.source));
        }
        if !self.papers.contains_key(&relationship.target) {
            return Err(CorpusError::InvalidTarget(relationship.target));
        }
        self.relationships.insert(id, relationship);
        Ok(id)
    }

    /// Look up a paper by id
    pub fn get_paper(&self, id: PaperId) -> Option<&Paper> {
        self.papers.get(&id)
    }

    /// Look up a relationship by id
    pub fn get_relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    /// Whether a paper id is present
    pub fn contains_paper(&self, id: PaperId) -> bool {
        self.papers.contains_key(&id)
    }

    /// All papers, in insertion order
    pub fn papers(&self) -> impl Iterator<Item = &Paper> {
        self.papers.values()
    }

    /// All relationships, in insertion order
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    /// Number of papers
    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    /// Number of relationships
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Relationships touching a paper at either end, in insertion order
    pub fn incident_relationships(&self, id: PaperId) -> impl Iterator<Item = &Relationship> {
        self.relationships.values().filter(move |r| r.touches(id))
    }
}
