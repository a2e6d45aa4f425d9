//! Relationship entity
//!
//! Relationships are directed for semantic purposes (A extends B is not
//! B extends A) but traversal treats them as undirected adjacency.

use super::types::{PaperId, RelationshipId, RelationshipType};
use serde::{Deserialize, Serialize};

/// Valid strength range, inclusive
pub const STRENGTH_MIN: u8 = 1;
pub const STRENGTH_MAX: u8 = 10;

/// A directed, typed, weighted edge between two papers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier for this relationship
    pub id: RelationshipId,

    /// Paper the relationship goes FROM
    pub source: PaperId,

    /// Paper the relationship goes TO
    pub target: PaperId,

    /// Semantic type of the relationship
    pub relationship_type: RelationshipType,

    /// Strength in [1, 10] (validated at corpus insertion)
    pub strength: u8,

    /// Optional free-text annotation
    #[serde(default)]
    pub description: Option<String>,
}

impl Relationship {
    /// Create a new directed relationship
    pub fn new(
        id: RelationshipId,
        source: PaperId,
        target: PaperId,
        relationship_type: RelationshipType,
        strength: u8,
    ) -> Self {
        Relationship {
            id,
            source,
            target,
            relationship_type,
            strength,
            description: None,
        }
    }

    /// Builder-style description assignment
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this relationship connects two papers (in either direction)
    pub fn connects(&self, a: PaperId, b: PaperId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Check if this relationship goes FROM a paper
    pub fn starts_from(&self, paper: PaperId) -> bool {
        self.source == paper
    }

    /// Check if this relationship goes TO a paper
    pub fn ends_at(&self, paper: PaperId) -> bool {
        self.target == paper
    }

    /// Check if this relationship touches a paper at either end
    pub fn touches(&self, paper: PaperId) -> bool {
        self.source == paper || self.target == paper
    }

    /// Opposite endpoint, or None if the paper is not an endpoint
    pub fn other_endpoint(&self, paper: PaperId) -> Option<PaperId> {
        if self.source == paper {
            Some(self.target)
        } else if self.target == paper {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether the strength lies in the valid range
    pub fn strength_in_range(&self) -> bool {
        (STRENGTH_MIN..=STRENGTH_MAX).contains(&self.strength)
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Relationship {}

impl std::hash::Hash for Relationship {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
