//! Core type definitions for the paper corpus

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PaperId(pub u64);

impl PaperId {
    pub fn new(id: u64) -> Self {
        PaperId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaperId({})", self.0)
    }
}

impl From<u64> for PaperId {
    fn from(id: u64) -> Self {
        PaperId(id)
    }
}

/// Unique identifier for a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RelationshipId(pub u64);

impl RelationshipId {
    pub fn new(id: u64) -> Self {
        RelationshipId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelationshipId({})", self.0)
    }
}

impl From<u64> for RelationshipId {
    fn from(id: u64) -> Self {
        RelationshipId(id)
    }
}

/// Semantic type of a relationship between two papers
///
/// Closed set: display styling is resolved through the `label`/`color`
/// lookup tables rather than per-type branching at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Target directly extends the source's method
    Extends,
    /// Target builds on the source's results
    BuildsOn,
    /// Source loosely inspired the target
    InspiredBy,
    /// Papers present competing approaches to the same problem
    Contrasts,
    /// Target applies the source's technique in a new setting
    Applies,
    /// Target surveys a line of work including the source
    Surveys,
}

impl RelationshipType {
    /// All relationship types, in declaration order
    pub const ALL: [RelationshipType; 6] = [
        RelationshipType::Extends,
        RelationshipType::BuildsOn,
        RelationshipType::InspiredBy,
        RelationshipType::Contrasts,
        RelationshipType::Applies,
        RelationshipType::Surveys,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipType::Extends => "extends",
            RelationshipType::BuildsOn => "builds on",
            RelationshipType::InspiredBy => "inspired by",
            RelationshipType::Contrasts => "contrasts",
            RelationshipType::Applies => "applies",
            RelationshipType::Surveys => "surveys",
        }
    }

    /// Display color for edges of this type
    pub fn color(&self) -> &'static str {
        match self {
            RelationshipType::Extends => "#e4572e",
            RelationshipType::BuildsOn => "#f3a712",
            RelationshipType::InspiredBy => "#a8c686",
            RelationshipType::Contrasts => "#669bbc",
            RelationshipType::Applies => "#8e7dbe",
            RelationshipType::Surveys => "#8d99ae",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse subject category of a paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Foundation,
    Architecture,
    Training,
    Theory,
    Application,
    Survey,
}

impl Category {
    /// All categories, in declaration order (drives category-layout columns)
    pub const ALL: [Category; 6] = [
        Category::Foundation,
        Category::Architecture,
        Category::Training,
        Category::Theory,
        Category::Application,
        Category::Survey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Foundation => "foundation",
            Category::Architecture => "architecture",
            Category::Training => "training",
            Category::Theory => "theory",
            Category::Application => "application",
            Category::Survey => "survey",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How well the user knows a paper (ordinal, ascending)
///
/// Only consulted when building display output with familiarity emphasis
/// enabled; the algorithmic core ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamiliarityLevel {
    NotStarted,
    Skimmed,
    Read,
    Understood,
    Mastered,
}

impl FamiliarityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FamiliarityLevel::NotStarted => "not started",
            FamiliarityLevel::Skimmed => "skimmed",
            FamiliarityLevel::Read => "read",
            FamiliarityLevel::Understood => "understood",
            FamiliarityLevel::Mastered => "mastered",
        }
    }

    /// Display emphasis scale: unfamiliar papers are dimmed
    pub fn emphasis(&self) -> f32 {
        match self {
            FamiliarityLevel::NotStarted => 0.35,
            FamiliarityLevel::Skimmed => 0.55,
            FamiliarityLevel::Read => 0.75,
            FamiliarityLevel::Understood => 0.9,
            FamiliarityLevel::Mastered => 1.0,
        }
    }
}

/// Layout topic lane (coarser than `Category`, derived per paper)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Topic(String);

impl Topic {
    pub fn new(topic: impl Into<String>) -> Self {
        Topic(topic.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Topic(s.to_string())
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Topic(s)
    }
}
