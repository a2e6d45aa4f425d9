//! Paper entity
//!
//! Papers are loaded by an external collaborator and are immutable as far
//! as the engine is concerned; every field here is plain data.

use super::types::{Category, FamiliarityLevel, PaperId};
use serde::{Deserialize, Serialize};

/// A single research paper in the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Unique identifier for this paper
    pub id: PaperId,

    /// Display title
    pub title: String,

    /// Publication year
    pub year: i32,

    /// Subject category
    pub category: Category,

    /// Free-form tags, in the order the loader supplied them
    #[serde(default)]
    pub tags: Vec<String>,

    /// How well the user knows this paper
    #[serde(default = "default_familiarity")]
    pub familiarity: FamiliarityLevel,

    /// Whether the user starred this paper
    #[serde(default)]
    pub is_favorite: bool,

    /// Display color for the paper node
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_familiarity() -> FamiliarityLevel {
    FamiliarityLevel::NotStarted
}

fn default_color() -> String {
    "#cbd5e1".to_string()
}

impl Paper {
    /// Create a new paper with default familiarity, no tags, default color
    pub fn new(id: PaperId, title: impl Into<String>, year: i32, category: Category) -> Self {
        Paper {
            id,
            title: title.into(),
            year,
            category,
            tags: Vec::new(),
            familiarity: default_familiarity(),
            is_favorite: false,
            color: default_color(),
        }
    }

    /// Builder-style tag assignment
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style familiarity assignment
    pub fn with_familiarity(mut self, familiarity: FamiliarityLevel) -> Self {
        self.familiarity = familiarity;
        self
    }

    /// Builder-style color assignment
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builder-style favorite flag
    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Check whether this paper carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags shared with another paper
    pub fn shared_tags(&self, other: &Paper) -> usize {
        self.tags.iter().filter(|t| other.has_tag(t)).count()
    }
}

impl PartialEq for Paper {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Paper {}

impl std::hash::Hash for Paper {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
