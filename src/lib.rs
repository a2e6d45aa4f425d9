//! Papergraph
//!
//! A graph processing engine for exploring a small corpus of research
//! papers connected by typed, directed, weighted relationships. The engine
//! sits between the raw corpus and any rendering surface: it filters
//! relationships, extracts bounded-hop focus neighborhoods, composes
//! per-mode views, assigns deterministic layout positions, lists direct
//! connections, and scores second-hop bridge recommendations.
//!
//! The engine is single-threaded and fully synchronous. Every public
//! operation is a pure function over the corpus and the current
//! `FilterConfig`; any change triggers a full recompute, which is bounded
//! by corpus size and cheap at the scale this crate targets. Rendering,
//! interaction handling, and corpus loading are external collaborators.
//!
//! ## Example
//!
//! ```rust
//! use papergraph::config::FilterConfig;
//! use papergraph::corpus::{Category, CorpusStore, Paper, PaperId,
//!     Relationship, RelationshipId, RelationshipType};
//! use papergraph::engine::{recompute, TagTopics};
//!
//! let mut store = CorpusStore::new();
//! store.add_paper(Paper::new(PaperId::new(1), "Attention Is All You Need",
//!     2017, Category::Architecture)).unwrap();
//! store.add_paper(Paper::new(PaperId::new(2), "BERT", 2018,
//!     Category::Training)).unwrap();
//! store.add_relationship(Relationship::new(RelationshipId::new(1),
//!     PaperId::new(2), PaperId::new(1), RelationshipType::BuildsOn, 9)).unwrap();
//!
//! let scene = recompute(&store, &FilterConfig::default(), &TagTopics);
//! assert_eq!(scene.papers.len(), 2);
//! assert_eq!(scene.relationships[0].type_label, "builds on");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod engine;

// Re-export main types for convenience
pub use config::{
    ConfigError, ConfigResult, ConfigStore, FilterConfig, LayerMode, LayoutDirection,
    PinnedConfig, ViewMode,
};
pub use corpus::{
    Category, CorpusError, CorpusResult, CorpusStore, FamiliarityLevel, Paper, PaperId,
    Relationship, RelationshipId, RelationshipType, Topic,
};
pub use engine::{
    build_scene, compose, connections_for, expand, filter_relationships, layout,
    list_connections, recommend, recommend_for, recompute, Connection, Direction, Position,
    Recommendation, Scene, ScenePaper, SceneRelationship, ScoringWeights, TagTopics,
    TopicClassifier, ViewSelection,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
