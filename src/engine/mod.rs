//! Graph processing engine
//!
//! Pure, synchronous functions between the corpus and the rendering
//! surface: filtering, neighborhood expansion, view composition, layout,
//! connection listing, and bridge recommendation. Every operation is total
//! and recomputes from scratch; at corpus scale (tens to low hundreds of
//! papers) full recomputation beats incremental bookkeeping.

pub mod compose;
pub mod connections;
pub mod filter;
pub mod layout;
pub mod neighborhood;
pub mod recommend;
pub mod scene;

pub use compose::{compose, ViewSelection};
pub use connections::{list_connections, Connection, Direction};
pub use filter::filter_relationships;
pub use layout::{layout, Position, TagTopics, TopicClassifier};
pub use neighborhood::expand;
pub use recommend::{recommend, Recommendation, ScoringWeights};
pub use scene::{build_scene, Scene, ScenePaper, SceneRelationship};

use crate::config::FilterConfig;
use crate::corpus::CorpusStore;

/// Run the full pipeline: filter, compose, layout, scene
///
/// This is the one call a recompute trigger (config change, focus change)
/// needs to make.
pub fn recompute(
    store: &CorpusStore,
    config: &FilterConfig,
    classifier: &dyn TopicClassifier,
) -> Scene {
    let selection = compose(store, config);
    let positions = layout(
        &selection.papers,
        config.layer_mode,
        classifier,
        config.effective_direction(),
    );
    build_scene(&selection, &positions, config)
}

/// Side-panel data for the focused paper: direct connections
///
/// Empty when no focus paper is selected.
pub fn connections_for<'a>(store: &'a CorpusStore, config: &FilterConfig) -> Vec<Connection<'a>> {
    let Some(focus) = config.focus_paper else {
        return Vec::new();
    };
    let filtered = filter_relationships(store, config);
    list_connections(focus, &filtered)
}

/// Side-panel data for the focused paper: bridge recommendations
///
/// Bridges cross the filtered relationship set, so the active strength
/// threshold applies to bridging edges too. Callers wanting weak bridges
/// can call `recommend` directly with the unfiltered set.
pub fn recommend_for<'a>(
    store: &'a CorpusStore,
    config: &FilterConfig,
    weights: &ScoringWeights,
    limit: usize,
) -> Vec<Recommendation<'a>> {
    let Some(focus) = config.focus_paper else {
        return Vec::new();
    };
    let filtered = filter_relationships(store, config);
    recommend(focus, store, &filtered, weights, limit)
}
