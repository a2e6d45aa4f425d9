//! View composition
//!
//! Selects which papers and relationships a view mode displays. Overview
//! and timeline share the same selection; focus restricts it to the focus
//! paper's bounded neighborhood. An inconsistent focus selection falls back
//! to the overview selection instead of failing.

use super::filter::filter_relationships;
use super::neighborhood::expand;
use crate::config::{FilterConfig, ViewMode};
use crate::corpus::{CorpusStore, Paper, PaperId, Relationship};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The papers and relationships a view displays
///
/// Both lists preserve corpus insertion order. Papers with no surviving
/// relationship are dropped from the view; the corpus itself is untouched.
#[derive(Debug, Clone)]
pub struct ViewSelection<'a> {
    pub papers: Vec<&'a Paper>,
    pub relationships: Vec<&'a Relationship>,
}

impl<'a> ViewSelection<'a> {
    pub fn paper_ids(&self) -> Vec<PaperId> {
        self.papers.iter().map(|p| p.id).collect()
    }

    pub fn contains_paper(&self, id: PaperId) -> bool {
        self.papers.iter().any(|p| p.id == id)
    }
}

/// Compose the display selection for the configured view mode
pub fn compose<'a>(store: &'a CorpusStore, config: &FilterConfig) -> ViewSelection<'a> {
    let filtered = filter_relationships(store, config);
    let overview = overview_selection(store, filtered);

    match config.view_mode {
        ViewMode::Overview | ViewMode::Timeline => overview,
        ViewMode::Focus => focus_selection(overview, config),
    }
}

/// Papers incident to at least one filtered relationship, plus those
/// relationships
fn overview_selection<'a>(
    store: &'a CorpusStore,
    filtered: Vec<&'a Relationship>,
) -> ViewSelection<'a> {
    let mut incident: FxHashSet<PaperId> = FxHashSet::default();
    for r in &filtered {
        incident.insert(r.source);
        incident.insert(r.target);
    }

    // Iterate the store rather than the set so paper order stays stable
    let papers = store.papers().filter(|p| incident.contains(&p.id)).collect();

    ViewSelection {
        papers,
        relationships: filtered,
    }
}

/// Restrict the overview selection to the focus paper's neighborhood
///
/// A missing or stale focus id is a selection-consistency problem, not an
/// error: the overview selection is returned unchanged.
fn focus_selection<'a>(overview: ViewSelection<'a>, config: &FilterConfig) -> ViewSelection<'a> {
    let focus = match config.focus_paper {
        Some(id) if overview.contains_paper(id) => id,
        Some(id) => {
            debug!("Focus paper {} not in view; falling back to overview", id);
            return overview;
        }
        None => {
            debug!("Focus mode without a focus paper; falling back to overview");
            return overview;
        }
    };

    let visited = expand(focus, &overview.relationships, u32::from(config.focus_depth));

    let papers = overview
        .papers
        .into_iter()
        .filter(|p| visited.contains(&p.id))
        .collect();
    let relationships = overview
        .relationships
        .into_iter()
        .filter(|r| visited.contains(&r.source) && visited.contains(&r.target))
        .collect();

    ViewSelection { papers, relationships }
}
