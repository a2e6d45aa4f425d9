//! Relationship filtering
//!
//! First stage of every recompute: reduces the full relationship set to the
//! subset the current config allows. Pure; output preserves store order.

use crate::config::FilterConfig;
use crate::corpus::{CorpusStore, Relationship};

/// Apply the config's relationship predicates to the whole corpus
///
/// A relationship survives iff its type is enabled, its strength meets the
/// threshold, and both endpoints resolve to existing papers. A relationship
/// with a dangling endpoint is a data-integrity defect and is dropped
/// silently; it is not an error. An empty enabled-type set yields an empty
/// result.
pub fn filter_relationships<'a>(
    store: &'a CorpusStore,
    config: &FilterConfig,
) -> Vec<&'a Relationship> {
    store
        .relationships()
        .filter(|r| config.enabled_types.contains(&r.relationship_type))
        .filter(|r| r.strength >= config.min_strength)
        .filter(|r| store.contains_paper(r.source) && store.contains_paper(r.target))
        .collect()
}
