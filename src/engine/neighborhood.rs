//! Depth-bounded neighborhood expansion
//!
//! Backs focus mode: a frontier BFS over the filtered relationships,
//! treating every relationship as an undirected edge. Direction lives on
//! the `Relationship` entity; adjacency here deliberately forgets it.

use crate::corpus::{PaperId, Relationship};
use rustc_hash::{FxHashMap, FxHashSet};

/// Undirected adjacency over a relationship slice
fn build_adjacency(relationships: &[&Relationship]) -> FxHashMap<PaperId, Vec<PaperId>> {
    let mut adjacency: FxHashMap<PaperId, Vec<PaperId>> = FxHashMap::default();
    for r in relationships {
        adjacency.entry(r.source).or_default().push(r.target);
        adjacency.entry(r.target).or_default().push(r.source);
    }
    adjacency
}

/// All papers reachable from `root` within `depth` hops
///
/// The result always contains `root`, grows monotonically with `depth`,
/// and is independent of relationship direction. A root that appears in no
/// relationship expands to itself alone. The surrounding system only asks
/// for depths 1 and 2, but any depth works; expansion stops early once a
/// level discovers nothing new.
pub fn expand(root: PaperId, relationships: &[&Relationship], depth: u32) -> FxHashSet<PaperId> {
    let adjacency = build_adjacency(relationships);

    let mut visited = FxHashSet::default();
    visited.insert(root);
    let mut frontier = vec![root];

    for _ in 0..depth {
        let mut next = Vec::new();
        for node in &frontier {
            if let Some(neighbors) = adjacency.get(node) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    visited
}
