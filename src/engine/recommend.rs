//! Bridge recommendation
//!
//! Surfaces papers two hops away from the focus paper: candidates reachable
//! through exactly one intermediate ("bridge") paper, excluding the focus
//! paper itself and anything it already connects to directly. Each
//! candidate gets a weighted multi-signal score; the top `limit` come back
//! in descending order.
//!
//! Which relationship set bridges may cross is the caller's policy: pass
//! the filtered set to respect the active strength threshold, or the
//! unfiltered corpus set to let weak edges act as bridges.

use crate::corpus::{CorpusStore, Paper, PaperId, Relationship};
use rustc_hash::{FxHashMap, FxHashSet};

/// Scoring weights for bridge candidates
///
/// An explicit policy parameter rather than hidden constants, so a caller
/// can retune the balance without touching the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Per distinct intermediate paper bridging to the candidate
    pub common_connection: f32,
    /// Per combined strength point across both bridging edges
    pub bridge_strength: f32,
    /// Flat bonus when the candidate shares the focus paper's category
    pub category_match: f32,
    /// Per tag shared with the focus paper
    pub tag_overlap: f32,
    /// Scaled by closeness in publication year (full weight at the same
    /// year, fading to zero at ten years apart)
    pub year_proximity: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            common_connection: 10.0,
            bridge_strength: 0.5,
            category_match: 5.0,
            tag_overlap: 2.0,
            year_proximity: 3.0,
        }
    }
}

/// A scored bridge candidate
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub paper: &'a Paper,
    pub score: f32,
}

/// Score and rank second-hop candidates for a focus paper
///
/// Never returns the focus paper or any paper directly connected to it
/// within the supplied relationship set. Deterministic: equal scores break
/// ties by ascending paper id.
pub fn recommend<'a>(
    focus: PaperId,
    store: &'a CorpusStore,
    relationships: &[&Relationship],
    weights: &ScoringWeights,
    limit: usize,
) -> Vec<Recommendation<'a>> {
    let focus_paper = match store.get_paper(focus) {
        Some(paper) => paper,
        None => return Vec::new(),
    };

    // Strength of the strongest direct edge to each neighbor
    let mut direct: FxHashMap<PaperId, u8> = FxHashMap::default();
    for r in relationships {
        if let Some(other) = r.other_endpoint(focus) {
            let entry = direct.entry(other).or_insert(0);
            *entry = (*entry).max(r.strength);
        }
    }

    // Walk each bridge: focus -> intermediate -> candidate
    struct BridgeTally {
        intermediates: FxHashSet<PaperId>,
        combined_strength: u32,
    }
    let mut tallies: FxHashMap<PaperId, BridgeTally> = FxHashMap::default();

    for (&intermediate, &first_strength) in &direct {
        for r in relationships {
            let Some(candidate) = r.other_endpoint(intermediate) else {
                continue;
            };
            if candidate == focus || direct.contains_key(&candidate) {
                continue;
            }
            let tally = tallies.entry(candidate).or_insert_with(|| BridgeTally {
                intermediates: FxHashSet::default(),
                combined_strength: 0,
            });
            tally.intermediates.insert(intermediate);
            tally.combined_strength += u32::from(first_strength) + u32::from(r.strength);
        }
    }

    let mut recommendations: Vec<Recommendation<'a>> = tallies
        .into_iter()
        .filter_map(|(candidate_id, tally)| {
            // Candidate may have vanished if the relationship slice came
            // from a stale filter pass; skip rather than assume.
            let paper = store.get_paper(candidate_id)?;
            Some(Recommendation {
                paper,
                score: score_candidate(focus_paper, paper, &tally.intermediates, tally.combined_strength, weights),
            })
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.paper.id.cmp(&b.paper.id))
    });
    recommendations.truncate(limit);
    recommendations
}

fn score_candidate(
    focus: &Paper,
    candidate: &Paper,
    intermediates: &FxHashSet<PaperId>,
    combined_strength: u32,
    weights: &ScoringWeights,
) -> f32 {
    let mut score = weights.common_connection * intermediates.len() as f32
        + weights.bridge_strength * combined_strength as f32;

    if candidate.category == focus.category {
        score += weights.category_match;
    }

    score += weights.tag_overlap * focus.shared_tags(candidate) as f32;

    let year_gap = (focus.year - candidate.year).abs() as f32;
    score += weights.year_proximity * (1.0 - (year_gap / 10.0).min(1.0));

    score
}
