//! Deterministic layout engine
//!
//! Assigns one 2D position per displayed paper under the configured
//! grouping strategy. Positions are derived values: recomputed from scratch
//! on every call and a pure function of (papers, mode, classifier,
//! direction), so a repeated filter change re-lands every node exactly
//! where it was.

use crate::config::{LayerMode, LayoutDirection};
use crate::corpus::{Category, Paper, PaperId, Topic};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Horizontal gap between papers within a year row (Year mode)
const YEAR_X_GAP: f32 = 180.0;
/// Vertical gap between year rows (Year mode)
const YEAR_ROW_GAP: f32 = 140.0;

/// Fixed topic-lane width (YearTopic mode)
const LANE_WIDTH: f32 = 260.0;
/// Horizontal distance between the two columns inside a cell
const CELL_COL_GAP: f32 = 110.0;
/// Papers per cell row before wrapping
const CELL_COLS: usize = 2;
/// Vertical gap between cell rows
const ROW_GAP: f32 = 90.0;
/// Extra vertical gap between consecutive year bands
const YEAR_BAND_GAP: f32 = 60.0;

/// Fixed category-column width (Category mode)
const CATEGORY_COL_WIDTH: f32 = 260.0;

/// A computed 2D position for one paper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    fn transposed(self) -> Self {
        Position { x: self.y, y: self.x }
    }
}

/// Derives the coarse layout topic for a paper
///
/// The real classification rule lives outside the engine; this trait is the
/// seam it plugs into. Must be pure: same paper, same topic.
pub trait TopicClassifier {
    fn topic_of(&self, paper: &Paper) -> Topic;
}

/// Default classifier: first tag if any, else the category label
///
/// Good enough for a corpus whose loader puts the dominant theme first in
/// the tag list; replace with a domain-aware classifier otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagTopics;

impl TopicClassifier for TagTopics {
    fn topic_of(&self, paper: &Paper) -> Topic {
        match paper.tags.first() {
            Some(tag) => Topic::new(tag.clone()),
            None => Topic::new(paper.category.label()),
        }
    }
}

/// Assign a position to every displayed paper
///
/// Exactly one position per input paper; zero papers produce an empty map.
pub fn layout(
    papers: &[&Paper],
    mode: LayerMode,
    classifier: &dyn TopicClassifier,
    direction: LayoutDirection,
) -> FxHashMap<PaperId, Position> {
    let mut positions = match mode {
        LayerMode::Year => layout_by_year(papers),
        LayerMode::YearTopic => layout_year_topic(papers, classifier),
        LayerMode::Category => layout_by_category(papers),
    };

    if direction == LayoutDirection::LeftRight {
        for position in positions.values_mut() {
            *position = position.transposed();
        }
    }

    positions
}

/// One horizontally centered row per year, ascending
fn layout_by_year(papers: &[&Paper]) -> FxHashMap<PaperId, Position> {
    let mut years: BTreeMap<i32, Vec<&Paper>> = BTreeMap::new();
    for &paper in papers {
        years.entry(paper.year).or_default().push(paper);
    }

    let mut positions = FxHashMap::default();
    for (row, (_year, mut members)) in years.into_iter().enumerate() {
        members.sort_by(|a, b| (a.title.as_str(), a.id).cmp(&(b.title.as_str(), b.id)));
        let count = members.len() as f32;
        for (i, paper) in members.into_iter().enumerate() {
            positions.insert(
                paper.id,
                Position {
                    x: (i as f32 - (count - 1.0) / 2.0) * YEAR_X_GAP,
                    y: row as f32 * YEAR_ROW_GAP,
                },
            );
        }
    }
    positions
}

/// Topic lanes crossed with year bands
///
/// Lanes are fixed-width columns centered on the lane-index midpoint, in
/// sorted topic order. A year band's height is its tallest cell's row count
/// times the row gap; bands stack with an extra inter-year gap. Within a
/// cell papers wrap into two columns, ordered by (title, id), so the grid
/// is stable and collision-free.
fn layout_year_topic(
    papers: &[&Paper],
    classifier: &dyn TopicClassifier,
) -> FxHashMap<PaperId, Position> {
    let lanes: BTreeSet<Topic> = papers.iter().map(|p| classifier.topic_of(p)).collect();
    let lane_index: BTreeMap<&Topic, usize> =
        lanes.iter().enumerate().map(|(i, t)| (t, i)).collect();
    let lane_count = lanes.len() as f32;

    let mut cells: BTreeMap<(i32, Topic), Vec<&Paper>> = BTreeMap::new();
    for &paper in papers {
        cells
            .entry((paper.year, classifier.topic_of(paper)))
            .or_default()
            .push(paper);
    }

    // Tallest cell per year drives that year band's height
    let mut year_rows: BTreeMap<i32, usize> = BTreeMap::new();
    for ((year, _), members) in &cells {
        let rows = members.len().div_ceil(CELL_COLS);
        let entry = year_rows.entry(*year).or_insert(0);
        *entry = (*entry).max(rows);
    }

    // Cumulative vertical offset per year band, ascending
    let mut year_base: BTreeMap<i32, f32> = BTreeMap::new();
    let mut offset = 0.0;
    for (year, rows) in &year_rows {
        year_base.insert(*year, offset);
        offset += *rows as f32 * ROW_GAP + YEAR_BAND_GAP;
    }

    let mut positions = FxHashMap::default();
    for ((year, topic), mut members) in cells {
        members.sort_by(|a, b| (a.title.as_str(), a.id).cmp(&(b.title.as_str(), b.id)));

        let lane = lane_index[&topic] as f32;
        let lane_x = (lane - (lane_count - 1.0) / 2.0) * LANE_WIDTH;
        let base_y = year_base[&year];

        for (i, paper) in members.into_iter().enumerate() {
            let col = (i % CELL_COLS) as f32;
            let row = (i / CELL_COLS) as f32;
            positions.insert(
                paper.id,
                Position {
                    x: lane_x + (col - 0.5) * CELL_COL_GAP,
                    y: base_y + row * ROW_GAP,
                },
            );
        }
    }
    positions
}

/// One centered column per category, rows ordered by (year, title)
fn layout_by_category(papers: &[&Paper]) -> FxHashMap<PaperId, Position> {
    let mut columns: BTreeMap<usize, Vec<&Paper>> = BTreeMap::new();
    for &paper in papers {
        let idx = Category::ALL
            .iter()
            .position(|c| *c == paper.category)
            .unwrap_or(Category::ALL.len());
        columns.entry(idx).or_default().push(paper);
    }

    let column_count = columns.len() as f32;
    let mut positions = FxHashMap::default();
    for (slot, (_, mut members)) in columns.into_iter().enumerate() {
        members.sort_by(|a, b| (a.year, a.title.as_str(), a.id).cmp(&(b.year, b.title.as_str(), b.id)));
        let x = (slot as f32 - (column_count - 1.0) / 2.0) * CATEGORY_COL_WIDTH;
        for (row, paper) in members.into_iter().enumerate() {
            positions.insert(paper.id, Position { x, y: row as f32 * ROW_GAP });
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: u64, title: &str, year: i32, category: Category, tag: &str) -> Paper {
        Paper::new(PaperId::new(id), title, year, category).with_tags([tag])
    }

    fn layout_default(papers: &[&Paper], mode: LayerMode) -> FxHashMap<PaperId, Position> {
        layout(papers, mode, &TagTopics, LayoutDirection::TopDown)
    }

    #[test]
    fn test_every_paper_positioned_once() {
        let papers = [
            paper(1, "A", 2020, Category::Theory, "scaling"),
            paper(2, "B", 2020, Category::Theory, "scaling"),
            paper(3, "C", 2021, Category::Application, "vision"),
        ];
        let refs: Vec<&Paper> = papers.iter().collect();

        for mode in [LayerMode::Year, LayerMode::YearTopic, LayerMode::Category] {
            let positions = layout_default(&refs, mode);
            assert_eq!(positions.len(), refs.len());
            for p in &refs {
                assert!(positions.contains_key(&p.id));
            }
        }
    }

    #[test]
    fn test_empty_input_empty_map() {
        assert!(layout_default(&[], LayerMode::YearTopic).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let papers = [
            paper(1, "A", 2019, Category::Foundation, "attention"),
            paper(2, "B", 2019, Category::Theory, "scaling"),
            paper(3, "C", 2020, Category::Theory, "scaling"),
            paper(4, "D", 2021, Category::Survey, "attention"),
        ];
        let refs: Vec<&Paper> = papers.iter().collect();

        for mode in [LayerMode::Year, LayerMode::YearTopic, LayerMode::Category] {
            let first = layout_default(&refs, mode);
            let second = layout_default(&refs, mode);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_year_rows_ascend_and_center() {
        let papers = [
            paper(1, "Old", 2018, Category::Theory, "t"),
            paper(2, "New A", 2020, Category::Theory, "t"),
            paper(3, "New B", 2020, Category::Theory, "t"),
        ];
        let refs: Vec<&Paper> = papers.iter().collect();
        let positions = layout_default(&refs, LayerMode::Year);

        let old = positions[&PaperId::new(1)];
        let a = positions[&PaperId::new(2)];
        let b = positions[&PaperId::new(3)];

        assert!(old.y < a.y);
        assert_eq!(a.y, b.y);
        // Lone paper sits on the row center; a pair straddles it
        assert_eq!(old.x, 0.0);
        assert_eq!(a.x + b.x, 0.0);
    }

    #[test]
    fn test_cell_wraps_without_collisions() {
        // Five papers in one (year, topic) cell: 2 columns, 3 rows
        let papers: Vec<Paper> = (1..=5)
            .map(|i| paper(i, &format!("P{}", i), 2020, Category::Theory, "same"))
            .collect();
        let refs: Vec<&Paper> = papers.iter().collect();
        let positions = layout_default(&refs, LayerMode::YearTopic);

        let mut seen = Vec::new();
        for p in positions.values() {
            assert!(!seen.contains(&(p.x.to_bits(), p.y.to_bits())));
            seen.push((p.x.to_bits(), p.y.to_bits()));
        }

        let distinct_rows: BTreeSet<u32> = positions.values().map(|p| p.y.to_bits()).collect();
        assert_eq!(distinct_rows.len(), 3);
    }

    #[test]
    fn test_year_band_height_follows_tallest_cell() {
        // 2020: topic "a" has 4 papers (2 rows), topic "b" has 1.
        // 2021 must start below 2 full rows plus the band gap.
        let mut papers = vec![
            paper(10, "B1", 2020, Category::Theory, "b"),
            paper(20, "Next", 2021, Category::Theory, "b"),
        ];
        for i in 1..=4 {
            papers.push(paper(i, &format!("A{}", i), 2020, Category::Theory, "a"));
        }
        let refs: Vec<&Paper> = papers.iter().collect();
        let positions = layout_default(&refs, LayerMode::YearTopic);

        assert_eq!(positions[&PaperId::new(20)].y, 2.0 * ROW_GAP + YEAR_BAND_GAP);
    }

    #[test]
    fn test_topic_lanes_centered() {
        let papers = [
            paper(1, "A", 2020, Category::Theory, "alpha"),
            paper(2, "B", 2020, Category::Theory, "beta"),
            paper(3, "C", 2020, Category::Theory, "gamma"),
        ];
        let refs: Vec<&Paper> = papers.iter().collect();
        let positions = layout_default(&refs, LayerMode::YearTopic);

        // Sorted lanes: alpha < beta < gamma; beta holds the middle lane
        let lane_x = |id: u64| positions[&PaperId::new(id)].x + 0.5 * CELL_COL_GAP;
        assert_eq!(lane_x(2), 0.0);
        assert_eq!(lane_x(1), -LANE_WIDTH);
        assert_eq!(lane_x(3), LANE_WIDTH);
    }

    #[test]
    fn test_category_rows_ordered_by_year_then_title() {
        let papers = [
            paper(1, "Z early", 2018, Category::Theory, "t"),
            paper(2, "A late", 2021, Category::Theory, "t"),
            paper(3, "A early", 2018, Category::Theory, "t"),
        ];
        let refs: Vec<&Paper> = papers.iter().collect();
        let positions = layout_default(&refs, LayerMode::Category);

        assert!(positions[&PaperId::new(3)].y < positions[&PaperId::new(1)].y);
        assert!(positions[&PaperId::new(1)].y < positions[&PaperId::new(2)].y);
    }

    #[test]
    fn test_left_right_transposes() {
        let papers = [
            paper(1, "A", 2019, Category::Theory, "t"),
            paper(2, "B", 2021, Category::Theory, "t"),
        ];
        let refs: Vec<&Paper> = papers.iter().collect();

        let down = layout(&refs, LayerMode::Year, &TagTopics, LayoutDirection::TopDown);
        let right = layout(&refs, LayerMode::Year, &TagTopics, LayoutDirection::LeftRight);

        for p in &refs {
            assert_eq!(down[&p.id].x, right[&p.id].y);
            assert_eq!(down[&p.id].y, right[&p.id].x);
        }
    }

    #[test]
    fn test_untagged_paper_uses_category_topic() {
        let tagged = paper(1, "A", 2020, Category::Theory, "alpha");
        let untagged = Paper::new(PaperId::new(2), "B", 2020, Category::Survey);

        assert_eq!(TagTopics.topic_of(&tagged), Topic::new("alpha"));
        assert_eq!(TagTopics.topic_of(&untagged), Topic::new("survey"));
    }
}
