//! Render-surface output
//!
//! Flattens a composed selection plus its layout into the plain records the
//! rendering surface consumes. Nothing here is kept between recomputes.

use super::compose::ViewSelection;
use super::layout::Position;
use crate::config::FilterConfig;
use crate::corpus::{PaperId, RelationshipId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Display record for one paper node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePaper {
    pub id: PaperId,
    pub x: f32,
    pub y: f32,
    pub title: String,
    pub color: String,
    /// Display scale in (0, 1]; 1.0 unless familiarity emphasis applies
    pub emphasis: f32,
    pub is_favorite: bool,
}

/// Display record for one relationship edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRelationship {
    pub id: RelationshipId,
    pub source: PaperId,
    pub target: PaperId,
    pub type_label: String,
    pub strength_label: String,
    pub color: String,
}

/// Everything the rendering surface needs for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub papers: Vec<ScenePaper>,
    pub relationships: Vec<SceneRelationship>,
}

/// Build the scene for a selection and its computed positions
///
/// Papers without a position are skipped; the layout contract makes that
/// impossible when positions came from the same selection.
pub fn build_scene(
    selection: &ViewSelection<'_>,
    positions: &FxHashMap<PaperId, Position>,
    config: &FilterConfig,
) -> Scene {
    let papers = selection
        .papers
        .iter()
        .filter_map(|paper| {
            let position = positions.get(&paper.id)?;
            let emphasis = if config.use_familiarity_emphasis {
                paper.familiarity.emphasis()
            } else {
                1.0
            };
            Some(ScenePaper {
                id: paper.id,
                x: position.x,
                y: position.y,
                title: paper.title.clone(),
                color: paper.color.clone(),
                emphasis,
                is_favorite: paper.is_favorite,
            })
        })
        .collect();

    let relationships = selection
        .relationships
        .iter()
        .map(|r| SceneRelationship {
            id: r.id,
            source: r.source,
            target: r.target,
            type_label: r.relationship_type.label().to_string(),
            strength_label: format!("{}/10", r.strength),
            color: r.relationship_type.color().to_string(),
        })
        .collect();

    Scene { papers, relationships }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Category, FamiliarityLevel, Paper, Relationship, RelationshipType};

    fn selection_fixture() -> (Vec<Paper>, Vec<Relationship>) {
        let papers = vec![
            Paper::new(PaperId::new(1), "A", 2020, Category::Theory)
                .with_familiarity(FamiliarityLevel::Mastered)
                .favorite(),
            Paper::new(PaperId::new(2), "B", 2021, Category::Theory),
        ];
        let rels = vec![Relationship::new(
            RelationshipId::new(1),
            PaperId::new(1),
            PaperId::new(2),
            RelationshipType::Extends,
            7,
        )];
        (papers, rels)
    }

    fn positions_for(papers: &[Paper]) -> FxHashMap<PaperId, Position> {
        papers
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, Position { x: i as f32 * 10.0, y: 0.0 }))
            .collect()
    }

    #[test]
    fn test_scene_labels() {
        let (papers, rels) = selection_fixture();
        let selection = ViewSelection {
            papers: papers.iter().collect(),
            relationships: rels.iter().collect(),
        };
        let scene = build_scene(&selection, &positions_for(&papers), &FilterConfig::default());

        assert_eq!(scene.papers.len(), 2);
        assert_eq!(scene.relationships.len(), 1);
        let edge = &scene.relationships[0];
        assert_eq!(edge.type_label, "extends");
        assert_eq!(edge.strength_label, "7/10");
        assert_eq!(edge.color, RelationshipType::Extends.color());
    }

    #[test]
    fn test_familiarity_emphasis_toggle() {
        let (papers, rels) = selection_fixture();
        let selection = ViewSelection {
            papers: papers.iter().collect(),
            relationships: rels.iter().collect(),
        };
        let positions = positions_for(&papers);

        let mut config = FilterConfig::default();
        let scene = build_scene(&selection, &positions, &config);
        assert_eq!(scene.papers[0].emphasis, FamiliarityLevel::Mastered.emphasis());
        assert_eq!(scene.papers[1].emphasis, FamiliarityLevel::NotStarted.emphasis());

        config.use_familiarity_emphasis = false;
        let flat = build_scene(&selection, &positions, &config);
        assert!(flat.papers.iter().all(|p| p.emphasis == 1.0));
    }

    #[test]
    fn test_scene_serializes() {
        let (papers, rels) = selection_fixture();
        let selection = ViewSelection {
            papers: papers.iter().collect(),
            relationships: rels.iter().collect(),
        };
        let scene = build_scene(&selection, &positions_for(&papers), &FilterConfig::default());

        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"strength_label\":\"7/10\""));
    }
}
