//! Filter configuration
//!
//! The one piece of mutable state surrounding the engine. Constructed with
//! defaults, mutated only by explicit user actions, snapshotted to the
//! config store, and fed whole into every engine recomputation.

pub mod store;

pub use store::{ConfigError, ConfigResult, ConfigStore, PinnedConfig};

use crate::corpus::{PaperId, RelationshipType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which slice of the corpus the view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Everything that survives filtering
    Overview,
    /// Bounded-hop neighborhood of the focus paper
    Focus,
    /// Overview data, time axis laid out horizontally
    Timeline,
}

/// Grouping strategy used by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerMode {
    /// One centered row per year
    Year,
    /// Topic lanes crossed with year bands (default)
    YearTopic,
    /// One centered column per category
    Category,
}

/// Orientation of the produced coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Years/rows grow downward
    TopDown,
    /// Transposed: years/rows grow rightward
    LeftRight,
}

/// Valid focus depth range, inclusive
pub const FOCUS_DEPTH_MIN: u8 = 1;
pub const FOCUS_DEPTH_MAX: u8 = 2;

/// Engine input parameters, serialized as a flat snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_view_mode")]
    pub view_mode: ViewMode,

    #[serde(default = "default_direction")]
    pub layout_direction: LayoutDirection,

    #[serde(default = "default_layer_mode")]
    pub layer_mode: LayerMode,

    /// Neighborhood radius for focus mode, in {1, 2}
    #[serde(default = "default_focus_depth")]
    pub focus_depth: u8,

    /// Paper the focus view centers on; None means no selection yet
    #[serde(default)]
    pub focus_paper: Option<PaperId>,

    /// Relationship types the view includes; empty set ⇒ empty view
    #[serde(default = "all_relationship_types")]
    pub enabled_types: BTreeSet<RelationshipType>,

    /// Minimum relationship strength, in [1, 10]
    #[serde(default = "default_min_strength")]
    pub min_strength: u8,

    /// Scale node emphasis by familiarity level
    #[serde(default = "default_true")]
    pub use_familiarity_emphasis: bool,
}

fn default_view_mode() -> ViewMode {
    ViewMode::Overview
}

fn default_direction() -> LayoutDirection {
    LayoutDirection::TopDown
}

fn default_layer_mode() -> LayerMode {
    LayerMode::YearTopic
}

fn default_focus_depth() -> u8 {
    FOCUS_DEPTH_MIN
}

fn default_min_strength() -> u8 {
    crate::corpus::STRENGTH_MIN
}

fn default_true() -> bool {
    true
}

fn all_relationship_types() -> BTreeSet<RelationshipType> {
    RelationshipType::ALL.into_iter().collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            view_mode: default_view_mode(),
            layout_direction: default_direction(),
            layer_mode: default_layer_mode(),
            focus_depth: default_focus_depth(),
            focus_paper: None,
            enabled_types: all_relationship_types(),
            min_strength: default_min_strength(),
            use_familiarity_emphasis: true,
        }
    }
}

impl FilterConfig {
    /// Set the focus paper (the sole external mutation entry point)
    pub fn set_focus(&mut self, paper: Option<PaperId>) {
        self.focus_paper = paper;
    }

    /// Set the focus depth, clamped into the valid range
    pub fn set_focus_depth(&mut self, depth: u8) {
        self.focus_depth = depth.clamp(FOCUS_DEPTH_MIN, FOCUS_DEPTH_MAX);
    }

    /// Set the minimum strength, clamped into [1, 10]
    pub fn set_min_strength(&mut self, min_strength: u8) {
        self.min_strength = min_strength.clamp(crate::corpus::STRENGTH_MIN, crate::corpus::STRENGTH_MAX);
    }

    /// Toggle a relationship type on or off
    pub fn toggle_type(&mut self, relationship_type: RelationshipType) {
        if !self.enabled_types.remove(&relationship_type) {
            self.enabled_types.insert(relationship_type);
        }
    }

    /// Whether a relationship type is currently enabled
    pub fn is_enabled(&self, relationship_type: RelationshipType) -> bool {
        self.enabled_types.contains(&relationship_type)
    }

    /// Orientation the layout should use for the current view mode
    ///
    /// Timeline is overview data with the time axis forced horizontal;
    /// every other mode honors the configured direction.
    pub fn effective_direction(&self) -> LayoutDirection {
        match self.view_mode {
            ViewMode::Timeline => LayoutDirection::LeftRight,
            _ => self.layout_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.view_mode, ViewMode::Overview);
        assert_eq!(config.layer_mode, LayerMode::YearTopic);
        assert_eq!(config.focus_depth, 1);
        assert_eq!(config.min_strength, 1);
        assert!(config.focus_paper.is_none());
        assert_eq!(config.enabled_types.len(), RelationshipType::ALL.len());
        assert!(config.use_familiarity_emphasis);
    }

    #[test]
    fn test_clamping() {
        let mut config = FilterConfig::default();
        config.set_focus_depth(0);
        assert_eq!(config.focus_depth, 1);
        config.set_focus_depth(7);
        assert_eq!(config.focus_depth, 2);

        config.set_min_strength(0);
        assert_eq!(config.min_strength, 1);
        config.set_min_strength(99);
        assert_eq!(config.min_strength, 10);
    }

    #[test]
    fn test_toggle_type() {
        let mut config = FilterConfig::default();
        assert!(config.is_enabled(RelationshipType::Surveys));
        config.toggle_type(RelationshipType::Surveys);
        assert!(!config.is_enabled(RelationshipType::Surveys));
        config.toggle_type(RelationshipType::Surveys);
        assert!(config.is_enabled(RelationshipType::Surveys));
    }

    #[test]
    fn test_effective_direction() {
        let mut config = FilterConfig::default();
        assert_eq!(config.effective_direction(), LayoutDirection::TopDown);
        config.view_mode = ViewMode::Timeline;
        assert_eq!(config.effective_direction(), LayoutDirection::LeftRight);
        config.view_mode = ViewMode::Focus;
        config.layout_direction = LayoutDirection::LeftRight;
        assert_eq!(config.effective_direction(), LayoutDirection::LeftRight);
    }

    #[test]
    fn test_partial_snapshot_deserializes_with_defaults() {
        let config: FilterConfig = serde_json::from_str(r#"{"min_strength": 4}"#).unwrap();
        assert_eq!(config.min_strength, 4);
        assert_eq!(config.view_mode, ViewMode::Overview);
        assert_eq!(config.enabled_types.len(), RelationshipType::ALL.len());
    }
}
