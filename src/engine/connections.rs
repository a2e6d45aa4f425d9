//! Direct-connection listing
//!
//! Enumerates a single paper's 1-hop relationships with direction, for the
//! side panel next to a focused paper. One pass over the displayed
//! relationships; output keeps their order.

use crate::corpus::{PaperId, Relationship};
use serde::{Deserialize, Serialize};

/// Which end of the relationship the focus paper sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Focus paper is the source
    Outgoing,
    /// Focus paper is the target
    Incoming,
}

/// One direct connection of the focus paper
#[derive(Debug, Clone)]
pub struct Connection<'a> {
    pub direction: Direction,
    pub relationship: &'a Relationship,
    pub other: PaperId,
}

/// List every displayed relationship touching `focus`
pub fn list_connections<'a>(
    focus: PaperId,
    relationships: &[&'a Relationship],
) -> Vec<Connection<'a>> {
    relationships
        .iter()
        .copied()
        .filter_map(|r| {
            let direction = if r.starts_from(focus) {
                Direction::Outgoing
            } else if r.ends_at(focus) {
                Direction::Incoming
            } else {
                return None;
            };
            Some(Connection {
                direction,
                relationship: r,
                // Self-loops resolve to the focus paper itself
                other: r.other_endpoint(focus).unwrap_or(focus),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{RelationshipId, RelationshipType};

    fn rel(id: u64, from: u64, to: u64) -> Relationship {
        Relationship::new(
            RelationshipId::new(id),
            PaperId::new(from),
            PaperId::new(to),
            RelationshipType::InspiredBy,
            5,
        )
    }

    #[test]
    fn test_direction_and_other_endpoint() {
        let rels = [rel(1, 1, 2), rel(2, 3, 1), rel(3, 2, 3)];
        let refs: Vec<&Relationship> = rels.iter().collect();

        let connections = list_connections(PaperId::new(1), &refs);
        assert_eq!(connections.len(), 2);

        assert_eq!(connections[0].direction, Direction::Outgoing);
        assert_eq!(connections[0].other, PaperId::new(2));
        assert_eq!(connections[1].direction, Direction::Incoming);
        assert_eq!(connections[1].other, PaperId::new(3));
    }

    #[test]
    fn test_length_matches_incident_count() {
        let rels = [rel(1, 1, 2), rel(2, 2, 3), rel(3, 1, 3), rel(4, 4, 1)];
        let refs: Vec<&Relationship> = rels.iter().collect();

        let incident = refs.iter().filter(|r| r.touches(PaperId::new(1))).count();
        assert_eq!(list_connections(PaperId::new(1), &refs).len(), incident);
    }

    #[test]
    fn test_untouched_focus_yields_empty() {
        let rels = [rel(1, 1, 2)];
        let refs: Vec<&Relationship> = rels.iter().collect();
        assert!(list_connections(PaperId::new(9), &refs).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let rels = [rel(7, 1, 2), rel(3, 1, 3), rel(5, 4, 1)];
        let refs: Vec<&Relationship> = rels.iter().collect();

        let ids: Vec<u64> = list_connections(PaperId::new(1), &refs)
            .iter()
            .map(|c| c.relationship.id.as_u64())
            .collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }
}
