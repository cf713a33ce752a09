//! Serializable point-in-time view of the road network for inspection.

use serde::{Deserialize, Serialize};

use crate::grid::{GridPos, Heading};
use crate::road_tiles::{PointRef, PointRole, RoadTileNetwork, TileVariant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoadNetworkSnapshot {
    /// Sorted by grid position.
    pub segments: Vec<SegmentSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub pos: GridPos,
    pub variant: TileVariant,
    pub heading: Heading,
    pub points: Vec<PointSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub position: [f32; 3],
    pub role: PointRole,
    pub links: Vec<PointRef>,
}

impl RoadNetworkSnapshot {
    pub fn capture(network: &RoadTileNetwork) -> Self {
        let mut segments: Vec<SegmentSnapshot> = network
            .iter()
            .map(|segment| SegmentSnapshot {
                pos: segment.pos,
                variant: segment.variant,
                heading: segment.heading,
                points: segment
                    .points
                    .iter()
                    .map(|p| PointSnapshot {
                        position: p.position.to_array(),
                        role: p.role,
                        links: p.links.clone(),
                    })
                    .collect(),
            })
            .collect();
        segments.sort_by_key(|s| s.pos);
        Self { segments }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn segment(&self, pos: GridPos) -> Option<&SegmentSnapshot> {
        self.segments.iter().find(|s| s.pos == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_serializes() {
        let snapshot = RoadNetworkSnapshot::capture(&RoadTileNetwork::default());
        assert!(snapshot.segments.is_empty());
        let json = snapshot.to_json().expect("serialize");
        assert!(json.contains("\"segments\""));
    }
}
