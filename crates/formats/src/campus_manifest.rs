use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: &str = "1.0";

/// Static campus configuration: construction timeline, per-building facts,
/// and volume placements.
///
/// Timeline keys are decimal year strings in JSON (`"2001"`); consumers
/// must parse and sort them numerically, never rely on map order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampusManifest {
    pub version: String,
    pub campus_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub timeline: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub buildings: BTreeMap<String, BuildingFacts>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumePlacement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BuildingFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One placed volume: local coordinates plus vertical extent.
///
/// Placement data only; footprint geometry lives with the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumePlacement {
    pub building: String,
    pub position: [f64; 3],
    pub height: f64,
}

impl CampusManifest {
    pub fn new(campus_id: impl Into<String>) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            campus_id: campus_id.into(),
            name: None,
            timeline: BTreeMap::new(),
            buildings: BTreeMap::new(),
            volumes: Vec::new(),
        }
    }
}
