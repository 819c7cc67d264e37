//! Toll plaza record attached to a synthesized route.

use serde::{Deserialize, Serialize};

use super::{Location, Waypoint, WaypointKind};

/// A toll plaza on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollInfo {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Toll charge in whole currency units.
    pub cost: u32,
    /// Plaza position.
    pub location: Location,
    /// Whether electronic (FASTag) collection is available.
    #[serde(rename = "fastagEnabled")]
    pub fastag_enabled: bool,
}

impl TollInfo {
    /// The waypoint marking this plaza on the route.
    pub fn to_waypoint(&self) -> Waypoint {
        let payment = if self.fastag_enabled {
            "FASTag enabled"
        } else {
            "Cash only"
        };
        Waypoint::new(
            self.id.clone(),
            self.name.clone(),
            WaypointKind::Toll,
            self.location.point(),
            format!("Toll: ₹{} ({payment})", self.cost),
        )
    }
}

/// Sum of toll charges.
pub fn toll_total(tolls: &[TollInfo]) -> u32 {
    tolls.iter().map(|t| t.cost).sum()
}
