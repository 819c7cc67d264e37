//! Restriction types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Location;

/// What a restriction limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionKind {
    /// Gross vehicle weight.
    Weight,
    /// Vehicle height.
    Height,
    /// Vehicle width.
    Width,
    /// Vehicle length.
    Length,
    /// Time-of-day entry window.
    Time,
    /// Anything else.
    Other,
}

impl RestrictionKind {
    /// All kinds, in declaration order.
    pub const ALL: [RestrictionKind; 6] = [
        RestrictionKind::Weight,
        RestrictionKind::Height,
        RestrictionKind::Width,
        RestrictionKind::Length,
        RestrictionKind::Time,
        RestrictionKind::Other,
    ];

    /// Capitalized label, e.g. `"Weight"`.
    pub fn label(self) -> &'static str {
        match self {
            RestrictionKind::Weight => "Weight",
            RestrictionKind::Height => "Height",
            RestrictionKind::Width => "Width",
            RestrictionKind::Length => "Length",
            RestrictionKind::Time => "Time",
            RestrictionKind::Other => "Other",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A limit a vehicle must respect on a route or segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    /// Stable identifier.
    pub id: String,
    /// What is limited.
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    /// Human-readable limit, e.g. `"10 tons"`.
    pub value: String,
    /// Description of the restriction.
    pub description: String,
    /// Where the restriction applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
