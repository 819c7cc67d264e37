//! Fuel price and toll plaza reference records.

use serde::{Deserialize, Serialize};

/// A fuel price observation for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPrice {
    /// Stable identifier.
    pub id: String,
    /// Where the price applies; the table is ordered by this name.
    pub location_name: String,
    /// Fuel grade, e.g. `"diesel"`.
    pub fuel_type: String,
    /// Price per liter.
    pub price_per_liter: f64,
}

/// A toll plaza from the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollPlaza {
    /// Stable identifier.
    pub id: String,
    /// Plaza name.
    pub name: String,
    /// Highway the plaza sits on.
    pub highway: String,
    /// Nearest town.
    pub location_name: String,
    /// Charge for a heavy vehicle.
    pub cost: u32,
    /// Whether electronic (FASTag) collection is available.
    #[serde(rename = "fastagEnabled")]
    pub fastag_enabled: bool,
}
