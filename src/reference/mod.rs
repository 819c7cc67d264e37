//! Read-only lookup boundary for reference records.
//!
//! The synthesizer only needs to turn place names into coordinates and to
//! check vehicle types; [`ReferenceData`] is the narrow capability it is
//! given for that. How the records are fetched is up to the implementor.
//! [`StaticReference`] is an in-memory implementation.

mod store;

use thiserror::Error;

use crate::models::{FuelPrice, Location, TollPlaza, Vehicle};

pub use store::StaticReference;

/// A failed reference lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The backing store could not be reached.
    #[error("reference store unavailable: {0}")]
    Unavailable(String),
    /// The backing store returned malformed records.
    #[error("malformed reference record: {0}")]
    Malformed(String),
}

/// Read access to locations, vehicles, fuel prices and toll plazas.
///
/// Collection methods return records ordered by name. The single-record
/// lookups default to a case-insensitive scan of the collections and return
/// `Ok(None)` on a miss.
///
/// # Examples
///
/// ```
/// use route_synth::models::Location;
/// use route_synth::reference::{ReferenceData, StaticReference};
///
/// let refs = StaticReference::new()
///     .with_location(Location::new("agra", "Agra", 27.1767, 78.0081))
///     .with_location(Location::new("del", "Delhi", 28.6139, 77.2090));
///
/// let names: Vec<_> = refs.locations().unwrap().into_iter().map(|l| l.name).collect();
/// assert_eq!(names, ["Agra", "Delhi"]);
/// assert!(refs.location("delhi").unwrap().is_some());
/// assert!(refs.location("Jaipur").unwrap().is_none());
/// ```
pub trait ReferenceData: Send + Sync {
    /// All known locations.
    fn locations(&self) -> Result<Vec<Location>, LookupError>;

    /// All known vehicle types.
    fn vehicles(&self) -> Result<Vec<Vehicle>, LookupError>;

    /// Current fuel prices, ordered by location name.
    fn fuel_prices(&self) -> Result<Vec<FuelPrice>, LookupError>;

    /// Toll plaza reference table.
    fn toll_plazas(&self) -> Result<Vec<TollPlaza>, LookupError>;

    /// Location whose name matches `name`, ignoring ASCII case.
    fn location(&self, name: &str) -> Result<Option<Location>, LookupError> {
        Ok(self
            .locations()?
            .into_iter()
            .find(|l| l.name.eq_ignore_ascii_case(name)))
    }

    /// Vehicle whose type key matches `kind`, ignoring ASCII case.
    fn vehicle(&self, kind: &str) -> Result<Option<Vehicle>, LookupError> {
        Ok(self
            .vehicles()?
            .into_iter()
            .find(|v| v.kind.eq_ignore_ascii_case(kind)))
    }
}
