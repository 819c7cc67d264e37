//! In-memory reference store.

use crate::models::{FuelPrice, Location, TollPlaza, Vehicle};

use super::{LookupError, ReferenceData};

/// Reference records held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticReference {
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
    fuel_prices: Vec<FuelPrice>,
    toll_plazas: Vec<TollPlaza>,
}

impl StaticReference {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Adds a vehicle type.
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Adds a fuel price.
    pub fn with_fuel_price(mut self, price: FuelPrice) -> Self {
        self.fuel_prices.push(price);
        self
    }

    /// Adds a toll plaza.
    pub fn with_toll_plaza(mut self, plaza: TollPlaza) -> Self {
        self.toll_plazas.push(plaza);
        self
    }
}

fn sorted_by<T: Clone>(records: &[T], key: impl Fn(&T) -> &str) -> Vec<T> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| key(a).cmp(key(b)));
    out
}

impl ReferenceData for StaticReference {
    fn locations(&self) -> Result<Vec<Location>, LookupError> {
        Ok(sorted_by(&self.locations, |l| l.name.as_str()))
    }

    fn vehicles(&self) -> Result<Vec<Vehicle>, LookupError> {
        Ok(sorted_by(&self.vehicles, |v| v.name.as_str()))
    }

    fn fuel_prices(&self) -> Result<Vec<FuelPrice>, LookupError> {
        Ok(sorted_by(&self.fuel_prices, |p| p.location_name.as_str()))
    }

    fn toll_plazas(&self) -> Result<Vec<TollPlaza>, LookupError> {
        Ok(sorted_by(&self.toll_plazas, |t| t.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plaza(name: &str) -> TollPlaza {
        TollPlaza {
            id: name.to_lowercase(),
            name: name.into(),
            highway: "NH-48".into(),
            location_name: "Gurugram".into(),
            cost: 120,
            fastag_enabled: true,
        }
    }

    #[test]
    fn test_empty_store() {
        let refs = StaticReference::new();
        assert!(refs.locations().unwrap().is_empty());
        assert!(refs.location("Delhi").unwrap().is_none());
        assert!(refs.vehicle("truck").unwrap().is_none());
    }

    #[test]
    fn test_toll_plazas_sorted() {
        let refs = StaticReference::new()
            .with_toll_plaza(plaza("Kherki Daula"))
            .with_toll_plaza(plaza("Jajau"))
            .with_toll_plaza(plaza("Mathura"));
        let names: Vec<_> = refs.toll_plazas().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Jajau", "Kherki Daula", "Mathura"]);
    }

    #[test]
    fn test_fuel_prices_sorted_by_location() {
        let price = |loc: &str, p: f64| FuelPrice {
            id: loc.to_lowercase(),
            location_name: loc.into(),
            fuel_type: "diesel".into(),
            price_per_liter: p,
        };
        let refs = StaticReference::new()
            .with_fuel_price(price("Mumbai", 92.1))
            .with_fuel_price(price("Delhi", 87.6));
        let prices = refs.fuel_prices().unwrap();
        assert_eq!(prices[0].location_name, "Delhi");
        assert_eq!(prices[1].price_per_liter, 92.1);
    }

    #[test]
    fn test_vehicle_lookup_by_kind() {
        let refs = StaticReference::new()
            .with_vehicle(Vehicle::new("v1", "trailer", "Flatbed Trailer", 28.0))
            .with_vehicle(Vehicle::new("v2", "van", "Panel Van", 1.5));
        let found = refs.vehicle("TRAILER").unwrap().unwrap();
        assert_eq!(found.id, "v1");
        let names: Vec<_> = refs.vehicles().unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, ["Flatbed Trailer", "Panel Van"]);
    }
}
