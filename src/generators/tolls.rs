//! Toll plaza generator.

use rand::Rng;

use crate::geo::GeoPoint;
use crate::models::{Location, TollInfo};
use crate::sampling::{chance, uniform};

/// Share of plazas with electronic collection.
const FASTAG_RATE: f64 = 0.8;
/// Largest coordinate offset from the reference point, in degrees.
const MAX_OFFSET_DEG: f64 = 0.5;

/// Generates `count` toll plazas scattered around `reference`.
///
/// Plazas are named "Toll Plaza 1".."Toll Plaza k" and charge a whole amount
/// drawn from [50, 200).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_synth::generators::generate_tolls;
/// use route_synth::geo::GeoPoint;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tolls = generate_tolls(&mut rng, 2, GeoPoint::new(28.46, 77.03));
/// assert_eq!(tolls.len(), 2);
/// assert_eq!(tolls[1].name, "Toll Plaza 2");
/// ```
pub fn generate_tolls<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    reference: GeoPoint,
) -> Vec<TollInfo> {
    (1..=count)
        .map(|n| {
            let id = format!("toll-{n}");
            let name = format!("Toll Plaza {n}");
            let cost = uniform(rng, 50.0, 200.0).round() as u32;
            let point = reference.offset(
                uniform(rng, 0.0, MAX_OFFSET_DEG),
                uniform(rng, 0.0, MAX_OFFSET_DEG),
            );
            let fastag_enabled = chance(rng, FASTAG_RATE);
            TollInfo {
                location: Location::at(id.clone(), name.clone(), point),
                id,
                name,
                cost,
                fastag_enabled,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const REF: GeoPoint = GeoPoint {
        lat: 28.4595,
        lng: 77.0266,
    };

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_tolls(&mut rng, 0, REF).is_empty());
    }

    #[test]
    fn test_names_and_ids_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let tolls = generate_tolls(&mut rng, 3, REF);
        let names: Vec<_> = tolls.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Toll Plaza 1", "Toll Plaza 2", "Toll Plaza 3"]);
        assert_eq!(tolls[2].id, "toll-3");
        assert_eq!(tolls[2].location.id, "toll-3");
    }

    #[test]
    fn test_cost_and_position_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for toll in generate_tolls(&mut rng, 500, REF) {
            assert!((50..=200).contains(&toll.cost), "cost {}", toll.cost);
            let d_lat = toll.location.lat - REF.lat;
            let d_lng = toll.location.lng - REF.lng;
            assert!((0.0..MAX_OFFSET_DEG).contains(&d_lat));
            assert!((0.0..MAX_OFFSET_DEG).contains(&d_lng));
        }
    }

    #[test]
    fn test_fastag_mostly_enabled() {
        let mut rng = StdRng::seed_from_u64(11);
        let tolls = generate_tolls(&mut rng, 2000, REF);
        let enabled = tolls.iter().filter(|t| t.fastag_enabled).count();
        assert!((1500..1700).contains(&enabled), "enabled = {enabled}");
    }
}
