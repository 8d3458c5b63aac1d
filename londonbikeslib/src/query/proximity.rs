//! Radius filtering around a coordinate.

use crate::data::geo::great_circle_distance;
use crate::data::station::{Coordinate, Station};

/// A station kept by a [`ProximityFilter`], with its distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyStation<'a> {
    pub station: &'a Station,
    /// Great-circle distance from the centre, in metres
    pub distance_m: f64,
}

/// Selects stations within `radius_m` metres of `center`.
///
/// The boundary is inclusive. Output keeps input order; nothing is sorted
/// by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFilter {
    pub center: Coordinate,
    pub radius_m: f64,
}

impl ProximityFilter {
    pub fn new(center: Coordinate, radius_m: f64) -> Self {
        Self { center, radius_m }
    }

    /// Distance from the centre to a station, in metres.
    pub fn distance_to(&self, station: &Station) -> f64 {
        great_circle_distance(self.center, station.coordinate())
    }

    pub fn apply<'a>(&self, stations: &'a [Station]) -> Vec<NearbyStation<'a>> {
        stations
            .iter()
            .filter_map(|station| {
                let distance_m = self.distance_to(station);
                (distance_m <= self.radius_m).then_some(NearbyStation {
                    station,
                    distance_m,
                })
            })
            .collect()
    }
}
