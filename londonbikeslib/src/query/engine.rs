//! Query entry points: one function per query mode.
//!
//! Each function takes already-fetched stations, selects rows, and returns a
//! fresh [`ResultTable`]. None of them mutate their input.

use tracing::{debug, warn};

use crate::data::station::{Coordinate, Station, NB_BIKES, NB_EMPTY_DOCKS};
use crate::error::LondonBikesError;
use crate::output::{decimal_cell, distance_cell, ResultRow, ResultTable};
use crate::source::StationSource;
use crate::Result;

use super::matcher::NameMatcher;
use super::proximity::ProximityFilter;
use super::request::Query;

/// Columns of a name search.
pub const NAME_SEARCH_HEADER: [&str; 4] = ["ID", "Name", "Latitude", "Longitude"];

/// Columns of a proximity search.
pub const NEARBY_HEADER: [&str; 4] = ["ID", "Name", "Latitude,Longitude", "Distance (m)"];

/// Columns of a station lookup.
pub const LOOKUP_HEADER: [&str; 5] = ["Name", "Latitude", "Longitude", "Bikes", "Empty Docks"];

/// Rows `[id, name, lat, lon]` for every station whose name matches.
pub fn search_with(matcher: &NameMatcher, stations: &[Station]) -> ResultTable {
    let mut table = ResultTable::new(NAME_SEARCH_HEADER);
    for station in stations.iter().filter(|s| matcher.matches(&s.name)) {
        table.push(ResultRow::new([
            station.id.clone(),
            station.name.clone(),
            decimal_cell(station.latitude),
            decimal_cell(station.longitude),
        ]));
    }
    debug!(
        term = matcher.term(),
        matched = table.rows().len(),
        "name search"
    );
    table
}

/// Compile `term` and run a name search.
pub fn search_by_name(term: &str, stations: &[Station]) -> Result<ResultTable> {
    let matcher = NameMatcher::new(term)?;
    Ok(search_with(&matcher, stations))
}

/// Rows `[id, name, "lat,lon", distance]` for every station within
/// `radius_m` metres of `center`, in input order.
pub fn search_nearby(center: Coordinate, radius_m: f64, stations: &[Station]) -> ResultTable {
    let mut table = ResultTable::new(NEARBY_HEADER);
    for nearby in ProximityFilter::new(center, radius_m).apply(stations) {
        let station = nearby.station;
        table.push(ResultRow::new([
            station.id.clone(),
            station.name.clone(),
            format!(
                "{},{}",
                decimal_cell(station.latitude),
                decimal_cell(station.longitude)
            ),
            distance_cell(nearby.distance_m),
        ]));
    }
    debug!(
        latitude = center.latitude,
        longitude = center.longitude,
        radius_m,
        matched = table.rows().len(),
        "proximity search"
    );
    table
}

/// One row `[name, lat, lon, bikes, empty docks]` for the station found
/// under `id`.
///
/// `None` means the source did not know the id and yields
/// [`LondonBikesError::NotFound`]. A live count missing from the station's
/// additional properties renders as an empty cell.
pub fn lookup(id: &str, station: Option<&Station>) -> Result<ResultTable> {
    let station = station.ok_or_else(|| LondonBikesError::NotFound { id: id.to_string() })?;

    let mut table = ResultTable::new(LOOKUP_HEADER);
    table.push(ResultRow::new([
        station.name.clone(),
        decimal_cell(station.latitude),
        decimal_cell(station.longitude),
        live_count(station, NB_BIKES),
        live_count(station, NB_EMPTY_DOCKS),
    ]));
    Ok(table)
}

fn live_count(station: &Station, key: &str) -> String {
    match station.property(key) {
        Some(value) => value.to_string(),
        None => {
            warn!(station = %station.id, key, "station has no live count");
            String::new()
        }
    }
}

/// Fetch what `query` needs from `source` and answer it.
pub fn run(query: &Query, source: &dyn StationSource) -> Result<ResultTable> {
    match query {
        Query::SearchByName { matcher } => {
            let stations = source.fetch_all()?;
            Ok(search_with(matcher, &stations))
        }
        Query::SearchNearby { center, radius_m } => {
            let stations = source.fetch_all()?;
            Ok(search_nearby(*center, *radius_m, &stations))
        }
        Query::LookupById { id } => {
            let station = source.fetch_station(id)?;
            lookup(id, station.as_ref())
        }
    }
}
