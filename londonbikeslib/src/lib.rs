//! # londonbikeslib
//!
//! Query library for the London bike-share station registry (TfL "BikePoint").
//!
//! ## Overview
//!
//! The library answers three questions about the docking stations of the
//! network:
//!
//! - **Name search**: which stations have a name matching a pattern
//!   (case-insensitive)
//! - **Proximity search**: which stations lie within a radius, in metres, of
//!   a coordinate
//! - **Lookup**: the position and live bike/dock counts of one station
//!
//! Every answer is a [`ResultTable`] (header + rows of string cells) that
//! [`TableFormatter`] lays out as aligned text.
//!
//! ## Pipeline
//!
//! 1. **Source** ([`source`]): fetch stations from the BikePoint API or a
//!    local JSON snapshot
//! 2. **Data** ([`data`]): the station model and great-circle distance
//! 3. **Query** ([`query`]): validate the request, match and filter stations
//! 4. **Output** ([`output`]): build and format the result table
//!
//! ## Example
//!
//! ```rust
//! use londonbikeslib::{search_by_name, Station, TableFormatter};
//!
//! let stations = vec![Station::new("BP1", "Hyde Park Corner", 51.5027, -0.1527)];
//!
//! let table = search_by_name("hyde", &stations).unwrap();
//! assert_eq!(table.rows().len(), 1);
//!
//! let lines = TableFormatter::new(&table).render();
//! assert!(lines[0].starts_with("ID"));
//! assert!(lines[1].contains("Hyde Park Corner"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::geo::{great_circle_distance, EARTH_RADIUS_M};
pub use data::station::{AdditionalProperty, Coordinate, Station};
pub use error::LondonBikesError;
pub use output::{ResultRow, ResultTable, TableFormatter};
pub use query::engine::{lookup, run, search_by_name, search_nearby};
pub use query::matcher::NameMatcher;
pub use query::proximity::{NearbyStation, ProximityFilter};
pub use query::request::Query;
pub use source::{BikePointClient, SnapshotFile, SourceConfig, StationSource};

/// Result type for londonbikeslib operations
pub type Result<T> = std::result::Result<T, LondonBikesError>;
