//! Query processing: validate a request, select stations, build the table.
//!
//! This module handles the third stage of the pipeline. It provides:
//!
//! - **Query**: a validated request built from raw command arguments
//! - **NameMatcher**: case-insensitive pattern search over station names
//! - **ProximityFilter**: stations within a radius of a coordinate
//! - **engine**: one entry point per query mode, each returning a
//!   [`ResultTable`](crate::output::ResultTable)
//!
//! ## Example
//!
//! ```rust
//! use londonbikeslib::query::{search_nearby, Query};
//! use londonbikeslib::{Coordinate, Station};
//!
//! let query = Query::search_from_args(&["51.5027", "-0.1527", "100"]).unwrap();
//! assert!(matches!(query, Query::SearchNearby { .. }));
//!
//! let stations = vec![Station::new("BP1", "Hyde Park Corner", 51.5027, -0.1527)];
//! let table = search_nearby(Coordinate::new(51.5027, -0.1527), 0.0, &stations);
//! assert_eq!(table.rows()[0].cells()[3], "0.0");
//! ```

pub mod engine;
pub mod matcher;
pub mod proximity;
pub mod request;

pub use engine::{lookup, run, search_by_name, search_nearby, search_with};
pub use matcher::NameMatcher;
pub use proximity::{NearbyStation, ProximityFilter};
pub use request::Query;
