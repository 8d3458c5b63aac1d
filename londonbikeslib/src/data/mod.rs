//! Station data: the record model and geometry over it.
//!
//! - **Station**: one docking station as supplied by the registry
//! - **Coordinate**: a latitude/longitude pair in degrees
//! - **geo**: great-circle distance between coordinates
//!
//! Stations are immutable snapshots. Queries borrow them and never mutate
//! the list they were handed.

pub mod geo;
pub mod station;

pub use geo::{great_circle_distance, EARTH_RADIUS_M};
pub use station::{AdditionalProperty, Coordinate, Station, NB_BIKES, NB_EMPTY_DOCKS};
