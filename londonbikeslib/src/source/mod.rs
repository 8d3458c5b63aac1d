//! Station sources: where the station list comes from.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **StationSource**: the trait queries fetch through
//! - **BikePointClient**: the TfL BikePoint HTTP API
//! - **SnapshotFile**: a saved BikePoint JSON response on disk
//! - **SourceConfig**: endpoint, credentials and timeout, built once
//!
//! ## Example
//!
//! ```rust,no_run
//! use londonbikeslib::source::{BikePointClient, SourceConfig, StationSource};
//!
//! let client = BikePointClient::new(SourceConfig::from_env())?;
//! let stations = client.fetch_all()?;
//! println!("{} stations", stations.len());
//! # Ok::<(), londonbikeslib::LondonBikesError>(())
//! ```

pub mod client;
pub mod config;
pub mod snapshot;

pub use client::BikePointClient;
pub use config::SourceConfig;
pub use snapshot::SnapshotFile;

use crate::data::station::Station;
use crate::Result;

/// Supplies station records to the query layer.
///
/// Each call is a complete, read-only snapshot; nothing is cached between
/// calls.
pub trait StationSource {
    /// Every station in the registry, in registry order.
    fn fetch_all(&self) -> Result<Vec<Station>>;

    /// One station by id, or `None` when the registry does not know it.
    fn fetch_station(&self, id: &str) -> Result<Option<Station>>;
}
