//! Station records as delivered by the BikePoint registry.

use serde::{Deserialize, Serialize};

/// Additional-property key carrying the number of docked bikes.
pub const NB_BIKES: &str = "NbBikes";

/// Additional-property key carrying the number of free docks.
pub const NB_EMPTY_DOCKS: &str = "NbEmptyDocks";

/// A latitude/longitude pair in degrees (WGS-84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One key/value entry from a station's `additionalProperties` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalProperty {
    pub key: String,
    pub value: String,
}

/// A docking station.
///
/// Field names follow the registry's JSON (`commonName`, `lat`, `lon`,
/// `additionalProperties`), so a station list deserializes directly from
/// the API response. Coordinates are not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Stable identifier, e.g. `BikePoints_1`
    pub id: String,
    /// Display name
    #[serde(rename = "commonName")]
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Live metadata such as bike and dock counts
    #[serde(rename = "additionalProperties", default)]
    pub additional_properties: Vec<AdditionalProperty>,
}

impl Station {
    /// Create a station with no additional properties.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            additional_properties: Vec::new(),
        }
    }

    /// Builder: attach an additional property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_properties.push(AdditionalProperty {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Value of an additional property by key.
    ///
    /// When a key repeats, the last entry wins.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.additional_properties
            .iter()
            .rev()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Number of docked bikes, if the registry reported it.
    pub fn bikes_available(&self) -> Option<&str> {
        self.property(NB_BIKES)
    }

    /// Number of free docks, if the registry reported it.
    pub fn empty_docks(&self) -> Option<&str> {
        self.property(NB_EMPTY_DOCKS)
    }
}
