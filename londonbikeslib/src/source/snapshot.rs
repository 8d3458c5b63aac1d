//! Station data from a saved BikePoint response.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::StationSource;
use crate::data::station::Station;
use crate::error::LondonBikesError;
use crate::Result;

/// A JSON file holding the array the BikePoint list endpoint returns.
///
/// The file is read on every fetch; nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StationSource for SnapshotFile {
    fn fetch_all(&self) -> Result<Vec<Station>> {
        let file = File::open(&self.path).map_err(|source| LondonBikesError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let stations: Vec<Station> = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), count = stations.len(), "loaded snapshot");
        Ok(stations)
    }

    fn fetch_station(&self, id: &str) -> Result<Option<Station>> {
        Ok(self.fetch_all()?.into_iter().find(|s| s.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"[
        {
            "id": "BikePoints_1",
            "commonName": "River Street , Clerkenwell",
            "lat": 51.529163,
            "lon": -0.10997,
            "additionalProperties": [
                {"key": "NbBikes", "value": "7"},
                {"key": "NbEmptyDocks", "value": "12"}
            ]
        },
        {"id": "BP1", "commonName": "Hyde Park Corner", "lat": 51.5027, "lon": -0.1527}
    ]"#;

    #[test]
    fn test_fetch_all() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bikepoints.json");
        fs::write(&path, SNAPSHOT).unwrap();

        let stations = SnapshotFile::new(&path).fetch_all().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "BikePoints_1");
        assert_eq!(stations[1].name, "Hyde Park Corner");
    }

    #[test]
    fn test_fetch_station() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bikepoints.json");
        fs::write(&path, SNAPSHOT).unwrap();
        let source = SnapshotFile::new(&path);

        let station = source.fetch_station("BikePoints_1").unwrap().unwrap();
        assert_eq!(station.bikes_available(), Some("7"));
        assert!(source.fetch_station("BikePoints_9999").unwrap().is_none());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = SnapshotFile::new(&path).fetch_all().unwrap_err();
        assert!(matches!(err, LondonBikesError::FileRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        let err = SnapshotFile::new(&path).fetch_all().unwrap_err();
        assert!(matches!(err, LondonBikesError::Json(_)));
    }
}
