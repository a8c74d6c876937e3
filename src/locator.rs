use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::gps::{self, Coordinate};
use crate::maps;
use crate::scanner::{self, ImageFile, ScanError};

/// The outcome of locating a single photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationResult {
    /// A Google Maps search URL for the photo's GPS position.
    Url(String),
    /// The photo carries no GPS position.
    NotFound,
    /// The photo could not be read or its EXIF block could not be decoded.
    Error(String),
}

impl fmt::Display for LocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::NotFound => Ok(()),
            Self::Error(message) => f.write_str(message),
        }
    }
}

impl Serialize for LocationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // JSON output must agree with the text rendering per filename.
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub file_name: String,
    pub result: LocationResult,
}

/// Per-file results for one scanned directory, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationReport {
    pub entries: Vec<ReportEntry>,
}

impl LocationReport {
    /// Serializes the report as a `{"<filename>": "<result>"}` object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for LocationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.file_name, &entry.result)?;
        }
        map.end()
    }
}

/// Extracts the GPS position of a single photo and formats it as a map link.
///
/// Every failure is confined to this file's result: an unreadable file or an
/// undecodable EXIF block becomes [`LocationResult::Error`], and a missing or
/// malformed GPS tag group is logged and treated as "no position". The file
/// handle is released before returning, on every path.
pub fn locate_image(image: &ImageFile) -> LocationResult {
    tracing::debug!("decoding exif data for {}", image.name);

    let file = match File::open(&image.path) {
        Ok(file) => file,
        Err(err) => {
            let message = format!("failed to read file: {}", image.name);
            tracing::error!("{message} Error: {err}");
            return LocationResult::Error(message);
        }
    };

    let mut reader = BufReader::new(file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(err) => {
            let message = format!(
                "failed to decode exif data from file: {}, Error: {err}",
                image.name
            );
            tracing::error!("{message}");
            return LocationResult::Error(message);
        }
    };

    let coordinate = match gps::read_coordinate(&exif) {
        Ok(coordinate) => coordinate,
        Err(err) => {
            tracing::warn!(
                "failed to get latitude longitude data for file: {} Error: {err}",
                image.name
            );
            Coordinate::default()
        }
    };

    if coordinate.is_sentinel() {
        return LocationResult::NotFound;
    }
    LocationResult::Url(maps::search_url(&coordinate).to_string())
}

/// Scans `dir` and locates every JPEG in it, one file at a time.
///
/// Only the directory listing itself can fail; per-file problems are recorded
/// in that file's entry and never abort the batch.
pub fn locate_directory(dir: &Path) -> Result<LocationReport, ScanError> {
    let images = scanner::scan_directory(dir)?;
    let entries = images
        .iter()
        .map(|image| ReportEntry {
            file_name: image.name.clone(),
            result: locate_image(image),
        })
        .collect();
    Ok(LocationReport { entries })
}
