//! # Photo Locator
//!
//! Turn a folder of photos into Google Maps links.
//!
//! This crate scans a directory for JPEG files, decodes the EXIF block
//! embedded in each one, and converts the GPS tag group (degree/minute/second
//! rational triples plus hemisphere references) into a ready-to-open map
//! search URL.
//!
//! ## Key Features
//!
//! - **Directory Scanning**: Lists the `.jpg` files (case-insensitive) directly
//!   inside a folder, skipping subdirectories.
//! - **GPS Extraction**: Reads the EXIF GPS tag group and converts it to
//!   decimal degrees.
//! - **Map Links**: Formats coordinates as Google Maps search URLs with exact,
//!   reproducible encoding.
//! - **Partial-Failure Isolation**: A file that cannot be read or decoded is
//!   reported in its own result slot; the rest of the batch is unaffected.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use photo_locator::locator::locate_directory;
//!
//! fn main() -> Result<(), photo_locator::error::PhotoLocatorError> {
//!     let report = locate_directory(Path::new("photos"))?;
//!     for entry in &report.entries {
//!         println!("{}: {}", entry.file_name, entry.result);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gps;
pub mod locator;
pub mod maps;
pub mod scanner;

#[cfg(test)]
mod test_utils;
