use thiserror::Error;

/// The primary error type for the photo-locator crate.
///
/// Per-file problems never surface here; they are recorded as
/// [`LocationResult`](crate::locator::LocationResult) values so a batch always
/// completes. Only directory-level and report-encoding failures abort a run.
#[derive(Error, Debug)]
pub enum PhotoLocatorError {
    #[error("directory scan failed: {0}")]
    Scan(#[from] crate::scanner::ScanError),

    #[error("failed to convert report to JSON. Error: {0}")]
    Serialization(#[from] serde_json::Error),
}
