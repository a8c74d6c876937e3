use url::Url;

use crate::gps::Coordinate;

/// Base endpoint for Google Maps search links.
const SEARCH_BASE: &str = "https://www.google.com/maps/search/";
const API_VERSION: &str = "1";

/// Builds a Google Maps search URL for a coordinate.
///
/// The query value is `<lat>,<lng>` with six fractional digits, so the same
/// coordinate always produces the same URL text. Query serialization
/// percent-encodes the separator (`,` becomes `%2C`).
pub fn search_url(coordinate: &Coordinate) -> Url {
    let query = format!(
        "{:.6},{:.6}",
        coordinate.latitude, coordinate.longitude
    );
    // The base is a compile-time constant; failing to parse it is a bug.
    Url::parse_with_params(SEARCH_BASE, [("api", API_VERSION), ("query", query.as_str())])
        .expect("maps search base URL is valid")
}
