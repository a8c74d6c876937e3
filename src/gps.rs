use exif::{Exif, In, Rational, Tag, Value};
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Whether this coordinate is the "no GPS data" sentinel.
    ///
    /// (0, 0) doubles as "absent", so a photo genuinely taken at the
    /// equator/prime-meridian intersection is reported as having no location.
    /// Known false negative, kept for compatibility with the original tool.
    pub fn is_sentinel(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

#[derive(Error, Debug)]
pub enum GpsError {
    #[error("missing GPS tag: {0}")]
    MissingTag(Tag),

    #[error("unexpected value format for GPS tag: {0}")]
    UnexpectedFormat(Tag),

    #[error("unknown hemisphere reference: {0:?}")]
    UnknownReference(String),
}

/// Reads the GPS tag group from a decoded EXIF block.
///
/// Latitude and longitude are each stored as a degree/minute/second rational
/// triple plus a hemisphere reference letter that determines the sign.
pub fn read_coordinate(exif: &Exif) -> Result<Coordinate, GpsError> {
    Ok(Coordinate {
        latitude: axis_degrees(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef)?,
        longitude: axis_degrees(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef)?,
    })
}

fn axis_degrees(exif: &Exif, value_tag: Tag, ref_tag: Tag) -> Result<f64, GpsError> {
    let field = exif
        .get_field(value_tag, In::PRIMARY)
        .ok_or(GpsError::MissingTag(value_tag))?;
    let degrees = match &field.value {
        Value::Rational(dms) => {
            dms_to_decimal(dms).ok_or(GpsError::UnexpectedFormat(value_tag))?
        }
        _ => return Err(GpsError::UnexpectedFormat(value_tag)),
    };
    Ok(degrees * hemisphere_sign(exif, ref_tag)?)
}

fn hemisphere_sign(exif: &Exif, ref_tag: Tag) -> Result<f64, GpsError> {
    let field = exif
        .get_field(ref_tag, In::PRIMARY)
        .ok_or(GpsError::MissingTag(ref_tag))?;
    let reference = match &field.value {
        Value::Ascii(parts) if !parts.is_empty() => String::from_utf8_lossy(&parts[0]),
        _ => return Err(GpsError::UnexpectedFormat(ref_tag)),
    };
    match reference.as_ref() {
        "N" | "E" => Ok(1.0),
        "S" | "W" => Ok(-1.0),
        other => Err(GpsError::UnknownReference(other.to_string())),
    }
}

/// `degrees + minutes/60 + seconds/3600`
fn dms_to_decimal(dms: &[Rational]) -> Option<f64> {
    let [degrees, minutes, seconds] = dms else {
        return None;
    };
    Some(degrees.to_f64() + minutes.to_f64() / 60.0 + seconds.to_f64() / 3600.0)
}
