//! Builders for synthetic EXIF payloads, so tests need no image assets.

const GPS_IFD_POINTER: u16 = 0x8825;
const GPS_LATITUDE_REF: u16 = 0x0001;
const GPS_LATITUDE: u16 = 0x0002;
const GPS_LONGITUDE_REF: u16 = 0x0003;
const GPS_LONGITUDE: u16 = 0x0004;
const SOFTWARE: u16 = 0x0131;

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

fn push_entry(tiff: &mut Vec<u8>, tag: u16, field_type: u16, count: u32, value: u32) {
    tiff.extend_from_slice(&tag.to_le_bytes());
    tiff.extend_from_slice(&field_type.to_le_bytes());
    tiff.extend_from_slice(&count.to_le_bytes());
    tiff.extend_from_slice(&value.to_le_bytes());
}

fn push_ascii_entry(tiff: &mut Vec<u8>, tag: u16, letter: u8) {
    // A two-byte NUL-terminated string fits in the inline value field.
    push_entry(tiff, tag, TYPE_ASCII, 2, u32::from_le_bytes([letter, 0, 0, 0]));
}

fn tiff_header() -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff
}

/// A little-endian TIFF buffer whose GPS IFD holds the given latitude and
/// longitude DMS triples and hemisphere reference letters.
pub fn gps_tiff(
    latitude: [(u32, u32); 3],
    latitude_ref: u8,
    longitude: [(u32, u32); 3],
    longitude_ref: u8,
) -> Vec<u8> {
    let mut tiff = tiff_header();

    // IFD0 (offset 8): a single pointer to the GPS IFD at offset 26.
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, GPS_IFD_POINTER, TYPE_LONG, 1, 26);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // GPS IFD (offset 26): four entries, rational data at offsets 80 and 104.
    tiff.extend_from_slice(&4u16.to_le_bytes());
    push_ascii_entry(&mut tiff, GPS_LATITUDE_REF, latitude_ref);
    push_entry(&mut tiff, GPS_LATITUDE, TYPE_RATIONAL, 3, 80);
    push_ascii_entry(&mut tiff, GPS_LONGITUDE_REF, longitude_ref);
    push_entry(&mut tiff, GPS_LONGITUDE, TYPE_RATIONAL, 3, 104);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    for (num, denom) in latitude.into_iter().chain(longitude) {
        tiff.extend_from_slice(&num.to_le_bytes());
        tiff.extend_from_slice(&denom.to_le_bytes());
    }
    tiff
}

/// A valid TIFF buffer with no GPS IFD at all.
pub fn plain_tiff() -> Vec<u8> {
    let mut tiff = tiff_header();
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_ascii_entry(&mut tiff, SOFTWARE, b'x');
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff
}

/// Wraps a TIFF buffer in a minimal JPEG container (SOI, APP1 `Exif`, EOI).
pub fn exif_jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(tiff);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}
