//! Shared fixtures for unit tests.

/// Build a minimal little-endian TIFF stream whose only content is an
/// EXIF `DateTimeOriginal` field. `exif::Reader` identifies TIFF by
/// its magic bytes regardless of file extension, so the result stands
/// in for a photographed image in tests.
pub(crate) fn tiff_with_date_original(date: &str) -> Vec<u8> {
    assert_eq!(date.len(), 19, "EXIF datetime must be YYYY:MM:DD HH:MM:SS");

    let mut buf = Vec::with_capacity(64);
    // header: byte order, magic, offset of IFD0
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());
    // IFD0: a single entry pointing at the Exif sub-IFD
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x8769u16.to_le_bytes()); // ExifIFDPointer
    buf.extend_from_slice(&4u16.to_le_bytes()); // LONG
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&26u32.to_le_bytes()); // sub-IFD offset
    buf.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    // Exif sub-IFD: DateTimeOriginal as 20-byte ASCII
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x9003u16.to_le_bytes()); // DateTimeOriginal
    buf.extend_from_slice(&2u16.to_le_bytes()); // ASCII
    buf.extend_from_slice(&20u32.to_le_bytes());
    buf.extend_from_slice(&44u32.to_le_bytes()); // value offset
    buf.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    // value area
    buf.extend_from_slice(date.as_bytes());
    buf.push(0);
    buf
}
