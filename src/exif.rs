//! EXIF capture date extraction for images
//!
//! The engine only trusts `DateTimeOriginal`, the moment the shutter
//! fired. Files without it are counted as invalid rather than guessed
//! at from weaker sources like file timestamps.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Extract the capture date from a file's EXIF metadata.
pub fn capture_date(path: &Path) -> Result<NaiveDateTime> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| Error::ExifRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or_else(|| Error::ExifRead {
            path: path.to_path_buf(),
            message: "no DateTimeOriginal tag in EXIF data".to_string(),
        })?;

    let raw = field.display_value().to_string();
    match parse_exif_datetime(&raw) {
        Some(datetime) => {
            trace!(?path, %datetime, "Found EXIF capture date");
            Ok(datetime)
        }
        None => Err(Error::ExifRead {
            path: path.to_path_buf(),
            message: format!("unparseable DateTimeOriginal value: {raw}"),
        }),
    }
}

/// Parse an EXIF datetime string, normally "YYYY:MM:DD HH:MM:SS"
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    // display_value() quotes ASCII values
    let s = s.trim().trim_matches('"');

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S") {
        return Some(dt);
    }

    // Some cameras write subseconds or non-standard separators
    let formats = [
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
    ];

    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::tiff_with_date_original;
    use chrono::{Datelike, Timelike};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_exif_datetime() {
        let dt = parse_exif_datetime("2024:01:15 14:30:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);

        // As rendered by display_value()
        let dt = parse_exif_datetime("\"2024:01:15 14:30:00\"").unwrap();
        assert_eq!(dt.year(), 2024);

        // Alternative separators
        let dt = parse_exif_datetime("2024-01-15 14:30:00").unwrap();
        assert_eq!(dt.year(), 2024);

        assert!(parse_exif_datetime("invalid").is_none());
    }

    #[test]
    fn test_capture_date_from_exif_stream() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        fs::write(&path, tiff_with_date_original("2025:03:10 14:30:00")).unwrap();

        let taken = capture_date(&path).unwrap();
        assert_eq!((taken.year(), taken.month(), taken.day()), (2025, 3, 10));
        assert_eq!(taken.hour(), 14);
    }

    #[test]
    fn test_capture_date_rejects_non_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"not an image at all").unwrap();

        assert!(capture_date(&path).is_err());
    }

    #[test]
    fn test_capture_date_missing_file() {
        let dir = tempdir().unwrap();
        assert!(capture_date(&dir.path().join("gone.jpg")).is_err());
    }
}
