//! Platform-specific filesystem access checks.

use std::path::Path;

/// Check whether the current process may create entries in `path`.
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::W_OK).is_ok()
}

/// Check whether the current process may list the contents of `path`.
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::R_OK).is_ok()
}

/// Check whether the current process may create entries in `path`.
///
/// The readonly attribute is the only cheap signal on Windows; full
/// ACL evaluation is left to the actual file operations.
#[cfg(windows)]
pub fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Check whether the current process may list the contents of `path`.
#[cfg(windows)]
pub fn is_readable(path: &Path) -> bool {
    std::fs::read_dir(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tempdir_is_accessible() {
        let dir = tempdir().unwrap();
        assert!(is_writable(dir.path()));
        assert!(is_readable(dir.path()));
    }

    #[test]
    fn test_missing_path_is_not_accessible() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("missing");
        assert!(!is_writable(&gone));
        assert!(!is_readable(&gone));
    }
}
