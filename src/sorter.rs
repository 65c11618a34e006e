//! The folder sorting engine
//!
//! Handles the core logic of:
//! - Verifying access to the selected folder
//! - Scanning its direct children for images with an EXIF capture date
//! - Grouping eligible files by (year, month)
//! - Moving each group into a `year/MM-MonthName` subdirectory
//! - Accumulating statistics on the outcomes
//!
//! A run is synchronous and single-threaded; callers are responsible
//! for not starting a second run while one is in flight.

use crate::error::{AccessKind, Error, Result};
use crate::exif;
use crate::os;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// English month names for destination directories, indexed by month - 1
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Directory name for a month group: zero-padded number plus name
fn month_dir_name(month: u32) -> String {
    format!("{:02}-{}", month, MONTH_NAMES[(month - 1) as usize])
}

/// Counters accumulated over one sort run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Files moved into their year/month directory
    pub sorted: usize,
    /// Eligible files whose move failed
    pub unsorted: usize,
    /// Month groups whose destination directory could not be created
    pub directory_failures: usize,
    /// Files without a usable capture date
    pub invalid: usize,
}

/// Outcome of a completed sort run
#[derive(Debug, Clone, Serialize)]
pub struct SortSummary {
    /// The folder that was sorted
    pub folder: PathBuf,
    /// Outcome counters
    #[serde(flatten)]
    pub stats: SortStats,
}

impl SortSummary {
    /// Render the summary for display
    pub fn message(&self) -> String {
        format!(
            "Sorting of directory {} has finished.\n\
             Statistics:\n\
             Number of files sorted: {}\n\
             Number of files which couldn't be sorted: {}\n\
             Number of directory creation failures: {}\n\
             Number of invalid files: {}",
            self.folder.display(),
            self.stats.sorted,
            self.stats.unsorted,
            self.stats.directory_failures,
            self.stats.invalid,
        )
    }
}

/// Engine that sorts the files of one folder per run
pub struct Sorter {
    folder: PathBuf,
    dry_run: bool,
    /// year -> month -> filenames, rebuilt at the start of each run
    groups: BTreeMap<i32, BTreeMap<u32, Vec<OsString>>>,
    stats: SortStats,
}

impl Sorter {
    /// Create an engine for the given folder
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            dry_run: false,
            groups: BTreeMap::new(),
            stats: SortStats::default(),
        }
    }

    /// Preview the run without creating directories or moving files
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Counters of the most recent run
    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    /// Run one full sort: verify, scan, move, summarize.
    ///
    /// Verification failures, a failed directory listing and the
    /// nothing-was-sorted outcome are returned as errors whose display
    /// text is the message to show the user. Per-file problems are
    /// absorbed into the counters instead.
    pub fn run(&mut self) -> Result<SortSummary> {
        self.verify_access()?;
        self.reset();
        self.scan()?;
        self.move_groups();

        if self.stats.sorted == 0 {
            info!(folder = %self.folder.display(), stats = ?self.stats, "No files sorted");
            return Err(Error::NoFilesSorted);
        }

        info!(folder = %self.folder.display(), stats = ?self.stats, "Sorting finished");
        Ok(SortSummary {
            folder: self.folder.clone(),
            stats: self.stats,
        })
    }

    /// Checks run in a fixed order and the first failure wins. Nothing
    /// on the filesystem is modified here, so verification alone is
    /// repeatable.
    fn verify_access(&self) -> Result<()> {
        if self.folder.as_os_str().is_empty() {
            return Err(Error::InvalidPath);
        }
        if !self.folder.exists() {
            return Err(Error::NotFound(self.folder.clone()));
        }
        if !self.folder.is_dir() {
            return Err(Error::NotADirectory(self.folder.clone()));
        }
        if !os::is_writable(&self.folder) {
            return Err(Error::AccessDenied {
                path: self.folder.clone(),
                operation: AccessKind::Write,
            });
        }
        if !os::is_readable(&self.folder) {
            return Err(Error::AccessDenied {
                path: self.folder.clone(),
                operation: AccessKind::Read,
            });
        }
        Ok(())
    }

    /// Discard state from any previous run
    fn reset(&mut self) {
        self.groups.clear();
        self.stats = SortStats::default();
    }

    /// Enumerate direct children of the folder and classify each file
    /// by capture date. Subdirectories are not candidates and are not
    /// descended into.
    fn scan(&mut self) -> Result<()> {
        for entry in WalkDir::new(&self.folder).min_depth(1).max_depth(1) {
            let entry = entry.map_err(Error::DirectoryListing)?;
            if entry.path().is_dir() {
                continue;
            }
            self.classify(entry.path());
        }
        Ok(())
    }

    /// File the entry under its (year, month) group, or count it as
    /// invalid when no capture date can be extracted.
    fn classify(&mut self, path: &Path) {
        let Some(name) = path.file_name() else {
            self.stats.invalid += 1;
            return;
        };

        match exif::capture_date(path) {
            Ok(taken) => {
                debug!(?path, %taken, "Eligible file");
                self.groups
                    .entry(taken.year())
                    .or_default()
                    .entry(taken.month())
                    .or_default()
                    .push(name.to_os_string());
            }
            Err(e) => {
                debug!(?path, error = %e, "No usable capture date");
                self.stats.invalid += 1;
            }
        }
    }

    /// Move every group into its `year/MM-MonthName` directory. A group
    /// whose destination directory cannot be created is skipped whole:
    /// none of its files are moved or counted as sorted or unsorted.
    fn move_groups(&mut self) {
        let groups = std::mem::take(&mut self.groups);

        for (year, months) in &groups {
            for (month, files) in months {
                let dest_dir = self
                    .folder
                    .join(year.to_string())
                    .join(month_dir_name(*month));

                if !self.dry_run
                    && !dest_dir.exists()
                    && let Err(e) = fs::create_dir_all(&dest_dir)
                {
                    warn!(dir = %dest_dir.display(), error = %e, "Failed to create destination directory");
                    self.stats.directory_failures += 1;
                    continue;
                }

                for name in files {
                    self.move_file(&self.folder.join(name), &dest_dir.join(name));
                }
            }
        }
    }

    /// Move one file and count the outcome. Collisions and I/O errors
    /// are recorded as unsorted, never bubbled up.
    fn move_file(&mut self, source: &Path, dest: &Path) {
        if self.dry_run {
            info!(source = %source.display(), dest = %dest.display(), "Would move file");
            self.stats.sorted += 1;
            return;
        }

        let moved = if dest.exists() {
            Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            ))
        } else {
            fs::rename(source, dest)
        };

        match moved {
            Ok(()) => {
                debug!(source = %source.display(), dest = %dest.display(), "Moved file");
                self.stats.sorted += 1;
            }
            Err(e) => {
                warn!(source = %source.display(), error = %e, "Failed to move file");
                self.stats.unsorted += 1;
            }
        }
    }
}

/// Sink-style entry point: runs one sort and hands the resulting
/// message to exactly one of the two callbacks.
pub fn sort_folder(
    folder: impl Into<PathBuf>,
    on_error: impl FnOnce(&str),
    on_info: impl FnOnce(&str),
) {
    match Sorter::new(folder).run() {
        Ok(summary) => on_info(&summary.message()),
        Err(e) => on_error(&e.to_string()),
    }
}
