//! CLI argument parsing with clap

use clap::Parser;
use std::path::PathBuf;

/// Photo Chronicle - organize a photo folder by capture date
///
/// Scans a folder for images carrying an EXIF capture date and moves
/// each one into a `year/MM-MonthName` subdirectory, reporting how
/// many files were sorted, left unsorted or skipped as invalid.
#[derive(Parser, Debug)]
#[command(name = "photo-chronicle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Folder containing the images to sort
    pub folder: PathBuf,

    /// Show what would be done without creating directories or moving files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the final summary as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write a detailed log to this file
    #[arg(long, env = "PHOTO_CHRONICLE_LOG")]
    pub log_file: Option<PathBuf>,

    /// Write the file log as JSON lines
    #[arg(long, requires = "log_file")]
    pub json_log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::try_parse_from(["photo-chronicle", "/photos"]).unwrap();
        assert_eq!(cli.folder, PathBuf::from("/photos"));
        assert!(!cli.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn test_json_log_requires_log_file() {
        assert!(Cli::try_parse_from(["photo-chronicle", "/photos", "--json-log"]).is_err());
        assert!(
            Cli::try_parse_from([
                "photo-chronicle",
                "/photos",
                "--json-log",
                "--log-file",
                "run.log"
            ])
            .is_ok()
        );
    }
}
