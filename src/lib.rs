//! Photo Chronicle - a folder sorter for photo collections
//!
//! This library organizes the images of a single folder into
//! `year/MM-MonthName` subdirectories based on their EXIF capture date
//! (the `DateTimeOriginal` tag), collecting statistics on sorted,
//! unsorted and invalid files along the way.
//!
//! The sorting engine lives in [`sorter`]. [`sort_folder`] offers a
//! callback-style entry point for embedding the engine in other
//! front-ends; the bundled binary is a thin CLI around [`Sorter`].

pub mod cli;
pub mod error;
pub mod exif;
pub mod os;
pub mod sorter;

#[cfg(test)]
mod testutil;

pub use cli::Cli;
pub use error::{AccessKind, Error, Result};
pub use sorter::{SortStats, SortSummary, Sorter, sort_folder};
