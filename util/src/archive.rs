//! Struct archiving functionality
//!
//! To add archiving functionality to a struct implement the `Archived` trait.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use std::path::Path;
use std::fs::{File, OpenOptions};
use csv::WriterBuilder;
pub use csv::Writer;

// Internal imports
use crate::session::Session;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An object used to write CSV archive files.
///
/// A default archiver has no file attached and silently drops records, which
/// lets modules run without a session.
#[derive(Default)]
pub struct Archiver {
    writer: Option<Writer<File>>
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A trait which enables a struct to be archived as a timestamped csv.
///
/// To implement this trait, the struct shall have an `Archiver` member which
/// shall be setup in the struct's `init` or `new` functions.
pub trait Archived {
    /// Write the archives for this struct
    fn write(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Archiver {
    /// Create a new archiver from a paricular path relative to the session's
    /// archive root, writing the given column headers as the first row.
    pub fn from_path<P: AsRef<Path>>(
        session: &Session, path: P, headers: &[&str]
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let session_path = session.arch_root.join(path);

        if let Some(parent) = session_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create the file if it does not exist
        std::fs::File::create(session_path.clone())?;

        // Open the file in append mode
        let file = OpenOptions::new()
            .append(true).open(session_path)?;

        let mut w = WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        w.write_record(headers)?;
        w.flush()?;

        Ok(Self {
            writer: Some(w)
        })
    }

    /// Returns true if this archiver is attached to a file.
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Write a row of numeric values into the archive.
    pub fn write_row(
        &mut self, row: &[f64]
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut w) = self.writer {
            w.write_record(row.iter().map(|v| v.to_string()))?;
            w.flush()?;
        }

        Ok(())
    }
}
