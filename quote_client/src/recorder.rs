//! Append-only quote log on disk.
use log::info;
use quote_common::{Quote, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one `Dólar: <bid>` line per quote to a text file.
pub struct QuoteRecorder {
    path: PathBuf,
}

impl QuoteRecorder {
    /// Recorder writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append the line for `quote`, creating the file if it does not exist yet.
    pub fn append(&self, quote: &Quote) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(quote.to_line().as_bytes())?;
        info!("Quote {} appended to {}", quote.bid(), self.path.display());
        Ok(())
    }

    /// File the lines go to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
