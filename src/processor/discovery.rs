//! Input discovery for batch conversion
//!
//! Export directories are laid out as one subfolder per export, each holding
//! one or more JSON documents:
//! ```text
//! input/
//!   2021_JULY/
//!     2021_JULY.json
//!   2021_AUGUST/
//!     2021_AUGUST.json
//! ```
//! Files directly under the input directory and deeper nesting are ignored.

use crate::constants::INPUT_FILE_EXTENSION;
use crate::error::{ConverterError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Finds the JSON documents of a batch input directory
#[derive(Debug)]
pub struct InputDiscovery {
    input_dir: PathBuf,
}

impl InputDiscovery {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// All `*.json` files in immediate subfolders, sorted by path
    pub fn discover_json_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(ConverterError::InputNotFound {
                path: self.input_dir.clone(),
            });
        }

        debug!("Searching for JSON files in: {}", self.input_dir.display());

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input_dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => ConverterError::Io(io),
                None => ConverterError::configuration(format!(
                    "Filesystem loop under {}",
                    self.input_dir.display()
                )),
            })?;

            if entry.file_type().is_file() && has_json_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        debug!("Found {} JSON files", files.len());
        Ok(files)
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_FILE_EXTENSION))
}
