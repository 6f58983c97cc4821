//! GeoJSON output writing

use crate::error::Result;
use crate::models::FeatureCollection;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

/// Writes feature collections as pretty-printed GeoJSON
#[derive(Debug)]
pub struct GeoJsonWriter {
    output_path: PathBuf,
}

impl GeoJsonWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Write `collection`, creating parent directories as needed.
    ///
    /// Returns the size of the written file in bytes.
    pub fn write(&self, collection: &FeatureCollection) -> Result<u64> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!(
            "Writing {} features to {}",
            collection.len(),
            self.output_path.display()
        );

        let file = File::create(&self.output_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, collection)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(fs::metadata(&self.output_path)?.len())
    }
}
