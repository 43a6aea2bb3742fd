//! Writes generated documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::emit::Artifacts;
use crate::{Error, Result};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "Generated";

impl Artifacts {
    /// Write all three documents into `dir`, creating it if needed.
    ///
    /// Returns the written paths in table, header, source order.
    pub fn write_to(&self, dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| Error::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let outputs = [
            (config.table_header_name(), &self.table_header),
            (config.class_header_name(), &self.class_header),
            (config.class_source_name(), &self.class_source),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (file_name, contents) in outputs {
            let path = dir.join(file_name);
            fs::write(&path, contents).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {} ({} bytes)", path.display(), contents.len());
            written.push(path);
        }
        Ok(written)
    }
}
