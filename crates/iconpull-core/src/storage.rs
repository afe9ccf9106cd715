//! Writing assets into the output directory.
//!
//! Each asset is written to its own hidden temp file (`.iconpull-XXXXXX.part`)
//! and renamed over `<name>`, so an existing file is replaced whole rather
//! than truncated in place. Concurrent writes of the same name never share a
//! temp file; the last rename wins.

use crate::error::{ConfigError, WriteError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Fixed prefix so temp names stay short even when `<name>` is at NAME_MAX.
const TEMP_PREFIX: &str = ".iconpull-";

/// Writes named files into one directory. The directory must already exist.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `data` to `{dir}/{filename}`, overwriting any existing file.
    /// Returns the final path.
    pub fn write(&self, filename: &str, data: &[u8]) -> Result<PathBuf, WriteError> {
        let final_path = self.dir.join(filename);
        match self.write_via_temp(data, &final_path) {
            Ok(()) => Ok(final_path),
            Err(source) => Err(WriteError {
                path: final_path,
                source,
            }),
        }
    }

    /// The temp file is removed on drop if anything fails before `persist`.
    fn write_via_temp(&self, data: &[u8], final_path: &Path) -> io::Result<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.dir)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(final_path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Creates the output directory for a run.
///
/// An existing directory is refused unless `overwrite` is set, so a second
/// run into the same place has to be asked for.
pub fn prepare_output_dir(dir: &Path, overwrite: bool) -> Result<(), ConfigError> {
    if dir.exists() && !overwrite {
        return Err(ConfigError::OutputDirExists(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|source| ConfigError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}
