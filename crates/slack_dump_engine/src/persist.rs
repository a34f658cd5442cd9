use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::DumpError;

/// Extension of every saved file, whatever format Slack served.
pub const IMAGE_EXTENSION: &str = "png";

/// Create the output directory; refuse if it already exists.
///
/// Only the last path component is created, so a missing parent is an error.
pub fn create_output_dir(dir: &Path) -> Result<(), DumpError> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Err(DumpError::OutputDirExists(dir.to_path_buf()))
        }
        Err(err) => Err(DumpError::Io(err)),
    }
}

/// Writes downloaded bodies as `{dir}/{index}.png`.
///
/// Each body is staged in a hidden `.partial-*` file and only renamed into
/// place once complete; an existing `{index}.png` is never overwritten.
pub struct MatchWriter {
    dir: PathBuf,
}

impl MatchWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{index}.{IMAGE_EXTENSION}"))
    }

    pub fn write(&self, index: usize, content: &[u8]) -> Result<PathBuf, DumpError> {
        let target = self.path_for(index);
        let mut staged = tempfile::Builder::new()
            .prefix(".partial-")
            .tempfile_in(&self.dir)?;
        staged.write_all(content)?;
        staged.as_file().sync_data()?;
        staged
            .persist_noclobber(&target)
            .map_err(|err| DumpError::Io(err.error))?;
        Ok(target)
    }
}
