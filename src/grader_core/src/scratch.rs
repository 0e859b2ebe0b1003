use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{GraderError, GraderResult};

/// Where fetched HTML is staged before it is graded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scratch {
    /// A fresh temporary file, removed once grading is done.
    #[default]
    Temporary,
    /// A caller-chosen path, created or overwritten and left in place.
    Path(PathBuf),
}

/// A written scratch file. Dropping it removes a temporary one.
#[derive(Debug)]
pub enum Staged {
    Temporary(NamedTempFile),
    Path(PathBuf),
}

impl Staged {
    pub fn path(&self) -> &Path {
        match self {
            Staged::Temporary(file) => file.path(),
            Staged::Path(path) => path,
        }
    }
}

impl Scratch {
    /// Writes `bytes` and hands back the file to read them from.
    pub fn stage(&self, bytes: &[u8]) -> GraderResult<Staged> {
        let staged = match self {
            Scratch::Temporary => {
                let mut file = NamedTempFile::new().map_err(|source| GraderError::Scratch {
                    path: std::env::temp_dir(),
                    source,
                })?;
                let written = file.write_all(bytes).and_then(|_| file.flush());
                if let Err(source) = written {
                    return Err(GraderError::Scratch {
                        path: file.path().to_path_buf(),
                        source,
                    });
                }
                Staged::Temporary(file)
            }
            Scratch::Path(path) => {
                fs::write(path, bytes).map_err(|source| GraderError::Scratch {
                    path: path.clone(),
                    source,
                })?;
                Staged::Path(path.clone())
            }
        };
        info!("Wrote {}", staged.path().display());
        Ok(staged)
    }
}
