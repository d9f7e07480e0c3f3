use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::{AppError, SPEC_FILE, parse_bootstrap_peers};
use crate::ports::SpecStore;

/// Filesystem-based spec store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemSpecStore {
    root: PathBuf,
}

impl FilesystemSpecStore {
    /// Create a spec store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a spec store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Path shown to users: relative to the root, as typed on the command line.
    fn display_path(&self) -> PathBuf {
        PathBuf::from(SPEC_FILE)
    }
}

impl SpecStore for FilesystemSpecStore {
    fn spec_path(&self) -> PathBuf {
        self.root.join(SPEC_FILE)
    }

    fn create(&self, content: &str) -> Result<(), AppError> {
        // create_new keeps an existing file untouched even if two inits race.
        let mut file =
            match OpenOptions::new().write(true).create_new(true).open(self.spec_path()) {
                Ok(file) => file,
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    return Err(AppError::SpecExists { path: self.display_path() });
                }
                Err(err) => return Err(err.into()),
            };
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    fn load_peers(&self) -> Result<Vec<String>, AppError> {
        let content = fs::read_to_string(self.spec_path())
            .map_err(|source| AppError::SpecRead { path: self.display_path(), source })?;

        parse_bootstrap_peers(&content)
            .map_err(|source| AppError::SpecParse { path: self.display_path(), source })
    }
}
