use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::TestError;

/// File name of the bot config inside the test directory.
pub const CONFIG_FILE_NAME: &str = "bot_config.json";

/// Test context owning a temporary directory for the bot config file.
///
/// The directory and everything in it are deleted when the context is dropped, so
/// keep the context alive for the whole test.
pub struct TestContext {
    /// Temporary directory holding the config file.
    pub dir: TempDir,

    /// Path of the config file inside `dir`. The file may not exist.
    pub config_path: PathBuf,
}

impl TestContext {
    /// Creates a context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no config file written yet
    /// - `Err(TestError::Io)` - The temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        Ok(Self { dir, config_path })
    }

    /// Reads the config file as text.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Current contents of the file
    /// - `Ok(None)` - The file does not exist
    /// - `Err(io::Error)` - The file exists but could not be read
    pub fn read_config(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.config_path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Lists the names of the files in the test directory, sorted.
    ///
    /// Used to check that saves leave no temporary files behind.
    pub fn file_names(&self) -> io::Result<Vec<String>> {
        let mut names = std::fs::read_dir(self.dir.path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();

        Ok(names)
    }
}
