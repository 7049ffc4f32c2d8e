use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test environment holding the files the bot reads at startup.
///
/// The temporary directory is removed when the context is dropped, so keep the context alive
/// for as long as the test needs the paths.
pub struct TestContext {
    /// Temporary directory owning every file created for this test.
    dir: TempDir,

    /// Path to the bad-word pattern file (one regex per line).
    ///
    /// Always written by `TestBuilder::build()`, possibly empty.
    pub bad_words_path: PathBuf,

    /// Path to the dance attachment.
    ///
    /// Only exists on disk when the builder was configured with `with_dance_file()`, which lets
    /// tests exercise the missing-file error path.
    pub dance_path: PathBuf,
}

impl TestContext {
    /// Creates a new test context rooted in a fresh temporary directory.
    ///
    /// No files are written; `TestBuilder::build()` is responsible for populating them.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with paths pointing inside the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, crate::error::TestError> {
        let dir = tempfile::tempdir()?;
        let bad_words_path = dir.path().join("bad_words.txt");
        let dance_path = dir.path().join("dance.gif");

        Ok(Self {
            dir,
            bad_words_path,
            dance_path,
        })
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes an arbitrary file inside the temporary directory and returns its path.
    ///
    /// # Arguments
    /// - `name` - File name relative to the temporary directory
    /// - `contents` - Bytes to write
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Absolute path of the written file
    /// - `Err(TestError::Io)` - Failed to write the file
    pub fn write_file(
        &self,
        name: &str,
        contents: impl AsRef<[u8]>,
    ) -> Result<PathBuf, crate::error::TestError> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
