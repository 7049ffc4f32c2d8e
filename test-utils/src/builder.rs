use crate::{context::TestContext, error::TestError};

/// Minimal GIF header used as the dance attachment in tests.
const TEST_GIF: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";

/// Builder for creating test contexts with customizable startup files.
///
/// Provides a fluent interface for configuring the bad-word pattern file and the dance
/// attachment, then call `build()` to write them into a temporary directory.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_bad_word("darn")
///     .with_bad_word(r"\bheck\b")
///     .with_dance_file()
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Lines of the bad-word pattern file, written in the order they were added.
    bad_words: Vec<String>,

    /// Whether to write the dance attachment to disk.
    dance_file: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty pattern file and no dance attachment.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            bad_words: Vec::new(),
            dance_file: false,
        }
    }

    /// Appends one line to the bad-word pattern file.
    ///
    /// The line is written verbatim, so it may also be blank or an invalid regex when a test
    /// needs to exercise the loader's error handling.
    ///
    /// # Arguments
    /// - `pattern` - Regular expression source for this line
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_bad_word(mut self, pattern: &str) -> Self {
        self.bad_words.push(pattern.to_string());
        self
    }

    /// Writes a small GIF to the dance attachment path during `build()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_dance_file(mut self) -> Self {
        self.dance_file = true;
        self
    }

    /// Builds the test context and writes the configured files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose pattern file (and optionally dance file) exist
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        let mut contents = self.bad_words.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        std::fs::write(&context.bad_words_path, contents)?;

        if self.dance_file {
            std::fs::write(&context.dance_path, TEST_GIF)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
