use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with an optional pre-existing config file.
///
/// Without `with_config_json()` the context starts with no config file at all,
/// which is how the bot sees a first run.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_config_json(r#"{"log_channel_id": 42, "activity": {}}"#)
///     .build()?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Raw contents written to the config file during `build()`.
    ///
    /// Written verbatim so tests can seed malformed files as well as valid ones.
    config_json: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no config file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the config file with `json`.
    ///
    /// # Arguments
    /// - `json` - File contents; not required to be valid JSON
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_config_json(mut self, json: &str) -> Self {
        self.config_json = Some(json.to_string());
        self
    }

    /// Creates the temporary directory and writes the seeded config file, if any.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose directory is removed when it is dropped
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new()?;

        if let Some(json) = self.config_json {
            std::fs::write(&test.config_path, json)?;
        }

        Ok(test)
    }
}
