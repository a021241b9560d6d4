//! Read-all / write-all persistence of the bot config.

use serenity::async_trait;
use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use crate::{error::storage::StorageError, model::bot_config::BotConfig};

/// Loads and saves the complete bot config.
///
/// There is no partial-update API: callers read the whole mapping at startup and
/// write the whole mapping after every change.
#[async_trait]
pub trait ConfigPersistence: Send + Sync {
    async fn load(&self) -> Result<BotConfig, StorageError>;

    async fn save(&self, config: &BotConfig) -> Result<(), StorageError>;
}

/// Stores the bot config as a JSON file.
///
/// Saves write a sibling `<file>.tmp` and rename it over the target, so a failed
/// write never leaves a truncated config behind. Each I/O operation is retried once
/// before giving up.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn write_then_replace(&self, bytes: &[u8]) -> io::Result<()> {
        let temp_path = self.temp_path();

        if let Err(e) = tokio::fs::write(&temp_path, bytes).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e);
        }

        tokio::fs::rename(&temp_path, &self.path).await
    }

    fn unavailable(&self, source: io::Error) -> StorageError {
        StorageError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ConfigPersistence for JsonFileStore {
    /// Reads the config file.
    ///
    /// # Returns
    /// - `Ok(BotConfig)` - Parsed config, or the default config if the file does not exist
    /// - `Err(StorageError::Unavailable)` - File could not be read after a retry
    /// - `Err(StorageError::Corrupt)` - File is not valid config JSON
    async fn load(&self) -> Result<BotConfig, StorageError> {
        let contents = match retry_once(|| tokio::fs::read_to_string(&self.path)).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    "No bot config at {}, starting with defaults",
                    self.path.display()
                );
                return Ok(BotConfig::default());
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the whole config to disk.
    ///
    /// # Returns
    /// - `Ok(())` - Config replaced on disk
    /// - `Err(StorageError::Unavailable)` - Write or rename failed twice; the previous
    ///   file is left as it was
    async fn save(&self, config: &BotConfig) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(config).map_err(StorageError::Encode)?;

        retry_once(|| self.write_then_replace(&bytes))
            .await
            .map_err(|e| self.unavailable(e))
    }
}

/// Runs an I/O operation, retrying once unless the error is `NotFound`.
async fn retry_once<T, F, Fut>(mut op: F) -> io::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<T>>,
{
    match op().await {
        Ok(value) => Ok(value),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
        Err(e) => {
            tracing::warn!("Bot config I/O failed, retrying once: {}", e);
            op().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_utils::builder::TestBuilder;

    /// Tests loading when no config file exists yet.
    ///
    /// Expected: Ok with default config
    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let test = TestBuilder::new().build().unwrap();
        let store = JsonFileStore::new(&test.config_path);

        let config = store.load().await.unwrap();

        assert_eq!(config, BotConfig::default());
    }

    /// Tests loading a file written by an earlier run.
    ///
    /// Expected: Ok with log channel and counts preserved
    #[tokio::test]
    async fn loads_existing_file() {
        let test = TestBuilder::new()
            .with_config_json(r#"{"log_channel_id": 42, "activity": {"7": 3}}"#)
            .build()
            .unwrap();
        let store = JsonFileStore::new(&test.config_path);

        let config = store.load().await.unwrap();

        assert_eq!(config.log_channel_id, Some(42));
        assert_eq!(config.activity.get("7"), Some(&3));
    }

    /// Tests saving and reloading the config.
    ///
    /// Expected: Ok with identical config and no temp file left behind
    #[tokio::test]
    async fn save_replaces_file() {
        let test = TestBuilder::new()
            .with_config_json(r#"{"log_channel_id": null, "activity": {}}"#)
            .build()
            .unwrap();
        let store = JsonFileStore::new(&test.config_path);

        let mut config = BotConfig::default();
        config.log_channel_id = Some(99);
        config.activity.insert("1".to_string(), 12);
        store.save(&config).await.unwrap();

        assert_eq!(store.load().await.unwrap(), config);
        assert!(!store.temp_path().exists());
        assert_eq!(test.file_names().unwrap(), vec!["bot_config.json"]);
    }

    /// Tests loading a file that is not valid JSON.
    ///
    /// Expected: Err(Corrupt) and the file contents untouched
    #[tokio::test]
    async fn corrupt_file_is_reported_and_kept() {
        let test = TestBuilder::new()
            .with_config_json("{ not json")
            .build()
            .unwrap();
        let store = JsonFileStore::new(&test.config_path);

        let result = store.load().await;

        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
        assert_eq!(test.read_config().unwrap().as_deref(), Some("{ not json"));
    }

    /// Tests saving into a directory that does not exist.
    ///
    /// Expected: Err(Unavailable) naming the config path
    #[tokio::test]
    async fn save_to_missing_directory_is_unavailable() {
        let test = TestBuilder::new().build().unwrap();
        let path = test.dir.path().join("missing").join("bot_config.json");
        let store = JsonFileStore::new(&path);

        let result = store.save(&BotConfig::default()).await;

        match result {
            Err(StorageError::Unavailable { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    /// Tests an operation that fails once with a transient error.
    ///
    /// Expected: Ok from the second attempt
    #[tokio::test]
    async fn transient_failure_is_retried_once() {
        let attempts = AtomicUsize::new(0);

        let result = retry_once(|| {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(io::Error::other("resource busy"))
                } else {
                    Ok(7)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Tests an operation that keeps failing.
    ///
    /// Expected: Err after exactly two attempts
    #[tokio::test]
    async fn persistent_failure_gives_up_after_retry() {
        let attempts = AtomicUsize::new(0);

        let result: io::Result<()> = retry_once(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(io::Error::other("disk full")) }
        })
        .await;

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Tests an operation whose target does not exist.
    ///
    /// Expected: Err(NotFound) after a single attempt
    #[tokio::test]
    async fn not_found_is_not_retried() {
        let attempts = AtomicUsize::new(0);

        let result: io::Result<()> = retry_once(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(io::Error::from(io::ErrorKind::NotFound)) }
        })
        .await;

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
