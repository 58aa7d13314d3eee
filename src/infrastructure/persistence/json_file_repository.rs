//! JSON file implementation of the redirect repository.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::domain::repositories::RedirectRepository;
use crate::error::StoreError;

/// Indentation of the persisted file.
const INDENT: &[u8] = b"    ";

/// Redirect repository backed by a single JSON object on disk.
///
/// The whole mapping lives in memory and the file is rewritten after every
/// mutation. The lock is held across the mutation and the write, so
/// concurrent writers never lose updates and the file always holds a
/// complete mapping. There is no atomic rename; a crash in the middle of a
/// write can leave a truncated file behind.
pub struct JsonFileRedirectRepository {
    path: PathBuf,
    redirects: Mutex<BTreeMap<String, String>>,
}

impl JsonFileRedirectRepository {
    /// Loads the repository from `path`.
    ///
    /// A missing file is the expected first-run state and yields an empty
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file exists but cannot be read and
    /// [`StoreError::Parse`] if it is not a JSON object of strings.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let redirects = load(&path).await?;

        Ok(Self {
            path,
            redirects: Mutex::new(redirects),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, redirects: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let bytes = to_pretty_json(redirects).map_err(|source| StoreError::Serialize { source })?;

        fs::write(&self.path, bytes)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl RedirectRepository for JsonFileRedirectRepository {
    async fn upsert(&self, short: &str, destination: &str) -> Result<(), StoreError> {
        let mut redirects = self.redirects.lock().await;
        info!("Adding or updating redirect {} -> {}", short, destination);
        redirects.insert(short.to_string(), destination.to_string());

        self.persist(&redirects).await.inspect_err(|e| {
            error!("Redirect {} kept in memory but not persisted: {}", short, e);
        })
    }

    async fn remove(&self, short: &str) -> Result<(), StoreError> {
        let mut redirects = self.redirects.lock().await;
        if redirects.remove(short).is_none() {
            debug!("Redirect {} did not exist", short);
        }

        self.persist(&redirects).await.inspect_err(|e| {
            error!("Removal of {} not persisted: {}", short, e);
        })
    }

    async fn find(&self, short: &str) -> Result<Option<String>, StoreError> {
        // An empty destination is never a match.
        Ok(self
            .redirects
            .lock()
            .await
            .get(short)
            .filter(|destination| !destination.is_empty())
            .cloned())
    }

    async fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let _guard = self.redirects.lock().await;

        fs::read(&self.path).await.map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })
    }

    async fn count(&self) -> usize {
        self.redirects.lock().await.len()
    }
}

async fn load(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    info!("Reading redirects from {}", path.display());

    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(
                "{} was not found, starting without any redirects",
                path.display()
            );
            return Ok(BTreeMap::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn to_pretty_json(redirects: &BTreeMap<String, String>) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    redirects.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::task::JoinSet;

    fn redir_file(dir: &TempDir) -> PathBuf {
        dir.path().join("redirs.json")
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();

        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert_eq!(repo.count().await, 0);
        assert!(!redir_file(&dir).exists());
    }

    #[tokio::test]
    async fn test_open_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            redir_file(&dir),
            r#"{ "gh": "https://github.com", "rs": "https://rust-lang.org" }"#,
        )
        .unwrap();

        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert_eq!(repo.count().await, 2);
        assert_eq!(
            repo.find("gh").await.unwrap(),
            Some("https://github.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_open_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(redir_file(&dir), "{ not json").unwrap();

        let result = JsonFileRedirectRepository::open(redir_file(&dir)).await;

        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_open_non_string_values_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(redir_file(&dir), r#"{ "a": 1 }"#).unwrap();

        let result = JsonFileRedirectRepository::open(redir_file(&dir)).await;

        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_open_array_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(redir_file(&dir), r#"["a", "b"]"#).unwrap();

        let result = JsonFileRedirectRepository::open(redir_file(&dir)).await;

        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_open_directory_fails_to_read() {
        let dir = TempDir::new().unwrap();

        let result = JsonFileRedirectRepository::open(dir.path()).await;

        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[tokio::test]
    async fn test_upsert_persists_pretty_json() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        repo.upsert("abc", "http://example.com").await.unwrap();

        let contents = std::fs::read_to_string(redir_file(&dir)).unwrap();
        assert_eq!(contents, "{\n    \"abc\": \"http://example.com\"\n}");
    }

    #[tokio::test]
    async fn test_upsert_overwrites() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        repo.upsert("abc", "http://one.com").await.unwrap();
        repo.upsert("abc", "http://two.com").await.unwrap();

        assert_eq!(repo.count().await, 1);
        assert_eq!(
            repo.find("abc").await.unwrap(),
            Some("http://two.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        repo.upsert("abc", "http://example.com").await.unwrap();
        repo.remove("abc").await.unwrap();
        repo.remove("abc").await.unwrap();
        repo.remove("never-added").await.unwrap();

        assert_eq!(repo.find("abc").await.unwrap(), None);
        assert_eq!(repo.find("never-added").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reload_reproduces_mapping() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        repo.upsert("a", "http://a.com").await.unwrap();
        repo.upsert("b", "http://b.com/x?y=z").await.unwrap();
        repo.upsert("c", "http://c.com").await.unwrap();
        repo.remove("b").await.unwrap();

        let reloaded = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert_eq!(reloaded.count().await, 2);
        assert_eq!(
            reloaded.find("a").await.unwrap(),
            Some("http://a.com".to_string())
        );
        assert_eq!(reloaded.find("b").await.unwrap(), None);
        assert_eq!(
            reloaded.find("c").await.unwrap(),
            Some("http://c.com".to_string())
        );
        assert_eq!(*reloaded.redirects.lock().await, *repo.redirects.lock().await);
    }

    #[tokio::test]
    async fn test_snapshot_returns_file_contents() {
        let dir = TempDir::new().unwrap();
        let raw = "{\n  \"hand\": \"http://written.com\"\n}\n";
        std::fs::write(redir_file(&dir), raw).unwrap();

        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert_eq!(repo.snapshot().await.unwrap(), raw.as_bytes());
    }

    #[tokio::test]
    async fn test_snapshot_without_file_fails() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert!(matches!(
            repo.snapshot().await,
            Err(StoreError::Read { .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_mutation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("redirs.json");
        let repo = JsonFileRedirectRepository::open(&path).await.unwrap();

        let result = repo.upsert("abc", "http://example.com").await;

        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(
            repo.find("abc").await.unwrap(),
            Some("http://example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_removal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("redirs.json");
        let repo = JsonFileRedirectRepository::open(&path).await.unwrap();
        let _ = repo.upsert("abc", "http://example.com").await;

        let result = repo.remove("abc").await;

        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(repo.find("abc").await.unwrap(), None);
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_find_empty_destination_is_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(redir_file(&dir), r#"{ "e": "", "f": "http://f.com" }"#).unwrap();

        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert_eq!(repo.find("e").await.unwrap(), None);
        assert_eq!(
            repo.find("f").await.unwrap(),
            Some("http://f.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_path() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();

        assert_eq!(repo.path(), redir_file(&dir).as_path());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts_lose_nothing() {
        const WRITERS: usize = 64;

        let dir = TempDir::new().unwrap();
        let repo = Arc::new(
            JsonFileRedirectRepository::open(redir_file(&dir))
                .await
                .unwrap(),
        );

        let mut tasks = JoinSet::new();
        for i in 0..WRITERS {
            let repo = repo.clone();
            tasks.spawn(async move {
                repo.upsert(&format!("short{i}"), &format!("http://example.com/{i}"))
                    .await
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }

        assert_eq!(repo.count().await, WRITERS);

        let reloaded = JsonFileRedirectRepository::open(redir_file(&dir))
            .await
            .unwrap();
        assert_eq!(reloaded.count().await, WRITERS);
        for i in 0..WRITERS {
            assert_eq!(
                reloaded.find(&format!("short{i}")).await.unwrap(),
                Some(format!("http://example.com/{i}"))
            );
        }
    }
}
