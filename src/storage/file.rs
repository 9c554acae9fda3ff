//! File-backed session storage implementation

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use async_trait::async_trait;
use bon::bon;
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::debug;

use crate::{error::SessionResult, options::FileStorageOptions};

use super::interface::SessionStorage;

mod expiry;

/// Separator between the session ID and the TTL in a session file name
pub(crate) const RECORD_SEPARATOR: &str = "__";
/// Extension of session files
pub(crate) const FILE_EXTENSION: &str = ".json";

/// Callback invoked once when the storage is constructed, for parity with
/// storage backends that perform real connection setup (this one doesn't).
pub type ConnectHook = Box<dyn Fn() + Send + Sync>;

/**
Storage provider for sessions backed by flat files. Each session is persisted
as a single JSON file in the root directory, named `<id>__<ttl>.json` with the
TTL in milliseconds. The file content is the serialized payload verbatim;
freshness is derived from the file's last-modified time rather than stored
explicitly, so a session is valid as long as `now - modified <= ttl`.

Expired sessions are reaped lazily: there is no background sweeper, and a
stale file is only deleted when [`get`](SessionStorage::get) detects that its
TTL has been exceeded.

This provider requires that your session data type implements
`serde::Serialize` and `serde::Deserialize`.

# Example
```rust
use session_file_store::FileStorage;

let storage = FileStorage::builder()
    .with_options(|opt| opt.directory = "/var/lib/myapp/sessions".into())
    .on_connect(|| println!("session storage connected"))
    .build();
```
*/
pub struct FileStorage {
    directory: PathBuf,
}

#[bon]
impl FileStorage {
    /// Create the storage instance. The configured directory is resolved to
    /// an absolute path here, and the `on_connect` hook (if any) is invoked
    /// once before the builder returns.
    #[builder]
    pub fn new(
        /// Set the options directly. Alternatively, use `with_options` to
        /// customize the default options via a closure.
        #[builder(default)]
        options: FileStorageOptions,
        /// Optional lifecycle hook invoked exactly once during construction.
        #[builder(with = |hook: impl Fn() + Send + Sync + 'static| Box::new(hook))]
        on_connect: Option<ConnectHook>,
    ) -> Self {
        let directory = std::path::absolute(&options.directory).unwrap_or(options.directory);
        if let Some(connect) = on_connect {
            connect();
        }
        debug!(
            "Session file storage connected, directory: {}",
            directory.display()
        );
        Self { directory }
    }
}

impl Default for FileStorage {
    /// Create a storage rooted at the default `./sessions` directory.
    fn default() -> Self {
        Self::builder().build()
    }
}

use file_storage_builder::{IsUnset, SetOptions, State};
impl<S> FileStorageBuilder<S>
where
    S: State,
{
    /// Customize the [options](FileStorageOptions) via a closure. Any options that are not set will retain their default values.
    pub fn with_options<OptionsFn>(self, options_fn: OptionsFn) -> FileStorageBuilder<SetOptions<S>>
    where
        S::Options: IsUnset,
        OptionsFn: FnOnce(&mut FileStorageOptions),
    {
        let mut options = FileStorageOptions::default();
        options_fn(&mut options);
        self.options(options)
    }
}

/// A session representation located on disk. The TTL is the one encoded in
/// the file name; `None` means the segment didn't parse as an integer.
struct Representation {
    name: String,
    path: PathBuf,
    ttl: Option<Duration>,
    modified: Option<SystemTime>,
}

impl FileStorage {
    /// The resolved root directory holding the session files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn representation_path(&self, id: &str, ttl_ms: u64) -> PathBuf {
        self.directory
            .join(format!("{id}{RECORD_SEPARATOR}{ttl_ms}{FILE_EXTENSION}"))
    }

    /// Locate the on-disk representation for a session ID: a file whose name
    /// starts with `<id>__` and ends with `.json`. A `set` with a different
    /// TTL leaves the previous file behind, so several candidates can exist;
    /// the most recently modified one wins, with unreadable metadata sorting
    /// lowest and remaining ties broken toward the greatest file name. A
    /// missing root directory means no sessions were ever written.
    async fn locate(&self, id: &str) -> SessionResult<Option<Representation>> {
        let prefix = format!("{id}{RECORD_SEPARATOR}");
        let mut entries = match fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut found: Option<Representation> = None;
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !name.starts_with(&prefix) || !name.ends_with(FILE_EXTENSION) {
                continue;
            }
            let modified = match entry.metadata().await {
                Ok(metadata) => metadata.modified().ok(),
                Err(_) => None,
            };
            let candidate = Representation {
                name: name.to_owned(),
                path: entry.path(),
                ttl: expiry::parse_ttl(name),
                modified,
            };
            let newer = match &found {
                None => true,
                Some(current) => {
                    (candidate.modified, candidate.name.as_str())
                        > (current.modified, current.name.as_str())
                }
            };
            if newer {
                found = Some(candidate);
            }
        }
        Ok(found)
    }

    /// Delete a representation, tolerating one that has already vanished.
    async fn remove_representation(&self, path: &Path) -> SessionResult<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<T> SessionStorage<T> for FileStorage
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn get(&self, id: &str) -> SessionResult<Option<T>> {
        let Some(found) = self.locate(id).await? else {
            debug!("No session file for '{id}'");
            return Ok(None);
        };
        if expiry::has_expired(found.ttl, found.modified, SystemTime::now()) {
            debug!("Session '{id}' expired, removing '{}'", found.name);
            self.remove_representation(&found.path).await?;
            return Ok(None);
        }
        let content = match fs::read_to_string(&found.path).await {
            Ok(content) => content,
            // Removed by another call between lookup and read
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&content) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                debug!("Failed to parse session '{id}': {e}");
                Ok(None)
            }
        }
    }

    async fn set(&self, id: &str, data: T, ttl_ms: u64) -> SessionResult<()> {
        fs::create_dir_all(&self.directory).await?;
        let content = serde_json::to_string(&data)?;
        fs::write(self.representation_path(id, ttl_ms), content).await?;
        Ok(())
    }

    async fn destroy(&self, id: &str) -> SessionResult<()> {
        match self.locate(id).await? {
            Some(found) => self.remove_representation(&found.path).await,
            None => Ok(()),
        }
    }
}
