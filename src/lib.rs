#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

/*!
# Overview
File-backed session storage for session middleware.

- Each session is a single JSON file under a configurable root directory
  (default `./sessions`), named `<id>__<ttl>.json` with the TTL in
  milliseconds.
- Freshness is derived from the file's last-modified time: a session is valid
  while `now - modified <= ttl`. Expired files are reaped lazily when the
  session is next read - there is no background sweeper.
- "No valid session" is a single normalized result: a session that was never
  written, has expired, or whose payload can no longer be deserialized is
  reported as `None` rather than an error. Only genuine storage failures
  (disk full, permission denied) surface as errors.
- Session ID generation, cookies and request plumbing are the middleware's
  job; this crate only persists payloads. You can swap in your own backend by
  implementing the [`SessionStorage`](storage::SessionStorage) trait.

# Usage

```rust,no_run
use std::collections::HashMap;

use session_file_store::{
    error::SessionResult,
    storage::SessionStorage,
    FileStorage,
};

async fn run() -> SessionResult<()> {
    let storage = FileStorage::builder()
        .with_options(|opt| opt.directory = "sessions".into())
        .build();

    let mut data = HashMap::new();
    data.insert("user".to_owned(), "alice".to_owned());

    // TTL is in milliseconds
    storage.set("abc123", data, 60_000).await?;

    let restored: Option<HashMap<String, String>> = storage.get("abc123").await?;
    assert!(restored.is_some());

    SessionStorage::<HashMap<String, String>>::destroy(&storage, "abc123").await?;
    Ok(())
}
```

# Storage layout

The store keeps one file per session in a flat directory. Writing a session
with a new TTL writes a new file name and leaves the previous one behind, so
several files can exist for one ID; lookups resolve this deterministically by
picking the most recently modified candidate. The directory is created on the
first `set`, and looking up a session before anything was ever written is not
an error.

Concurrent calls are not locked against each other: the store accepts the
lookup/read race and treats a file that vanished mid-operation as an absent
or expired session, never as a failure.
*/

pub mod error;
pub mod storage;

mod options;
pub use options::FileStorageOptions;
pub use storage::file::FileStorage;
