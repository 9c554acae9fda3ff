use std::path::Path;

use session_file_store::{FileStorage, FileStorageOptions};
use tempfile::TempDir;

/// Create a storage rooted in a fresh temporary directory. Keep the
/// returned `TempDir` guard alive for the duration of the test.
pub fn setup_storage() -> (FileStorage, TempDir) {
    let dir = TempDir::new().expect("Should create temp dir");
    let storage = FileStorage::builder()
        .options(FileStorageOptions {
            directory: dir.path().to_path_buf(),
        })
        .build();
    (storage, dir)
}

/// List the session file names currently on disk, sorted.
pub fn session_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| Some(entry.ok()?.file_name().to_str()?.to_owned()))
        .collect();
    names.sort();
    names
}
