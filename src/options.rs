use std::path::PathBuf;

/// Options for configuring the file storage.
#[derive(Clone, Debug)]
pub struct FileStorageOptions {
    /// The root directory where session files are stored (default:
    /// `"sessions"`). A relative path is resolved against the current
    /// working directory when the storage is built. The directory is
    /// created on the first `set` if it doesn't exist.
    pub directory: PathBuf,
}

impl Default for FileStorageOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("sessions"),
        }
    }
}
