use std::fs::write;
use std::path::Path;
use tracing::{debug, error};

use crate::error::FileSystemError;

pub const DEFAULT_OUTPUT_FILE: &str = "result.txt";

/// Write `content` to `path`, replacing whatever was there.
///
/// A failure is logged here and handed back as a value so the caller can
/// count it; it is never retried.
pub fn save_to_file(path: &Path, content: &str) -> std::result::Result<(), FileSystemError> {
    match write(path, content) {
        Ok(()) => {
            debug!("Saved {} bytes to {}", content.len(), path.display());
            Ok(())
        }
        Err(source) => {
            let err = FileSystemError::Save {
                path: path.to_path_buf(),
                source,
            };
            error!("{}", err);
            Err(err)
        }
    }
}
