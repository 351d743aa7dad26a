use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

use crate::core::error::{SplitError, SplitResult};

/// What a move does when its destination already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Refuse the move and leave both files untouched
    #[default]
    Fail,
    /// Replace the existing destination file
    Overwrite,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            CollisionPolicy::Fail => "fail",
            CollisionPolicy::Overwrite => "overwrite",
        }
    }
}

/// Check `dest` against the collision policy without touching anything.
///
/// Under `Fail` an existing destination is an error; under `Overwrite`
/// every destination is acceptable.
pub fn ensure_destination_free(dest: &Path, policy: CollisionPolicy) -> SplitResult<()> {
    if policy == CollisionPolicy::Fail && dest.exists() {
        error!("Refusing to overwrite existing file {:?}", dest);
        return Err(SplitError::DestinationExists(dest.to_path_buf()));
    }
    Ok(())
}

/// Move a file from source to destination.
///
/// Tries a rename first and falls back to copy + remove when the rename
/// fails (e.g. the destination is on another drive).
///
/// # Arguments
/// * `src` - Source file path
/// * `dest` - Destination file path
/// * `policy` - Behavior when `dest` already exists
///
/// # Returns
/// * `Ok(())` if the file now lives at `dest` and no longer at `src`
/// * `Err(SplitError)` if the destination collides or the move failed
pub fn move_file(src: &Path, dest: &Path, policy: CollisionPolicy) -> SplitResult<()> {
    debug!("Moving file from {:?} to {:?}", src, dest);

    ensure_destination_free(dest, policy)?;
    if dest.exists() {
        warn!("Overwriting existing file {:?}", dest);
    }

    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    // Copy the file to the destination
    if let Err(e) = fs::copy(src, dest) {
        error!("Failed to copy file from {:?} to {:?}: {}", src, dest, e);
        return Err(SplitError::MoveFailed {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            source: e,
        });
    }

    // Remove the original file after successful copy
    if let Err(e) = fs::remove_file(src) {
        error!("Failed to remove original file {:?} after copy: {}", src, e);
        let _ = fs::remove_file(dest);
        return Err(SplitError::MoveFailed {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            source: e,
        });
    }

    Ok(())
}
