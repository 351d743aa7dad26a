use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::DatasetLayout;
use crate::core::error::{SplitError, SplitResult};

/// An image and its sidecar label file, if one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub image: PathBuf,
    pub label: Option<PathBuf>,
}

impl FilePair {
    pub fn image_name(&self) -> Option<&OsStr> {
        self.image.file_name()
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }
}

/// Case-insensitive suffix match on the file name, so `.jpg` on its own
/// counts as a jpg. Entries in `extensions` may be given with or without a
/// leading dot.
pub fn has_recognized_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    extensions.iter().any(|known| {
        let known = known.trim_start_matches('.');
        !known.is_empty() && name.ends_with(&format!(".{}", known.to_lowercase()))
    })
}

/// Look up `<labels_dir>/<image stem>.txt`.
pub fn find_label(labels_dir: &Path, image_path: &Path) -> Option<PathBuf> {
    let stem = image_path.file_stem()?;
    let mut label_name = stem.to_os_string();
    label_name.push(".txt");
    let label_path = labels_dir.join(label_name);
    label_path.is_file().then_some(label_path)
}

/// Collect the images sitting directly in the images root, paired with
/// their labels.
///
/// Subdirectories (including previously created split directories) and
/// files with other extensions are skipped. The result is sorted by file
/// name so that a seeded shuffle is reproducible.
pub fn discover_pairs(layout: &DatasetLayout, extensions: &[String]) -> SplitResult<Vec<FilePair>> {
    let images_dir = layout.images_dir();
    let entries = fs::read_dir(images_dir).map_err(|e| {
        error!("Failed to read images directory {:?}: {}", images_dir, e);
        SplitError::ReadDirFailed {
            path: images_dir.to_path_buf(),
            source: e,
        }
    })?;

    let mut pairs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || !has_recognized_extension(&path, extensions) {
            debug!("Skipping {:?}", path);
            continue;
        }
        let label = find_label(layout.labels_dir(), &path);
        pairs.push(FilePair { image: path, label });
    }

    pairs.sort_by(|a, b| a.image.file_name().cmp(&b.image.file_name()));

    info!(
        "Found {} images ({} with labels) in {:?}",
        pairs.len(),
        pairs.iter().filter(|p| p.has_label()).count(),
        images_dir
    );
    Ok(pairs)
}
