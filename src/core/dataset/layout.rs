use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::core::error::{SplitError, SplitResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Val,
}

impl DatasetSplit {
    pub fn as_str(&self) -> &str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Val => "val",
        }
    }

    pub fn all() -> [DatasetSplit; 2] {
        [DatasetSplit::Train, DatasetSplit::Val]
    }
}

/// Directory layout of a YOLO-style dataset:
///
/// ```text
/// <root>/images/<split>/...
/// <root>/labels/<split>/...
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    root: PathBuf,
    images_dir: PathBuf,
    labels_dir: PathBuf,
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            images_dir: root.join("images"),
            labels_dir: root.join("labels"),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn labels_dir(&self) -> &Path {
        &self.labels_dir
    }

    pub fn split_images_dir(&self, split: DatasetSplit) -> PathBuf {
        self.images_dir.join(split.as_str())
    }

    pub fn split_labels_dir(&self, split: DatasetSplit) -> PathBuf {
        self.labels_dir.join(split.as_str())
    }

    /// Create `images/{train,val}` and `labels/{train,val}`.
    /// Directories that already exist are left alone.
    pub fn ensure_split_dirs(&self) -> SplitResult<()> {
        for split in DatasetSplit::all() {
            for dir in [self.split_images_dir(split), self.split_labels_dir(split)] {
                if let Err(e) = fs::create_dir_all(&dir) {
                    error!("Failed to create split directory {:?}: {}", dir, e);
                    return Err(SplitError::CreateDirFailed {
                        path: dir,
                        source: e,
                    });
                }
                debug!("Split directory ready: {:?}", dir);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = DatasetLayout::new("dataset");
        assert_eq!(layout.root(), Path::new("dataset"));
        assert_eq!(layout.images_dir(), Path::new("dataset/images"));
        assert_eq!(layout.labels_dir(), Path::new("dataset/labels"));
        assert_eq!(
            layout.split_images_dir(DatasetSplit::Train),
            PathBuf::from("dataset/images/train")
        );
        assert_eq!(
            layout.split_labels_dir(DatasetSplit::Val),
            PathBuf::from("dataset/labels/val")
        );
    }

    #[test]
    fn test_ensure_split_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DatasetLayout::new(dir.path());

        layout.ensure_split_dirs().unwrap();
        layout.ensure_split_dirs().unwrap();

        for base in [layout.images_dir(), layout.labels_dir()] {
            let mut names: Vec<String> = fs::read_dir(base)
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            assert_eq!(names, vec!["train", "val"]);
        }
    }

    #[test]
    fn test_ensure_split_dirs_fails_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("not_a_dir");
        fs::write(&root, b"").unwrap();

        let result = DatasetLayout::new(&root).ensure_split_dirs();
        assert!(matches!(result, Err(SplitError::CreateDirFailed { .. })));
    }

    #[test]
    fn test_split_names() {
        assert_eq!(DatasetSplit::Train.as_str(), "train");
        assert_eq!(DatasetSplit::Val.as_str(), "val");
    }
}
