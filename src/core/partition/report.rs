use std::fmt;

use crate::core::dataset::DatasetSplit;

use super::SplitPlan;

/// Counts of what a split run moved (or would move, for a dry run)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub train_images: usize,
    pub train_labels: usize,
    pub val_images: usize,
    pub val_labels: usize,
    pub dry_run: bool,
}

impl SplitReport {
    /// Report for a plan that was not executed.
    pub fn planned(plan: &SplitPlan) -> Self {
        let mut report = Self {
            dry_run: true,
            ..Self::default()
        };
        for split in DatasetSplit::all() {
            for pair in plan.pairs(split) {
                report.record(split, pair.has_label());
            }
        }
        report
    }

    pub fn record(&mut self, split: DatasetSplit, label_moved: bool) {
        let (images, labels) = match split {
            DatasetSplit::Train => (&mut self.train_images, &mut self.train_labels),
            DatasetSplit::Val => (&mut self.val_images, &mut self.val_labels),
        };
        *images += 1;
        if label_moved {
            *labels += 1;
        }
    }

    pub fn total_images(&self) -> usize {
        self.train_images + self.val_images
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "would move" } else { "moved" };
        write!(
            f,
            "train: {} {} images, {} labels | val: {} {} images, {} labels",
            verb, self.train_images, self.train_labels, verb, self.val_images, self.val_labels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::FilePair;
    use std::path::PathBuf;

    #[test]
    fn test_record_counts_labels_only_when_moved() {
        let mut report = SplitReport::default();
        report.record(DatasetSplit::Train, true);
        report.record(DatasetSplit::Train, false);
        report.record(DatasetSplit::Val, false);

        assert_eq!(report.train_images, 2);
        assert_eq!(report.train_labels, 1);
        assert_eq!(report.val_images, 1);
        assert_eq!(report.val_labels, 0);
        assert_eq!(report.total_images(), 3);
    }

    #[test]
    fn test_planned_report_is_dry_run() {
        let plan = SplitPlan {
            split_index: 1,
            train: vec![FilePair {
                image: PathBuf::from("a.jpg"),
                label: Some(PathBuf::from("a.txt")),
            }],
            val: vec![FilePair {
                image: PathBuf::from("b.jpg"),
                label: None,
            }],
        };

        let report = SplitReport::planned(&plan);

        assert!(report.dry_run);
        assert_eq!(report.train_labels, 1);
        assert_eq!(report.val_images, 1);
        assert_eq!(
            report.to_string(),
            "train: would move 1 images, 1 labels | val: would move 1 images, 0 labels"
        );
    }
}
