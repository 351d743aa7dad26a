use rand::Rng;
use tracing::{debug, info, info_span};

use crate::config::SplitConfig;
use crate::core::dataset::{discover_pairs, find_label, DatasetLayout, DatasetSplit};
use crate::core::error::{SplitError, SplitResult};
use crate::core::operations::{ensure_destination_free, move_file, CollisionPolicy};

use super::{shuffle_pairs, SplitPlan, SplitReport};

/// Move every pair of the plan into its split directories.
///
/// Images are always moved. The label is looked up again right before the
/// move and skipped when it is gone, e.g. taken by an earlier image with
/// the same stem. Under `CollisionPolicy::Fail` both destinations of a pair
/// are checked before either file moves. The split directories must
/// already exist. Stops at the first failure, leaving the files moved so
/// far in place.
pub fn execute_plan(
    layout: &DatasetLayout,
    plan: &SplitPlan,
    policy: CollisionPolicy,
) -> SplitResult<SplitReport> {
    let mut report = SplitReport::default();

    for split in DatasetSplit::all() {
        let dest_images = layout.split_images_dir(split);
        let dest_labels = layout.split_labels_dir(split);

        for pair in plan.pairs(split) {
            let image_name = pair
                .image_name()
                .ok_or_else(|| SplitError::InvalidFileName(pair.image.clone()))?;
            let image_dest = dest_images.join(image_name);

            let label_move = match find_label(layout.labels_dir(), &pair.image) {
                Some(label) => {
                    let label_name = label
                        .file_name()
                        .ok_or_else(|| SplitError::InvalidFileName(label.clone()))?;
                    let label_dest = dest_labels.join(label_name);
                    Some((label, label_dest))
                }
                None => None,
            };

            ensure_destination_free(&image_dest, policy)?;
            if let Some((_, label_dest)) = &label_move {
                ensure_destination_free(label_dest, policy)?;
            }

            move_file(&pair.image, &image_dest, policy)?;
            if let Some((label, label_dest)) = &label_move {
                move_file(label, label_dest, policy)?;
            }

            debug!("{:?} -> {}", image_name, split.as_str());
            report.record(split, label_move.is_some());
        }
    }

    Ok(report)
}

/// Discover, shuffle and slice the images under the configured root.
pub fn plan_dataset<R: Rng + ?Sized>(
    layout: &DatasetLayout,
    config: &SplitConfig,
    rng: &mut R,
) -> SplitResult<SplitPlan> {
    let mut pairs = discover_pairs(layout, &config.extensions)?;
    shuffle_pairs(&mut pairs, rng);
    let plan = SplitPlan::from_ordered(pairs, config.train_ratio);

    info!(
        "Split plan: {} train / {} val (split index {})",
        plan.train.len(),
        plan.val.len(),
        plan.split_index
    );
    Ok(plan)
}

/// Split the dataset under `config.dataset_root` into train/val.
///
/// With `config.dry_run` set, nothing on disk is created or moved and the
/// returned report describes the planned moves.
pub fn partition_dataset<R: Rng + ?Sized>(
    config: &SplitConfig,
    rng: &mut R,
) -> SplitResult<SplitReport> {
    let _span = info_span!("partition_dataset").entered();
    config.validate()?;

    let layout = DatasetLayout::new(&config.dataset_root);
    info!(
        "Splitting dataset at {:?} with train ratio {} (collisions: {})",
        layout.root(),
        config.train_ratio,
        config.on_collision.as_str()
    );

    if config.dry_run {
        let plan = plan_dataset(&layout, config, rng)?;
        for split in DatasetSplit::all() {
            for pair in plan.pairs(split) {
                info!("[dry run] {:?} -> {}", pair.image, split.as_str());
            }
        }
        return Ok(SplitReport::planned(&plan));
    }

    layout.ensure_split_dirs()?;
    let plan = plan_dataset(&layout, config, rng)?;
    let report = execute_plan(&layout, &plan, config.on_collision)?;

    info!("Split complete: {}", report);
    Ok(report)
}
