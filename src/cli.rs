use clap::Parser;
use std::path::PathBuf;

use crate::config::SplitConfig;
use crate::core::operations::CollisionPolicy;

/// Split a flat YOLO image/label dataset into train and val folders
#[derive(Parser, Debug, Default)]
#[command(name = "dataset-splitter", version)]
pub struct Args {
    /// Dataset folder containing images/ and labels/
    #[arg(short, long)]
    pub dataset_root: Option<PathBuf>,

    /// Fraction of images assigned to train (0.0 - 1.0)
    #[arg(short, long)]
    pub ratio: Option<f64>,

    /// Recognized image extension; repeat for several
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Replace files that already exist in train/ or val/
    #[arg(long)]
    pub overwrite: bool,

    /// Print the planned split without moving anything
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to read (and write with --save-config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Persist the effective config before splitting
    #[arg(long)]
    pub save_config: bool,

    /// Also write a timestamped log file into this folder
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Layer the command-line flags over a loaded config.
    pub fn apply(&self, config: &mut SplitConfig) {
        if let Some(root) = &self.dataset_root {
            config.dataset_root = root.clone();
        }
        if let Some(ratio) = self.ratio {
            config.train_ratio = ratio;
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.overwrite {
            config.on_collision = CollisionPolicy::Overwrite;
        }
        if self.dry_run {
            config.dry_run = true;
        }
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(SplitConfig::default_config_path)
    }
}
