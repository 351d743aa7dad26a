use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use dataset_splitter::cli::Args;
use dataset_splitter::config::SplitConfig;
use dataset_splitter::core::partition_dataset;
use dataset_splitter::logging::setup_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.log_dir.as_deref())?;

    info!("Starting dataset splitter");

    let config_path = args.config_path();
    let mut config = match &config_path {
        Some(path) => SplitConfig::load(path),
        None => SplitConfig::default(),
    };
    args.apply(&mut config);
    config.normalize();
    config.validate()?;

    if args.save_config {
        match &config_path {
            Some(path) => config.save(path),
            None => warn!("Could not determine config directory. Config not saved."),
        }
    }

    let report = match config.seed {
        Some(seed) => {
            info!("Using shuffle seed {}", seed);
            partition_dataset(&config, &mut StdRng::seed_from_u64(seed))?
        }
        None => partition_dataset(&config, &mut rand::thread_rng())?,
    };

    if report.dry_run {
        println!("Dry run, nothing moved. {}", report);
    } else {
        println!(
            "✔ images and labels split into train / val with matching pairs. {}",
            report
        );
    }

    Ok(())
}
