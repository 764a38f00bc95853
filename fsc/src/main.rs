use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use foodstall::compute;
use foodstall::io::{export, export_crop_table};
use fsc::config::FscConfig;
use fsc::io;
use fsc::io::cli::Cli;
use fsc::io::output::FscOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FscConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(available_boxes) = args.available_boxes {
        config.available_boxes = available_boxes;
    }

    info!("[MAIN] Successfully parsed FscConfig: {config:?}");

    let table = config.crop_table().context("invalid crop table in config")?;

    let Some(result) = compute(args.target_output, config.available_boxes, &table) else {
        warn!(
            "[MAIN] nothing to compute for a target output of {}",
            args.target_output
        );
        return Ok(());
    };

    io::log_summary(&result);

    if let Some(solution_folder) = args.solution_folder {
        if !solution_folder.exists() {
            fs::create_dir_all(&solution_folder).with_context(|| {
                format!("could not create solution folder: {solution_folder:?}")
            })?;
        }
        let output = FscOutput {
            config,
            crop_table: export_crop_table(&table),
            result: export(&result),
        };
        let solution_path = solution_folder.join(format!("sol_{}.json", result.target));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
