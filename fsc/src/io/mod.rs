use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{LevelFilter, info};
use serde::Serialize;
use thousands::Separable;

use crate::EPOCH;
use crate::config::FscConfig;
use foodstall::ComputationResult;

pub mod cli;
pub mod output;

pub fn read_config(path: &Path) -> Result<FscConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("incorrect config file format: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );

    Ok(())
}

/// Logs a human readable summary of the result
pub fn log_summary(result: &ComputationResult) {
    info!("[RES] crops for {} hotdogs:", result.target.separate_with_commas());
    for r in &result.crops {
        info!(
            "[RES]   {:<9} {:>7} raw, {:>5} seeds, {:>5} slots",
            r.crop.name(),
            r.raw_needed.separate_with_commas(),
            r.seeds_needed.separate_with_commas(),
            r.slots_needed.separate_with_commas()
        );
    }
    for p in &result.purchases {
        info!("[RES]   buy {} {}", p.quantity.separate_with_commas(), p.name);
    }
    for pb in &result.boxes {
        let contents = pb
            .contents
            .iter()
            .map(|e| format!("{} x{} ({} slots)", e.crop, e.seeds, e.slots))
            .join(", ");
        info!("[RES]   box {:>3}: {contents}, {} free", pb.id, pb.remaining);
    }
    for bi in &result.brine_inputs {
        info!("[RES]   {}: {}", bi.label(), bi.quantity.separate_with_commas());
    }
    info!(
        "[RES] {} kimchi and {} pickles produced",
        result.kimchi_produced().separate_with_commas(),
        result.pickles_produced().separate_with_commas()
    );
    info!(
        "[RES] {} boxes needed, {} available: {}",
        result.total_boxes,
        result.available_boxes,
        match result.feasible {
            true => "can produce",
            false => "not enough boxes",
        }
    );
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
