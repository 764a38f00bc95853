use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of hotdogs to produce
    #[arg(short, long, value_name = "QTY", default_value_t = 1000, allow_negative_numbers = true)]
    pub target_output: i64,
    /// Planter boxes at hand, overrides the config file
    #[arg(short, long, value_name = "QTY")]
    pub available_boxes: Option<usize>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Folder to write the result to, nothing is written if undefined
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
