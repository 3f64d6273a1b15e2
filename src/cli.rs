use clap::Parser;
use diskusage_core::config::{RunConfig, DEFAULT_BASE_PATH, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "diskusage",
    version,
    about = "Rank every top-level folder under a directory by size and write a CSV report"
)]
pub struct Cli {
    /// Directory whose subfolders are measured
    #[arg(default_value = DEFAULT_BASE_PATH)]
    pub base_path: PathBuf,

    /// CSV file to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Log skipped files and per-folder sizes
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            base_path: self.base_path.clone(),
            output_path: self.output.clone(),
        }
    }
}
