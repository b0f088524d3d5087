use clap::Parser;
use std::path::PathBuf;

/// Interactive roster manager over a flat delimited employee file.
#[derive(Debug, Parser)]
#[command(name = "staffbook", version)]
pub struct CommandLine {
    /// Path of the employee roster file.
    #[arg(long, default_value = "./data/employees.csv")]
    pub data_file: PathBuf,

    /// Directory receiving rotated log files.
    #[arg(long, default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults by build mode.
    #[arg(long)]
    pub log_level: Option<String>,
}
