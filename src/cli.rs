use clap::{Parser, Subcommand};

pub const DEFAULT_VERIFIED_DATE: &str = "2025-12-16";

pub const DEFAULT_DATA_DIRS: [&str; 2] = ["_data/programs", "_data/college-university"];

#[derive(Parser, Debug)]
#[command(name = "veristamp", version, about = "Stamp verification dates into YAML data records")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_VERIFIED_DATE,
        help = "Date string stamped into records (taken verbatim, not validated)"
    )]
    pub date: String,
    #[arg(
        long = "data-dir",
        global = true,
        help = "Data directory to process (repeatable; defaults to the built-in set)"
    )]
    pub data_dir: Vec<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stamp the verification date into every record and rewrite the files
    Stamp,
    /// Report records whose verification date is missing or differs; writes nothing
    Check,
}

impl Cli {
    /// Directories for this run: explicit `--data-dir` flags, or the built-in set.
    pub fn data_dirs(&self) -> Vec<String> {
        if self.data_dir.is_empty() {
            DEFAULT_DATA_DIRS.iter().map(|d| d.to_string()).collect()
        } else {
            self.data_dir.clone()
        }
    }
}
