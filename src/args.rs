use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_CAPACITY;

/// Word-addressed memory controller with a line-oriented monitor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of 16-bit words to allocate
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: u32,

    /// Raw little-endian word image (.bin) loaded at address 0
    #[arg(long)]
    pub image: Option<PathBuf>,

    // Monitor commands are read from this file, or from stdin when absent.
    #[arg(long)]
    pub script: Option<PathBuf>,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
