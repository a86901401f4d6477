// src/config.rs
use std::path::PathBuf;

use line_counter_ports::filesystem::{ScanMode, ScanPlan};

use crate::args::Args;

/// Runtime configuration resolved from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub mode: ScanMode,
    pub log_filter: String,
}

impl Config {
    pub fn scan_plan(&self) -> ScanPlan {
        ScanPlan { root: self.root.clone(), mode: self.mode }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mode = if args.no_recursive { ScanMode::Shallow } else { ScanMode::Recursive };
        Self { root: args.dir, mode, log_filter: args.log_level }
    }
}
