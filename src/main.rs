// src/main.rs
use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use line_counter::{app, args::Args, config::Config, logging};

fn main() -> ExitCode {
    // --help / --version exit here, before any filesystem access
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(err) = logging::init(&config.log_filter) {
        eprintln!("[warn] {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match app::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(out, "Error: {err}");
            let _ = out.flush();
            ExitCode::FAILURE
        }
    }
}
