// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

const AFTER_HELP: &str = "\
Examples:
  line-counter
  line-counter -d /path/to/project
  line-counter -d /path/to/project -n

Supported file types:
  Go, JavaScript, TypeScript, Python, Java, C/C++, C#, PHP, Ruby,
  Rust, Swift, Kotlin, Scala, R, Objective-C, Perl, Shell scripts,
  HTML, CSS, Vue, React, XML, JSON, YAML, SQL, Lua, Markdown, etc.";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line-counter",
    version = crate::VERSION,
    about = "LINE COUNTER - count lines of code in a directory tree",
    after_help = AFTER_HELP,
    args_override_self = true
)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(short = 'd', long = "dir", value_name = "PATH", default_value = ".", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Only scan the directory itself (no subdirectories)
    #[arg(short = 'n', long = "no-recursive")]
    pub no_recursive: bool,

    /// Filter for internal logs written to stderr (e.g. `debug`, `line_counter_infra=trace`)
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}
