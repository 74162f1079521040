use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Multi-track segment editor: replays pointer scripts against a timeline
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Pointer script to replay (JSON list of press/palette/move/release steps)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Load the starting timeline from JSON (default: built-in demo)
    #[arg(short = 't', long = "timeline", value_name = "FILE")]
    pub timeline: Option<PathBuf>,

    /// Print the resulting timeline as JSON instead of text lanes
    #[arg(long = "json")]
    pub json: bool,

    /// Save the resulting timeline to a JSON file
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Let resizes drive segment length below zero
    #[arg(long = "no-clamp")]
    pub no_clamp: bool,

    /// Horizontal pixels per character in text output
    #[arg(long = "px-per-cell", value_name = "PX", default_value_t = 10.0)]
    pub px_per_cell: f32,

    /// Enable debug logging to file (default: trackline.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
