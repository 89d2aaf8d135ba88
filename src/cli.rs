//! CLI Argument Parsing
//!
//! A single command: the optional positional is the deployment reference,
//! used only when `AMPLIFY_APP_ID` is unset or empty.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ampsync - regenerate the frontend's production Amplify config
#[derive(Parser, Debug)]
#[command(name = "ampsync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The app ID is read from AMPLIFY_APP_ID first, then from APP_ID.")]
pub struct Cli {
    /// Amplify app ID (used when AMPLIFY_APP_ID is unset)
    #[arg(value_name = "APP_ID")]
    pub app_id: Option<String>,

    /// Backend project root (generator working directory)
    #[arg(long, value_name = "DIR")]
    pub backend_dir: Option<PathBuf>,

    /// Frontend project root (default: ../newtodo relative to the backend)
    #[arg(long, value_name = "DIR")]
    pub frontend_dir: Option<PathBuf>,

    /// Config file (default: <backend>/ampsync.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show the generator command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}
