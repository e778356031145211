use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "readme-gen",
    disable_version_flag = true,
    about = "Generate a professional README.md by answering a few prompts",
    long_about = "Generate a professional README.md by answering a few prompts.\n\
                  Auto-detects project info from package.json and git config."
)]
pub struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue, help = "Show version number")]
    pub version: bool,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        help = "Project directory to detect from and write into (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the metadata detected from package.json and git config
    Detect,
    /// Print the questions that would be asked for this project
    Questions,
}
