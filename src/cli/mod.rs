pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::SummaryFormat;

#[derive(Parser)]
#[command(name = "recap")]
#[command(about = "Summarize YouTube videos from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a video and print the result
    Summarize {
        /// URL of the video to summarize
        url: String,

        /// Summary format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Bullets)]
        format: SummaryFormat,

        /// Also write the summary to a text file in this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Launch the interactive TUI
    Tui,
    /// Show or toggle the dark/light theme preference
    Theme {
        /// Flip the preference instead of just showing it
        #[arg(long)]
        toggle: bool,
    },
}
