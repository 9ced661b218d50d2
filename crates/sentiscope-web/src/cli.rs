use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentiscope")]
#[command(author, version, about = "Per-line sentiment prediction with a web UI")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI
    Serve {
        #[command(flatten)]
        common: CommonArgs,

        /// Listen address
        #[arg(short, long)]
        address: Option<String>,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Classify lines from the arguments or stdin and print the results
    Predict {
        #[command(flatten)]
        common: CommonArgs,

        /// Texts to classify, one per argument (reads stdin when omitted)
        text: Vec<String>,
    },
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "sentiscope.yaml")]
    pub config: String,

    /// Model file path
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Model archive path
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
