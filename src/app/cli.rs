use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates a Math Path puzzle board and checks its intended solution.", long_about = None)]
pub struct Cli {
    /// Difficulty level, 1 to 5.
    #[clap(short, long, default_value_t = 1)]
    pub level: u8,

    /// Seed for a reproducible board; random when omitted.
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// File the rendered board is written to.
    #[clap(short, long, default_value = "board.txt")]
    pub output: PathBuf,

    /// Suppress verbose output, only printing 'Done.' on success or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
