// crates/linescrub-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "linescrub-cli")]
#[command(about = "Line-by-line text cleaner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean an input file into an output file, one line at a time
    Clean(cmd::clean::CleanArgs),

    /// Show what the cleaner does to individual lines
    Line(cmd::line::LineArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    match cli.cmd {
        Commands::Clean(args) => cmd::clean::run(args),
        Commands::Line(args) => cmd::line::run(args),
    }
}
