// crates/linescrub-cli/src/cmd/line.rs

use clap::Args;
use linescrub_core::{normalize_line, LineOutcome};

#[derive(Args)]
pub struct LineArgs {
    /// Raw lines to clean; each is treated as one input line
    #[arg(required = true)]
    pub text: Vec<String>,
}

pub fn run(args: LineArgs) -> anyhow::Result<()> {
    for raw in &args.text {
        match normalize_line(raw) {
            LineOutcome::Emit(s) => println!("{s}"),
            LineOutcome::Skip(reason) => println!("skip: {reason}"),
        }
    }
    Ok(())
}
