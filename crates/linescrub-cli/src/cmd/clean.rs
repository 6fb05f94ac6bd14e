// crates/linescrub-cli/src/cmd/clean.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use linescrub_core::ScrubConfig;
use tracing::debug;

#[derive(Args)]
pub struct CleanArgs {
    /// Input text file (default: in.txt, or inputPath from --config)
    #[arg(long)]
    pub r#in: Option<PathBuf>,

    /// Output file, created or truncated (default: out.txt, or outputPath from --config)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// TOML config with inputPath / outputPath / maxLineLen.
    /// Flags given on the command line win over the file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Longest accepted input line in bytes; longer lines abort the run
    #[arg(long)]
    pub max_line_len: Option<usize>,
}

fn resolve_config(args: CleanArgs) -> anyhow::Result<ScrubConfig> {
    let mut cfg = match args.config.as_deref() {
        Some(p) => ScrubConfig::load(p).with_context(|| format!("load config {}", p.display()))?,
        None => ScrubConfig::default(),
    };

    if let Some(p) = args.r#in {
        cfg.input_path = p;
    }
    if let Some(p) = args.out {
        cfg.output_path = p;
    }
    if let Some(n) = args.max_line_len {
        cfg.max_line_len = n;
    }

    cfg.validate().context("invalid settings")?;
    debug!(
        input = %cfg.input_path.display(),
        output = %cfg.output_path.display(),
        max_line_len = cfg.max_line_len,
        "resolved settings"
    );
    Ok(cfg)
}

pub fn run(args: CleanArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;

    let stats = linescrub_core::run_files(&cfg).with_context(|| {
        format!(
            "clean {} -> {}",
            cfg.input_path.display(),
            cfg.output_path.display()
        )
    })?;

    eprintln!(
        "clean ok: read={} emitted={} empty={} malformed={} out={}",
        stats.lines_read,
        stats.lines_emitted,
        stats.lines_empty,
        stats.lines_malformed,
        cfg.output_path.display()
    );

    Ok(())
}
