// crates/linescrub-core/src/runner.rs
//
// source -> normalize_line -> sink, one line at a time.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use tracing::{debug, info};

use crate::config::ScrubConfig;
use crate::error::{Result, ScrubError};
use crate::pipeline::{normalize_line, LineOutcome, SkipReason};
use crate::source::LineSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: u64,
    pub lines_emitted: u64,
    pub lines_empty: u64,
    pub lines_malformed: u64,
}

/// Writes cleaned lines, each followed by '\n'.
pub struct LineSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| ScrubError::io(format!("write output line {}", self.written + 1), e))?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|e| ScrubError::io("flush output", e))?;
        Ok(self.writer)
    }
}

/// Drive a whole stream. Stops at the first fatal error; malformed lines are
/// logged and counted.
pub fn run<R: BufRead, W: Write>(
    source: LineSource<R>,
    sink: &mut LineSink<W>,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for line in source {
        let line = line?;
        stats.lines_read += 1;

        match normalize_line(&line.text) {
            LineOutcome::Emit(text) => {
                sink.write_line(&text)?;
                stats.lines_emitted += 1;
            }
            LineOutcome::Skip(SkipReason::Empty) => stats.lines_empty += 1,
            LineOutcome::Skip(reason @ SkipReason::Malformed(_)) => {
                info!(line = line.number, %reason, "line skipped");
                stats.lines_malformed += 1;
            }
        }
    }

    Ok(stats)
}

/// Open the configured input, truncate/create the output, and run.
pub fn run_files(cfg: &ScrubConfig) -> Result<RunStats> {
    cfg.validate()?;

    let input = File::open(&cfg.input_path).map_err(|e| {
        ScrubError::io(format!("open input {}", cfg.input_path.display()), e)
    })?;
    let output = File::create(&cfg.output_path).map_err(|e| {
        ScrubError::io(format!("create output {}", cfg.output_path.display()), e)
    })?;

    let source = LineSource::new(BufReader::new(input), cfg.max_line_len);
    let mut sink = LineSink::new(BufWriter::new(output));
    let stats = run(source, &mut sink)?;
    sink.finish()?;

    debug!(
        input = %cfg.input_path.display(),
        output = %cfg.output_path.display(),
        read = stats.lines_read,
        emitted = stats.lines_emitted,
        empty = stats.lines_empty,
        malformed = stats.lines_malformed,
        "run finished"
    );
    Ok(stats)
}
