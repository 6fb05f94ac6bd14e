pub mod error;
pub mod config;

pub mod entities;
pub mod literal;
pub mod pipeline;
pub mod source;
pub mod runner;

pub use crate::config::ScrubConfig;
pub use crate::error::{Result, ScrubError, UnquoteError};
pub use crate::pipeline::{normalize_line, LineOutcome, SkipReason};
pub use crate::runner::{run, run_files, LineSink, RunStats};
pub use crate::source::{LineSource, RawLine};
