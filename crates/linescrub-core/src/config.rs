// crates/linescrub-core/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ScrubError};

/// Bytes a line plus its terminator may occupy.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

pub const DEFAULT_INPUT_PATH: &str = "in.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "out.txt";

/// Where to read, where to write.
///
/// TOML form (every key optional):
///
/// ```toml
/// inputPath = "tweets.txt"
/// outputPath = "tweets.clean.txt"
/// maxLineLen = 65536
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScrubConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub max_line_len: usize,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl ScrubConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ScrubConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScrubError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_line_len == 0 {
            return Err(ScrubError::Config("maxLineLen must be non-zero".into()));
        }
        if self.input_path.as_os_str().is_empty() {
            return Err(ScrubError::Config("inputPath must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ScrubError::Config("outputPath must not be empty".into()));
        }
        if self.input_path == self.output_path {
            return Err(ScrubError::Config(format!(
                "inputPath and outputPath are the same file: {}",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}
