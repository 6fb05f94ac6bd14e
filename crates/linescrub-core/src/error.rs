// crates/linescrub-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrubError>;

/// Errors that abort a whole run.
#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("io error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} exceeds {max} bytes")]
    LineTooLong { line: u64, max: usize },

    #[error("config error: {0}")]
    Config(String),
}

impl ScrubError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ScrubError::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for ScrubError {
    fn from(e: toml::de::Error) -> Self {
        ScrubError::Config(e.to_string())
    }
}

/// Why a quoted literal could not be unescaped. Offsets are byte positions
/// inside the wrapped literal, opening quote included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("literal is not enclosed in double quotes")]
    NotQuoted,

    #[error("unescaped newline at byte {0}")]
    Newline(usize),

    #[error("unescaped quote at byte {0} before end of literal")]
    StrayQuote(usize),

    #[error("invalid escape '\\{ch}' at byte {at}")]
    InvalidEscape { at: usize, ch: char },

    #[error("truncated escape at byte {0}")]
    TruncatedEscape(usize),

    #[error("escape at byte {at} names invalid code point U+{value:X}")]
    InvalidCodePoint { at: usize, value: u32 },

    #[error("octal escape at byte {at} exceeds 255 ({value})")]
    OctalOverflow { at: usize, value: u32 },
}
