use std::path::PathBuf;

pub type GenerationResult<T> = Result<T, GenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("InvalidAlphabet: cannot sample from an empty alphabet")]
    InvalidAlphabet,

    #[error("InvalidRange: max {max} is lower than min {min}")]
    InvalidRange { min: i64, max: i64 },

    /// A color channel maximum above 255. This is also an invalid range, but
    /// it does not match `InvalidRange { .. }`; use `is_invalid_range` to
    /// catch both.
    #[error("InvalidRange: {channel} channel maximum {value} is outside 0..=255")]
    InvalidChannel { channel: &'static str, value: u16 },
}

impl GenerationError {
    /// Both bounded-range failures report as `InvalidRange`.
    pub fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            GenerationError::InvalidRange { .. } | GenerationError::InvalidChannel { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ConfigError: could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ConfigError: malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ConfigError: no configuration directory on this platform")]
    NoConfigDir,
}
