use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("line {line_number}: {source}")]
    Rejected {
        line_number: usize,
        #[source]
        source: intraday_core::ValidationError,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Rejected { .. } => 2,
            Self::Logging(_) => 1,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
