use thiserror::Error;

/// Boot-time server errors. Request-level failures never reach this type:
/// `/ask` folds them into its fixed replies.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid server config: {0}")]
    Config(String),

    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),
}

/// Handy result alias used by the server entry points.
pub type AppResult<T> = Result<T, AppError>;
