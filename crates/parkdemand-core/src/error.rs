use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while loading a code-example snippet.
#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("no bundled snippet named {0}")]
    UnknownSnippet(String),

    #[error("failed to read snippet {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
