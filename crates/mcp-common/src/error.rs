/// Error types shared across MCP server crates.
///
/// These errors represent failures in infrastructure components (content sources on disk)
/// that are common to multiple MCP servers. Application-specific errors should be defined
/// in each server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("content directory not found: {0}")]
    ContentDirMissing(String),
}
