use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    /// A control handle that does not exist on this page
    #[error("control #{0} not found on page")]
    UnknownControl(usize),

    /// The control exists but cannot take the requested operation
    #[error("control #{index} is not a {expected}")]
    WrongKind { index: usize, expected: &'static str },

    /// Snapshot file could not be read or written
    #[error("snapshot I/O error ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot JSON could not be parsed or produced
    #[error("snapshot JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
