use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Store file could not be read or written
    #[error("config store I/O error ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config blob could not be serialized
    #[error("config JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no profile named '{0}'")]
    UnknownProfile(String),

    #[error("a profile named '{0}' already exists")]
    DuplicateProfile(String),

    /// Removing the profile would leave the config without any
    #[error("cannot remove the last remaining profile")]
    LastProfile,
}
