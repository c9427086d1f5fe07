use thiserror::Error;

/// Errors raised while turning user input into a set of target ranges.
///
/// These are only ever produced at construction time, before any generator exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The text is not a valid IPv4 network.
    #[error("invalid network '{input}': {reason}")]
    InvalidNetwork { input: String, reason: String },
    /// The address has bits set to the right of the prefix.
    #[error("'{input}' has host bits set (did you mean {network}?)")]
    HostBitsSet { input: String, network: String },
}
