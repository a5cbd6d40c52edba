use thiserror::Error;

/// Boxed error returned by provider factories when construction fails.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures while locating or instantiating providers.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Malformed manifest for {capability} at line {line}: {reason}")]
    MalformedManifest {
        capability: String,
        line: u64,
        reason: String,
    },
    #[error("Manifest error: {0}")]
    ManifestError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown implementer '{identity}' declared for {capability}")]
    UnknownImplementer { capability: String, identity: String },
    #[error("Implementer '{0}' is already registered")]
    DuplicateImplementer(String),
    #[error("Failed to instantiate '{identity}': {source}")]
    Instantiation {
        identity: String,
        #[source]
        source: BoxError,
    },
    #[error("Expected exactly one provider for {capability}, found {count}")]
    Ambiguous { capability: String, count: usize },
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
    #[error("Payment rejected by {provider}: {reason}")]
    Rejected { provider: String, reason: String },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
