use thiserror::Error;

/// Failures while assembling a router.  Dispatching an action never fails;
/// these only come out of registration and configuration.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("a router needs at least one partition")]
    NoPartitions,
    #[error("partition platform must not be empty")]
    EmptyPlatform,
    #[error("attempted to register duplicate platform `{0}`")]
    DuplicatePlatform(String),
    #[error("invalid router config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
