use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes for the simulation engine.
///
/// Every failure is terminal for the run: there is no retry policy and no
/// partial-run recovery, so each variant only has to carry enough context
/// for the abort message.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or scenario parameter (zero particles, bad constants).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Backing storage for the particle arrays could not be obtained.
    #[error("failed to allocate particle storage: {0}")]
    ResourceExhausted(String),

    /// The initial-condition sampler produced an unusable particle.
    #[error("initialization failed: {0}")]
    Init(String),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Scenario file could not be parsed.
    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// Allocation and initialization failures get a distinguished status
    /// (99), validation errors get 2, everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ResourceExhausted(_) | Error::Init(_) => 99,
            Error::InvalidParam(_) => 2,
            Error::Io(_) | Error::Yaml(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("count must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("count"));
    }

    #[test]
    fn alloc_and_init_failures_share_the_distinguished_status() {
        let alloc = Error::ResourceExhausted("particles".into());
        let init = Error::Init("non-finite sample".into());
        assert_eq!(alloc.exit_code(), 99);
        assert_eq!(init.exit_code(), 99);
    }
}
