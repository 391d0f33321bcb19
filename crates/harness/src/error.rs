//! Error types for the E2E harness

use thiserror::Error;

/// Result type alias using the harness Error
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Harness error types
///
/// Timeout-driven absence (`ElementNotFound`, `StabilityTimeout`) and
/// exhaustive-search absence (`EntityNotFound`) are distinct kinds; callers
/// must never collapse them into a sentinel.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Fixture dependency cycle: {chain}")]
    CyclicDependency { chain: String },

    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),

    #[error("Fixture '{name}' yielded a value that is not a {expected}")]
    FixtureValue { name: String, expected: &'static str },

    #[error("Fixture '{name}' setup failed: {source}")]
    FixtureSetup {
        name: String,
        #[source]
        source: Box<HarnessError>,
    },

    #[error("Element not found: {selector} (waited {elapsed_ms} ms)")]
    ElementNotFound { selector: String, elapsed_ms: u64 },

    #[error("No stable read after {attempts} attempts")]
    StabilityTimeout { attempts: usize },

    #[error("Entity not found after exhaustive search: {key}")]
    EntityNotFound { key: String },

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Wrap an error as a setup failure of the named fixture.
    pub fn setup_failure(name: impl Into<String>, source: HarnessError) -> Self {
        HarnessError::FixtureSetup {
            name: name.into(),
            source: Box::new(source),
        }
    }
}
