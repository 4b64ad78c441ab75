//! Error handling for cohortsim.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod configuration_error;

pub use config_error::ConfigError;
pub use configuration_error::ConfigurationError;

/// Result alias used by every fallible operation in the workspace.
pub type SimResult<T> = Result<T, SimError>;

/// Top-level simulation error.
///
/// Errors are raised by the component that first observes the violated
/// precondition and are never retried; the caller decides whether to abort
/// or skip the scenario.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimError {
    /// Convenience constructor for [`SimError::LengthMismatch`].
    pub fn length_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}
