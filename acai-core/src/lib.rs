pub mod notifier;

pub use notifier::{Notifier, TracingNotifier};

use acai_shared::Severity;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    /// Input is well-formed but the price does not cover the cost
    #[error("Pricing check failed: {0}")]
    PricingWarning(String),
}

impl CoreError {
    /// Short heading used when the error is shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            CoreError::ValidationError(_) => "Error",
            CoreError::PricingWarning(_) => "Warning",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CoreError::ValidationError(_) => Severity::Error,
            CoreError::PricingWarning(_) => Severity::Warning,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
