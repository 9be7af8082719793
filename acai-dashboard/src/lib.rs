pub mod models;
pub mod report;

pub use models::{ExpenseCategory, Period, PeriodFigures, SalesChannel};
pub use report::{ChannelLine, DashboardSnapshot, ExpenseShare};

use acai_core::CoreError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount {
        field: &'static str,
        value: f64,
    },

    #[error("Channel fee must be between 0 and 100 percent, got {0}")]
    FeeOutOfRange(f64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<DashboardError> for CoreError {
    fn from(err: DashboardError) -> Self {
        CoreError::ValidationError(err.to_string())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

pub(crate) fn require_amount(field: &'static str, value: f64) -> DashboardResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DashboardError::InvalidAmount { field, value });
    }
    Ok(value)
}
