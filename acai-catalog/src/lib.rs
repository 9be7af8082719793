pub mod cost;
pub mod product;
pub mod pricing;

pub use cost::{CostBook, CostLine, CostLineInput, CostedProduct};
pub use product::{PriceList, PricedProduct, ProductInput};
pub use pricing::{CatalogSummary, MarginThresholds, MarginTier, Profitability};

use acai_core::CoreError;
use uuid::Uuid;

/// Validation failures raised by catalog operations.
///
/// Every variant is user-correctable; a failed operation never touches the
/// collection it was called on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("Sale price {sale_price} must be greater than unit cost {unit_cost}")]
    SaleNotAboveCost {
        unit_cost: f64,
        sale_price: f64,
    },

    #[error("Product not found: {0}")]
    UnknownProduct(Uuid),
}

impl CatalogError {
    /// Name of the offending input field, when there is a single one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CatalogError::MissingField(field) => Some(field),
            CatalogError::InvalidField { field, .. } => Some(field),
            CatalogError::SaleNotAboveCost { .. } => Some("sale_price"),
            CatalogError::UnknownProduct(_) => None,
        }
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::SaleNotAboveCost { .. } => CoreError::PricingWarning(err.to_string()),
            other => CoreError::ValidationError(other.to_string()),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

pub(crate) fn require_name(field: &'static str, value: &str) -> CatalogResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> CatalogResult<f64> {
    if !value.is_finite() {
        return Err(CatalogError::InvalidField {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value <= 0.0 {
        return Err(CatalogError::InvalidField {
            field,
            reason: format!("must be greater than zero, got {}", value),
        });
    }
    Ok(value)
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
