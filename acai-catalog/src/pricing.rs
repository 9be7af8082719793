use serde::{Deserialize, Serialize};

use crate::product::PricedProduct;

/// Profit and margin derived from a (unit cost, sale price) pair
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Profitability {
    pub profit: f64,
    pub margin_percentage: f64,
}

impl Profitability {
    /// `profit = sale - cost`, `margin = profit / sale * 100`.
    ///
    /// Margin is 0 when there is no positive sale price to divide by. With
    /// `sale > cost > 0` it lies in (0, 100), except that a cost below f64
    /// resolution of the sale price (e.g. 1e-20 against 1.0) rounds the
    /// margin to exactly 100.
    pub fn of(unit_cost: f64, sale_price: f64) -> Self {
        let profit = sale_price - unit_cost;
        let margin_percentage = if sale_price > 0.0 {
            (profit / sale_price) * 100.0
        } else {
            0.0
        };
        Self {
            profit,
            margin_percentage,
        }
    }
}

/// Badge bucket for a margin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginTier {
    High,
    Medium,
    Low,
}

/// Lower bounds (inclusive, in percent) of the high and medium tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarginThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for MarginThresholds {
    fn default() -> Self {
        Self {
            high: 60.0,
            medium: 40.0,
        }
    }
}

impl MarginThresholds {
    pub fn classify(&self, margin_percentage: f64) -> MarginTier {
        if margin_percentage >= self.high {
            MarginTier::High
        } else if margin_percentage >= self.medium {
            MarginTier::Medium
        } else {
            MarginTier::Low
        }
    }
}

/// Arithmetic mean of every margin, 0 for an empty slice
pub fn average_margin(products: &[PricedProduct]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let total: f64 = products.iter().map(|p| p.margin_percentage()).sum();
    total / products.len() as f64
}

/// Product with the highest margin; the earliest one wins a tie
pub fn most_profitable(products: &[PricedProduct]) -> Option<&PricedProduct> {
    products.iter().fold(None, |best: Option<&PricedProduct>, current| match best {
        Some(best) if best.margin_percentage() >= current.margin_percentage() => Some(best),
        _ => Some(current),
    })
}

/// Figures shown above the product table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogSummary {
    pub product_count: usize,
    pub average_margin: f64,
    pub most_profitable: Option<TopProduct>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopProduct {
    pub name: String,
    pub margin_percentage: f64,
}

impl CatalogSummary {
    pub fn of(products: &[PricedProduct]) -> Self {
        Self {
            product_count: products.len(),
            average_margin: average_margin(products),
            most_profitable: most_profitable(products).map(|p| TopProduct {
                name: p.name.clone(),
                margin_percentage: p.margin_percentage(),
            }),
        }
    }
}
