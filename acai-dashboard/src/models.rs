use serde::{Deserialize, Serialize};

use crate::{require_amount, DashboardError, DashboardResult};

/// Reporting windows shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    Today,
    Week,
    Month,
}

/// Sales and expenses booked within one period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodFigures {
    pub sales: f64,
    pub expenses: f64,
}

impl PeriodFigures {
    pub fn new(sales: f64, expenses: f64) -> DashboardResult<Self> {
        Ok(Self {
            sales: require_amount("sales", sales)?,
            expenses: require_amount("expenses", expenses)?,
        })
    }

    /// Can be negative on a bad day
    pub fn profit(&self) -> f64 {
        self.sales - self.expenses
    }
}

/// Where sales came from (counter, delivery apps, social)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesChannel {
    pub name: String,
    pub sales_count: u32,
    pub gross: f64,
    /// Commission the channel keeps, in percent
    pub fee_percent: f64,
}

impl SalesChannel {
    pub fn new(name: &str, sales_count: u32, gross: f64, fee_percent: f64) -> DashboardResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::MissingField("name"));
        }
        if !(0.0..=100.0).contains(&fee_percent) {
            return Err(DashboardError::FeeOutOfRange(fee_percent));
        }
        Ok(Self {
            name: name.to_string(),
            sales_count,
            gross: require_amount("gross", gross)?,
            fee_percent,
        })
    }

    /// What reaches the till after the channel's commission
    pub fn net(&self) -> f64 {
        self.gross * (1.0 - self.fee_percent / 100.0)
    }

    pub fn fee_amount(&self) -> f64 {
        self.gross - self.net()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseCategory {
    pub name: String,
    pub amount: f64,
}

impl ExpenseCategory {
    pub fn new(name: &str, amount: f64) -> DashboardResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::MissingField("name"));
        }
        Ok(Self {
            name: name.to_string(),
            amount: require_amount("amount", amount)?,
        })
    }
}
