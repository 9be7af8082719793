use chrono::Utc;
use serde::Serialize;

use crate::models::{ExpenseCategory, Period, PeriodFigures, SalesChannel};

/// Everything the dashboard screen shows at once
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub today: PeriodFigures,
    pub week: PeriodFigures,
    pub month: PeriodFigures,
    pub channels: Vec<SalesChannel>,
    pub expense_categories: Vec<ExpenseCategory>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChannelLine {
    pub name: String,
    pub sales_count: u32,
    pub gross: f64,
    pub fee_percent: f64,
    pub fee: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExpenseShare {
    pub name: String,
    pub amount: f64,
    /// Percent of the month's expenses
    pub share_percent: f64,
}

impl DashboardSnapshot {
    pub fn figures(&self, period: Period) -> &PeriodFigures {
        match period {
            Period::Today => &self.today,
            Period::Week => &self.week,
            Period::Month => &self.month,
        }
    }

    pub fn channel_lines(&self) -> Vec<ChannelLine> {
        self.channels
            .iter()
            .map(|channel| ChannelLine {
                name: channel.name.clone(),
                sales_count: channel.sales_count,
                gross: channel.gross,
                fee_percent: channel.fee_percent,
                fee: channel.fee_amount(),
                net: channel.net(),
            })
            .collect()
    }

    /// Each category as a share of the month's expenses; all zero when the
    /// month has none.
    pub fn expense_shares(&self) -> Vec<ExpenseShare> {
        let month_total = self.month.expenses;
        self.expense_categories
            .iter()
            .map(|category| ExpenseShare {
                name: category.name.clone(),
                amount: category.amount,
                share_percent: if month_total > 0.0 {
                    (category.amount / month_total) * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Total of what the channels actually paid out
    pub fn net_channel_revenue(&self) -> f64 {
        self.channels.iter().map(SalesChannel::net).sum()
    }

    /// Render the snapshot as the JSON document the dashboard screen consumes
    pub fn to_report(&self) -> serde_json::Value {
        let period = |figures: &PeriodFigures| {
            serde_json::json!({
                "sales": figures.sales,
                "expenses": figures.expenses,
                "profit": figures.profit(),
            })
        };

        let categorised: f64 = self.expense_categories.iter().map(|c| c.amount).sum();
        if categorised > self.month.expenses {
            tracing::warn!(
                categorised,
                month_expenses = self.month.expenses,
                "expense categories exceed the month's expenses"
            );
        }

        serde_json::json!({
            "report_date": Utc::now().to_rfc3339(),
            "periods": {
                "today": period(&self.today),
                "week": period(&self.week),
                "month": period(&self.month),
            },
            "channels": self.channel_lines(),
            "net_channel_revenue": self.net_channel_revenue(),
            "expenses_by_category": self.expense_shares(),
        })
    }
}
