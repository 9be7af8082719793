//! The shop's sample catalogue and dashboard figures, used until a real
//! store is wired in. Everything goes through the regular validated
//! operations.

use acai_catalog::{CostBook, CostLineInput, PriceList, ProductInput};
use acai_core::CoreResult;
use acai_dashboard::{DashboardSnapshot, ExpenseCategory, PeriodFigures, SalesChannel};

pub fn sample_price_list() -> CoreResult<PriceList> {
    let (list, _) = PriceList::new().create(&ProductInput::new("Açaí 500ml", 2.50, 8.00))?;
    let (list, _) = list.create(&ProductInput::new("Açaí 300ml", 1.80, 6.00))?;
    Ok(list)
}

pub fn sample_cost_book() -> CoreResult<CostBook> {
    let (book, id) = CostBook::new().create_product("Açaí 500ml", None)?;
    let book = book
        .add_cost_line(&id, &CostLineInput::new("Açaí Base", 40.0, 100.0))?
        .add_cost_line(&id, &CostLineInput::new("Copo 500ml", 15.0, 50.0))?;
    Ok(book)
}

pub fn sample_dashboard() -> CoreResult<DashboardSnapshot> {
    Ok(DashboardSnapshot {
        today: PeriodFigures::new(450.0, 180.0)?,
        week: PeriodFigures::new(2800.0, 1200.0)?,
        month: PeriodFigures::new(12500.0, 5200.0)?,
        channels: vec![
            SalesChannel::new("Instagram", 8, 400.0, 0.0)?,
            SalesChannel::new("iFood", 12, 600.0, 12.0)?,
            SalesChannel::new("WhatsApp", 5, 250.0, 0.0)?,
            SalesChannel::new("Ponto Físico", 15, 750.0, 0.0)?,
        ],
        expense_categories: vec![
            ExpenseCategory::new("Ingredientes", 1800.0)?,
            ExpenseCategory::new("Energia", 450.0)?,
            ExpenseCategory::new("Combustível", 320.0)?,
            ExpenseCategory::new("Outros", 230.0)?,
        ],
    })
}
