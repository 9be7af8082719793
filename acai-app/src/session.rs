use acai_catalog::{
    CatalogSummary, CostBook, CostLine, CostLineInput, MarginThresholds, MarginTier, PriceList,
    PricedProduct, ProductInput,
};
use acai_core::{CoreError, CoreResult, Notifier};
use acai_shared::Notification;
use uuid::Uuid;

use crate::app_config::BusinessRules;
use crate::seed;

/// One user's working state: both product collections plus the channel
/// every outcome is reported on.
///
/// Each action validates, computes the next collection, commits it only on
/// success, and sends exactly one notification.
pub struct Session<N: Notifier> {
    price_list: PriceList,
    cost_book: CostBook,
    thresholds: MarginThresholds,
    currency_symbol: String,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    pub fn new(notifier: N, rules: &BusinessRules) -> Self {
        Self {
            price_list: PriceList::new(),
            cost_book: CostBook::new(),
            thresholds: rules.margin_thresholds(),
            currency_symbol: rules.currency_symbol.clone(),
            notifier,
        }
    }

    /// Start from the shop's sample catalogue
    pub fn seeded(notifier: N, rules: &BusinessRules) -> CoreResult<Self> {
        let mut session = Self::new(notifier, rules);
        session.price_list = seed::sample_price_list()?;
        session.cost_book = seed::sample_cost_book()?;
        Ok(session)
    }

    pub fn price_list(&self) -> &PriceList {
        &self.price_list
    }

    pub fn cost_book(&self) -> &CostBook {
        &self.cost_book
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn summary(&self) -> CatalogSummary {
        self.price_list.summary()
    }

    pub fn tier_of(&self, product: &PricedProduct) -> MarginTier {
        self.thresholds.classify(product.margin_percentage())
    }

    // Products screen

    /// Create when `editing` is `None`, otherwise replace that product
    pub fn save_product(&mut self, editing: Option<Uuid>, input: &ProductInput) -> CoreResult<Uuid> {
        let outcome = match editing {
            Some(id) => self.price_list.update(&id, input).map(|list| (list, id)),
            None => self.price_list.create(input),
        };

        match outcome {
            Ok((list, id)) => {
                self.price_list = list;
                let (title, verb) = if editing.is_some() {
                    ("Product updated", "updated")
                } else {
                    ("Product added", "created")
                };
                tracing::info!(product_id = %id, "priced product saved");
                self.notifier
                    .notify(Notification::success(title, format!("{} was {}", input.name.trim(), verb)));
                Ok(id)
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Returns whether anything was removed
    pub fn delete_product(&mut self, product_id: &Uuid) -> bool {
        let name = self.price_list.get(product_id).map(|p| p.name.clone());
        match (self.price_list.delete(product_id), name) {
            (Some(list), Some(name)) => {
                self.price_list = list;
                tracing::info!(product_id = %product_id, "priced product deleted");
                self.notifier
                    .notify(Notification::success("Product deleted", format!("{} was removed", name)));
                true
            }
            _ => {
                self.already_gone("product", product_id);
                false
            }
        }
    }

    // Suppliers screen

    pub fn create_costed_product(&mut self, name: &str, image_url: Option<String>) -> CoreResult<Uuid> {
        match self.cost_book.create_product(name, image_url) {
            Ok((book, id)) => {
                self.cost_book = book;
                tracing::info!(product_id = %id, "costed product created");
                self.notifier
                    .notify(Notification::success("Product added", format!("{} was created", name.trim())));
                Ok(id)
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    pub fn delete_costed_product(&mut self, product_id: &Uuid) -> bool {
        let name = self.cost_book.get(product_id).map(|p| p.name.clone());
        match (self.cost_book.delete_product(product_id), name) {
            (Some(book), Some(name)) => {
                self.cost_book = book;
                tracing::info!(product_id = %product_id, "costed product deleted");
                self.notifier
                    .notify(Notification::success("Product deleted", format!("{} was removed", name)));
                true
            }
            _ => {
                self.already_gone("product", product_id);
                false
            }
        }
    }

    /// Returns the new line's unit cost
    pub fn add_cost_line(&mut self, product_id: &Uuid, input: &CostLineInput) -> CoreResult<f64> {
        match self.cost_book.add_cost_line(product_id, input) {
            Ok(book) => {
                let unit_cost = book
                    .get(product_id)
                    .and_then(|p| p.cost_lines().last())
                    .map(CostLine::unit_cost)
                    .unwrap_or_default();
                self.cost_book = book;
                tracing::info!(product_id = %product_id, unit_cost, "cost line added");
                let message = format!("Unit cost: {}", self.money(unit_cost));
                self.notifier.notify(Notification::success("Cost added", message));
                Ok(unit_cost)
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    pub fn remove_cost_line(&mut self, product_id: &Uuid, line_id: &Uuid) -> bool {
        match self.cost_book.remove_cost_line(product_id, line_id) {
            Some(book) => {
                self.cost_book = book;
                let total = self
                    .cost_book
                    .get(product_id)
                    .map(|p| p.unit_cost())
                    .unwrap_or_default();
                tracing::info!(product_id = %product_id, line_id = %line_id, "cost line removed");
                let message = format!("Total unit cost: {}", self.money(total));
                self.notifier.notify(Notification::success("Cost removed", message));
                true
            }
            None => {
                self.already_gone("cost line", line_id);
                false
            }
        }
    }

    fn reject(&mut self, err: CoreError) -> CoreError {
        tracing::warn!(error = %err, "action rejected");
        self.notifier
            .notify(Notification::new(err.severity(), err.title(), err.to_string()));
        err
    }

    fn already_gone(&mut self, what: &str, id: &Uuid) {
        tracing::debug!(%id, "{} already removed", what);
        self.notifier
            .notify(Notification::info("Nothing to remove", format!("The {} no longer exists", what)));
    }

    fn money(&self, value: f64) -> String {
        format!("{} {:.2}", self.currency_symbol, value)
    }
}
