use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::{CatalogSummary, Profitability};
use crate::{require_name, require_positive, CatalogError, CatalogResult};

/// A sellable product priced directly, without a cost breakdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricedProduct {
    pub id: Uuid,
    pub name: String,
    unit_cost: f64,
    sale_price: f64,
    profitability: Profitability,
    pub created_on: NaiveDate,
}

/// Cost and price are only set through [`PriceList`], so profit and margin
/// always match them.
impl PricedProduct {
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    pub fn profit(&self) -> f64 {
        self.profitability.profit
    }

    pub fn margin_percentage(&self) -> f64 {
        self.profitability.margin_percentage
    }
}

/// Raw form input for creating or editing a priced product
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub unit_cost: f64,
    pub sale_price: f64,
}

/// Input after validation, ready to be stored
struct ValidProduct {
    name: String,
    unit_cost: f64,
    sale_price: f64,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, unit_cost: f64, sale_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_cost,
            sale_price,
        }
    }

    fn validate(&self) -> CatalogResult<ValidProduct> {
        let name = require_name("name", &self.name)?;
        let unit_cost = require_positive("unit_cost", self.unit_cost)?;
        let sale_price = require_positive("sale_price", self.sale_price)?;

        // Selling at or below cost is almost always a typo in the form.
        if sale_price <= unit_cost {
            return Err(CatalogError::SaleNotAboveCost {
                unit_cost,
                sale_price,
            });
        }

        Ok(ValidProduct {
            name,
            unit_cost,
            sale_price,
        })
    }
}

/// The products screen's collection, in display order.
///
/// Same discipline as [`crate::CostBook`]: each operation hands back a new
/// collection value.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PriceList {
    products: Vec<PricedProduct>,
}

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[PricedProduct] {
        &self.products
    }

    pub fn get(&self, product_id: &Uuid) -> Option<&PricedProduct> {
        self.products.iter().find(|p| p.id == *product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a new product stamped with today's date
    pub fn create(&self, input: &ProductInput) -> CatalogResult<(Self, Uuid)> {
        self.create_on(input, Utc::now().date_naive())
    }

    pub fn create_on(&self, input: &ProductInput, created_on: NaiveDate) -> CatalogResult<(Self, Uuid)> {
        let valid = input.validate()?;
        let product = PricedProduct {
            id: Uuid::new_v4(),
            profitability: Profitability::of(valid.unit_cost, valid.sale_price),
            name: valid.name,
            unit_cost: valid.unit_cost,
            sale_price: valid.sale_price,
            created_on,
        };
        let id = product.id;

        tracing::debug!(
            product_id = %id,
            margin = product.margin_percentage(),
            "priced product created"
        );

        let mut products = self.products.clone();
        products.push(product);
        Ok((Self { products }, id))
    }

    /// Replace name, cost and price of an existing product.
    ///
    /// Keeps its id and creation date; profit and margin are rederived.
    pub fn update(&self, product_id: &Uuid, input: &ProductInput) -> CatalogResult<Self> {
        let existing = self
            .get(product_id)
            .ok_or(CatalogError::UnknownProduct(*product_id))?;
        let valid = input.validate()?;

        let updated = PricedProduct {
            profitability: Profitability::of(valid.unit_cost, valid.sale_price),
            name: valid.name,
            unit_cost: valid.unit_cost,
            sale_price: valid.sale_price,
            ..existing.clone()
        };

        tracing::debug!(
            product_id = %product_id,
            margin = updated.margin_percentage(),
            "priced product updated"
        );

        let products = self
            .products
            .iter()
            .map(|p| if p.id == *product_id { updated.clone() } else { p.clone() })
            .collect();
        Ok(Self { products })
    }

    /// Remove a product. `None` when no product has this id.
    pub fn delete(&self, product_id: &Uuid) -> Option<Self> {
        self.get(product_id)?;
        let products = self
            .products
            .iter()
            .filter(|p| p.id != *product_id)
            .cloned()
            .collect();
        Some(Self { products })
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::of(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    #[test]
    fn test_create_derives_profit_and_margin() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (list, id) = PriceList::new()
            .create_on(&ProductInput::new("X", 2.50, 8.00), date)
            .unwrap();

        let product = list.get(&id).unwrap();
        assert!(approx_eq(product.profit(), 5.50));
        assert!(approx_eq(product.margin_percentage(), 68.75));
        assert_eq!(product.created_on, date);
    }

    #[test]
    fn test_sale_not_above_cost_is_rejected() {
        let (list, _) = PriceList::new()
            .create(&ProductInput::new("Açaí 500ml", 2.50, 8.00))
            .unwrap();

        let err = list.create(&ProductInput::new("Even", 3.0, 3.0)).unwrap_err();
        assert_eq!(
            err,
            CatalogError::SaleNotAboveCost {
                unit_cost: 3.0,
                sale_price: 3.0
            }
        );
        assert!(list.create(&ProductInput::new("Loss", 5.0, 4.0)).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let list = PriceList::new();
        assert_eq!(
            list.create(&ProductInput::new("", 1.0, 2.0)).unwrap_err(),
            CatalogError::MissingField("name")
        );
        assert_eq!(
            list.create(&ProductInput::new("X", 0.0, 2.0)).unwrap_err().field(),
            Some("unit_cost")
        );
        assert_eq!(
            list.create(&ProductInput::new("X", 1.0, -2.0)).unwrap_err().field(),
            Some("sale_price")
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_update_keeps_id_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let (list, id) = PriceList::new()
            .create_on(&ProductInput::new("Açaí 300ml", 1.80, 6.00), date)
            .unwrap();
        let (list, other) = list.create(&ProductInput::new("Açaí 500ml", 2.50, 8.00)).unwrap();

        let list = list
            .update(&id, &ProductInput::new("Açaí 300ml Zero", 2.00, 5.00))
            .unwrap();

        let product = &list.products()[0];
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Açaí 300ml Zero");
        assert_eq!(product.created_on, date);
        assert!(approx_eq(product.profit(), 3.0));
        assert!(approx_eq(product.margin_percentage(), 60.0));
        assert_eq!(list.products()[1].id, other);
    }

    #[test]
    fn test_rejected_update_keeps_record() {
        let (list, id) = PriceList::new()
            .create(&ProductInput::new("Açaí 500ml", 2.50, 8.00))
            .unwrap();
        assert!(list.update(&id, &ProductInput::new("Açaí 500ml", 9.0, 8.0)).is_err());
        let kept = list.get(&id).unwrap();
        assert!(approx_eq(kept.sale_price(), 8.00));
        assert!(approx_eq(kept.unit_cost(), 2.50));
        assert!(approx_eq(kept.margin_percentage(), 68.75));

        let missing = Uuid::new_v4();
        assert_eq!(
            list.update(&missing, &ProductInput::new("Y", 1.0, 2.0)).unwrap_err(),
            CatalogError::UnknownProduct(missing)
        );
    }

    #[test]
    fn test_update_rederives_profit_and_margin() {
        let (list, id) = PriceList::new()
            .create(&ProductInput::new("Açaí 500ml", 2.50, 8.00))
            .unwrap();
        let list = list
            .update(&id, &ProductInput::new("Açaí 500ml", 7.00, 8.00))
            .unwrap();

        let product = list.get(&id).unwrap();
        assert!(approx_eq(product.unit_cost(), 7.00));
        assert!(approx_eq(product.profit(), product.sale_price() - product.unit_cost()));
        assert!(approx_eq(product.margin_percentage(), 12.5));
    }

    #[test]
    fn test_delete() {
        let (list, id) = PriceList::new()
            .create(&ProductInput::new("Açaí 500ml", 2.50, 8.00))
            .unwrap();
        let emptied = list.delete(&id).unwrap();
        assert!(emptied.is_empty());
        assert!(emptied.delete(&id).is_none());
        assert_eq!(list.len(), 1);
    }
}
