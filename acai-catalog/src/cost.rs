use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{require_name, require_positive, CatalogError, CatalogResult};

/// One input bought in bulk and spread across the units of a product
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostLine {
    pub id: Uuid,
    pub name: String,
    pub total_value: f64,
    pub quantity: f64,
}

impl CostLine {
    /// Cost of this input attributed to a single unit.
    ///
    /// Always derived from `total_value / quantity`, no rounding.
    pub fn unit_cost(&self) -> f64 {
        self.total_value / self.quantity
    }
}

/// Raw form input for a new cost line
#[derive(Debug, Clone, Deserialize)]
pub struct CostLineInput {
    pub name: String,
    pub total_value: f64,
    pub quantity: f64,
}

impl CostLineInput {
    pub fn new(name: impl Into<String>, total_value: f64, quantity: f64) -> Self {
        Self {
            name: name.into(),
            total_value,
            quantity,
        }
    }

    fn validate(&self) -> CatalogResult<CostLine> {
        Ok(CostLine {
            id: Uuid::new_v4(),
            name: require_name("name", &self.name)?,
            total_value: require_positive("total_value", self.total_value)?,
            quantity: require_positive("quantity", self.quantity)?,
        })
    }
}

/// A product whose unit cost is built from a breakdown of cost lines
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostedProduct {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    cost_lines: Vec<CostLine>,
    unit_cost: f64,
}

impl CostedProduct {
    fn new(name: String, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            image_url,
            cost_lines: Vec::new(),
            unit_cost: 0.0,
        }
    }

    /// Cost lines in insertion order
    pub fn cost_lines(&self) -> &[CostLine] {
        &self.cost_lines
    }

    pub fn cost_line(&self, line_id: &Uuid) -> Option<&CostLine> {
        self.cost_lines.iter().find(|line| line.id == *line_id)
    }

    /// Sum of the unit costs of every current line
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    fn with_cost_lines(&self, cost_lines: Vec<CostLine>) -> Self {
        let unit_cost = cost_lines.iter().map(CostLine::unit_cost).sum();
        Self {
            cost_lines,
            unit_cost,
            ..self.clone()
        }
    }
}

/// The supplier screen's collection of costed products.
///
/// Operations never edit in place: each one returns the next collection and
/// leaves `self` untouched, so a rejected operation commits nothing.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CostBook {
    products: Vec<CostedProduct>,
}

impl CostBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[CostedProduct] {
        &self.products
    }

    pub fn get(&self, product_id: &Uuid) -> Option<&CostedProduct> {
        self.products.iter().find(|p| p.id == *product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a product with no cost lines yet
    pub fn create_product(
        &self,
        name: &str,
        image_url: Option<String>,
    ) -> CatalogResult<(Self, Uuid)> {
        let name = require_name("name", name)?;
        let image_url = image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let product = CostedProduct::new(name, image_url);
        let id = product.id;
        tracing::debug!(product_id = %id, name = %product.name, "costed product created");

        let mut products = self.products.clone();
        products.push(product);
        Ok((Self { products }, id))
    }

    /// Append a cost line to a product and resum its unit cost
    pub fn add_cost_line(&self, product_id: &Uuid, input: &CostLineInput) -> CatalogResult<Self> {
        let product = self
            .get(product_id)
            .ok_or(CatalogError::UnknownProduct(*product_id))?;
        let line = input.validate()?;

        tracing::debug!(
            product_id = %product_id,
            line_id = %line.id,
            unit_cost = line.unit_cost(),
            "cost line added"
        );

        let mut cost_lines = product.cost_lines.clone();
        cost_lines.push(line);
        Ok(self.replace(product.with_cost_lines(cost_lines)))
    }

    /// Drop a cost line from a product.
    ///
    /// Returns `None` when either id is unknown; the caller keeps its
    /// current collection.
    pub fn remove_cost_line(&self, product_id: &Uuid, line_id: &Uuid) -> Option<Self> {
        let product = self.get(product_id)?;
        product.cost_line(line_id)?;

        let cost_lines = product
            .cost_lines
            .iter()
            .filter(|line| line.id != *line_id)
            .cloned()
            .collect();

        tracing::debug!(product_id = %product_id, line_id = %line_id, "cost line removed");
        Some(self.replace(product.with_cost_lines(cost_lines)))
    }

    /// Remove a product. `None` when no product has this id.
    pub fn delete_product(&self, product_id: &Uuid) -> Option<Self> {
        self.get(product_id)?;
        let products = self
            .products
            .iter()
            .filter(|p| p.id != *product_id)
            .cloned()
            .collect();
        Some(Self { products })
    }

    fn replace(&self, updated: CostedProduct) -> Self {
        let products = self
            .products
            .iter()
            .map(|p| if p.id == updated.id { updated.clone() } else { p.clone() })
            .collect();
        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    fn book_with_product() -> (CostBook, Uuid) {
        CostBook::new().create_product("Açaí 500ml", None).unwrap()
    }

    #[test]
    fn test_unit_cost_is_exact_division() {
        let (book, id) = book_with_product();
        let book = book
            .add_cost_line(&id, &CostLineInput::new("Granola", 7.0, 3.0))
            .unwrap();
        let line = &book.get(&id).unwrap().cost_lines()[0];
        assert_eq!(line.unit_cost(), 7.0 / 3.0);
    }

    #[test]
    fn test_aggregate_sums_lines() {
        let (book, id) = book_with_product();
        let book = book
            .add_cost_line(&id, &CostLineInput::new("Base", 40.0, 100.0))
            .unwrap()
            .add_cost_line(&id, &CostLineInput::new("Cup", 15.0, 50.0))
            .unwrap();

        let product = book.get(&id).unwrap();
        assert_eq!(product.cost_lines().len(), 2);
        assert_eq!(product.cost_lines()[0].name, "Base");
        assert!(approx_eq(product.unit_cost(), 0.70));
    }

    #[test]
    fn test_remove_resums_from_remaining_lines() {
        let (book, id) = book_with_product();
        let book = book
            .add_cost_line(&id, &CostLineInput::new("Base", 40.0, 100.0))
            .unwrap()
            .add_cost_line(&id, &CostLineInput::new("Cup", 15.0, 50.0))
            .unwrap()
            .add_cost_line(&id, &CostLineInput::new("Spoon", 0.1, 3.0))
            .unwrap();

        let cup = book.get(&id).unwrap().cost_lines()[1].id;
        let book = book.remove_cost_line(&id, &cup).unwrap();
        let product = book.get(&id).unwrap();

        let expected: f64 = product.cost_lines().iter().map(CostLine::unit_cost).sum();
        assert_eq!(product.unit_cost(), expected);
        assert_eq!(product.cost_lines().len(), 2);
        assert!(product.cost_line(&cup).is_none());
    }

    #[test]
    fn test_remove_all_lines_returns_to_zero() {
        let (book, id) = book_with_product();
        let book = book
            .add_cost_line(&id, &CostLineInput::new("Base", 0.3, 0.7))
            .unwrap();
        let line = book.get(&id).unwrap().cost_lines()[0].id;
        let book = book.remove_cost_line(&id, &line).unwrap();
        assert_eq!(book.get(&id).unwrap().unit_cost(), 0.0);
    }

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let (book, id) = book_with_product();
        let book = book
            .add_cost_line(&id, &CostLineInput::new("Base", 40.0, 100.0))
            .unwrap();

        assert!(book.remove_cost_line(&id, &Uuid::new_v4()).is_none());
        assert!(book.remove_cost_line(&Uuid::new_v4(), &Uuid::new_v4()).is_none());
        assert_eq!(book.get(&id).unwrap().cost_lines().len(), 1);
        assert!(approx_eq(book.get(&id).unwrap().unit_cost(), 0.40));
    }

    #[test]
    fn test_invalid_line_leaves_book_untouched() {
        let (book, id) = book_with_product();

        let err = book
            .add_cost_line(&id, &CostLineInput::new("", 10.0, 2.0))
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingField("name"));

        let err = book
            .add_cost_line(&id, &CostLineInput::new("Cup", 0.0, 2.0))
            .unwrap_err();
        assert_eq!(err.field(), Some("total_value"));

        let err = book
            .add_cost_line(&id, &CostLineInput::new("Cup", 10.0, 0.0))
            .unwrap_err();
        assert_eq!(err.field(), Some("quantity"));

        assert!(book.get(&id).unwrap().cost_lines().is_empty());
    }

    #[test]
    fn test_add_to_unknown_product() {
        let (book, _) = book_with_product();
        let missing = Uuid::new_v4();
        let err = book
            .add_cost_line(&missing, &CostLineInput::new("Cup", 10.0, 2.0))
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownProduct(missing));
    }

    #[test]
    fn test_add_keeps_previous_collection() {
        let (before, id) = book_with_product();
        let after = before
            .add_cost_line(&id, &CostLineInput::new("Base", 40.0, 100.0))
            .unwrap();
        assert!(before.get(&id).unwrap().cost_lines().is_empty());
        assert_ne!(before, after);
    }

    #[test]
    fn test_create_requires_name_and_drops_blank_image() {
        assert_eq!(
            CostBook::new().create_product(" ", None).unwrap_err(),
            CatalogError::MissingField("name")
        );

        let (book, id) = CostBook::new()
            .create_product("Açaí 300ml", Some("  ".to_string()))
            .unwrap();
        let product = book.get(&id).unwrap();
        assert_eq!(product.image_url, None);
        assert_eq!(product.unit_cost(), 0.0);
    }

    #[test]
    fn test_delete_product() {
        let (book, first) = book_with_product();
        let (book, second) = book.create_product("Açaí 300ml", None).unwrap();

        let book = book.delete_product(&first).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.products()[0].id, second);
        assert!(book.delete_product(&first).is_none());
    }
}
