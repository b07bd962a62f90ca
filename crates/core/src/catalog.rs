//! Catalog domain types.
//!
//! Products, their priced variants, display categories and delivery zones.
//! The catalog is plain data: the storefront only reads it, and every
//! mutation happens through the admin endpoints, which replace whole
//! collections at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, NeighborhoodId, ProductId};

/// Implicit catch-all category label shown before the real categories.
///
/// Not stored with the admin-managed categories; selecting it disables the
/// category filter.
pub const CATCH_ALL_CATEGORY: &str = "Todas";

/// A named variant of a product, optionally overriding its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Variant label (e.g., "Pequeno", "Grande").
    pub name: String,
    /// Override price; `None` means the product's base price applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID (assigned by the admin panel).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description shown on the card.
    pub description: String,
    /// Base price.
    pub price: Decimal,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Category display name this product belongs to.
    pub category: String,
    /// Ordered list of variants, if the product has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
}

/// An admin-managed display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Unique display label, used as the filter key.
    pub name: String,
}

/// A delivery zone with a flat fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: NeighborhoodId,
    pub name: String,
    /// Flat delivery fee for this zone; non-negative.
    pub fee: Decimal,
}

/// Filter labels for the category bar: the catch-all followed by every
/// stored category name.
#[must_use]
pub fn category_names(categories: &[Category]) -> Vec<String> {
    std::iter::once(CATCH_ALL_CATEGORY.to_owned())
        .chain(categories.iter().map(|c| c.name.clone()))
        .collect()
}

/// Products visible under the given category label.
///
/// The catch-all label (and only it) disables filtering.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    if category == CATCH_ALL_CATEGORY {
        products.iter().collect()
    } else {
        products.iter().filter(|p| p.category == category).collect()
    }
}

/// Look up a delivery zone by ID.
#[must_use]
pub fn find_neighborhood<'a>(
    neighborhoods: &'a [Neighborhood],
    id: &NeighborhoodId,
) -> Option<&'a Neighborhood> {
    neighborhoods.iter().find(|n| n.id == *id)
}
