//! Cart engine.
//!
//! The cart is an ordered list of lines, each a frozen snapshot of a product
//! at add time. Freezing price and option means later catalog edits never
//! retroactively change an in-progress cart.
//!
//! Line identity is the pair (product id, selected option name): adding the
//! same pair again increments the existing line. Lookup is a linear scan -
//! the cart stays small and the formatter depends on insertion order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductOption};
use crate::types::ProductId;

/// A single cart line: a product snapshot plus quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// ID of the product this line was created from.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Resolved unit price at add time (option override or base price).
    pub price: Decimal,
    /// Always >= 1 while the line exists.
    pub quantity: u32,
    /// Snapshot of the selected variant, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<ProductOption>,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Whether this line has the given merge identity. An absent option
    /// only matches an absent option.
    fn matches(&self, product_id: &ProductId, option_name: Option<&str>) -> bool {
        self.product_id == *product_id
            && self.selected_option.as_ref().map(|o| o.name.as_str()) == option_name
    }
}

/// The ordered list of selected items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Add one unit of a product, merging into an existing line when the
    /// (product id, option name) identity already exists.
    ///
    /// The effective price is the option's override when present, else the
    /// product's base price. Always succeeds.
    pub fn add(&mut self, product: &Product, option: Option<&ProductOption>) {
        let option_name = option.map(|o| o.name.as_str());
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(&product.id, option_name))
        {
            line.quantity += 1;
            return;
        }

        let price = option.and_then(|o| o.price).unwrap_or(product.price);
        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price,
            quantity: 1,
            selected_option: option.cloned(),
        });
    }

    /// Apply a quantity delta to the line with the given identity.
    ///
    /// The new quantity floors at zero, and a zero-quantity line is removed
    /// from the cart. Silently does nothing when no line matches.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        option_name: Option<&str>,
        delta: i32,
    ) {
        let Some(index) = self
            .items
            .iter()
            .position(|line| line.matches(product_id, option_name))
        else {
            return;
        };

        let Some(line) = self.items.get_mut(index) else {
            return;
        };
        let new_quantity = i64::from(line.quantity) + i64::from(delta);
        if new_quantity <= 0 {
            self.items.remove(index);
        } else {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Sum of price times quantity across all lines; zero when empty.
    ///
    /// Recomputed from scratch on every call - derived values are never
    /// cached (stale totals are worse than cheap arithmetic).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
