//! Cart route handlers.
//!
//! Every mutation answers with the refreshed cart view and persists the
//! cart to the record store fire-and-forget.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use doceria_core::types::{ProductId, format_brl};
use doceria_core::{Cart, ProductOption};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub option_name: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    product_id: item.product_id.clone(),
                    name: item.name.clone(),
                    option_name: item.selected_option.as_ref().map(|o| o.name.clone()),
                    quantity: item.quantity,
                    price: format_brl(item.price),
                    line_total: format_brl(item.line_total()),
                })
                .collect(),
            subtotal: format_brl(cart.subtotal()),
            item_count: cart.item_count(),
        }
    }
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Variant name when the product has options.
    pub option_name: Option<String>,
}

/// Quantity update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub option_name: Option<String>,
    /// Signed delta; the resulting quantity floors at zero and removes
    /// the line.
    pub delta: i32,
}

/// Display the cart.
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let wizard = state.wizard();
    Json(CartView::from(wizard.cart()))
}

/// Add one unit of a product to the cart.
///
/// Looks the product up in the current catalog and snapshots it into the
/// cart; an unknown product or variant name is a 404.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product or option.
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let catalog = state.catalog();
    let product = catalog
        .products
        .iter()
        .find(|p| p.id == request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let option: Option<&ProductOption> = match request.option_name.as_deref() {
        Some(name) => Some(
            product
                .options
                .as_deref()
                .and_then(|options| options.iter().find(|o| o.name == name))
                .ok_or_else(|| {
                    AppError::NotFound(format!("option {name} of product {}", product.id))
                })?,
        ),
        None => None,
    };

    let mut wizard = state.wizard_mut();
    wizard.cart_mut().add(product, option);
    state.persist_cart(wizard.cart());

    Ok(Json(CartView::from(wizard.cart())))
}

/// Apply a quantity delta to a cart line.
///
/// A delta that reaches zero removes the line; an unknown identity is a
/// silent no-op, mirroring the cart engine contract.
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateCartRequest>,
) -> Json<CartView> {
    let mut wizard = state.wizard_mut();
    wizard.cart_mut().set_quantity(
        &request.product_id,
        request.option_name.as_deref(),
        request.delta,
    );
    state.persist_cart(wizard.cart());

    Json(CartView::from(wizard.cart()))
}
