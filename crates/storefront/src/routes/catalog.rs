//! Catalog route handlers.
//!
//! Read-only views over the admin-managed collections.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use doceria_core::catalog;
use doceria_core::{CATCH_ALL_CATEGORY, Product};

use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Category label to filter by; absent or the catch-all shows all.
    pub category: Option<String>,
}

/// List products, optionally filtered by category label.
pub async fn products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog();
    let label = query.category.as_deref().unwrap_or(CATCH_ALL_CATEGORY);
    let filtered = catalog::filter_by_category(&catalog.products, label)
        .into_iter()
        .cloned()
        .collect();
    Json(filtered)
}

/// List category filter labels, the catch-all first.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let catalog = state.catalog();
    Json(catalog::category_names(&catalog.categories))
}
