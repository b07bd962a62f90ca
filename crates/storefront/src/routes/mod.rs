//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog/products       - Product listing (?category= filter)
//! GET  /catalog/categories     - Category labels, catch-all first
//!
//! # Cart
//! GET  /cart                   - Cart contents and subtotal
//! POST /cart/add               - Add one unit (merges by product+option)
//! POST /cart/update            - Apply a quantity delta
//!
//! # Order wizard
//! GET  /order                  - Current step, details and totals
//! PUT  /order/details          - Replace the order details
//! POST /order/next             - Advance one step (guarded)
//! POST /order/back             - Retreat one step
//! POST /order/finalize         - Format the order, return the wa.me link
//! POST /order/restart          - Clear the submitted flag
//!
//! # Admin
//! POST /admin/login            - Password check (exact match, no lockout)
//! PUT  /admin/products         - Replace the catalog
//! PUT  /admin/categories       - Replace the categories
//! PUT  /admin/neighborhoods    - Replace the delivery zones
//! PUT  /admin/whatsapp         - Update the store WhatsApp number
//! PUT  /admin/password         - Update the admin password
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod order;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::products))
        .route("/categories", get(catalog::categories))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
}

/// Create the order wizard routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order::show))
        .route("/details", put(order::update_details))
        .route("/next", post(order::next))
        .route("/back", post(order::back))
        .route("/finalize", post(order::finalize))
        .route("/restart", post(order::restart))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/products", put(admin::update_products))
        .route("/categories", put(admin::update_categories))
        .route("/neighborhoods", put(admin::update_neighborhoods))
        .route("/whatsapp", put(admin::update_whatsapp_number))
        .route("/password", put(admin::update_password))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog_routes())
        .nest("/cart", cart_routes())
        .nest("/order", order_routes())
        .nest("/admin", admin_routes())
}
