//! Admin route handlers.
//!
//! The admin surface is the login gate plus whole-collection updates: each
//! update replaces the in-memory collection and persists it in the same
//! request.
//!
//! The gate is an exact plaintext comparison against the stored password -
//! acknowledged as weak and explicitly not a security boundary. Mutation
//! endpoints re-verify via the `X-Admin-Password` header since the service
//! keeps no login session.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;

use doceria_core::{Category, Neighborhood, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Header carrying the admin password on mutation requests.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// WhatsApp number update body.
#[derive(Debug, Deserialize)]
pub struct UpdateWhatsAppRequest {
    pub number: String,
}

/// Admin password update body.
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

/// Verify the admin password from the request headers.
fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<()> {
    let supplied = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing admin password header".to_owned()))?;

    if supplied == state.catalog().admin_password {
        Ok(())
    } else {
        Err(AppError::Unauthorized("incorrect password".to_owned()))
    }
}

/// Check a password against the stored one.
///
/// Succeeds with 204; a mismatch is a 401 with no lockout or throttling,
/// recoverable by retrying.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` on mismatch.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<StatusCode> {
    if request.password == state.catalog().admin_password {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Unauthorized("incorrect password".to_owned()))
    }
}

/// Replace the product catalog.
///
/// # Errors
///
/// Returns 401 without the admin header, 500 when persisting fails.
pub async fn update_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(products): Json<Vec<Product>>,
) -> Result<StatusCode> {
    require_admin(&state, &headers)?;
    state.store().save_products(&products)?;
    state.catalog_mut().products = products;

    tracing::info!("Catalog products updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the display categories.
///
/// # Errors
///
/// Returns 401 without the admin header, 500 when persisting fails.
pub async fn update_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(categories): Json<Vec<Category>>,
) -> Result<StatusCode> {
    require_admin(&state, &headers)?;
    state.store().save_categories(&categories)?;
    state.catalog_mut().categories = categories;

    tracing::info!("Catalog categories updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the delivery zones.
///
/// # Errors
///
/// Returns 401 without the admin header, 500 when persisting fails.
pub async fn update_neighborhoods(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(neighborhoods): Json<Vec<Neighborhood>>,
) -> Result<StatusCode> {
    require_admin(&state, &headers)?;
    state.store().save_neighborhoods(&neighborhoods)?;
    state.catalog_mut().neighborhoods = neighborhoods;

    tracing::info!("Delivery zones updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Update the store's WhatsApp number.
///
/// # Errors
///
/// Returns 401 without the admin header, 500 when persisting fails.
pub async fn update_whatsapp_number(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateWhatsAppRequest>,
) -> Result<StatusCode> {
    require_admin(&state, &headers)?;
    state.store().save_whatsapp_number(&request.number)?;
    state.catalog_mut().whatsapp_number = request.number;

    tracing::info!("WhatsApp number updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Update the admin password.
///
/// # Errors
///
/// Returns 401 without the admin header, 500 when persisting fails.
pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<StatusCode> {
    require_admin(&state, &headers)?;
    state.store().save_admin_password(&request.password)?;
    state.catalog_mut().admin_password = request.password;

    tracing::info!("Admin password updated");
    Ok(StatusCode::NO_CONTENT)
}
