//! Order wizard route handlers.
//!
//! The wizard is driven by explicit transitions: `next` (guarded), `back`
//! (always allowed), `finalize` (terminal, review step only) and `restart`
//! (clears the confirmation flag). Every handler answers with the same
//! order snapshot so clients never have to derive wizard state themselves.

use axum::{Json, extract::State};
use serde::Serialize;

use doceria_core::{OrderDetails, OrderSubmission, OrderTotals, Step, pricing};

use crate::error::Result;
use crate::state::AppState;

/// Snapshot of the wizard for clients: step, details, derived totals.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub step: Step,
    pub step_number: u8,
    pub details: OrderDetails,
    pub totals: OrderTotals,
    pub can_advance: bool,
    pub submitted: bool,
}

impl OrderView {
    fn snapshot(state: &AppState) -> Self {
        let catalog = state.catalog();
        let wizard = state.wizard();
        let totals = pricing::compute(wizard.details(), wizard.cart(), &catalog.neighborhoods);
        Self {
            step: wizard.step(),
            step_number: wizard.step().number(),
            details: wizard.details().clone(),
            totals,
            can_advance: wizard.can_advance(),
            submitted: wizard.submitted(),
        }
    }
}

/// Current wizard snapshot.
pub async fn show(State(state): State<AppState>) -> Json<OrderView> {
    Json(OrderView::snapshot(&state))
}

/// Replace the order details with the submitted form state.
///
/// The client owns the form; the server only validates at the step guard,
/// so partially filled details are always accepted here.
pub async fn update_details(
    State(state): State<AppState>,
    Json(details): Json<OrderDetails>,
) -> Json<OrderView> {
    {
        let mut wizard = state.wizard_mut();
        *wizard.details_mut() = details;
    }
    Json(OrderView::snapshot(&state))
}

/// Advance one step if the current step's guard passes.
///
/// # Errors
///
/// Returns the guard failure as a 422; the step is unchanged.
pub async fn next(State(state): State<AppState>) -> Result<Json<OrderView>> {
    {
        let mut wizard = state.wizard_mut();
        wizard.next()?;
    }
    Ok(Json(OrderView::snapshot(&state)))
}

/// Retreat one step. Never guarded.
pub async fn back(State(state): State<AppState>) -> Json<OrderView> {
    {
        let mut wizard = state.wizard_mut();
        wizard.back();
    }
    Json(OrderView::snapshot(&state))
}

/// Finalize the order from the review step.
///
/// Formats the message, builds the wa.me deep link, clears the cart and
/// persists the now-empty cart. Invoking the link is the client's concern;
/// the submission is recorded regardless (fire-and-forget hand-off).
///
/// # Errors
///
/// Returns a 422 when the wizard is not on the review step.
pub async fn finalize(State(state): State<AppState>) -> Result<Json<OrderSubmission>> {
    let catalog = state.catalog();
    let mut wizard = state.wizard_mut();
    let submission = wizard.finalize(&catalog.neighborhoods, &catalog.whatsapp_number)?;
    state.persist_cart(wizard.cart());

    tracing::info!("Order finalized and handed to WhatsApp");
    Ok(Json(submission))
}

/// Explicit restart after a submission: clears the confirmation flag.
pub async fn restart(State(state): State<AppState>) -> Json<OrderView> {
    {
        let mut wizard = state.wizard_mut();
        wizard.restart();
    }
    Json(OrderView::snapshot(&state))
}
