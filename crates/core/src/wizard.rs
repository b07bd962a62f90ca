//! The four-step order wizard.
//!
//! A linear state machine: Browsing -> Cart -> Details -> Review, with a
//! terminal `finalize` action on the review step. `next` advances one step
//! when the current step's guard passes; `back` always retreats one step.
//! There is no state skipping.
//!
//! The wizard owns the cart and the mutable order details, so guard checks
//! always see current state (a cart emptied while on the cart step blocks
//! advancing again).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::catalog::{self, Neighborhood};
use crate::message::{self, OrderSubmission};
use crate::order::OrderDetails;
use crate::pricing;

/// One of the four linear wizard steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Browsing,
    Cart,
    Details,
    Review,
}

impl Step {
    /// 1-based position shown in the progress stepper.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Browsing => 1,
            Self::Cart => 2,
            Self::Details => 3,
            Self::Review => 4,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Browsing | Self::Cart => Self::Browsing,
            Self::Details => Self::Cart,
            Self::Review => Self::Details,
        }
    }
}

/// Why the wizard refused to advance or finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The Browsing and Cart guards require a non-empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The Details guard requires a name, and an address for delivery.
    #[error("order details are incomplete")]
    IncompleteDetails,

    /// `next` past Review is not a transition; the order must be finalized.
    #[error("already at review; finalize the order instead")]
    AtReview,

    /// `finalize` is only valid on the review step.
    #[error("order can only be finalized from the review step")]
    NotAtReview,
}

/// The order flow: current step, cart, details and submission flag.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    cart: Cart,
    details: OrderDetails,
    submitted: bool,
}

impl Wizard {
    /// A fresh wizard on the browsing step with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A wizard whose cart was recovered from the persistent store.
    #[must_use]
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable cart access for the cart routes. Callers persist the cart
    /// after mutating it.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn details(&self) -> &OrderDetails {
        &self.details
    }

    pub const fn details_mut(&mut self) -> &mut OrderDetails {
        &mut self.details
    }

    /// Whether the last submission completed (drives the confirmation UI).
    #[must_use]
    pub const fn submitted(&self) -> bool {
        self.submitted
    }

    /// Guard for leaving the current step.
    fn guard(&self) -> Result<(), WizardError> {
        match self.step {
            // Re-checked on the cart step: emptying the cart there blocks
            // advancing again.
            Step::Browsing | Step::Cart => {
                if self.cart.is_empty() {
                    Err(WizardError::EmptyCart)
                } else {
                    Ok(())
                }
            }
            Step::Details => {
                if self.details.is_complete() {
                    Ok(())
                } else {
                    Err(WizardError::IncompleteDetails)
                }
            }
            Step::Review => Err(WizardError::AtReview),
        }
    }

    /// Whether `next` would currently succeed.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.guard().is_ok()
    }

    /// Advance one step if the current step's guard passes.
    ///
    /// # Errors
    ///
    /// Returns the guard failure; the step is unchanged on error.
    pub fn next(&mut self) -> Result<Step, WizardError> {
        self.guard()?;
        self.step = match self.step {
            Step::Browsing => Step::Cart,
            Step::Cart => Step::Details,
            Step::Details | Step::Review => Step::Review,
        };
        Ok(self.step)
    }

    /// Retreat one step. Never guarded; a no-op on the first step.
    pub const fn back(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Finalize the order from the review step.
    ///
    /// Formats the order message, builds the WhatsApp deep link, clears the
    /// cart and returns the machine to the initial display state with the
    /// submission flag set. The hand-off itself is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotAtReview`] from any other step.
    pub fn finalize(
        &mut self,
        neighborhoods: &[Neighborhood],
        whatsapp_number: &str,
    ) -> Result<OrderSubmission, WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::NotAtReview);
        }

        let totals = pricing::compute(&self.details, &self.cart, neighborhoods);
        let neighborhood_name = self
            .details
            .neighborhood_id
            .as_ref()
            .and_then(|id| catalog::find_neighborhood(neighborhoods, id))
            .map(|zone| zone.name.as_str());
        let message = message::format_order(&self.cart, &self.details, &totals, neighborhood_name);
        let whatsapp_url = message::whatsapp_link(whatsapp_number, &message);

        self.cart.clear();
        self.step = Step::Browsing;
        self.submitted = true;

        Ok(OrderSubmission {
            message,
            whatsapp_url,
        })
    }

    /// Explicit restart after a submission: clears the confirmation flag.
    /// Never automatic - re-entering Browsing alone does not clear it.
    pub const fn restart(&mut self) {
        self.submitted = false;
        self.step = Step::Browsing;
    }
}
