//! Customer and delivery details for an in-progress order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::NeighborhoodId;

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    /// Delivered to an address inside one of the configured zones.
    #[default]
    Delivery,
    /// Picked up at the store; no address, no fee.
    Pickup,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Cash,
    Card,
}

impl PaymentMethod {
    /// Label used in the formatted order message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Cash => "DINHEIRO",
            Self::Card => "CARTAO",
        }
    }
}

/// Everything the customer fills in on the details and review steps.
///
/// Mutated field-by-field as the customer types; validated as a whole by
/// [`OrderDetails::is_complete`] before the wizard advances to review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetails {
    /// Required before advancing past the details step.
    pub customer_name: String,
    pub fulfillment: Fulfillment,
    /// Selected delivery zone; required iff fulfillment is delivery.
    pub neighborhood_id: Option<NeighborhoodId>,
    /// Street name; required iff fulfillment is delivery.
    pub street: String,
    /// Street number; required iff fulfillment is delivery.
    pub number: String,
    /// Optional landmark ("perto da padaria").
    pub reference: String,
    pub payment_method: PaymentMethod,
    /// Amount the customer will pay with, when paying cash and needing
    /// change. Only meaningful for [`PaymentMethod::Cash`].
    pub change_for: Option<Decimal>,
    /// Free-text note attached to the order.
    pub custom_message: String,
}

impl OrderDetails {
    /// Guard predicate for Details -> Review: a name is always required,
    /// and delivery additionally requires a zone, street and number.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.customer_name.trim().is_empty() {
            return false;
        }
        match self.fulfillment {
            Fulfillment::Pickup => true,
            Fulfillment::Delivery => {
                self.neighborhood_id.is_some()
                    && !self.street.trim().is_empty()
                    && !self.number.trim().is_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery_details() -> OrderDetails {
        OrderDetails {
            customer_name: "Maria".to_owned(),
            fulfillment: Fulfillment::Delivery,
            neighborhood_id: Some(NeighborhoodId::new("centro")),
            street: "Rua das Flores".to_owned(),
            number: "12".to_owned(),
            ..OrderDetails::default()
        }
    }

    #[test]
    fn test_defaults_match_storefront_initial_state() {
        let details = OrderDetails::default();
        assert_eq!(details.fulfillment, Fulfillment::Delivery);
        assert_eq!(details.payment_method, PaymentMethod::Pix);
        assert!(details.change_for.is_none());
    }

    #[test]
    fn test_complete_delivery_details() {
        assert!(delivery_details().is_complete());
    }

    #[test]
    fn test_name_is_always_required() {
        let details = OrderDetails {
            customer_name: "  ".to_owned(),
            fulfillment: Fulfillment::Pickup,
            ..OrderDetails::default()
        };
        assert!(!details.is_complete());
    }

    #[test]
    fn test_pickup_needs_no_address() {
        let details = OrderDetails {
            customer_name: "Maria".to_owned(),
            fulfillment: Fulfillment::Pickup,
            ..OrderDetails::default()
        };
        assert!(details.is_complete());
    }

    #[test]
    fn test_delivery_requires_zone_street_and_number() {
        let mut details = delivery_details();
        details.neighborhood_id = None;
        assert!(!details.is_complete());

        let mut details = delivery_details();
        details.street.clear();
        assert!(!details.is_complete());

        let mut details = delivery_details();
        details.number.clear();
        assert!(!details.is_complete());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_enum_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&Fulfillment::Pickup).unwrap(),
            "\"pickup\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"cash\""
        );
    }
}
