//! Delivery fee lookup and order totals.
//!
//! Pure functions over current state, recomputed on every call. Internal
//! arithmetic stays at full decimal precision; rounding happens only at
//! display time in [`crate::types::format_brl`].

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::{self, Neighborhood};
use crate::order::{Fulfillment, OrderDetails};

/// Derived money values for the order being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Fee for the selected zone; zero for pickup or when no known zone is
/// selected.
#[must_use]
pub fn delivery_fee(details: &OrderDetails, neighborhoods: &[Neighborhood]) -> Decimal {
    if details.fulfillment != Fulfillment::Delivery {
        return Decimal::ZERO;
    }
    details
        .neighborhood_id
        .as_ref()
        .and_then(|id| catalog::find_neighborhood(neighborhoods, id))
        .map_or(Decimal::ZERO, |zone| zone.fee)
}

/// Compute subtotal, delivery fee and total for the current state.
#[must_use]
pub fn compute(details: &OrderDetails, cart: &Cart, neighborhoods: &[Neighborhood]) -> OrderTotals {
    let subtotal = cart.subtotal();
    let fee = delivery_fee(details, neighborhoods);
    OrderTotals {
        subtotal,
        delivery_fee: fee,
        total: subtotal + fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::{NeighborhoodId, ProductId};

    fn zones() -> Vec<Neighborhood> {
        vec![Neighborhood {
            id: NeighborhoodId::new("centro"),
            name: "Centro".to_owned(),
            fee: Decimal::new(800, 2),
        }]
    }

    fn cart_with_two_bolos() -> Cart {
        let bolo = Product {
            id: ProductId::new("bolo"),
            name: "Bolo".to_owned(),
            description: String::new(),
            price: Decimal::new(5000, 2),
            image: String::new(),
            category: "Bolos".to_owned(),
            options: None,
        };
        let mut cart = Cart::new();
        cart.add(&bolo, None);
        cart.add(&bolo, None);
        cart
    }

    #[test]
    fn test_delivery_with_zone_charges_its_fee() {
        let details = OrderDetails {
            fulfillment: Fulfillment::Delivery,
            neighborhood_id: Some(NeighborhoodId::new("centro")),
            ..OrderDetails::default()
        };
        assert_eq!(delivery_fee(&details, &zones()), Decimal::new(800, 2));
    }

    #[test]
    fn test_pickup_fee_is_zero_even_with_zone_selected() {
        let details = OrderDetails {
            fulfillment: Fulfillment::Pickup,
            neighborhood_id: Some(NeighborhoodId::new("centro")),
            ..OrderDetails::default()
        };
        assert_eq!(delivery_fee(&details, &zones()), Decimal::ZERO);
    }

    #[test]
    fn test_delivery_without_zone_selection_is_free() {
        let details = OrderDetails {
            fulfillment: Fulfillment::Delivery,
            neighborhood_id: None,
            ..OrderDetails::default()
        };
        assert_eq!(delivery_fee(&details, &zones()), Decimal::ZERO);
    }

    #[test]
    fn test_delivery_with_unknown_zone_is_free() {
        let details = OrderDetails {
            fulfillment: Fulfillment::Delivery,
            neighborhood_id: Some(NeighborhoodId::new("norte")),
            ..OrderDetails::default()
        };
        assert_eq!(delivery_fee(&details, &zones()), Decimal::ZERO);
    }

    #[test]
    fn test_totals_scenario_from_storefront() {
        // cart = 2 x 50.00, delivery to a zone with fee 8.00
        let details = OrderDetails {
            fulfillment: Fulfillment::Delivery,
            neighborhood_id: Some(NeighborhoodId::new("centro")),
            ..OrderDetails::default()
        };
        let totals = compute(&details, &cart_with_two_bolos(), &zones());
        assert_eq!(totals.subtotal, Decimal::new(10_000, 2));
        assert_eq!(totals.delivery_fee, Decimal::new(800, 2));
        assert_eq!(totals.total, Decimal::new(10_800, 2));
    }

    #[test]
    fn test_totals_for_empty_cart() {
        let totals = compute(&OrderDetails::default(), &Cart::new(), &zones());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
