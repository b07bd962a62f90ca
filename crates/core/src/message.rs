//! Order message formatting and the WhatsApp hand-off link.
//!
//! The message is a fixed template the shop owner reads in WhatsApp. It is a
//! one-way transform: nothing ever parses it back. Section order is fixed:
//! header, customer, itemized list, subtotal, fulfillment block, payment,
//! optional note, total.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::Cart;
use crate::order::{Fulfillment, OrderDetails, PaymentMethod};
use crate::pricing::OrderTotals;
use crate::types::format_brl;

/// Header line of every order message.
pub const ORDER_HEADER: &str = "*🍰 NOVO PEDIDO - ANA DINIZ DOCERIA*";

/// A finalized order, ready to hand to the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSubmission {
    /// The formatted order message.
    pub message: String,
    /// `wa.me` deep link with the message URL-encoded into the query.
    pub whatsapp_url: String,
}

/// Render the order into the fixed message template.
///
/// `neighborhood_name` is the resolved display name of the selected zone;
/// callers pass `None` when the zone was never selected or no longer exists
/// (the message then reads "Não informado", matching the storefront).
#[must_use]
pub fn format_order(
    cart: &Cart,
    details: &OrderDetails,
    totals: &OrderTotals,
    neighborhood_name: Option<&str>,
) -> String {
    let mut msg = format!("{ORDER_HEADER}\n\n");
    let _ = writeln!(msg, "*Cliente:* {}\n", details.customer_name);

    msg.push_str("*Itens:*\n");
    for item in cart.items() {
        let option = item
            .selected_option
            .as_ref()
            .map(|o| format!(" ({})", o.name))
            .unwrap_or_default();
        let _ = writeln!(
            msg,
            "• {}x {}{} ({})",
            item.quantity,
            item.name,
            option,
            format_brl(item.line_total())
        );
    }

    let _ = write!(msg, "\n*Subtotal:* {}\n", format_brl(totals.subtotal));
    match details.fulfillment {
        Fulfillment::Delivery => {
            let _ = writeln!(
                msg,
                "*Tipo:* Entrega 🛵\n*Bairro:* {}\n*Endereço:* {}, Nº {}",
                neighborhood_name.unwrap_or("Não informado"),
                details.street,
                details.number
            );
            if !details.reference.is_empty() {
                let _ = writeln!(msg, "*Referência:* {}", details.reference);
            }
            let _ = writeln!(
                msg,
                "*Taxa de Entrega:* {}",
                format_brl(totals.delivery_fee)
            );
        }
        Fulfillment::Pickup => {
            msg.push_str("*Tipo:* Retirada 🏪\n");
        }
    }

    let _ = write!(msg, "\n*Pagamento:* {}\n", details.payment_method.label());
    if details.payment_method == PaymentMethod::Cash {
        if let Some(change_for) = details.change_for.filter(|v| *v > Decimal::ZERO) {
            let _ = writeln!(msg, "*Troco para:* {}", format_brl(change_for));
        }
    }
    if !details.custom_message.is_empty() {
        let _ = write!(msg, "\n*Observação:* {}\n", details.custom_message);
    }
    let _ = write!(msg, "\n*TOTAL:* {}\n", format_brl(totals.total));

    msg
}

/// Build the `wa.me` deep link for a formatted message.
///
/// The body is URL-encoded; invoking the link is the client's concern and
/// is fire-and-forget (no response is ever awaited).
#[must_use]
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::{NeighborhoodId, ProductId};

    fn cart() -> Cart {
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

    fn totals(fee: Decimal) -> OrderTotals {
        let subtotal = Decimal::new(10_000, 2);
        OrderTotals {
            subtotal,
            delivery_fee: fee,
            total: subtotal + fee,
        }
    }

    fn delivery_details() -> OrderDetails {
        OrderDetails {
            customer_name: "Maria".to_owned(),
            fulfillment: Fulfillment::Delivery,
            neighborhood_id: Some(NeighborhoodId::new("centro")),
            street: "Rua das Flores".to_owned(),
            number: "12".to_owned(),
            reference: "perto da padaria".to_owned(),
            ..OrderDetails::default()
        }
    }

    #[test]
    fn test_delivery_message_sections_in_order() {
        let msg = format_order(
            &cart(),
            &delivery_details(),
            &totals(Decimal::new(800, 2)),
            Some("Centro"),
        );

        let expected_order = [
            ORDER_HEADER,
            "*Cliente:* Maria",
            "• 2x Bolo (R$ 100.00)",
            "*Subtotal:* R$ 100.00",
            "*Bairro:* Centro",
            "*Endereço:* Rua das Flores, Nº 12",
            "*Referência:* perto da padaria",
            "*Taxa de Entrega:* R$ 8.00",
            "*Pagamento:* PIX",
            "*TOTAL:* R$ 108.00",
        ];
        let mut cursor = 0;
        for section in expected_order {
            let at = msg[cursor..].find(section).unwrap_or_else(|| {
                panic!("section {section:?} missing or out of order in:\n{msg}")
            });
            cursor += at + section.len();
        }
    }

    #[test]
    fn test_pickup_message_omits_address_and_fee() {
        let details = OrderDetails {
            customer_name: "Maria".to_owned(),
            fulfillment: Fulfillment::Pickup,
            ..OrderDetails::default()
        };
        let msg = format_order(&cart(), &details, &totals(Decimal::ZERO), None);

        assert!(msg.contains("*Tipo:* Retirada"));
        assert!(!msg.contains("*Bairro:*"));
        assert!(!msg.contains("*Endereço:*"));
        assert!(!msg.contains("*Taxa de Entrega:*"));
    }

    #[test]
    fn test_unknown_zone_reads_nao_informado() {
        let msg = format_order(
            &cart(),
            &delivery_details(),
            &totals(Decimal::ZERO),
            None,
        );
        assert!(msg.contains("*Bairro:* Não informado"));
    }

    #[test]
    fn test_variant_name_rendered_next_to_item() {
        let product = Product {
            id: ProductId::new("brigadeiro"),
            name: "Brigadeiro".to_owned(),
            description: String::new(),
            price: Decimal::new(350, 2),
            image: String::new(),
            category: "Doces".to_owned(),
            options: Some(vec![crate::catalog::ProductOption {
                name: "Caixa 12".to_owned(),
                price: Some(Decimal::new(650, 2)),
            }]),
        };
        let option = product.options.as_ref().unwrap().first().cloned().unwrap();
        let mut cart = Cart::new();
        cart.add(&product, Some(&option));

        let details = OrderDetails {
            customer_name: "Maria".to_owned(),
            fulfillment: Fulfillment::Pickup,
            ..OrderDetails::default()
        };
        let totals = OrderTotals {
            subtotal: Decimal::new(650, 2),
            delivery_fee: Decimal::ZERO,
            total: Decimal::new(650, 2),
        };
        let msg = format_order(&cart, &details, &totals, None);
        assert!(msg.contains("• 1x Brigadeiro (Caixa 12) (R$ 6.50)"));
    }

    #[test]
    fn test_change_for_only_when_cash_and_positive() {
        let mut details = delivery_details();
        details.payment_method = PaymentMethod::Cash;
        details.change_for = Some(Decimal::new(15_000, 2));
        let msg = format_order(&cart(), &details, &totals(Decimal::ZERO), Some("Centro"));
        assert!(msg.contains("*Pagamento:* DINHEIRO"));
        assert!(msg.contains("*Troco para:* R$ 150.00"));

        details.change_for = Some(Decimal::ZERO);
        let msg = format_order(&cart(), &details, &totals(Decimal::ZERO), Some("Centro"));
        assert!(!msg.contains("*Troco para:*"));

        details.payment_method = PaymentMethod::Card;
        details.change_for = Some(Decimal::new(15_000, 2));
        let msg = format_order(&cart(), &details, &totals(Decimal::ZERO), Some("Centro"));
        assert!(!msg.contains("*Troco para:*"));
    }

    #[test]
    fn test_note_rendered_when_present() {
        let mut details = delivery_details();
        details.custom_message = "Sem cebola".to_owned();
        let msg = format_order(&cart(), &details, &totals(Decimal::ZERO), Some("Centro"));
        assert!(msg.contains("*Observação:* Sem cebola"));
    }

    #[test]
    fn test_whatsapp_link_encodes_body() {
        let link = whatsapp_link("5511999990000", "*Cliente:* Maria\n");
        assert!(link.starts_with("https://wa.me/5511999990000?text="));
        assert!(link.contains("%2A"));
        assert!(link.contains("%0A"));
        assert!(!link.contains('\n'));
        assert!(!link.contains("Maria\n"));
    }
}
