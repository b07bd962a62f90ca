//! Money display formatting.
//!
//! Prices are `rust_decimal::Decimal` throughout the domain so that line
//! totals and order totals never accumulate float rounding error. Rounding
//! to two places happens here, at display time only.

use rust_decimal::Decimal;

/// Format a decimal amount for display in Brazilian reais.
///
/// ```rust
/// # use rust_decimal::Decimal;
/// # use doceria_core::types::format_brl;
/// assert_eq!(format_brl(Decimal::new(850, 2)), "R$ 8.50");
/// ```
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {amount:.2}")
}
