//! Doceria Core - Domain logic for the bakery storefront.
//!
//! This crate holds everything the storefront computes without touching the
//! outside world: the catalog model, the cart engine, the four-step order
//! wizard, pricing, and the WhatsApp order formatter.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! filesystem access. Persistence and transport live in the `storefront`
//! crate, which drives these types from its route handlers.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and money formatting
//! - [`catalog`] - Products, options, categories and delivery zones
//! - [`cart`] - Cart lines, merge-by-identity add, quantity updates
//! - [`order`] - Customer/delivery details and payment selection
//! - [`wizard`] - The linear Browsing -> Cart -> Details -> Review flow
//! - [`pricing`] - Delivery fee lookup and order totals
//! - [`message`] - Order message template and wa.me deep link

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod message;
pub mod order;
pub mod pricing;
pub mod types;
pub mod wizard;

pub use cart::{Cart, CartItem};
pub use catalog::{CATCH_ALL_CATEGORY, Category, Neighborhood, Product, ProductOption};
pub use message::{OrderSubmission, format_order, whatsapp_link};
pub use order::{Fulfillment, OrderDetails, PaymentMethod};
pub use pricing::OrderTotals;
pub use types::*;
pub use wizard::{Step, Wizard, WizardError};
