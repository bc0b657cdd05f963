//! Stripe checkout adapter.
//!
//! Implements the `CheckoutSessionCreator` port with Stripe's hosted
//! Checkout Session API.
//!
//! # Security
//!
//! - The secret key is held in a `secrecy::SecretString` and redacted from
//!   `Debug` output
//!
//! # Configuration
//!
//! Read from `ENGAGEMENT_DESK__PAYMENT__*` via `config::PaymentConfig`.
//! Without a key the server falls back to `MockCheckoutSessionCreator`.

mod checkout_adapter;
mod mock_checkout;

pub use checkout_adapter::{StripeCheckoutAdapter, StripeConfig};
pub use mock_checkout::MockCheckoutSessionCreator;
