//! # pix-payments
//!
//! PIX payments through the Mercado Pago Payments API.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  POST v1/payments   ┌──────────────────┐
//! │  Checkout   │────────────────────▶│   Mercado Pago   │
//! │             │◀──── ticket_url ────│                  │
//! │             │                     │                  │
//! │             │  GET v1/payments/id │                  │
//! │             │────────────────────▶│                  │
//! │             │◀───── status ───────│                  │
//! └─────────────┘                     └──────────────────┘
//! ```
//!
//! The payer completes the charge on the hosted ticket page. The checkout
//! only learns about it when someone asks for the status again.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pix_payments::{Identification, MercadoPagoClient, Payer, PaymentConfig, PaymentRequest};
//!
//! let client = MercadoPagoClient::new(PaymentConfig::new("APP_USR-xxx"));
//!
//! let payment = client.create_payment(&PaymentRequest::pix(
//!     dec!(10.50),
//!     Payer {
//!         email: "ana@example.com".into(),
//!         first_name: "Ana".into(),
//!         last_name: "Souza".into(),
//!         identification: Identification::cpf("12345678909"),
//!     },
//!     None,
//! )).await?;
//!
//! // Embed: payment.ticket_url()
//! let latest = client.get_payment(payment.id).await?;
//! ```

mod client;
mod config;
mod error;
mod gateway;
mod model;

pub use client::MercadoPagoClient;
pub use config::{PaymentConfig, DEFAULT_BASE_URL};
pub use error::{PaymentError, Result};
pub use gateway::{MockGateway, PaymentGateway};
pub use model::{
    Identification, Payer, PaymentId, PaymentRequest, PaymentResponse, PaymentStatus,
    PointOfInteraction, TransactionData, TransactionDetails, CPF_ID_TYPE, PIX_METHOD_ID,
};

pub use url::Url;
