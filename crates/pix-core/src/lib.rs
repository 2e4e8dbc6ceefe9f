//! # pix-core
//!
//! Donation checkout logic, independent of any UI toolkit.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    CheckoutSession                        │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │  FormState  │──│ CheckoutView │──│ PaymentGateway  │  │
//! │  │ (validate)  │  │   (Phase)    │  │   (Strategy)    │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod form;
pub mod session;
pub mod view;

pub use error::{FormatRule, Result, ValidationError};
pub use form::{FormField, FormState};
pub use session::CheckoutSession;
pub use view::{CheckoutView, Notice, Phase};
