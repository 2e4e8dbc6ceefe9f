//! Checkout View State
//!
//! What the page shows is derived entirely from [`CheckoutView`]:
//!
//! ```text
//! ┌────────────┐  payment created  ┌──────────────────┐  status "approved"  ┌──────────┐
//! │ Collecting │──────────────────▶│ AwaitingApproval │────────────────────▶│ Approved │
//! └────────────┘                   └──────────────────┘                     └──────────┘
//!       ▲  │ validation / create error     │  ▲ other status / lookup error
//!       └──┘                               └──┘
//! ```
//!
//! There is no way back to `Collecting`: one payment per page load.

use std::fmt;

use pix_payments::{PaymentError, PaymentId, PaymentRequest, PaymentResponse, PaymentStatus, Url};

use crate::form::FormState;

/// Which screen the checkout is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Form visible, no payment yet
    Collecting,
    /// Hosted checkout embedded, waiting for the payer
    AwaitingApproval,
    /// Payment confirmed
    Approved,
}

/// Blocking message raised by a status check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Anything other than "approved"
    Pending(PaymentStatus),
    /// The lookup itself failed
    Failed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Pending(_) => f.write_str("Payment is pending"),
            Notice::Failed(message) => write!(f, "Could not check payment status: {message}"),
        }
    }
}

/// UI state: error slot, created payment, approval
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutView {
    error: Option<String>,
    payment: Option<PaymentResponse>,
    ticket_url: Option<String>,
    status_url: Option<String>,
    approved: bool,
    /// A create request is in flight
    submitting: bool,
}

impl CheckoutView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.payment, self.approved) {
            (None, _) => Phase::Collecting,
            (Some(_), false) => Phase::AwaitingApproval,
            (Some(_), true) => Phase::Approved,
        }
    }

    /// Inline error banner text
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The payment created by this checkout
    pub fn payment(&self) -> Option<&PaymentResponse> {
        self.payment.as_ref()
    }

    /// Whether a create request is awaiting its result
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// PIX copy-and-paste code of the pending charge
    pub fn pix_code(&self) -> Option<&str> {
        match self.phase() {
            Phase::AwaitingApproval => self.payment.as_ref()?.qr_code(),
            Phase::Collecting | Phase::Approved => None,
        }
    }

    /// Hosted checkout page to embed while awaiting approval
    pub fn ticket_url(&self) -> Option<&str> {
        self.ticket_url.as_deref()
    }

    /// External status page to embed once approved
    pub fn status_url(&self) -> Option<&str> {
        self.status_url.as_deref()
    }

    /// Validate the form and produce the request to send
    ///
    /// Returns `None` when the form is invalid (the error slot says why),
    /// while an earlier request is still in flight, or once a payment exists.
    pub fn begin_submit(
        &mut self,
        form: &FormState,
        notification_url: Option<&Url>,
    ) -> Option<PaymentRequest> {
        if self.submitting || self.phase() != Phase::Collecting {
            return None;
        }

        match form.to_payment_request(notification_url) {
            Ok(request) => {
                self.error = None;
                self.submitting = true;
                Some(request)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Form rejected");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Record the outcome of payment creation
    pub fn apply_created(&mut self, result: Result<PaymentResponse, PaymentError>) {
        self.submitting = false;
        if self.payment.is_some() {
            tracing::warn!("Ignoring second payment creation result");
            return;
        }

        match result {
            Ok(payment) => {
                self.ticket_url = payment.ticket_url().map(str::to_owned);
                self.error = if self.ticket_url.is_none() {
                    Some(format!("Payment {} was created without a checkout link", payment.id))
                } else {
                    None
                };
                tracing::info!(payment_id = %payment.id, "Awaiting approval");
                self.payment = Some(payment);
            }
            Err(e) if e.is_unauthorized() => {
                self.error = Some(format!("{e} (check the configured access token)"));
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Payment to look up, while one is awaiting approval
    pub fn pending_payment_id(&self) -> Option<PaymentId> {
        match self.phase() {
            Phase::AwaitingApproval => self.payment.as_ref().map(|p| p.id),
            Phase::Collecting | Phase::Approved => None,
        }
    }

    /// Record the outcome of a status check
    ///
    /// Anything but approval leaves the phase unchanged and returns the notice
    /// to show.
    pub fn apply_status(&mut self, result: Result<PaymentResponse, PaymentError>) -> Option<Notice> {
        match result {
            Ok(latest) if latest.is_approved() => {
                self.status_url = latest
                    .external_resource_url()
                    .or_else(|| self.payment.as_ref()?.external_resource_url())
                    .map(str::to_owned);
                self.approved = true;
                tracing::info!(payment_id = %latest.id, "Payment approved");
                None
            }
            Ok(latest) => {
                self.approved = false;
                tracing::debug!(payment_id = %latest.id, status = %latest.status, "Payment not approved yet");
                Some(Notice::Pending(latest.status))
            }
            Err(e) => Some(Notice::Failed(e.to_string())),
        }
    }
}
