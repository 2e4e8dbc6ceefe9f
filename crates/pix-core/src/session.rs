//! Checkout Session
//!
//! Drives one checkout end to end against a [`PaymentGateway`] without a
//! browser. The web crate wires the same form and view pieces to signals.

use pix_payments::{PaymentGateway, Url};

use crate::form::{FormField, FormState};
use crate::view::{CheckoutView, Notice, Phase};

/// One donor, one payment
pub struct CheckoutSession<G: PaymentGateway> {
    gateway: G,
    notification_url: Option<Url>,
    form: FormState,
    view: CheckoutView,
}

impl<G: PaymentGateway> CheckoutSession<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            notification_url: None,
            form: FormState::new(),
            view: CheckoutView::new(),
        }
    }

    /// Webhook target attached to the created payment
    pub fn with_notification_url(mut self, url: Option<Url>) -> Self {
        self.notification_url = url;
        self
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    /// Validate and create the payment
    ///
    /// Does nothing once a payment exists.
    pub async fn submit(&mut self) -> Phase {
        let Some(request) = self
            .view
            .begin_submit(&self.form, self.notification_url.as_ref())
        else {
            return self.view.phase();
        };

        let result = self.gateway.create_payment(&request).await;
        self.view.apply_created(result);
        self.view.phase()
    }

    /// Ask the gateway whether the payment went through
    ///
    /// `None` means nothing to report: approved, or no payment to check.
    pub async fn check_status(&mut self) -> Option<Notice> {
        let id = self.view.pending_payment_id()?;
        let result = self.gateway.get_payment(id).await;
        self.view.apply_status(result)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &CheckoutView {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        self.view.phase()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
