//! Payment Gateway abstraction
//!
//! The checkout talks to [`PaymentGateway`] rather than to the HTTP client
//! directly so the flow can run against [`MockGateway`].

mod mock;

pub use mock::MockGateway;

use async_trait::async_trait;

use crate::client::MercadoPagoClient;
use crate::error::Result;
use crate::model::{PaymentId, PaymentRequest, PaymentResponse};

/// Create and look up payments
///
/// Browser fetch futures are not `Send`, so on `wasm32` the trait drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PaymentGateway: Send + Sync {
    /// Submit a new payment
    async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse>;

    /// Fetch the current state of a payment
    async fn get_payment(&self, id: PaymentId) -> Result<PaymentResponse>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PaymentGateway for MercadoPagoClient {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        MercadoPagoClient::create_payment(self, request).await
    }

    async fn get_payment(&self, id: PaymentId) -> Result<PaymentResponse> {
        MercadoPagoClient::get_payment(self, id).await
    }
}
