//! Mock Payment Gateway
//!
//! For testing and demo purposes. Answers from memory, never touches the network.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::PaymentGateway;
use crate::error::{PaymentError, Result};
use crate::model::{
    PaymentId, PaymentRequest, PaymentResponse, PaymentStatus, PointOfInteraction,
    TransactionData, TransactionDetails,
};

const MOCK_PAYMENT_ID: PaymentId = PaymentId(1_000_001);

/// In-memory gateway with scripted status answers
pub struct MockGateway {
    /// Statuses returned by successive lookups; the last one repeats
    statuses: Mutex<VecDeque<PaymentStatus>>,

    /// When set, creation fails with this API error
    failure: Option<(u16, String)>,

    /// Every creation request received, in order
    requests: Mutex<Vec<PaymentRequest>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Payments stay pending forever
    pub fn new() -> Self {
        Self::with_statuses([PaymentStatus::Pending])
    }

    /// Lookups walk through `statuses` in order
    pub fn with_statuses(statuses: impl IntoIterator<Item = PaymentStatus>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into_iter().collect()),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creation is rejected with `status` / `message`
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            failure: Some((status, message.into())),
            ..Self::new()
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<PaymentRequest> {
        lock(&self.requests).clone()
    }

    pub fn ticket_url(id: PaymentId) -> String {
        format!("https://mock.pix.local/payments/{id}/ticket")
    }

    pub fn status_url(id: PaymentId) -> String {
        format!("https://mock.pix.local/payments/{id}/status")
    }

    fn next_status(&self) -> PaymentStatus {
        let mut statuses = lock(&self.statuses);
        if statuses.len() > 1 {
            statuses.pop_front().unwrap_or_default()
        } else {
            statuses.front().cloned().unwrap_or_default()
        }
    }

    fn payment(id: PaymentId, status: PaymentStatus) -> PaymentResponse {
        let approved = status == PaymentStatus::Approved;
        PaymentResponse {
            id,
            status,
            status_detail: None,
            transaction_amount: None,
            date_of_expiration: None,
            point_of_interaction: Some(PointOfInteraction {
                transaction_data: Some(TransactionData {
                    ticket_url: Some(Self::ticket_url(id)),
                    qr_code: Some(format!("00020126mock{id}")),
                    qr_code_base64: None,
                }),
            }),
            transaction_details: Some(TransactionDetails {
                external_resource_url: approved.then(|| Self::status_url(id)),
            }),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PaymentGateway for MockGateway {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        lock(&self.requests).push(request.clone());

        if let Some((status, message)) = &self.failure {
            return Err(PaymentError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        let mut payment = Self::payment(MOCK_PAYMENT_ID, PaymentStatus::Pending);
        payment.transaction_amount = Some(request.transaction_amount);
        tracing::debug!(payment_id = %payment.id, "Mock payment created");
        Ok(payment)
    }

    async fn get_payment(&self, id: PaymentId) -> Result<PaymentResponse> {
        Ok(Self::payment(id, self.next_status()))
    }
}

// A panicking test thread must not hide the recorded state from the next assertion.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identification, Payer};
    use rust_decimal_macros::dec;

    fn request() -> PaymentRequest {
        PaymentRequest::pix(
            dec!(25),
            Payer {
                email: "ana@example.com".into(),
                first_name: "Ana".into(),
                last_name: "Souza".into(),
                identification: Identification::cpf("12345678909"),
            },
            None,
        )
    }

    #[tokio::test]
    async fn test_create_records_request() {
        let gateway = MockGateway::new();
        let payment = gateway.create_payment(&request()).await.unwrap();

        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.ticket_url(), Some(MockGateway::ticket_url(payment.id).as_str()));
        assert_eq!(payment.transaction_amount, Some(dec!(25)));
        assert_eq!(gateway.requests(), vec![request()]);
    }

    #[tokio::test]
    async fn test_status_script_last_repeats() {
        let gateway = MockGateway::with_statuses([
            PaymentStatus::Pending,
            PaymentStatus::InProcess,
            PaymentStatus::Approved,
        ]);
        let id = PaymentId(9);

        assert_eq!(gateway.get_payment(id).await.unwrap().status, PaymentStatus::Pending);
        assert_eq!(gateway.get_payment(id).await.unwrap().status, PaymentStatus::InProcess);

        let approved = gateway.get_payment(id).await.unwrap();
        assert!(approved.is_approved());
        assert_eq!(
            approved.external_resource_url(),
            Some(MockGateway::status_url(id).as_str())
        );
        assert!(gateway.get_payment(id).await.unwrap().is_approved());
    }

    #[tokio::test]
    async fn test_failing_gateway() {
        let gateway = MockGateway::failing(401, "invalid access token");
        let err = gateway.create_payment(&request()).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(gateway.requests().len(), 1);
    }
}
