//! Mercado Pago Payments API client
//!
//! Thin wrapper over two endpoints: `POST v1/payments` and
//! `GET v1/payments/{id}`. No retries, no timeouts beyond the transport's.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::config::PaymentConfig;
use crate::error::{PaymentError, Result};
use crate::model::{PaymentId, PaymentRequest, PaymentResponse};

const PAYMENTS_PATH: &str = "v1/payments";

/// HTTP client bound to one [`PaymentConfig`]
#[derive(Clone, Debug)]
pub struct MercadoPagoClient {
    http: reqwest::Client,
    config: PaymentConfig,
}

impl MercadoPagoClient {
    /// Create a client from explicit configuration
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a PIX payment
    ///
    /// The returned record carries the hosted checkout link while pending.
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        let url = self.endpoint(PAYMENTS_PATH)?;
        tracing::debug!(%url, amount = %request.transaction_amount, "Creating payment");

        let payment = self
            .send(self.authorize(self.http.post(url)).json(request))
            .await?;

        tracing::info!(
            payment_id = %payment.id,
            status = %payment.status,
            has_ticket = payment.ticket_url().is_some(),
            "Created payment"
        );
        Ok(payment)
    }

    /// Look up a payment by id
    pub async fn get_payment(&self, id: PaymentId) -> Result<PaymentResponse> {
        let url = self.endpoint(&format!("{PAYMENTS_PATH}/{id}"))?;

        let payment = self.send(self.authorize(self.http.get(url))).await?;

        tracing::info!(payment_id = %id, status = %payment.status, "Fetched payment status");
        Ok(payment)
    }

    /// Attach the static bearer credential. Every outgoing request goes through here.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.access_token)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| PaymentError::Config(format!("invalid endpoint {path}: {e}")))
    }

    async fn send(&self, request: RequestBuilder) -> Result<PaymentResponse> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}

/// Error body shape used by the payments API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

async fn api_error(response: Response) -> PaymentError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let err = PaymentError::Api {
        status: status.as_u16(),
        message: error_message(status, &body),
    };
    tracing::warn!(status = status.as_u16(), error = %err, "Payment API request failed");
    err
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}
