//! Payment API wiring
//!
//! The bundle has no runtime environment, so the client is configured from
//! variables captured at build time (see `PaymentConfig::from_build_env`).

use std::sync::Arc;

use leptos::logging;
use pix_core::Notice;
use pix_payments::{PaymentConfig, PaymentGateway};

/// Client configuration baked into this build
pub fn config() -> PaymentConfig {
    PaymentConfig::from_build_env().unwrap_or_else(|e| {
        logging::error!("{e}; falling back to default payment configuration");
        PaymentConfig::default()
    })
}

/// Live Mercado Pago client
#[cfg(not(feature = "demo"))]
pub fn gateway(config: &PaymentConfig) -> Arc<dyn PaymentGateway> {
    if !config.has_access_token() {
        logging::warn!("MERCADOPAGO_ACCESS_TOKEN was not set at build time; the API will reject requests");
    }
    Arc::new(pix_payments::MercadoPagoClient::new(config.clone()))
}

/// In-memory gateway: pending on the first check, approved on the second
#[cfg(feature = "demo")]
pub fn gateway(_config: &PaymentConfig) -> Arc<dyn PaymentGateway> {
    use pix_payments::{MockGateway, PaymentStatus};

    logging::log!("Demo build: payments are simulated");
    Arc::new(MockGateway::with_statuses([
        PaymentStatus::Pending,
        PaymentStatus::Approved,
    ]))
}

/// Blocking browser alert for status-check outcomes
pub fn notify(notice: &Notice) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(&notice.to_string()) {
            logging::error!("alert failed: {e:?}");
        }
    }
}
