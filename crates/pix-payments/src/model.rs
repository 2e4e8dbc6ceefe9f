//! Payment API wire types
//!
//! Only the parts of the Mercado Pago payment record the checkout reads are
//! modelled; everything else in the response body is ignored.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

/// The only payment method this checkout offers
pub const PIX_METHOD_ID: &str = "pix";

/// Brazilian individual taxpayer registry
pub const CPF_ID_TYPE: &str = "CPF";

/// Body of `POST v1/payments`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub transaction_amount: Decimal,

    pub payment_method_id: String,

    pub payer: Payer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<Url>,
}

impl PaymentRequest {
    /// A PIX charge for `amount`
    pub fn pix(amount: Decimal, payer: Payer, notification_url: Option<Url>) -> Self {
        Self {
            transaction_amount: amount,
            payment_method_id: PIX_METHOD_ID.into(),
            payer,
            notification_url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub identification: Identification,
}

/// Government identification document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    #[serde(rename = "type")]
    pub kind: String,
    pub number: String,
}

impl Identification {
    pub fn cpf(number: impl Into<String>) -> Self {
        Self {
            kind: CPF_ID_TYPE.into(),
            number: number.into(),
        }
    }
}

/// Numeric payment identifier assigned by the API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(pub u64);

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment lifecycle status as reported by the API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Approved,
    Authorized,
    InProcess,
    InMediation,
    Rejected,
    Cancelled,
    Refunded,
    ChargedBack,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::InProcess => "in_process",
            PaymentStatus::InMediation => "in_mediation",
            PaymentStatus::Rejected => "rejected",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::ChargedBack => "charged_back",
            PaymentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment record returned by both create and lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: PaymentId,

    #[serde(default)]
    pub status: PaymentStatus,

    #[serde(default)]
    pub status_detail: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub transaction_amount: Option<Decimal>,

    /// When the PIX charge stops accepting payment
    #[serde(default)]
    pub date_of_expiration: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub point_of_interaction: Option<PointOfInteraction>,

    #[serde(default)]
    pub transaction_details: Option<TransactionDetails>,
}

impl PaymentResponse {
    /// Hosted checkout page for a pending PIX charge
    pub fn ticket_url(&self) -> Option<&str> {
        self.point_of_interaction
            .as_ref()?
            .transaction_data
            .as_ref()?
            .ticket_url
            .as_deref()
    }

    /// External status page, populated once the charge is settled
    pub fn external_resource_url(&self) -> Option<&str> {
        self.transaction_details
            .as_ref()?
            .external_resource_url
            .as_deref()
    }

    /// PIX copy-and-paste code
    pub fn qr_code(&self) -> Option<&str> {
        self.point_of_interaction
            .as_ref()?
            .transaction_data
            .as_ref()?
            .qr_code
            .as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.status == PaymentStatus::Approved
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInteraction {
    #[serde(default)]
    pub transaction_data: Option<TransactionData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub ticket_url: Option<String>,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub qr_code_base64: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    #[serde(default)]
    pub external_resource_url: Option<String>,
}
