use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    DirectDebit,
    EWallet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentChannel {
    Bpi,
    Ubp,
    Rcbc,
    Chinabank,
    Gcash,
    Paymaya,
}

impl PaymentChannel {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentChannel::Bpi => "BPI",
            PaymentChannel::Ubp => "UBP",
            PaymentChannel::Rcbc => "RCBC",
            PaymentChannel::Chinabank => "CHINABANK",
            PaymentChannel::Gcash => "GCASH",
            PaymentChannel::Paymaya => "PAYMAYA",
        }
    }

    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentChannel::Bpi
            | PaymentChannel::Ubp
            | PaymentChannel::Rcbc
            | PaymentChannel::Chinabank => PaymentMethod::DirectDebit,
            PaymentChannel::Gcash | PaymentChannel::Paymaya => PaymentMethod::EWallet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub transaction_id: String,
    pub registration_ref: Option<String>,
    pub net_price: Decimal,
    pub gross_price: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_channel: PaymentChannel,
    pub status: TransactionStatus,
    pub payment_request_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPaymentTransaction {
    pub registration_ref: Option<String>,
    pub net_price: Decimal,
    pub gross_price: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_channel: PaymentChannel,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDirectDebitMethodRequest {
    pub given_names: String,
    pub surname: String,
    pub email: String,
    pub channel_code: PaymentChannel,
    pub success_return_url: String,
    pub failure_return_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateDirectDebitMethodResponse {
    pub payment_method_id: String,
    pub customer_id: String,
    pub reference_id: String,
    pub payment_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectDebitPaymentRequest {
    pub payment_method_id: String,
    pub channel_code: PaymentChannel,
    pub registration_ref: Option<String>,
    pub ticket_price: Decimal,
    pub platform_fee: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EWalletPaymentRequest {
    pub channel_code: PaymentChannel,
    pub registration_ref: Option<String>,
    pub ticket_price: Decimal,
    pub platform_fee: Option<Decimal>,
    pub success_return_url: String,
    pub failure_return_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequestResponse {
    pub transaction_id: String,
    pub payment_request_id: String,
    pub reference_id: String,
    pub payment_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: &str) -> Self {
        ErrorEnvelope {
            error: ErrorPayload {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            },
        }
    }
}
