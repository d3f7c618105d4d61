use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payment::PaymentChannel;

pub mod mock;
pub mod xendit;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway rejected the request: {0}")]
    Rejected(String),
    #[error("gateway unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct CreatePaymentMethodParams {
    pub channel: PaymentChannel,
    pub given_names: String,
    pub surname: String,
    pub email: String,
    pub success_return_url: String,
    pub failure_return_url: String,
    pub reference_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodRecord {
    pub payment_method_id: String,
    pub customer_id: String,
    pub reference_id: String,
    pub action_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreatePaymentRequestParams {
    pub reference_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub instrument: PaymentRequestInstrument,
}

#[derive(Debug, Clone)]
pub enum PaymentRequestInstrument {
    DirectDebit {
        payment_method_id: String,
        callback_url: String,
    },
    EWallet {
        channel: PaymentChannel,
        success_return_url: String,
        failure_return_url: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequestRecord {
    pub payment_request_id: String,
    pub reference_id: String,
    pub status: Option<String>,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_payment_method(
        &self,
        params: CreatePaymentMethodParams,
    ) -> Result<PaymentMethodRecord, GatewayError>;

    async fn create_payment_request(
        &self,
        idempotency_key: &str,
        params: CreatePaymentRequestParams,
    ) -> Result<PaymentRequestRecord, GatewayError>;

    async fn get_payment_request(
        &self,
        payment_request_id: &str,
    ) -> Result<PaymentRequestRecord, GatewayError>;
}
