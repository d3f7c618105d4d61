use serde::Serialize;

use crate::domain::payment::{NewPaymentTransaction, PaymentTransaction};

pub mod http;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("payment store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentTransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_request_id: Option<String>,
}

#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync {
    async fn create(&self, transaction: NewPaymentTransaction) -> Result<PaymentTransaction, StoreError>;

    async fn get_pending(&self) -> Result<Vec<PaymentTransaction>, StoreError>;

    async fn update(
        &self,
        transaction_id: &str,
        update: PaymentTransactionUpdate,
    ) -> Result<PaymentTransaction, StoreError>;
}
