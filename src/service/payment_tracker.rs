use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::payment::{PaymentTransaction, TransactionStatus};
use crate::gateways::{GatewayError, PaymentGateway};
use crate::queue::{NotificationQueue, QueueError};
use crate::store::{PaymentStore, StoreError};

pub const SUCCESS_STATUSES: &[&str] = &["SUCCEEDED"];
pub const ERROR_STATUSES: &[&str] = &[
    "CANCELED",
    "FAILED",
    "VOIDED",
    "EXPIRED",
    "UNKNOWN",
    "UNKNOWN_ENUM_VALUE",
];
pub const PENDING_STATUSES: &[&str] = &["PENDING", "REQUIRES_ACTION", "AWAITING_CAPTURE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusResolution {
    Resolved(TransactionStatus),
    StillPending,
    Unrecognized,
}

pub fn resolve_gateway_status(raw: &str) -> StatusResolution {
    if raw.is_empty() || PENDING_STATUSES.contains(&raw) {
        return StatusResolution::StillPending;
    }
    if SUCCESS_STATUSES.contains(&raw) {
        return StatusResolution::Resolved(TransactionStatus::Success);
    }
    if ERROR_STATUSES.contains(&raw) {
        return StatusResolution::Resolved(TransactionStatus::Failed);
    }
    StatusResolution::Unrecognized
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("payment {0} has no payment request id")]
    Unresolvable(String),
    #[error("payment {transaction_id} has an unknown gateway status: {status}")]
    UnknownGatewayStatus { transaction_id: String, status: String },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Publish(#[from] QueueError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct StatusUpdateMessage<'a> {
    transaction: &'a PaymentTransaction,
    status: TransactionStatus,
}

#[derive(Clone)]
pub struct PaymentTracker {
    pub store: Arc<dyn PaymentStore>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub queue: Arc<dyn NotificationQueue>,
}

impl PaymentTracker {
    pub async fn run_once(&self) -> Result<(), StoreError> {
        let pending = self.store.get_pending().await?;

        for payment in pending {
            match self.track(&payment).await {
                Ok(Some(status)) => {
                    tracing::info!("payment {} resolved to {:?}", payment.transaction_id, status)
                }
                Ok(None) => {}
                Err(err) => tracing::error!("payment {}: {}", payment.transaction_id, err),
            }
        }

        Ok(())
    }

    async fn track(&self, payment: &PaymentTransaction) -> Result<Option<TransactionStatus>, TrackError> {
        let request_id = payment
            .payment_request_id
            .as_deref()
            .ok_or_else(|| TrackError::Unresolvable(payment.transaction_id.clone()))?;

        let request = self.gateway.get_payment_request(request_id).await?;
        let raw_status = request.status.unwrap_or_default();

        let status = match resolve_gateway_status(&raw_status) {
            StatusResolution::StillPending => {
                tracing::info!("payment {} is still pending", payment.transaction_id);
                return Ok(None);
            }
            StatusResolution::Unrecognized => {
                return Err(TrackError::UnknownGatewayStatus {
                    transaction_id: payment.transaction_id.clone(),
                    status: raw_status,
                });
            }
            StatusResolution::Resolved(status) => status,
        };

        let body = serde_json::to_string(&StatusUpdateMessage {
            transaction: payment,
            status,
        })?;
        let group_key = format!("payment-{}", payment.transaction_id);
        let dedup_key = format!("payment-{}-{}", payment.transaction_id, Uuid::new_v4());

        let message_id = self.queue.publish(&body, &group_key, &dedup_key).await?;
        tracing::info!("published status update for payment {}: {}", payment.transaction_id, message_id);

        Ok(Some(status))
    }
}
