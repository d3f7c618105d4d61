use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ticketing_payments::domain::payment::{
    NewPaymentTransaction, PaymentChannel, PaymentMethod, PaymentTransaction, TransactionStatus,
};
use ticketing_payments::gateways::{
    CreatePaymentMethodParams, CreatePaymentRequestParams, GatewayError, PaymentGateway,
    PaymentMethodRecord, PaymentRequestRecord,
};
use ticketing_payments::queue::{NotificationQueue, QueueError};
use ticketing_payments::service::payment_tracker::PaymentTracker;
use ticketing_payments::store::{PaymentStore, PaymentTransactionUpdate, StoreError};

struct FixedStore {
    pending: Result<Vec<PaymentTransaction>, StoreError>,
}

#[async_trait]
impl PaymentStore for FixedStore {
    async fn create(&self, _transaction: NewPaymentTransaction) -> Result<PaymentTransaction, StoreError> {
        Err(StoreError::Unavailable("not used in tracker tests".to_string()))
    }

    async fn get_pending(&self) -> Result<Vec<PaymentTransaction>, StoreError> {
        self.pending.clone()
    }

    async fn update(
        &self,
        _transaction_id: &str,
        _update: PaymentTransactionUpdate,
    ) -> Result<PaymentTransaction, StoreError> {
        Err(StoreError::Unavailable("not used in tracker tests".to_string()))
    }
}

struct ScriptedGateway {
    statuses: HashMap<String, Result<String, GatewayError>>,
    calls: AtomicUsize,
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn create_payment_method(
        &self,
        _params: CreatePaymentMethodParams,
    ) -> Result<PaymentMethodRecord, GatewayError> {
        Err(GatewayError::Unavailable("not used in tracker tests".to_string()))
    }

    async fn create_payment_request(
        &self,
        _idempotency_key: &str,
        _params: CreatePaymentRequestParams,
    ) -> Result<PaymentRequestRecord, GatewayError> {
        Err(GatewayError::Unavailable("not used in tracker tests".to_string()))
    }

    async fn get_payment_request(
        &self,
        payment_request_id: &str,
    ) -> Result<PaymentRequestRecord, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .statuses
            .get(payment_request_id)
            .expect("unexpected payment request id")
            .clone()?;

        Ok(PaymentRequestRecord {
            payment_request_id: payment_request_id.to_string(),
            reference_id: String::new(),
            status: (!scripted.is_empty()).then_some(scripted),
            action_url: None,
            created_at: Utc::now(),
        })
    }
}

struct RecordingQueue {
    published: Mutex<Vec<(String, String, String)>>,
    failures_remaining: AtomicUsize,
}

#[async_trait]
impl NotificationQueue for RecordingQueue {
    async fn publish(&self, body: &str, group_key: &str, dedup_key: &str) -> Result<String, QueueError> {
        if self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(QueueError::PublishFailed("queue is down".to_string()));
        }

        let mut published = self.published.lock().unwrap();
        published.push((body.to_string(), group_key.to_string(), dedup_key.to_string()));
        Ok(format!("m-{}", published.len()))
    }
}

fn pending_payment(id: &str, request_id: Option<&str>) -> PaymentTransaction {
    PaymentTransaction {
        transaction_id: id.to_string(),
        registration_ref: Some(format!("reg-{id}")),
        net_price: dec!(1000.00),
        gross_price: dec!(1016.80),
        payment_method: PaymentMethod::DirectDebit,
        payment_channel: PaymentChannel::Bpi,
        status: TransactionStatus::Pending,
        payment_request_id: request_id.map(str::to_string),
        created_at: Utc::now(),
    }
}

fn tracker(
    pending: Result<Vec<PaymentTransaction>, StoreError>,
    statuses: HashMap<String, Result<String, GatewayError>>,
    failures_remaining: usize,
) -> (PaymentTracker, Arc<ScriptedGateway>, Arc<RecordingQueue>) {
    let gateway = Arc::new(ScriptedGateway {
        statuses,
        calls: AtomicUsize::new(0),
    });
    let queue = Arc::new(RecordingQueue {
        published: Mutex::new(Vec::new()),
        failures_remaining: AtomicUsize::new(failures_remaining),
    });
    let tracker = PaymentTracker {
        store: Arc::new(FixedStore { pending }),
        gateway: gateway.clone(),
        queue: queue.clone(),
    };
    (tracker, gateway, queue)
}

#[tokio::test]
async fn aborts_when_pending_fetch_fails() {
    let (tracker, gateway, queue) = tracker(
        Err(StoreError::Unavailable("store is down".to_string())),
        HashMap::new(),
        0,
    );

    let result = tracker.run_once().await;

    assert!(result.is_err());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    assert!(queue.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failures_are_isolated_per_payment() {
    let statuses = HashMap::from([
        ("pr-1".to_string(), Err(GatewayError::Unavailable("timeout".to_string()))),
        ("pr-2".to_string(), Ok("SUCCEEDED".to_string())),
        ("pr-4".to_string(), Ok("EXPIRED".to_string())),
    ]);
    let pending = vec![
        pending_payment("t1", Some("pr-1")),
        pending_payment("t2", Some("pr-2")),
        pending_payment("t3", None),
        pending_payment("t4", Some("pr-4")),
    ];
    let (tracker, _, queue) = tracker(Ok(pending), statuses, 0);

    tracker.run_once().await.unwrap();

    let published = queue.published.lock().unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].1, "payment-t2");
    assert_eq!(published[1].1, "payment-t4");

    let first: serde_json::Value = serde_json::from_str(&published[0].0).unwrap();
    assert_eq!(first["status"], "SUCCESS");
    assert_eq!(first["transaction"]["transaction_id"], "t2");

    let second: serde_json::Value = serde_json::from_str(&published[1].0).unwrap();
    assert_eq!(second["status"], "FAILED");
}

#[tokio::test]
async fn pending_and_unknown_statuses_do_not_publish() {
    let statuses = HashMap::from([
        ("pr-1".to_string(), Ok("REQUIRES_ACTION".to_string())),
        ("pr-2".to_string(), Ok(String::new())),
        ("pr-3".to_string(), Ok("AUTHORIZED".to_string())),
    ]);
    let pending = vec![
        pending_payment("t1", Some("pr-1")),
        pending_payment("t2", Some("pr-2")),
        pending_payment("t3", Some("pr-3")),
    ];
    let (tracker, gateway, queue) = tracker(Ok(pending), statuses, 0);

    tracker.run_once().await.unwrap();

    assert_eq!(gateway.calls.load(Ordering::SeqCst), 3);
    assert!(queue.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn publish_failure_does_not_stop_the_run() {
    let statuses = HashMap::from([
        ("pr-1".to_string(), Ok("SUCCEEDED".to_string())),
        ("pr-2".to_string(), Ok("SUCCEEDED".to_string())),
    ]);
    let pending = vec![
        pending_payment("t1", Some("pr-1")),
        pending_payment("t2", Some("pr-2")),
    ];
    let (tracker, _, queue) = tracker(Ok(pending), statuses, 1);

    tracker.run_once().await.unwrap();

    let published = queue.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].1, "payment-t2");
}

#[tokio::test]
async fn dedup_key_carries_a_fresh_nonce_per_publish() {
    let statuses = HashMap::from([("pr-1".to_string(), Ok("SUCCEEDED".to_string()))]);
    let pending = vec![pending_payment("t1", Some("pr-1"))];
    let (tracker, _, queue) = tracker(Ok(pending), statuses, 0);

    tracker.run_once().await.unwrap();
    tracker.run_once().await.unwrap();

    let published = queue.published.lock().unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].1, published[1].1);
    assert!(published[0].2.starts_with("payment-t1-"));
    assert!(published[1].2.starts_with("payment-t1-"));
    assert_ne!(published[0].2, published[1].2);
}
