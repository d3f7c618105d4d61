use std::sync::Arc;
use ticketing_payments::config::AppConfig;
use ticketing_payments::gateways::mock::MockGateway;
use ticketing_payments::gateways::xendit::XenditGateway;
use ticketing_payments::gateways::PaymentGateway;
use ticketing_payments::queue::redis_stream::RedisStreamQueue;
use ticketing_payments::queue::NotificationQueue;
use ticketing_payments::service::payment_tracker::PaymentTracker;
use ticketing_payments::store::http::HttpPaymentStore;
use ticketing_payments::store::PaymentStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let gateway: Arc<dyn PaymentGateway> = if cfg.gateway_adapter == "MOCK" {
        Arc::new(MockGateway {
            behavior: "ALWAYS_SUCCESS".to_string(),
            report_status: "PENDING".to_string(),
        })
    } else {
        Arc::new(XenditGateway {
            base_url: cfg.gateway_base_url.clone(),
            api_key: cfg.gateway_api_key.clone(),
            timeout_ms: cfg.gateway_timeout_ms,
            client: reqwest::Client::new(),
        })
    };

    let store: Arc<dyn PaymentStore> = Arc::new(HttpPaymentStore {
        base_url: cfg.store_base_url.clone(),
        timeout_ms: cfg.store_timeout_ms,
        client: reqwest::Client::new(),
    });

    let queue: Arc<dyn NotificationQueue> = Arc::new(RedisStreamQueue {
        client: redis::Client::open(cfg.redis_url.clone())?,
        stream_key: cfg.stream_key.clone(),
    });

    let tracker = PaymentTracker { store, gateway, queue };

    loop {
        if let Err(err) = tracker.run_once().await {
            tracing::error!("payment tracking run failed: {}", err);
        }
        tokio::time::sleep(std::time::Duration::from_secs(cfg.tracker_interval_secs)).await;
    }
}
