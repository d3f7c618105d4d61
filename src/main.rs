use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use ticketing_payments::config::AppConfig;
use ticketing_payments::gateways::mock::MockGateway;
use ticketing_payments::gateways::xendit::XenditGateway;
use ticketing_payments::gateways::PaymentGateway;
use ticketing_payments::http::handlers::{direct_debit, e_wallet, fees, ops};
use ticketing_payments::service::payment_service::PaymentService;
use ticketing_payments::store::http::HttpPaymentStore;
use ticketing_payments::store::PaymentStore;
use ticketing_payments::AppState;
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

    let payment_service = PaymentService {
        store,
        gateway,
        callback_base_url: cfg.callback_base_url.clone(),
    };

    let state = AppState { payment_service };

    let app = Router::new()
        .route("/health", get(ops::health))
        .route("/transactions/fees", post(fees::quote_fees))
        .route("/direct_debit/payment_method", post(direct_debit::create_payment_method))
        .route("/direct_debit/payment_request", post(direct_debit::create_payment_request))
        .route("/e_wallet/payment_request", post(e_wallet::create_payment_request))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
