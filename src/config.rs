#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store_base_url: String,
    pub store_timeout_ms: u64,
    pub gateway_adapter: String,
    pub gateway_base_url: String,
    pub gateway_api_key: String,
    pub gateway_timeout_ms: u64,
    pub callback_base_url: String,
    pub redis_url: String,
    pub stream_key: String,
    pub tracker_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            store_base_url: std::env::var("PAYMENT_STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            store_timeout_ms: std::env::var("STORE_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            gateway_adapter: std::env::var("GATEWAY_ADAPTER").unwrap_or_else(|_| "XENDIT".to_string()),
            gateway_base_url: std::env::var("XENDIT_BASE_URL")
                .unwrap_or_else(|_| "https://api.xendit.co".to_string()),
            gateway_api_key: std::env::var("XENDIT_API_KEY").unwrap_or_default(),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            callback_base_url: std::env::var("CALLBACK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string()),
            stream_key: std::env::var("STATUS_STREAM_KEY")
                .unwrap_or_else(|_| "payments:status:v1".to_string()),
            tracker_interval_secs: std::env::var("TRACKER_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60),
        }
    }
}
