pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod fees {
    pub mod engine;
    pub mod types;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod direct_debit;
        pub mod e_wallet;
        pub mod fees;
        pub mod ops;
    }
}
pub mod queue;
pub mod service {
    pub mod payment_service;
    pub mod payment_tracker;
}
pub mod store;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}
