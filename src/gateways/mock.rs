use chrono::Utc;
use uuid::Uuid;

use crate::gateways::{
    CreatePaymentMethodParams, CreatePaymentRequestParams, GatewayError, PaymentGateway,
    PaymentMethodRecord, PaymentRequestRecord,
};

pub struct MockGateway {
    pub behavior: String,
    pub report_status: String,
}

impl MockGateway {
    fn fail_if_configured(&self) -> Result<(), GatewayError> {
        match self.behavior.as_str() {
            "ALWAYS_REJECT" => Err(GatewayError::Rejected("mock rejection".to_string())),
            "ALWAYS_UNAVAILABLE" => Err(GatewayError::Unavailable("mock outage".to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_payment_method(
        &self,
        params: CreatePaymentMethodParams,
    ) -> Result<PaymentMethodRecord, GatewayError> {
        self.fail_if_configured()?;

        Ok(PaymentMethodRecord {
            payment_method_id: format!("pm_mock_{}", Uuid::new_v4()),
            customer_id: format!("cust_mock_{}", Uuid::new_v4()),
            reference_id: params.reference_id,
            action_url: "https://mock.invalid/authorize".to_string(),
            created_at: Utc::now(),
        })
    }

    async fn create_payment_request(
        &self,
        _idempotency_key: &str,
        params: CreatePaymentRequestParams,
    ) -> Result<PaymentRequestRecord, GatewayError> {
        self.fail_if_configured()?;

        Ok(PaymentRequestRecord {
            payment_request_id: format!("pr_mock_{}", Uuid::new_v4()),
            reference_id: params.reference_id,
            status: Some("PENDING".to_string()),
            action_url: Some("https://mock.invalid/pay".to_string()),
            created_at: Utc::now(),
        })
    }

    async fn get_payment_request(
        &self,
        payment_request_id: &str,
    ) -> Result<PaymentRequestRecord, GatewayError> {
        self.fail_if_configured()?;

        Ok(PaymentRequestRecord {
            payment_request_id: payment_request_id.to_string(),
            reference_id: String::new(),
            status: Some(self.report_status.clone()),
            action_url: None,
            created_at: Utc::now(),
        })
    }
}
