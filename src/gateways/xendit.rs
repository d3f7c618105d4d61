use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde_json::json;

use crate::gateways::{
    CreatePaymentMethodParams, CreatePaymentRequestParams, GatewayError, PaymentGateway,
    PaymentMethodRecord, PaymentRequestInstrument, PaymentRequestRecord,
};

pub struct XenditGateway {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ApiAction {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PaymentMethodApiResponse {
    id: String,
    customer_id: Option<String>,
    reference_id: Option<String>,
    actions: Option<Vec<ApiAction>>,
    created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct PaymentRequestApiResponse {
    id: String,
    reference_id: Option<String>,
    status: Option<String>,
    actions: Option<Vec<ApiAction>>,
    created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl XenditGateway {
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, GatewayError> {
        let resp = req
            .basic_auth(&self.api_key, Some(""))
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.chars().take(200).collect());

        if status.is_client_error() {
            Err(GatewayError::Rejected(message))
        } else {
            Err(GatewayError::Unavailable(format!("HTTP_{} {}", status.as_u16(), message)))
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for XenditGateway {
    fn name(&self) -> &'static str {
        "xendit"
    }

    async fn create_payment_method(
        &self,
        params: CreatePaymentMethodParams,
    ) -> Result<PaymentMethodRecord, GatewayError> {
        let url = format!("{}/v2/payment_methods", self.base_url);
        let body = json!({
            "type": "DIRECT_DEBIT",
            "reusability": "ONE_TIME_USE",
            "direct_debit": {
                "channel_code": params.channel,
                "channel_properties": {
                    "success_return_url": params.success_return_url,
                    "failure_return_url": params.failure_return_url,
                    "email": params.email,
                },
            },
            "customer": {
                "reference_id": params.reference_id,
                "type": "INDIVIDUAL",
                "individual_detail": {
                    "given_names": params.given_names,
                    "surname": params.surname,
                },
            },
        });

        let resp = self.send(self.client.post(url).json(&body)).await?;
        let api: PaymentMethodApiResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

        let action_url = api
            .actions
            .unwrap_or_default()
            .into_iter()
            .find_map(|a| a.url)
            .ok_or_else(|| GatewayError::Unavailable("payment method response has no action url".to_string()))?;

        Ok(PaymentMethodRecord {
            payment_method_id: api.id,
            customer_id: api.customer_id.unwrap_or_default(),
            reference_id: api.reference_id.unwrap_or_default(),
            action_url,
            created_at: api.created.unwrap_or_else(Utc::now),
        })
    }

    async fn create_payment_request(
        &self,
        idempotency_key: &str,
        params: CreatePaymentRequestParams,
    ) -> Result<PaymentRequestRecord, GatewayError> {
        let url = format!("{}/payment_requests", self.base_url);
        let amount = params.amount.to_f64().unwrap_or_default();

        let body = match &params.instrument {
            PaymentRequestInstrument::DirectDebit {
                payment_method_id,
                callback_url,
            } => json!({
                "reference_id": params.reference_id,
                "amount": amount,
                "currency": params.currency,
                "payment_method_id": payment_method_id,
                "enable_otp": false,
                "callback_url": callback_url,
            }),
            PaymentRequestInstrument::EWallet {
                channel,
                success_return_url,
                failure_return_url,
            } => json!({
                "country": "PH",
                "reference_id": params.reference_id,
                "amount": amount,
                "currency": params.currency,
                "payment_method": {
                    "type": "EWALLET",
                    "reusability": "ONE_TIME_USE",
                    "ewallet": {
                        "channel_code": channel,
                        "channel_properties": {
                            "success_return_url": success_return_url,
                            "failure_return_url": failure_return_url,
                        },
                    },
                },
            }),
        };

        let resp = self
            .send(
                self.client
                    .post(url)
                    .header("idempotency-key", idempotency_key)
                    .json(&body),
            )
            .await?;
        let api: PaymentRequestApiResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

        Ok(to_request_record(api))
    }

    async fn get_payment_request(
        &self,
        payment_request_id: &str,
    ) -> Result<PaymentRequestRecord, GatewayError> {
        let url = format!("{}/payment_requests/{}", self.base_url, payment_request_id);
        let resp = self.send(self.client.get(url)).await?;
        let api: PaymentRequestApiResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

        Ok(to_request_record(api))
    }
}

fn to_request_record(api: PaymentRequestApiResponse) -> PaymentRequestRecord {
    PaymentRequestRecord {
        payment_request_id: api.id,
        reference_id: api.reference_id.unwrap_or_default(),
        status: api.status,
        action_url: api.actions.unwrap_or_default().into_iter().find_map(|a| a.url),
        created_at: api.created.unwrap_or_else(Utc::now),
    }
}
