use axum::http::StatusCode;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::payment::{
    CreateDirectDebitMethodRequest, CreateDirectDebitMethodResponse, DirectDebitPaymentRequest,
    ErrorEnvelope, EWalletPaymentRequest, NewPaymentTransaction, PaymentChannel, PaymentMethod,
    PaymentRequestResponse, TransactionStatus,
};
use crate::fees::engine::quote_for;
use crate::fees::types::FeeError;
use crate::gateways::{
    CreatePaymentMethodParams, CreatePaymentRequestParams, GatewayError, PaymentGateway,
    PaymentRequestInstrument,
};
use crate::store::{PaymentStore, PaymentTransactionUpdate, StoreError};

#[derive(Clone)]
pub struct PaymentService {
    pub store: Arc<dyn PaymentStore>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub callback_base_url: String,
}

impl PaymentService {
    pub async fn create_direct_debit_method(
        &self,
        req: CreateDirectDebitMethodRequest,
    ) -> Result<CreateDirectDebitMethodResponse, (StatusCode, ErrorEnvelope)> {
        if req.channel_code.method() != PaymentMethod::DirectDebit {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorEnvelope::new("UNSUPPORTED_CHANNEL", "channel is not a direct debit bank"),
            ));
        }

        let record = self
            .gateway
            .create_payment_method(CreatePaymentMethodParams {
                channel: req.channel_code,
                given_names: req.given_names,
                surname: req.surname,
                email: req.email,
                success_return_url: req.success_return_url,
                failure_return_url: req.failure_return_url,
                reference_id: Uuid::new_v4().to_string(),
            })
            .await
            .map_err(gateway_error)?;

        Ok(CreateDirectDebitMethodResponse {
            payment_method_id: record.payment_method_id,
            customer_id: record.customer_id,
            reference_id: record.reference_id,
            payment_url: record.action_url,
            created_at: record.created_at,
        })
    }

    pub async fn direct_debit_payment(
        &self,
        req: DirectDebitPaymentRequest,
    ) -> Result<PaymentRequestResponse, (StatusCode, ErrorEnvelope)> {
        validate_ticket_price(req.ticket_price)?;

        let quote = quote_for(
            req.ticket_price,
            req.platform_fee,
            PaymentMethod::DirectDebit,
            req.channel_code,
        )
        .map_err(fee_error)?;

        self.initiate_payment(
            PaymentMethod::DirectDebit,
            req.registration_ref,
            quote.ticket_price + quote.platform_fee.unwrap_or(Decimal::ZERO),
            quote.total_price,
            req.channel_code,
            |transaction_id, callback_base_url| PaymentRequestInstrument::DirectDebit {
                payment_method_id: req.payment_method_id.clone(),
                callback_url: format!("{}/payments/{}/callback", callback_base_url, transaction_id),
            },
        )
        .await
    }

    pub async fn e_wallet_payment(
        &self,
        req: EWalletPaymentRequest,
    ) -> Result<PaymentRequestResponse, (StatusCode, ErrorEnvelope)> {
        validate_ticket_price(req.ticket_price)?;

        let quote = quote_for(
            req.ticket_price,
            req.platform_fee,
            PaymentMethod::EWallet,
            req.channel_code,
        )
        .map_err(fee_error)?;

        self.initiate_payment(
            PaymentMethod::EWallet,
            req.registration_ref,
            quote.ticket_price + quote.platform_fee.unwrap_or(Decimal::ZERO),
            quote.total_price,
            req.channel_code,
            |_, _| PaymentRequestInstrument::EWallet {
                channel: req.channel_code,
                success_return_url: req.success_return_url.clone(),
                failure_return_url: req.failure_return_url.clone(),
            },
        )
        .await
    }

    async fn initiate_payment(
        &self,
        method: PaymentMethod,
        registration_ref: Option<String>,
        net_price: Decimal,
        gross_price: Decimal,
        channel: PaymentChannel,
        instrument: impl FnOnce(&str, &str) -> PaymentRequestInstrument,
    ) -> Result<PaymentRequestResponse, (StatusCode, ErrorEnvelope)> {
        let created = self
            .store
            .create(NewPaymentTransaction {
                registration_ref,
                net_price,
                gross_price,
                payment_method: method,
                payment_channel: channel,
                status: TransactionStatus::Pending,
            })
            .await
            .map_err(store_error)?;

        let idempotency_key = Uuid::new_v4().to_string();
        let request = self
            .gateway
            .create_payment_request(
                &idempotency_key,
                CreatePaymentRequestParams {
                    reference_id: created.transaction_id.clone(),
                    amount: gross_price,
                    currency: "PHP".to_string(),
                    instrument: instrument(&created.transaction_id, &self.callback_base_url),
                },
            )
            .await
            .map_err(gateway_error)?;

        self.store
            .update(
                &created.transaction_id,
                PaymentTransactionUpdate {
                    payment_request_id: Some(request.payment_request_id.clone()),
                },
            )
            .await
            .map_err(store_error)?;

        Ok(PaymentRequestResponse {
            transaction_id: created.transaction_id,
            payment_request_id: request.payment_request_id,
            reference_id: request.reference_id,
            payment_url: request.action_url.unwrap_or_default(),
            created_at: request.created_at,
        })
    }
}

fn validate_ticket_price(price: Decimal) -> Result<(), (StatusCode, ErrorEnvelope)> {
    if price <= Decimal::ZERO {
        return Err((
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::new("INVALID_AMOUNT", "ticket_price must be > 0"),
        ));
    }
    Ok(())
}

fn fee_error(e: FeeError) -> (StatusCode, ErrorEnvelope) {
    let code = match e {
        FeeError::InvalidPaymentMethod(_) => "INVALID_PAYMENT_METHOD",
        FeeError::UnsupportedChannel(_) => "UNSUPPORTED_CHANNEL",
    };
    (StatusCode::UNPROCESSABLE_ENTITY, ErrorEnvelope::new(code, &e.to_string()))
}

fn store_error(e: StoreError) -> (StatusCode, ErrorEnvelope) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorEnvelope::new("STORE_UNAVAILABLE", &e.to_string()),
    )
}

fn gateway_error(e: GatewayError) -> (StatusCode, ErrorEnvelope) {
    match e {
        GatewayError::Rejected(message) => (
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::new("GATEWAY_REJECTED", &message),
        ),
        GatewayError::Unavailable(message) => (
            StatusCode::BAD_GATEWAY,
            ErrorEnvelope::new("GATEWAY_UNAVAILABLE", &message),
        ),
    }
}
