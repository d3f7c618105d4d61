use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payment::{PaymentChannel, PaymentMethod};

#[derive(Debug, Clone, Deserialize)]
pub struct FeeQuoteRequest {
    pub ticket_price: Decimal,
    pub payment_method: String,
    pub payment_channel: String,
    pub platform_fee: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeQuote {
    pub ticket_price: Decimal,
    pub total_price: Decimal,
    pub transaction_fee: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeeError {
    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),
    #[error("unsupported payment channel: {0}")]
    UnsupportedChannel(String),
}

pub fn parse_payment_method(raw: &str) -> Result<PaymentMethod, FeeError> {
    match raw {
        "DIRECT_DEBIT" => Ok(PaymentMethod::DirectDebit),
        "E_WALLET" => Ok(PaymentMethod::EWallet),
        other => Err(FeeError::InvalidPaymentMethod(other.to_string())),
    }
}

pub fn parse_payment_channel(method: PaymentMethod, raw: &str) -> Result<PaymentChannel, FeeError> {
    let channel = match raw {
        "BPI" => PaymentChannel::Bpi,
        "UBP" => PaymentChannel::Ubp,
        "RCBC" => PaymentChannel::Rcbc,
        "CHINABANK" => PaymentChannel::Chinabank,
        "GCASH" => PaymentChannel::Gcash,
        "PAYMAYA" => PaymentChannel::Paymaya,
        other => return Err(FeeError::UnsupportedChannel(other.to_string())),
    };

    if channel.method() != method {
        return Err(FeeError::UnsupportedChannel(raw.to_string()));
    }

    Ok(channel)
}
