use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::payment::{PaymentChannel, PaymentMethod};
use crate::fees::types::{parse_payment_channel, parse_payment_method, FeeError, FeeQuote, FeeQuoteRequest};

const VAT_RATE: Decimal = dec!(0.12);

const GCASH_FEE_RATE: Decimal = dec!(0.023);
const PAYMAYA_FEE_RATE: Decimal = dec!(0.018);

const DIRECT_DEBIT_FEE_RATE: Decimal = dec!(0.01);
const DIRECT_DEBIT_FLAT_FEE: Decimal = dec!(15);
// 1500 - 15 - 15*0.12: below this net price the flat fee exceeds 1% of gross
const DIRECT_DEBIT_FLAT_FEE_CEILING: Decimal = dec!(1483.20);

pub fn quote(req: &FeeQuoteRequest) -> Result<FeeQuote, FeeError> {
    let method = parse_payment_method(&req.payment_method)?;
    let channel = parse_payment_channel(method, &req.payment_channel)?;
    quote_for(req.ticket_price, req.platform_fee, method, channel)
}

pub fn quote_for(
    ticket_price: Decimal,
    platform_percent: Option<Decimal>,
    method: PaymentMethod,
    channel: PaymentChannel,
) -> Result<FeeQuote, FeeError> {
    let platform_fee = platform_percent.unwrap_or(Decimal::ZERO) * ticket_price;
    let net = ticket_price + platform_fee;

    let total = match method {
        PaymentMethod::EWallet => {
            let rate = e_wallet_rate(channel)
                .ok_or_else(|| FeeError::UnsupportedChannel(channel.code().to_string()))?;
            solve_percentage(net, rate)
        }
        PaymentMethod::DirectDebit => {
            if channel.method() != PaymentMethod::DirectDebit {
                return Err(FeeError::UnsupportedChannel(channel.code().to_string()));
            }
            if net > DIRECT_DEBIT_FLAT_FEE_CEILING {
                solve_percentage(net, DIRECT_DEBIT_FEE_RATE)
            } else {
                net + DIRECT_DEBIT_FLAT_FEE * (Decimal::ONE + VAT_RATE)
            }
        }
    };

    let transaction_fee = total - net;

    Ok(FeeQuote {
        ticket_price: round2(ticket_price),
        total_price: round2(total),
        transaction_fee: round2(transaction_fee),
        platform_fee: (platform_fee > Decimal::ZERO).then(|| round2(platform_fee)),
    })
}

// P - P*r - P*r*vat = net  =>  P = net / (1 - r*(1 + vat))
fn solve_percentage(net: Decimal, rate: Decimal) -> Decimal {
    net / (Decimal::ONE - rate * (Decimal::ONE + VAT_RATE))
}

fn e_wallet_rate(channel: PaymentChannel) -> Option<Decimal> {
    match channel {
        PaymentChannel::Gcash => Some(GCASH_FEE_RATE),
        PaymentChannel::Paymaya => Some(PAYMAYA_FEE_RATE),
        _ => None,
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
