use crate::storage::{PaymentSplit, BASIS_POINTS};

/// Split a payment into the registry fee and the beneficiary's share
///
/// Formula: fee = floor(amount × fee_bps / 10,000), net = amount - fee
///
/// Example:
/// - amount: 100,000,000
/// - fee rate: 1% (100 basis points)
/// - fee: 1,000,000, net: 99,000,000
///
/// Returns `None` for negative amounts, rates above 100% or on overflow.
pub fn split_payment(amount: i128, fee_bps: u32) -> Option<PaymentSplit> {
    if amount < 0 || fee_bps > BASIS_POINTS {
        return None;
    }

    let fee = amount
        .checked_mul(fee_bps as i128)?
        .checked_div(BASIS_POINTS as i128)?;
    let net = amount.checked_sub(fee)?;

    Some(PaymentSplit { fee, net })
}
