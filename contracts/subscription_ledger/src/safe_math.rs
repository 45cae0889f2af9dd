//! Checked balance arithmetic for the revenue ledger.

use crate::types::Error;

/// Add `amount` to `balance`, requiring the result to be strictly larger.
///
/// Overflow maps to [`Error::Overflow`]; a non-increasing result (zero or
/// negative `amount`) maps to [`Error::AccountingInvariant`].
pub fn safe_credit_balance(balance: i128, amount: i128) -> Result<i128, Error> {
    let updated = balance.checked_add(amount).ok_or(Error::Overflow)?;
    if updated <= balance {
        return Err(Error::AccountingInvariant);
    }
    Ok(updated)
}

/// Overpayment left after taking `fee` out of `paid`.
pub fn safe_overpayment(paid: i128, fee: i128) -> Result<i128, Error> {
    let rest = paid.checked_sub(fee).ok_or(Error::Overflow)?;
    if rest < 0 {
        return Err(Error::InsufficientPayment);
    }
    Ok(rest)
}
