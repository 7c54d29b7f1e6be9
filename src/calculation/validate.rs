//! Input validation for calculation entry points.
//!
//! Negative amounts are rejected before any computation runs; no partial
//! result is ever produced from invalid input.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionLine, EarningLine};

/// Rejects a negative amount for the named input field.
pub(super) fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("amount {} must not be negative", amount),
        });
    }
    Ok(())
}

/// Validates every earning line amount.
pub(super) fn ensure_valid_earnings(earnings: &[EarningLine]) -> EngineResult<()> {
    for (index, line) in earnings.iter().enumerate() {
        ensure_non_negative(&format!("earnings[{}].amount", index), line.amount)?;
    }
    Ok(())
}

/// Validates every deduction line amount.
pub(super) fn ensure_valid_deductions(deductions: &[DeductionLine]) -> EngineResult<()> {
    for (index, line) in deductions.iter().enumerate() {
        ensure_non_negative(&format!("deductions[{}].amount", index), line.amount)?;
    }
    Ok(())
}
