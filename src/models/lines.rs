//! Earning and deduction line models.
//!
//! Lines are the per-component amounts a calculation consumes. Earning
//! lines carry the `taxable` flag resolved from the component catalog;
//! deduction lines carry an explicit [`DeductionRole`]. Roles are assigned
//! when the catalog is loaded, never re-derived from component names at
//! calculation time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tax-law role of a deduction line.
///
/// # Example
///
/// ```
/// use pph21_engine::models::DeductionRole;
///
/// let role: DeductionRole = serde_json::from_str("\"iuran_pensiun\"").unwrap();
/// assert_eq!(role, DeductionRole::IuranPensiun);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionRole {
    /// Manual biaya jabatan override (clamped to the statutory cap).
    BiayaJabatan,
    /// Pension contribution (clamped to the statutory cap).
    IuranPensiun,
    /// Zakat paid through the employer.
    Zakat,
    /// Any other deduction flagged tax-deductible by its component.
    OtherTaxDeductible,
    /// A deduction with no effect on taxable income.
    None,
}

/// One earning amount for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The earning amount, non-negative.
    pub amount: Decimal,
    /// Whether this line contributes to gross taxable income.
    pub taxable: bool,
}

/// One deduction amount for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction amount, non-negative.
    pub amount: Decimal,
    /// The tax-law role of this deduction.
    pub role: DeductionRole,
}
