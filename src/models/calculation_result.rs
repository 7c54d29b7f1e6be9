//! Calculation result models for the PPh21 Withholding Engine.
//!
//! This module contains the [`CalculationResult`] type that captures all
//! outputs of a PPh21 calculation, the [`CalculationMode`] that records
//! which interpretation of bruto produced it, and the [`YtdAggregate`]
//! input used for year-to-date reconciliation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the bruto input of a calculation is to be interpreted.
///
/// The mode is recorded explicitly on every result so that stored history
/// never has to be guessed from the magnitude of the amounts. Mixing the
/// two interpretations double-annualizes income and corrupts the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Bruto is one month's income; the engine annualizes it (TER-style
    /// estimate for months 1-11, cumulative reconciliation in December).
    Monthly,
    /// Bruto is already a full-year figure (standalone calculator).
    Annual,
}

/// Year-to-date totals for one employment within the current tax year.
///
/// The aggregate sums the persisted `neto` and `pph21_period` values of
/// every prior period (months 1..current-1). The engine never queries
/// storage itself; the caller fetches and supplies this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YtdAggregate {
    /// Sum of prior-period neto values.
    pub neto_yearly: Decimal,
    /// Sum of prior-period PPh21 withholdings.
    pub pph21_ytd: Decimal,
}

/// The complete result of one PPh21 calculation.
///
/// Produced fresh on every call, never mutated. All monetary fields are
/// rounded to 2 decimal places; `pph21_settlement_december` is the only
/// field that may be negative (over-withholding surfaced raw, while the
/// reported December withholding in `pph21_period` is clamped to zero).
///
/// # Example
///
/// ```
/// use pph21_engine::models::{CalculationMode, CalculationResult};
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     mode: CalculationMode::Monthly,
///     month: Some(6),
///     bruto: Decimal::ZERO,
///     biaya_jabatan: Decimal::ZERO,
///     iuran_pensiun: Decimal::ZERO,
///     zakat: Decimal::ZERO,
///     other_deductions: Decimal::ZERO,
///     neto: Decimal::ZERO,
///     ptkp_yearly: Decimal::ZERO,
///     pkp: Decimal::ZERO,
///     pph21_period: Decimal::ZERO,
///     pph21_ytd: Decimal::ZERO,
///     pph21_settlement_december: Decimal::ZERO,
///     notes: vec![],
/// };
/// assert_eq!(result.month, Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// How the bruto input was interpreted.
    pub mode: CalculationMode,
    /// The calculation month (1-12); `None` for the standalone annual
    /// calculator, which has no period context.
    pub month: Option<u8>,
    /// Gross taxable income for the period.
    pub bruto: Decimal,
    /// Biaya jabatan deduction applied (5% of bruto, capped).
    pub biaya_jabatan: Decimal,
    /// Iuran pensiun deduction applied (supplied or 5% of bruto, capped).
    pub iuran_pensiun: Decimal,
    /// Zakat deduction applied.
    pub zakat: Decimal,
    /// Sum of other tax-deductible deductions.
    pub other_deductions: Decimal,
    /// Income after statutory deductions, before the PTKP exemption.
    pub neto: Decimal,
    /// The yearly PTKP exemption for the profile's code.
    pub ptkp_yearly: Decimal,
    /// Taxable income after the PTKP exemption, floored to the nearest
    /// 1,000 rupiah. Annualized estimate for months 1-11, true annual
    /// figure for December and annual mode.
    pub pkp: Decimal,
    /// PPh21 withholding for this period.
    pub pph21_period: Decimal,
    /// Sum of PPh21 withheld in prior periods this year.
    pub pph21_ytd: Decimal,
    /// December reconciliation settlement (yearly tax minus YTD
    /// withholding), raw and possibly negative; zero outside December.
    pub pph21_settlement_december: Decimal,
    /// Human-readable notes about the calculation.
    pub notes: Vec<String>,
}
