//! December annual reconciliation path.
//!
//! December closes the tax year: the true yearly neto (year-to-date plus
//! the December month) is taxed through the brackets and the difference
//! against what was already withheld in January-November becomes the
//! December settlement. The raw settlement is surfaced even when
//! negative; the reported December withholding is clamped to zero.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    CalculationMode, CalculationResult, DeductionLine, EarningLine, TaxProfile, YtdAggregate,
};

use super::deductions::period_amounts;
use super::notes::december_notes;
use super::rounding::round_currency;
use super::tables::{apply_npwp_penalty, progressive_tax, ptkp_yearly, taxable_income};
use super::validate::{ensure_non_negative, ensure_valid_deductions, ensure_valid_earnings};

/// Calculates the December PPh21 reconciliation.
///
/// `ytd` must aggregate this employment's January-November results. The
/// result's `pkp` is the true annual taxable income, not an annualized
/// estimate, and `pph21_settlement_december` carries the raw settlement
/// (negative when the year was over-withheld) while `pph21_period` is
/// clamped to zero or above.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] for negative
/// amounts.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::calculate_december;
/// use pph21_engine::models::{EarningLine, PtkpCode, TaxProfile, YtdAggregate};
/// use rust_decimal::Decimal;
///
/// let profile = TaxProfile::new(PtkpCode::Tk0, true);
/// let earnings = vec![EarningLine { amount: Decimal::from(10_000_000), taxable: true }];
/// let ytd = YtdAggregate {
///     neto_yearly: Decimal::from(102_300_000),
///     pph21_ytd: Decimal::from(2_640_000),
/// };
///
/// let result = calculate_december(&profile, &earnings, &[], &ytd).unwrap();
/// assert_eq!(result.pkp, Decimal::from(57_600_000));
/// // Yearly tax 2,880,000 minus 2,640,000 withheld
/// assert_eq!(result.pph21_period, Decimal::from(240_000));
/// ```
pub fn calculate_december(
    profile: &TaxProfile,
    earnings: &[EarningLine],
    deductions: &[DeductionLine],
    ytd: &YtdAggregate,
) -> EngineResult<CalculationResult> {
    ensure_valid_earnings(earnings)?;
    ensure_valid_deductions(deductions)?;
    ensure_non_negative("ytd.neto_yearly", ytd.neto_yearly)?;
    ensure_non_negative("ytd.pph21_ytd", ytd.pph21_ytd)?;

    let amounts = period_amounts(earnings, deductions);

    let neto_yearly = ytd.neto_yearly + amounts.neto;
    let ptkp = ptkp_yearly(profile.ptkp_code);
    let pkp = taxable_income(neto_yearly, ptkp);

    let pph21_yearly = apply_npwp_penalty(progressive_tax(pkp), profile.has_npwp);
    let settlement = pph21_yearly - ytd.pph21_ytd;
    let pph21_period = settlement.max(Decimal::ZERO);

    Ok(CalculationResult {
        mode: CalculationMode::Monthly,
        month: Some(12),
        bruto: round_currency(amounts.bruto),
        biaya_jabatan: round_currency(amounts.biaya_jabatan),
        iuran_pensiun: round_currency(amounts.iuran_pensiun),
        zakat: round_currency(amounts.zakat),
        other_deductions: round_currency(amounts.other_tax_deductible),
        neto: round_currency(amounts.neto),
        ptkp_yearly: ptkp,
        pkp,
        pph21_period: round_currency(pph21_period),
        pph21_ytd: round_currency(ytd.pph21_ytd),
        pph21_settlement_december: round_currency(settlement),
        notes: december_notes(profile),
    })
}
