//! Monthly withholding path for months 1-11.
//!
//! Months January through November use the TER-style estimate: the
//! month's neto is annualized (×12), the PTKP exemption and statutory
//! PKP flooring are applied to the annualized figure, and one twelfth of
//! the resulting annual tax is withheld for the period. December is a
//! different path entirely, see [`super::calculate_december`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationMode, CalculationResult, DeductionLine, EarningLine, TaxProfile, YtdAggregate,
};

use super::deductions::period_amounts;
use super::notes::monthly_notes;
use super::rounding::round_currency;
use super::tables::{apply_npwp_penalty, progressive_tax, ptkp_yearly, taxable_income};
use super::validate::{ensure_non_negative, ensure_valid_deductions, ensure_valid_earnings};

/// Calculates PPh21 withholding for one month in January-November.
///
/// `ytd` is the caller-supplied aggregate of this employment's
/// prior-period results within the tax year; pass
/// [`YtdAggregate::default`] when no prior periods exist.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] for months outside 1-11 and
/// [`EngineError::InvalidInput`] for negative amounts.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::calculate_monthly;
/// use pph21_engine::models::{EarningLine, PtkpCode, TaxProfile, YtdAggregate};
/// use rust_decimal::Decimal;
///
/// let profile = TaxProfile::new(PtkpCode::Tk0, true);
/// let earnings = vec![EarningLine { amount: Decimal::from(10_000_000), taxable: true }];
///
/// let result = calculate_monthly(&profile, &earnings, &[], 6, &YtdAggregate::default()).unwrap();
/// assert_eq!(result.pkp, Decimal::from(57_600_000));
/// assert_eq!(result.pph21_period, Decimal::from(240_000));
/// ```
pub fn calculate_monthly(
    profile: &TaxProfile,
    earnings: &[EarningLine],
    deductions: &[DeductionLine],
    month: u8,
    ytd: &YtdAggregate,
) -> EngineResult<CalculationResult> {
    if !(1..=11).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    ensure_valid_earnings(earnings)?;
    ensure_valid_deductions(deductions)?;
    ensure_non_negative("ytd.neto_yearly", ytd.neto_yearly)?;
    ensure_non_negative("ytd.pph21_ytd", ytd.pph21_ytd)?;

    let amounts = period_amounts(earnings, deductions);
    let twelve = Decimal::from(12u32);

    let neto_annualized = amounts.neto * twelve;
    let ptkp = ptkp_yearly(profile.ptkp_code);
    let pkp = taxable_income(neto_annualized, ptkp);

    let pph21_annual = apply_npwp_penalty(progressive_tax(pkp), profile.has_npwp);
    let pph21_period = round_currency(pph21_annual / twelve);

    Ok(CalculationResult {
        mode: CalculationMode::Monthly,
        month: Some(month),
        bruto: round_currency(amounts.bruto),
        biaya_jabatan: round_currency(amounts.biaya_jabatan),
        iuran_pensiun: round_currency(amounts.iuran_pensiun),
        zakat: round_currency(amounts.zakat),
        other_deductions: round_currency(amounts.other_tax_deductible),
        neto: round_currency(amounts.neto),
        ptkp_yearly: ptkp,
        pkp,
        pph21_period,
        pph21_ytd: round_currency(ytd.pph21_ytd),
        pph21_settlement_december: Decimal::ZERO,
        notes: monthly_notes(profile),
    })
}
