//! Standalone annual calculator path.
//!
//! Ad-hoc what-if calculations where the caller already holds a
//! full-year bruto figure. Annual caps apply throughout and nothing is
//! annualized; feeding an annual bruto into the monthly path would
//! double-annualize and corrupt the result, which is why the mode is an
//! explicit flag on the result rather than something inferred from the
//! amount's magnitude.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{CalculationMode, CalculationResult, TaxProfile};

use super::deductions::{Cadence, biaya_jabatan, iuran_pensiun};
use super::notes::annual_notes;
use super::rounding::round_currency;
use super::tables::{apply_npwp_penalty, progressive_tax, ptkp_yearly, taxable_income};
use super::validate::ensure_non_negative;

/// Calculates PPh21 from an already-annual bruto figure.
///
/// Overrides for biaya jabatan and iuran pensiun are clamped to the
/// annual caps; when absent both default to 5% of bruto, capped. Zakat
/// is clamped to zero or above. The result's `pph21_period` is the
/// display figure `yearly tax / 12` and carries no YTD semantics.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] when bruto or an
/// override is negative.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::calculate_standalone_annual;
/// use pph21_engine::models::{PtkpCode, TaxProfile};
/// use rust_decimal::Decimal;
///
/// let profile = TaxProfile::new(PtkpCode::Tk0, false);
/// let result = calculate_standalone_annual(
///     &profile,
///     Decimal::from(120_000_000),
///     None,
///     None,
///     Decimal::ZERO,
/// )
/// .unwrap();
///
/// assert_eq!(result.pkp, Decimal::from(57_600_000));
/// // 2,880,000 yearly tax, x1.2 without NPWP, shown per month
/// assert_eq!(result.pph21_period, Decimal::from(288_000));
/// ```
pub fn calculate_standalone_annual(
    profile: &TaxProfile,
    annual_bruto: Decimal,
    biaya_jabatan_override: Option<Decimal>,
    iuran_pensiun_override: Option<Decimal>,
    zakat: Decimal,
) -> EngineResult<CalculationResult> {
    ensure_non_negative("bruto", annual_bruto)?;
    if let Some(amount) = biaya_jabatan_override {
        ensure_non_negative("biaya_jabatan", amount)?;
    }
    if let Some(amount) = iuran_pensiun_override {
        ensure_non_negative("iuran_pensiun", amount)?;
    }

    // Garbage zakat never inflates net income
    let zakat = zakat.max(Decimal::ZERO);

    let biaya_jabatan_amount =
        biaya_jabatan(annual_bruto, biaya_jabatan_override, Cadence::Annual);
    let iuran_pensiun_amount = iuran_pensiun(
        annual_bruto,
        iuran_pensiun_override.unwrap_or(Decimal::ZERO),
        Cadence::Annual,
    );

    let neto_year = annual_bruto - biaya_jabatan_amount - iuran_pensiun_amount - zakat;
    let ptkp = ptkp_yearly(profile.ptkp_code);
    let pkp = taxable_income(neto_year, ptkp);

    let pph21_year = apply_npwp_penalty(progressive_tax(pkp), profile.has_npwp);
    let pph21_month_display = round_currency(pph21_year / Decimal::from(12u32));

    Ok(CalculationResult {
        mode: CalculationMode::Annual,
        month: None,
        bruto: round_currency(annual_bruto),
        biaya_jabatan: round_currency(biaya_jabatan_amount),
        iuran_pensiun: round_currency(iuran_pensiun_amount),
        zakat: round_currency(zakat),
        other_deductions: Decimal::ZERO,
        neto: round_currency(neto_year),
        ptkp_yearly: ptkp,
        pkp,
        pph21_period: pph21_month_display,
        pph21_ytd: Decimal::ZERO,
        pph21_settlement_december: Decimal::ZERO,
        notes: annual_notes(profile),
    })
}
