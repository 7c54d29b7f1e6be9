//! Statutory deduction calculators and deduction-line aggregation.
//!
//! Biaya jabatan and iuran pensiun are both 5% of bruto with statutory
//! ceilings. The ceilings differ between monthly and annual operation;
//! [`Cadence`] selects the cap table so the two can never be mixed.

use rust_decimal::Decimal;

use crate::models::{DeductionLine, DeductionRole};

/// Which statutory cap table applies to a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Bruto covers one month; monthly caps apply.
    Monthly,
    /// Bruto covers a full year; annual caps apply.
    Annual,
}

/// Returns the biaya jabatan rate (5% of bruto).
pub fn biaya_jabatan_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Returns the iuran pensiun rate (5% of bruto).
pub fn iuran_pensiun_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Returns the biaya jabatan ceiling for a cadence.
///
/// 500,000/month or 6,000,000/year.
pub fn biaya_jabatan_cap(cadence: Cadence) -> Decimal {
    match cadence {
        Cadence::Monthly => Decimal::from(500_000u64),
        Cadence::Annual => Decimal::from(6_000_000u64),
    }
}

/// Returns the iuran pensiun ceiling for a cadence.
///
/// 200,000/month or 2,400,000/year.
pub fn iuran_pensiun_cap(cadence: Cadence) -> Decimal {
    match cadence {
        Cadence::Monthly => Decimal::from(200_000u64),
        Cadence::Annual => Decimal::from(2_400_000u64),
    }
}

/// Deduction-line amounts aggregated by their explicit role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionBreakdown {
    /// Manual biaya jabatan override, if any line carried that role.
    pub biaya_jabatan_override: Option<Decimal>,
    /// Sum of supplied iuran pensiun amounts.
    pub iuran_pensiun_supplied: Decimal,
    /// Sum of zakat amounts, clamped to zero or above.
    pub zakat: Decimal,
    /// Sum of other tax-deductible amounts.
    pub other_tax_deductible: Decimal,
}

impl DeductionBreakdown {
    /// Aggregates deduction lines by role.
    ///
    /// Lines with role `none` are ignored: they do not reduce taxable
    /// income. Zakat is clamped so that garbage input can never inflate
    /// net income.
    pub fn from_lines(lines: &[DeductionLine]) -> Self {
        let mut breakdown = Self::default();

        for line in lines {
            match line.role {
                DeductionRole::BiayaJabatan => {
                    let current = breakdown.biaya_jabatan_override.unwrap_or(Decimal::ZERO);
                    breakdown.biaya_jabatan_override = Some(current + line.amount);
                }
                DeductionRole::IuranPensiun => {
                    breakdown.iuran_pensiun_supplied += line.amount;
                }
                DeductionRole::Zakat => {
                    breakdown.zakat += line.amount;
                }
                DeductionRole::OtherTaxDeductible => {
                    breakdown.other_tax_deductible += line.amount;
                }
                DeductionRole::None => {}
            }
        }

        breakdown.zakat = breakdown.zakat.max(Decimal::ZERO);
        breakdown
    }
}

/// Calculates the biaya jabatan deduction.
///
/// Default is 5% of bruto, capped. A manual override is clamped to the
/// same cap; caller-supplied values never exceed the statutory ceiling.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::{Cadence, biaya_jabatan};
/// use rust_decimal::Decimal;
///
/// // 5% of 10,000,000 hits the monthly cap exactly
/// assert_eq!(
///     biaya_jabatan(Decimal::from(10_000_000), None, Cadence::Monthly),
///     Decimal::from(500_000)
/// );
/// // Oversized overrides are clamped
/// assert_eq!(
///     biaya_jabatan(Decimal::from(10_000_000), Some(Decimal::from(900_000)), Cadence::Monthly),
///     Decimal::from(500_000)
/// );
/// ```
pub fn biaya_jabatan(
    bruto: Decimal,
    override_amount: Option<Decimal>,
    cadence: Cadence,
) -> Decimal {
    let cap = biaya_jabatan_cap(cadence);
    match override_amount {
        Some(amount) => amount.min(cap).max(Decimal::ZERO),
        None => (bruto * biaya_jabatan_rate()).min(cap),
    }
}

/// Calculates the iuran pensiun deduction.
///
/// A positive supplied amount (from a deduction line with the
/// `iuran_pensiun` role) wins, capped; otherwise 5% of bruto, capped.
pub fn iuran_pensiun(bruto: Decimal, supplied: Decimal, cadence: Cadence) -> Decimal {
    let cap = iuran_pensiun_cap(cadence);
    if supplied > Decimal::ZERO {
        supplied.min(cap)
    } else {
        (bruto * iuran_pensiun_rate()).min(cap)
    }
}

/// The per-period amounts shared by the monthly and December paths.
#[derive(Debug, Clone, Copy)]
pub(super) struct PeriodAmounts {
    pub bruto: Decimal,
    pub biaya_jabatan: Decimal,
    pub iuran_pensiun: Decimal,
    pub zakat: Decimal,
    pub other_tax_deductible: Decimal,
    pub neto: Decimal,
}

/// Computes one month's bruto, deductions, and neto with monthly caps.
pub(super) fn period_amounts(
    earnings: &[crate::models::EarningLine],
    deductions: &[DeductionLine],
) -> PeriodAmounts {
    let bruto = super::bruto::taxable_bruto(earnings);
    let breakdown = DeductionBreakdown::from_lines(deductions);

    let biaya_jabatan_amount =
        biaya_jabatan(bruto, breakdown.biaya_jabatan_override, Cadence::Monthly);
    let iuran_pensiun_amount =
        iuran_pensiun(bruto, breakdown.iuran_pensiun_supplied, Cadence::Monthly);
    let neto = bruto
        - biaya_jabatan_amount
        - iuran_pensiun_amount
        - breakdown.zakat
        - breakdown.other_tax_deductible;

    PeriodAmounts {
        bruto,
        biaya_jabatan: biaya_jabatan_amount,
        iuran_pensiun: iuran_pensiun_amount,
        zakat: breakdown.zakat,
        other_tax_deductible: breakdown.other_tax_deductible,
        neto,
    }
}
