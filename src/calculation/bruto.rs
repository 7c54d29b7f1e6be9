//! Gross taxable income (bruto) calculation.

use rust_decimal::Decimal;

use crate::models::EarningLine;

/// Sums the taxable earning lines into gross income.
///
/// Non-taxable lines (reimbursements, benefits in kind marked
/// non-taxable in the catalog) contribute nothing.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::taxable_bruto;
/// use pph21_engine::models::EarningLine;
/// use rust_decimal::Decimal;
///
/// let earnings = vec![
///     EarningLine { amount: Decimal::from(9_000_000), taxable: true },
///     EarningLine { amount: Decimal::from(1_000_000), taxable: true },
///     EarningLine { amount: Decimal::from(750_000), taxable: false },
/// ];
/// assert_eq!(taxable_bruto(&earnings), Decimal::from(10_000_000));
/// ```
pub fn taxable_bruto(earnings: &[EarningLine]) -> Decimal {
    earnings
        .iter()
        .filter(|line| line.taxable)
        .map(|line| line.amount)
        .sum()
}
