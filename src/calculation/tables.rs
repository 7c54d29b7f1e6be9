//! Statutory tables: PTKP thresholds and Pasal 17 progressive brackets.
//!
//! Values are the 2024 Indonesian figures, hard-coded by design. The
//! engine documents the concrete statute rather than abstracting it into
//! a configurable rule set.

use rust_decimal::Decimal;

use crate::models::PtkpCode;

use super::rounding::floor_to_thousand;

/// One Pasal 17 progressive bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Inclusive lower bound of the bracket.
    pub lower: Decimal,
    /// Exclusive upper bound; `None` for the open-ended top bracket.
    pub upper: Option<Decimal>,
    /// Marginal rate applied within the bracket.
    pub rate: Decimal,
}

/// Returns the yearly PTKP exemption for a status code.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::ptkp_yearly;
/// use pph21_engine::models::PtkpCode;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ptkp_yearly(PtkpCode::Tk0), Decimal::from(54_000_000u64));
/// assert_eq!(ptkp_yearly(PtkpCode::K3), Decimal::from(72_000_000u64));
/// ```
pub fn ptkp_yearly(code: PtkpCode) -> Decimal {
    let value: u64 = match code {
        PtkpCode::Tk0 => 54_000_000,
        PtkpCode::Tk1 => 58_500_000,
        PtkpCode::Tk2 => 63_000_000,
        PtkpCode::Tk3 => 67_500_000,
        PtkpCode::K0 => 58_500_000,
        PtkpCode::K1 => 63_000_000,
        PtkpCode::K2 => 67_500_000,
        PtkpCode::K3 => 72_000_000,
    };
    Decimal::from(value)
}

/// Returns the Pasal 17 brackets in ascending order.
pub fn tax_brackets() -> [TaxBracket; 5] {
    [
        TaxBracket {
            lower: Decimal::ZERO,
            upper: Some(Decimal::from(60_000_000u64)),
            rate: Decimal::new(5, 2),
        },
        TaxBracket {
            lower: Decimal::from(60_000_000u64),
            upper: Some(Decimal::from(250_000_000u64)),
            rate: Decimal::new(15, 2),
        },
        TaxBracket {
            lower: Decimal::from(250_000_000u64),
            upper: Some(Decimal::from(500_000_000u64)),
            rate: Decimal::new(25, 2),
        },
        TaxBracket {
            lower: Decimal::from(500_000_000u64),
            upper: Some(Decimal::from(5_000_000_000u64)),
            rate: Decimal::new(30, 2),
        },
        TaxBracket {
            lower: Decimal::from(5_000_000_000u64),
            upper: None,
            rate: Decimal::new(35, 2),
        },
    ]
}

/// Computes progressive Pasal 17 tax on a PKP amount.
///
/// Walks the brackets in ascending order, taxing
/// `min(remaining, bracket width)` at each bracket's rate until the
/// amount is consumed. Returns zero for a PKP of zero or less.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::progressive_tax;
/// use rust_decimal::Decimal;
///
/// // 57,600,000 sits entirely in the 5% bracket.
/// assert_eq!(
///     progressive_tax(Decimal::from(57_600_000u64)),
///     Decimal::from(2_880_000u64)
/// );
/// assert_eq!(progressive_tax(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn progressive_tax(pkp: Decimal) -> Decimal {
    let mut total = Decimal::ZERO;
    let mut remaining = pkp;

    for bracket in tax_brackets() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let slice = match bracket.upper {
            Some(upper) => remaining.min(upper - bracket.lower),
            None => remaining,
        };
        total += slice * bracket.rate;
        remaining -= slice;
    }

    total.max(Decimal::ZERO)
}

/// Returns the surcharge multiplier for employees without an NPWP.
///
/// The multiplier is 1.2 (20% higher withholding).
pub fn npwp_penalty_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// Applies the no-NPWP surcharge to an annual tax amount.
pub fn apply_npwp_penalty(tax: Decimal, has_npwp: bool) -> Decimal {
    if has_npwp {
        tax
    } else {
        tax * npwp_penalty_multiplier()
    }
}

/// Derives PKP (taxable income) from a neto basis.
///
/// Subtracts the yearly PTKP exemption, clamps at zero, floors to the
/// statutory 1,000 rupiah, and never lets the result exceed the basis.
/// The basis is the annualized neto for months 1-11 and the cumulative
/// yearly neto for December and annual mode.
pub fn taxable_income(neto_basis: Decimal, ptkp_yearly: Decimal) -> Decimal {
    let pkp = (neto_basis - ptkp_yearly).max(Decimal::ZERO);
    floor_to_thousand(pkp).min(neto_basis).max(Decimal::ZERO)
}
