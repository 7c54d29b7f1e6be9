//! Rounding helpers mandated by tax law.
//!
//! Two rules apply everywhere in the engine: monetary outputs are rounded
//! to 2 decimal places (midpoint away from zero, matching conventional
//! currency rounding), and PKP is floored to the nearest 1,000 rupiah
//! before bracket evaluation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, midpoint away from zero.
///
/// Trailing zeros are stripped so that equal amounts always serialize
/// identically regardless of how they were computed.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let x = Decimal::from_str("240000.005").unwrap();
/// assert_eq!(round_currency(x), Decimal::from_str("240000.01").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Floors an amount to the nearest 1,000 rupiah.
///
/// Statutory rounding for PKP: the result is a multiple of 1,000 and
/// never exceeds the input.
///
/// # Examples
///
/// ```
/// use pph21_engine::calculation::floor_to_thousand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     floor_to_thousand(Decimal::from(57_600_999)),
///     Decimal::from(57_600_000)
/// );
/// ```
pub fn floor_to_thousand(amount: Decimal) -> Decimal {
    let thousand = Decimal::from(1_000u32);
    ((amount / thousand).floor() * thousand).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
    }

    #[test]
    fn test_round_currency_leaves_integers_alone() {
        assert_eq!(round_currency(dec("240000")), dec("240000"));
    }

    #[test]
    fn test_floor_to_thousand_truncates_down() {
        assert_eq!(floor_to_thousand(dec("57600999")), dec("57600000"));
        assert_eq!(floor_to_thousand(dec("1999.99")), dec("1000"));
        assert_eq!(floor_to_thousand(dec("999.99")), dec("0"));
    }

    #[test]
    fn test_floor_to_thousand_is_identity_on_multiples() {
        assert_eq!(floor_to_thousand(dec("57600000")), dec("57600000"));
        assert_eq!(floor_to_thousand(dec("0")), dec("0"));
    }

    #[test]
    fn test_floor_to_thousand_never_exceeds_input() {
        for s in ["1", "500", "1000", "1500", "123456789.12"] {
            let x = dec(s);
            assert!(floor_to_thousand(x) <= x);
        }
    }
}
