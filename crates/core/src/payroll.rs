//! Monthly payroll math.
//!
//! The formula is fixed: 10% allowances on top of base salary, 5%
//! deductions off gross. All amounts are 2-decimal fixed-point values;
//! rounding is half-away-from-zero, applied in exactly one place so every
//! stored amount follows the same policy.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Allowance rate applied to base salary.
const ALLOWANCE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 0.10

/// Deduction rate applied to base salary.
const DEDUCTION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2); // 0.05

/// Round a monetary amount to 2 decimal places, half away from zero.
fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A payroll period, the 7-character `YYYY-MM` key of the payroll table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(String);

impl YearMonth {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoreError::validation(format!("year_month must be in YYYY-MM format: {s}"));

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(err());
        }
        // str::parse would accept a leading '+', which must not become a
        // distinct period key for the same logical month.
        if !bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit) {
            return Err(err());
        }
        let month: u8 = s[5..].parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(YearMonth(s.to_string()))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> String {
        ym.0
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The computed amounts for one employee-month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayBreakdown {
    pub gross_pay: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub net_pay: Decimal,
}

/// Compute the monthly breakdown for a non-negative base salary.
///
/// Deterministic: the same salary always yields the same four amounts, so
/// recomputation for an existing employee-month is a pure overwrite.
pub fn compute(base_salary: Decimal) -> Result<PayBreakdown, CoreError> {
    if base_salary.is_sign_negative() {
        return Err(CoreError::validation(
            "Invalid base salary for calculation",
        ));
    }
    let allowances = round2(base_salary * ALLOWANCE_RATE);
    let deductions = round2(base_salary * DEDUCTION_RATE);
    let gross_pay = round2(base_salary + allowances);
    let net_pay = round2(gross_pay - deductions);
    Ok(PayBreakdown {
        gross_pay,
        allowances,
        deductions,
        net_pay,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::CoreError;

    // -----------------------------------------------------------------------
    // Breakdown
    // -----------------------------------------------------------------------

    #[test]
    fn breakdown_for_round_salary() {
        let pay = compute(dec!(1000.00)).unwrap();
        assert_eq!(pay.allowances, dec!(100.00));
        assert_eq!(pay.deductions, dec!(50.00));
        assert_eq!(pay.gross_pay, dec!(1100.00));
        assert_eq!(pay.net_pay, dec!(1050.00));
    }

    #[test]
    fn breakdown_for_zero_salary() {
        let pay = compute(dec!(0)).unwrap();
        assert_eq!(pay.gross_pay, dec!(0.00));
        assert_eq!(pay.net_pay, dec!(0.00));
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        // 1234.50 * 0.10 = 123.45 exactly; 123.45 * 0.05 path exercises the
        // half-cent case: 1234.50 * 0.05 = 61.725 -> 61.73.
        let pay = compute(dec!(1234.50)).unwrap();
        assert_eq!(pay.allowances, dec!(123.45));
        assert_eq!(pay.deductions, dec!(61.73));
        assert_eq!(pay.gross_pay, dec!(1357.95));
        assert_eq!(pay.net_pay, dec!(1296.22));
    }

    #[test]
    fn amounts_carry_two_decimals() {
        let pay = compute(dec!(333.33)).unwrap();
        assert_eq!(pay.allowances, dec!(33.33));
        assert_eq!(pay.deductions, dec!(16.67));
        assert_eq!(pay.gross_pay, dec!(366.66));
        assert_eq!(pay.net_pay, dec!(349.99));
    }

    #[test]
    fn negative_salary_is_rejected() {
        assert_matches!(compute(dec!(-1)), Err(CoreError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // YearMonth
    // -----------------------------------------------------------------------

    #[test]
    fn parses_valid_period() {
        let ym: YearMonth = "2026-08".parse().unwrap();
        assert_eq!(ym.as_str(), "2026-08");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_matches!("2026-8".parse::<YearMonth>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_missing_dash() {
        assert_matches!("2026/08".parse::<YearMonth>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert_matches!("2026-13".parse::<YearMonth>(), Err(CoreError::Validation(_)));
        assert_matches!("2026-00".parse::<YearMonth>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_parts() {
        assert_matches!("20XX-08".parse::<YearMonth>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_signed_digits() {
        // A leading '+' parses as an integer but would store a second key
        // for the same logical month.
        assert_matches!("2026-+1".parse::<YearMonth>(), Err(CoreError::Validation(_)));
        assert_matches!("+026-01".parse::<YearMonth>(), Err(CoreError::Validation(_)));
    }
}
