//! Safe field parsing for anchor-line dates and amounts.
//!
//! Neither function fails loudly: a malformed date is `None` and a malformed
//! amount is zero, which the accumulator treats as "skip this candidate".

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

const CURRENCY_SYMBOLS: &[char] = &['$', '₹', '€', '£', '¥'];

/// Parse a `dd/mm/yyyy` date. Anything after the first whitespace is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let token = raw.split_whitespace().next()?;

    let parts: Vec<&str> = token.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    if !all_digits(day) || !all_digits(month) || !all_digits(year) || year.len() != 4 {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a money field such as `"1,234.50"`, `"$12"` or `"10000.00 CR"`.
///
/// Missing or unparseable input yields zero. The whole cleaned token has to
/// be a decimal: a malformed run like `"1.234.50"`, or more digits than
/// `Decimal` holds, is zero rather than its leading numeric prefix.
pub fn parse_amount(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();

    let cleaned = strip_cr_marker(cleaned.trim()).trim();
    Decimal::from_str(cleaned).unwrap_or(Decimal::ZERO)
}

fn strip_cr_marker(s: &str) -> &str {
    match s.len().checked_sub(2).and_then(|at| s.get(at..).map(|tail| (at, tail))) {
        Some((at, tail)) if tail.eq_ignore_ascii_case("cr") => &s[..at],
        _ => s,
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("05/01/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_date("29/02/2024 extra noise"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            parse_date("05/01/2024").map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2024-01-05".to_string())
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("31/02/2024"), None);
        assert_eq!(parse_date("29/02/2023"), None);
        assert_eq!(parse_date("01/13/2024"), None);
        assert_eq!(parse_date("01/2024"), None);
        assert_eq!(parse_date("01/01/2024/5"), None);
        assert_eq!(parse_date("aa/bb/cccc"), None);
        assert_eq!(parse_date("01/01/24"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some("1,234.50 CR")), dec("1234.50"));
        assert_eq!(parse_amount(Some("10000.00cr")), dec("10000.00"));
        assert_eq!(parse_amount(Some("$12")), dec("12"));
        assert_eq!(parse_amount(Some("₹ 2,500.75")), dec("2500.75"));
        assert_eq!(parse_amount(Some("500.00")), dec("500.00"));
    }

    #[test]
    fn test_parse_amount_degrades_to_zero() {
        assert_eq!(parse_amount(None), Decimal::ZERO);
        assert_eq!(parse_amount(Some("abc")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("CR")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("1.2.3")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("1.234.50")), Decimal::ZERO);
        assert_eq!(parse_amount(Some(&"9".repeat(30))), Decimal::ZERO);
    }
}
