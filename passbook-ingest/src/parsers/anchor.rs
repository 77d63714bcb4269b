//! Anchor-line classification for two-date debit/credit statements.
//!
//! Expected extracted-text rows:
//!   BALANCE B/F                                                   9,500.00CR
//!   01/01/2024  01/01/2024  UPI Debit Paytm        500.00             10,000.00CR
//!   Ref: XYZ123
//!   02/01/2024  02/01/2024  SALARY ACME                  25,000.00    35,000.00CR
//!
//! Only this column layout is recognised. Statements with a single date
//! column or swapped debit/credit columns never match, so their section reads
//! as empty.

use regex::Regex;

use crate::error::Result;

/// Fields captured from an anchor line. The balance column is matched but
/// not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorFields<'a> {
    pub date: &'a str,
    pub value_date: &'a str,
    pub description: &'a str,
    pub debit: Option<&'a str>,
    pub credit: Option<&'a str>,
}

/// Compiled line shapes for one statement layout.
#[derive(Debug, Clone)]
pub struct AnchorPattern {
    anchor: Regex,
    date_prefix: Regex,
    page_break: Regex,
}

impl AnchorPattern {
    pub fn new() -> Result<Self> {
        // DATE  VALUE DATE  DESCRIPTION  DEBIT  CREDIT  BALANCE CR
        let anchor = Regex::new(concat!(
            r"(?P<date>[0-9]{2}/[0-9]{2}/[0-9]{4})\s+",
            r"(?P<value_date>[0-9]{2}/[0-9]{2}/[0-9]{4})\s+",
            r"(?P<desc>.*?)\s+",
            r"(?P<debit>[0-9,.]*)\s+",
            r"(?P<credit>[0-9,.]*)\s+",
            r"(?P<balance>[0-9,.]+\s*CR)"
        ))?;
        let date_prefix = Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}")?;
        let page_break = Regex::new(r"(?i)Page No:")?;

        Ok(Self {
            anchor,
            date_prefix,
            page_break,
        })
    }

    /// Decompose `line` if it is a transaction anchor.
    pub fn classify<'a>(&self, line: &'a str) -> Option<AnchorFields<'a>> {
        let caps = self.anchor.captures(line)?;
        let non_empty = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };

        Some(AnchorFields {
            date: caps.name("date")?.as_str(),
            value_date: caps.name("value_date")?.as_str(),
            description: caps.name("desc").map(|m| m.as_str()).unwrap_or(""),
            debit: non_empty("debit"),
            credit: non_empty("credit"),
        })
    }

    /// Non-anchor lines that must never reach a description: single
    /// characters, date-led fragments of unrecognised rows, page footers.
    pub fn is_noise(&self, line: &str) -> bool {
        let line = line.trim();
        line.chars().count() <= 1
            || self.date_prefix.is_match(line)
            || self.page_break.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_debit_row() {
        let pattern = AnchorPattern::new().unwrap();
        let fields = pattern
            .classify("01/01/2024 01/01/2024 UPI Debit Paytm 500.00  10000.00CR")
            .expect("anchor");
        assert_eq!(fields.date, "01/01/2024");
        assert_eq!(fields.value_date, "01/01/2024");
        assert_eq!(fields.description, "UPI Debit Paytm");
        assert_eq!(fields.debit, Some("500.00"));
        assert_eq!(fields.credit, None);
    }

    #[test]
    fn test_classify_credit_row() {
        let pattern = AnchorPattern::new().unwrap();
        let fields = pattern
            .classify("02/01/2024 02/01/2024 SALARY ACME  25,000.00 35,000.00 CR")
            .expect("anchor");
        assert_eq!(fields.description, "SALARY ACME");
        assert_eq!(fields.debit, None);
        assert_eq!(fields.credit, Some("25,000.00"));
    }

    #[test]
    fn test_missing_cr_is_not_anchor() {
        let pattern = AnchorPattern::new().unwrap();
        assert!(pattern
            .classify("01/01/2024 01/01/2024 UPI Debit Paytm 500.00  10000.00")
            .is_none());
        assert!(pattern
            .classify("01/01/2024 UPI Debit Paytm 500.00  10000.00CR")
            .is_none());
        assert!(pattern.classify("Ref: XYZ123").is_none());
    }

    #[test]
    fn test_noise_lines() {
        let pattern = AnchorPattern::new().unwrap();
        assert!(pattern.is_noise(""));
        assert!(pattern.is_noise(" x "));
        assert!(pattern.is_noise("03/01/2024 partial row"));
        assert!(pattern.is_noise("PAGE NO: 2 of 7"));
        assert!(pattern.is_noise("Statement page no: 3"));
        assert!(!pattern.is_noise("Ref: XYZ123"));
        assert!(!pattern.is_noise("ok"));
    }
}
