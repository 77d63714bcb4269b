//! Deterministic keyword categorizer.
//!
//! An ordered rule table is evaluated against the lower-cased description and
//! the first matching rule wins. Nothing here can fail: empty or missing
//! descriptions fall through to the direction-specific "other" bucket.

use crate::transaction::Category;

/// A single keyword test against a lower-cased description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Substring anywhere in the description
    Contains(&'static str),
    /// Two words separated by optional whitespace, e.g. "credit rfnd" / "creditrfnd"
    Phrase(&'static str, &'static str),
}

impl Keyword {
    pub fn matches(&self, haystack: &str) -> bool {
        match *self {
            Keyword::Contains(needle) => haystack.contains(needle),
            Keyword::Phrase(head, tail) => haystack.match_indices(head).any(|(idx, _)| {
                haystack[idx + head.len()..]
                    .trim_start()
                    .starts_with(tail)
            }),
        }
    }
}

/// Keyword group mapped to a category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [Keyword],
}

impl CategoryRule {
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| k.matches(haystack))
    }
}

use Keyword::{Contains, Phrase};

/// Rule order is significant: "salary" beats "netflix".
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Salary,
        keywords: &[Contains("salary"), Contains("payroll")],
    },
    CategoryRule {
        category: Category::Investment,
        keywords: &[
            Contains("interest"),
            Phrase("credit", "rfnd"),
            Contains("refund"),
        ],
    },
    CategoryRule {
        category: Category::FoodAndDining,
        keywords: &[
            Contains("restaurant"),
            Contains("cafe"),
            Contains("food"),
            Contains("dhaba"),
            Contains("milk"),
            Contains("grocery"),
            Contains("supermarket"),
        ],
    },
    CategoryRule {
        category: Category::Transportation,
        keywords: &[
            Contains("fuel"),
            Contains("gas"),
            Contains("transport"),
            Contains("uber"),
            Contains("ola"),
        ],
    },
    CategoryRule {
        category: Category::Shopping,
        keywords: &[
            Contains("amazon"),
            Contains("flipkart"),
            Contains("walmart"),
            Contains("shopping"),
            Contains("paytm"),
            Contains("upi"),
        ],
    },
    CategoryRule {
        category: Category::Entertainment,
        keywords: &[Contains("netflix"), Contains("spotify"), Contains("movie")],
    },
    CategoryRule {
        category: Category::BillsAndUtilities,
        keywords: &[
            Contains("electric"),
            Contains("utility"),
            Contains("internet"),
            Contains("wifi"),
            Contains("recharge"),
            Contains("bill"),
        ],
    },
    CategoryRule {
        category: Category::Healthcare,
        keywords: &[Contains("medical"), Contains("pharmacy"), Contains("doctor")],
    },
    CategoryRule {
        category: Category::Travel,
        keywords: &[Contains("hotel"), Contains("flight"), Contains("travel")],
    },
];

/// Categorize a transaction description.
pub fn categorize(description: Option<&str>, is_expense: bool) -> Category {
    let Some(description) = description.filter(|d| !d.trim().is_empty()) else {
        return Category::other(is_expense);
    };

    let desc = description.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&desc))
        .map(|rule| rule.category)
        .unwrap_or_else(|| Category::other(is_expense))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(
            categorize(Some("SALARY credit + NETFLIX"), true),
            Category::Salary
        );
        assert_eq!(
            categorize(Some("Interest on UPI balance"), false),
            Category::Investment
        );
    }

    #[test]
    fn test_keyword_groups() {
        let cases = [
            ("ACME PAYROLL JAN", Category::Salary),
            ("CREDIT RFND 8812", Category::Investment),
            ("creditrfnd", Category::Investment),
            ("Sharma Dhaba", Category::FoodAndDining),
            ("Big Bazaar Supermarket", Category::FoodAndDining),
            ("HP Fuel Station", Category::Transportation),
            ("UBER TRIP", Category::Transportation),
            ("Flipkart order", Category::Shopping),
            ("AMAZON PAY", Category::Shopping),
            ("Spotify premium", Category::Entertainment),
            ("Airtel Recharge", Category::BillsAndUtilities),
            ("BESCOM electricity", Category::BillsAndUtilities),
            ("Apollo Pharmacy", Category::Healthcare),
            ("Taj Hotel", Category::Travel),
        ];
        for (desc, expected) in cases {
            assert_eq!(categorize(Some(desc), true), expected, "{desc}");
        }
    }

    #[test]
    fn test_phrase_allows_whitespace() {
        let phrase = Phrase("credit", "rfnd");
        assert!(phrase.matches("credit   rfnd"));
        assert!(phrase.matches("neft credit credit rfnd"));
        assert!(!phrase.matches("credit card rfnd"));
    }

    #[test]
    fn test_fallback_by_direction() {
        assert_eq!(categorize(Some("NEFT XYZ"), true), Category::OtherExpenses);
        assert_eq!(categorize(Some("NEFT XYZ"), false), Category::OtherIncome);
        assert_eq!(categorize(None, true), Category::OtherExpenses);
        assert_eq!(categorize(Some("   "), false), Category::OtherIncome);
    }

    #[test]
    fn test_deterministic() {
        let a = categorize(Some("Cafe Coffee Day"), true);
        let b = categorize(Some("Cafe Coffee Day"), true);
        assert_eq!(a, b);
        assert_eq!(a, Category::FoodAndDining);
    }
}
