//! Boilerplate line patterns for invoice text.
//!
//! Each pattern is searched for (not fully matched) in a lowercased,
//! trimmed line. Any hit drops the whole line.

use lazy_static::lazy_static;
use regex::RegexSet;

/// Invoice number label: "invoice no", "invoice number", "invoice #".
pub const INVOICE_NUMBER: &str = r"invoice\s*(no|number|#)";

/// Any occurrence of "date", including inside words such as "update".
pub const DATE_WORD: &str = r"date";

pub const TAX_ID: &str = r"tax\s*id";

pub const IBAN: &str = r"iban";

pub const SWIFT: &str = r"swift";

pub const BILL_TO: &str = r"bill\s*to";

pub const SHIP_TO: &str = r"ship\s*to";

pub const PAYMENT_TERMS: &str = r"payment\s*terms";

/// Subsumed by `DATE_WORD`; listed so the set reads as the full field list.
pub const DUE_DATE: &str = r"due\s*date";

pub const CUSTOMER_NUMBER: &str = r"customer\s*(no|id)";

pub const ORDER_NUMBER: &str = r"order\s*(no|number)";

/// ISO date token `YYYY-MM-DD` anywhere in the line.
pub const ISO_DATE: &str = r"\d{4}-\d{2}-\d{2}";

pub const BLANK_LINE: &str = r"^\s*$";

/// The built-in boilerplate set.
pub const BOILERPLATE_PATTERNS: &[&str] = &[
    INVOICE_NUMBER,
    DATE_WORD,
    TAX_ID,
    IBAN,
    SWIFT,
    BILL_TO,
    SHIP_TO,
    PAYMENT_TERMS,
    DUE_DATE,
    CUSTOMER_NUMBER,
    ORDER_NUMBER,
    ISO_DATE,
    BLANK_LINE,
];

lazy_static! {
    pub static ref BOILERPLATE: RegexSet = RegexSet::new(BOILERPLATE_PATTERNS).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_field_label() {
        for line in [
            "invoice no: 12345",
            "invoice number 88",
            "invoice #42",
            "invoice#42",
            "tax id: 99-1234567",
            "taxid 1",
            "iban: de89 3704 0044 0532 0130 00",
            "swift/bic: cobadeffxxx",
            "bill to: jane doe",
            "ship to: warehouse 4",
            "payment terms: net 30",
            "due date: march 1",
            "customer no. 7781",
            "customer id a-12",
            "order no 5",
            "order number 9912",
            "delivered 2024-03-15",
            "   ",
        ] {
            assert!(BOILERPLATE.is_match(line), "expected boilerplate: {line:?}");
        }
    }

    #[test]
    fn test_content_lines_pass() {
        for line in ["widget repair service", "2 x printer toner", "thank you for your business"] {
            assert!(!BOILERPLATE.is_match(line), "unexpected boilerplate: {line:?}");
        }
    }

    #[test]
    fn test_date_matches_inside_words() {
        assert!(BOILERPLATE.is_match("firmware update"));
        assert!(BOILERPLATE.is_match("monthly mandate fee"));
    }

    #[test]
    fn test_iso_date_needs_full_shape() {
        assert!(!BOILERPLATE.is_match("part 2024-3-15"));
        assert!(!BOILERPLATE.is_match("ref 24-03-15"));
    }

    #[test]
    fn test_labels_are_lowercase_only() {
        // Lines are lowercased before matching.
        assert!(!BOILERPLATE.is_match("INVOICE NO 1"));
    }
}
