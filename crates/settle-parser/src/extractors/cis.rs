//! CIS: caret-delimited. Reference `field[1]` (digits, first 4),
//! amount `field[2]` as decimal, date `field[0]` raw.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_decimal};
use crate::extractors::ChannelRules;

pub struct Cis;

impl ChannelRules for Cis {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(1).and_then(|f| first4_digits(f))
    }

    fn extract_amount(&self, fields: &[String], _raw: &str) -> Option<Decimal> {
        fields.get(2).and_then(|f| parse_decimal(f))
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        fields.first().map(|f| f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_reference_amount_and_date() {
        let line = "2024-01-05^AB1234567^100.50^X";
        let fields = crate::splitter::split_fields(line, settle_core::DelimiterKind::Caret);
        let rules = Cis;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "1234");
        assert_eq!(rules.extract_amount(&fields, line), "100.50".parse().ok());
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn short_line_has_no_reference() {
        let fields = crate::splitter::split_fields("onlyfield", settle_core::DelimiterKind::Caret);
        assert!(Cis.extract_reference(&fields, "onlyfield").is_none());
    }
}
