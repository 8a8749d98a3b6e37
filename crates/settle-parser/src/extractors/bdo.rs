//! BDO: pipe-delimited. Reference `field[5]` (digits, first 4),
//! amount `field[9]` as decimal, date `field[2]` raw.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_decimal};
use crate::extractors::ChannelRules;

pub struct Bdo;

impl ChannelRules for Bdo {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(5).and_then(|f| first4_digits(f))
    }

    fn extract_amount(&self, fields: &[String], _raw: &str) -> Option<Decimal> {
        fields.get(9).and_then(|f| parse_decimal(f))
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        fields.get(2).map(|f| f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::DelimiterKind;

    #[test]
    fn extracts_reference_amount_and_date_from_a_sample_line() {
        let line = "NAME|X|2024-01-05|X|X|1234567890|X|X|X|100.50";
        let fields = crate::splitter::split_fields(line, DelimiterKind::Pipe);
        let rules = Bdo;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "1234");
        assert_eq!(rules.extract_amount(&fields, line), "100.50".parse().ok());
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("2024-01-05"));
    }
}
