//! PNB: caret-delimited. Reference `field[4]` (digits, first 4),
//! amount `field[6]` as decimal, date `field[1]` raw.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_decimal};
use crate::extractors::ChannelRules;

pub struct Pnb;

impl ChannelRules for Pnb {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(4).and_then(|f| first4_digits(f))
    }

    fn extract_amount(&self, fields: &[String], _raw: &str) -> Option<Decimal> {
        fields.get(6).and_then(|f| parse_decimal(f))
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        fields.get(1).map(|f| f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::DelimiterKind;

    #[test]
    fn extracts_reference_amount_and_date() {
        let line = "X^2024-02-10^X^X^AB1234^X^250.75";
        let fields = crate::splitter::split_fields(line, DelimiterKind::Caret);
        let rules = Pnb;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "1234");
        assert_eq!(rules.extract_amount(&fields, line), "250.75".parse().ok());
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("2024-02-10"));
    }
}
