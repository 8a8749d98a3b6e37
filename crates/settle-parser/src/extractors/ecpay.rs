//! ECPAY: comma-delimited. Reference `field[5]` (digits, first 4),
//! amount `field[6]` as decimal, date `field[2]` raw.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_decimal};
use crate::extractors::ChannelRules;

pub struct Ecpay;

impl ChannelRules for Ecpay {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(5).and_then(|f| first4_digits(f))
    }

    fn extract_amount(&self, fields: &[String], _raw: &str) -> Option<Decimal> {
        fields.get(6).and_then(|f| parse_decimal(f))
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        fields.get(2).filter(|f| !f.is_empty()).map(|f| f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::DelimiterKind;

    #[test]
    fn extracts_reference_amount_and_date() {
        let line = "X,X,2024-03-01,X,X,9876543,420.00";
        let fields = crate::splitter::split_fields(line, DelimiterKind::Comma);
        let rules = Ecpay;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "9876");
        assert_eq!(rules.extract_amount(&fields, line), "420.00".parse().ok());
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("2024-03-01"));
    }
}
