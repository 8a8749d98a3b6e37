//! CHINABANK: whitespace-delimited. Reference `field[3]` (digits,
//! first 4), amount `field[2]` as decimal, date `field[0]` as
//! `MMDDYYYY` → `MM/DD/YYYY`.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_decimal, slash_date};
use crate::extractors::ChannelRules;

pub struct Chinabank;

impl ChannelRules for Chinabank {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(3).and_then(|f| first4_digits(f))
    }

    fn extract_amount(&self, fields: &[String], _raw: &str) -> Option<Decimal> {
        fields.get(2).and_then(|f| parse_decimal(f))
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        fields.first().filter(|f| !f.is_empty()).and_then(|f| slash_date(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::DelimiterKind;

    #[test]
    fn extracts_reference_amount_and_date() {
        let line = "01052024   X   75.00   4321   X";
        let fields = crate::splitter::split_fields(line, DelimiterKind::Whitespace);
        let rules = Chinabank;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "4321");
        assert_eq!(rules.extract_amount(&fields, line), "75.00".parse().ok());
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("01/05/2024"));
    }
}
