//! CEBUANA / PERALINK: comma-delimited, share one rule set. Reference
//! `field[4]` (digits, first 4), amount `field[6]` as decimal, date
//! `field[2]` raw.
//!
//! The original source has two divergent amount indices (5 and 6)
//! across two code paths; `field[6]` — the main parser's path — is
//! treated as authoritative.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_decimal};
use crate::extractors::ChannelRules;

pub struct CebuanaPeralink;

impl ChannelRules for CebuanaPeralink {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(4).and_then(|f| first4_digits(f))
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
        let line = "X,X,2024-04-15,X,ABC1234,X,555.25";
        let fields = crate::splitter::split_fields(line, DelimiterKind::Comma);
        let rules = CebuanaPeralink;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "1234");
        assert_eq!(rules.extract_amount(&fields, line), "555.25".parse().ok());
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("2024-04-15"));
    }
}
