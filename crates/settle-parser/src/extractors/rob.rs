//! ROBINSONS BANK (ROB): split first on `|`, then on `^` (mixed
//! delimiter). Reference `field[4]`, first 4 *raw* characters, no
//! digit filter. Amount `field[6]`, already a major-unit decimal —
//! unlike every cents-encoded channel, this one needs no scaling.
//! Date `field[0]` raw.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::parse_decimal;
use crate::extractors::ChannelRules;

pub struct Rob;

impl ChannelRules for Rob {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(4).and_then(|f| ReferenceKey::from_leading_chars(f))
    }

    fn extract_amount(&self, fields: &[String], _raw: &str) -> Option<Decimal> {
        fields.get(6).and_then(|f| parse_decimal(f))
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        fields.first().filter(|f| !f.is_empty()).map(|f| f.to_string())
    }
}
