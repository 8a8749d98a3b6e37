//! METROBANK: whitespace-delimited. Reference `field[1]`, first 4
//! *characters* with no digit filter — preserved as-is, unlike every
//! other channel. Amount via `(\d{11,12})[A-Z]` over the whole line,
//! cents. Date via `(\d{6})\d*$` over the last whitespace field,
//! `DD/MM/YY`.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{parse_cents, slash_date};
use crate::extractors::ChannelRules;

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{11,12})[A-Z]").unwrap())
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{6})\d*$").unwrap())
}

pub struct Metrobank;

impl ChannelRules for Metrobank {
    fn extract_reference(&self, fields: &[String], _raw: &str) -> Option<ReferenceKey> {
        fields.get(1).and_then(|f| ReferenceKey::from_leading_chars(f))
    }

    fn extract_amount(&self, _fields: &[String], raw: &str) -> Option<Decimal> {
        let caps = amount_regex().captures(raw)?;
        parse_cents(&caps[1])
    }

    fn extract_date(&self, fields: &[String], _raw: &str) -> Option<String> {
        let last = fields.last()?;
        let caps = date_regex().captures(last)?;
        slash_date(&caps[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::DelimiterKind;

    #[test]
    fn extracts_reference_amount_and_date_from_a_sample_line() {
        let line = "HDR 12345678 X 00000001005A ... 010524";
        let fields = crate::splitter::split_fields(line, DelimiterKind::Whitespace);
        let rules = Metrobank;
        assert_eq!(rules.extract_reference(&fields, line).unwrap().as_str(), "1234");
        assert_eq!(rules.extract_amount(&fields, line), Some("10.05".parse().unwrap()));
        assert_eq!(rules.extract_date(&fields, line).as_deref(), Some("01/05/24"));
    }

    #[test]
    fn reference_does_not_filter_to_digits() {
        let fields = vec!["HDR".to_string(), "AB12XYZ".to_string()];
        assert_eq!(
            Metrobank.extract_reference(&fields, "HDR AB12XYZ").unwrap().as_str(),
            "AB12"
        );
    }
}
