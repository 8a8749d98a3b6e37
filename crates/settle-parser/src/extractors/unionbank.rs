//! UNIONBANK: regex-driven, not delimiter-split. A line only carries a
//! fresh reference when it is at least [`POSITIONAL_LENGTH_THRESHOLD`]
//! characters long; shorter lines are continuation/orphan lines and
//! are handled by the orchestrator, not here. Reference:
//! `\s{10,}(\d{14})\s+`, falling back to `\s{10,}(\d{4,})\s+`, then to
//! the 5th whitespace-split field, and finally to the `NOREF` sentinel
//! if none of those yield a key — this rule never skips a line. Amount:
//! `(\d{12})(?:DB|LC)\d*\s*$` in cents. Date: `UB\d+\s+(\d{6})` as
//! `MM/DD/YY`.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{first4_digits, parse_cents, slash_date};
use crate::extractors::ChannelRules;

/// Lines shorter than this are continuations of the previous group's
/// reference, never the start of a new one.
pub const POSITIONAL_LENGTH_THRESHOLD: usize = 200;

fn primary_ref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{10,}(\d{14})\s+").unwrap())
}

fn fallback_ref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{10,}(\d{4,})\s+").unwrap())
}

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{12})(?:DB|LC)\d*\s*$").unwrap())
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"UB\d+\s+(\d{6})").unwrap())
}

pub struct Unionbank;

impl ChannelRules for Unionbank {
    fn extract_reference(&self, fields: &[String], raw: &str) -> Option<ReferenceKey> {
        if let Some(caps) = primary_ref_regex().captures(raw) {
            return first4_digits(&caps[1]);
        }
        if let Some(caps) = fallback_ref_regex().captures(raw) {
            return first4_digits(&caps[1]);
        }
        if let Some(key) = fields.get(4).and_then(|f| first4_digits(f)) {
            return Some(key);
        }
        Some(ReferenceKey::noref())
    }

    fn extract_amount(&self, _fields: &[String], raw: &str) -> Option<Decimal> {
        let caps = amount_regex().captures(raw)?;
        parse_cents(&caps[1])
    }

    fn extract_date(&self, _fields: &[String], raw: &str) -> Option<String> {
        let caps = date_regex().captures(raw)?;
        slash_date(&caps[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::DelimiterKind;

    #[test]
    fn extracts_via_primary_reference_regex() {
        let raw = "UB1          12345678901234          UB1    240115   000000001234DB".to_string();
        let fields = crate::splitter::split_fields(&raw, DelimiterKind::Whitespace);
        let rules = Unionbank;
        assert_eq!(
            rules.extract_reference(&fields, &raw).unwrap().as_str(),
            "1234"
        );
        assert_eq!(rules.extract_amount(&fields, &raw), Some("12.34".parse().unwrap()));
        assert_eq!(rules.extract_date(&fields, &raw).as_deref(), Some("24/01/15"));
    }

    #[test]
    fn threshold_is_two_hundred() {
        assert_eq!(POSITIONAL_LENGTH_THRESHOLD, 200);
    }

    #[test]
    fn reference_falls_back_to_noref_rather_than_skipping() {
        let raw = format!("{:<200}", "no reference-shaped digits anywhere in this line");
        let fields = crate::splitter::split_fields(&raw, DelimiterKind::Whitespace);
        let rules = Unionbank;
        assert_eq!(rules.extract_reference(&fields, &raw).unwrap().as_str(), "NOREF");
    }
}
