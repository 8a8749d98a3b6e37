//! BANCNET: positional, anchored on asterisk markers. Reference is
//! the 4 characters immediately before the first `*`. Amount is the 8
//! characters starting 21 past the last `*`, in cents, and must fall
//! in `(0, 1_000_000)`. Date is the 6 characters ending at byte 20 of
//! the line — i.e. `line[14..20]` — read as `YYMMDD`; the year is
//! always rendered as `2025` — an upstream quirk kept as-is rather
//! than computed, since the source files predate the aggregator and
//! never carry a four-digit year themselves.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use settle_core::ReferenceKey;

use super::parse_cents;
use crate::extractors::ChannelRules;

pub struct Bancnet;

impl ChannelRules for Bancnet {
    fn extract_reference(&self, _fields: &[String], raw: &str) -> Option<ReferenceKey> {
        let asterisk_pos = raw.find('*')?;
        if asterisk_pos < 14 {
            return None;
        }
        let slice = raw.get(asterisk_pos - 14..asterisk_pos - 10)?;
        ReferenceKey::from_leading_chars(slice)
    }

    fn extract_amount(&self, _fields: &[String], raw: &str) -> Option<Decimal> {
        let last_asterisk = raw.rfind('*')?;
        let start = last_asterisk + 21;
        let slice = raw.get(start..start + 8)?;
        let amount = parse_cents(slice)?;
        if amount > Decimal::ZERO && amount < dec!(1_000_000) {
            Some(amount)
        } else {
            None
        }
    }

    fn extract_date(&self, _fields: &[String], raw: &str) -> Option<String> {
        let last6 = raw.get(14..20)?;
        if !last6.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mm = &last6[2..4];
        let dd = &last6[4..6];
        Some(format!("{dd}/{mm}/2025"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference digits sit at `[10..14]`, the date's 6 digits at
    /// `[14..20]`, the first (and only) `*` at byte 24 so the reference
    /// rule's `asterisk_pos - 14..asterisk_pos - 10` lands on `[10..14]`,
    /// and the amount's cents field at `[45..53]` (21 bytes past the
    /// asterisk).
    fn sample_line() -> String {
        format!(
            "{}{}{}{}{}{}{}",
            "A".repeat(10),
            "1234",
            "240115",
            "Y".repeat(4),
            "*",
            "Z".repeat(20),
            "00010000",
        )
    }

    #[test]
    fn extracts_reference_amount_and_date() {
        let raw = sample_line();
        let rules = Bancnet;
        assert_eq!(rules.extract_reference(&[], &raw).unwrap().as_str(), "1234");
        assert_eq!(rules.extract_amount(&[], &raw), Some("100.00".parse().unwrap()));
        assert_eq!(rules.extract_date(&[], &raw).as_deref(), Some("15/01/2025"));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let raw = sample_line().replacen("00010000", "00000000", 1);
        assert_eq!(Bancnet.extract_amount(&[], &raw), None);
    }

    #[test]
    fn date_is_anchored_to_a_fixed_offset_not_the_line_end() {
        let raw = format!("{}{}", sample_line(), "9".repeat(30));
        assert_eq!(Bancnet.extract_date(&[], &raw).as_deref(), Some("15/01/2025"));
    }
}
