//! SM: positional, not delimiter-split. Reference is the raw slice
//! `line[18..31]`, first 4 *characters* — no digit filter, matching
//! how METROBANK/ROB/BANCNET take their leading characters. Amount is
//! the contiguous run of digits immediately preceding the first
//! `"CS"` marker, scanning backward and stopping at the first
//! non-digit (or after 10 characters), treated as cents. Date is
//! `line[3..11]` as `MMDDYYYY`.

use rust_decimal::Decimal;
use settle_core::ReferenceKey;

use super::{parse_cents, slash_date};
use crate::extractors::ChannelRules;

pub struct Sm;

impl ChannelRules for Sm {
    fn extract_reference(&self, _fields: &[String], raw: &str) -> Option<ReferenceKey> {
        let slice = raw.get(18..31)?;
        ReferenceKey::from_leading_chars(slice)
    }

    fn extract_amount(&self, _fields: &[String], raw: &str) -> Option<Decimal> {
        let marker = raw.find("CS")?;
        let prefix = raw.get(..marker)?;
        let mut digits: Vec<char> = Vec::new();
        for c in prefix.chars().rev() {
            if digits.len() >= 10 {
                break;
            }
            if c.is_ascii_digit() {
                digits.push(c);
            } else {
                break;
            }
        }
        if digits.is_empty() {
            return None;
        }
        digits.reverse();
        parse_cents(&digits.into_iter().collect::<String>())
    }

    fn extract_date(&self, _fields: &[String], raw: &str) -> Option<String> {
        let slice = raw.get(3..11)?;
        slash_date(slice)
    }
}
