//! Field extractors: per-channel amount, reference, and date
//! extraction primitives.
//!
//! Each channel implements [`ChannelRules`], a small capability set of
//! three methods. The parser never branches on [`ChannelId`]
//! itself for extraction — it asks [`rules_for`] for the right
//! implementation and calls through the trait. New channels are added
//! by adding a module and a registry row, not by editing the parser.

mod bancnet;
mod bdo;
mod cebuana_peralink;
mod chinabank;
mod cis;
mod ecpay;
mod metrobank;
mod pnb;
mod rob;
mod sm;
mod unionbank;

use rust_decimal::Decimal;
use settle_core::{ChannelId, ReferenceKey};

/// The per-channel extraction capability set — a table-driven design
/// in place of a per-channel if/else branch.
pub trait ChannelRules: Send + Sync {
    /// Pull the 4-digit grouping key out of a split line (or, for
    /// `Positional` channels, the raw line itself).
    fn extract_reference(&self, fields: &[String], raw: &str) -> Option<ReferenceKey>;

    /// Pull the monetary amount, already normalised to major units.
    fn extract_amount(&self, fields: &[String], raw: &str) -> Option<Decimal>;

    /// Pull the channel-native date string, unparsed beyond
    /// reformatting into the channel's documented output shape.
    fn extract_date(&self, fields: &[String], raw: &str) -> Option<String>;
}

/// Look up the extraction rules for a channel.
pub fn rules_for(id: ChannelId) -> &'static dyn ChannelRules {
    match id {
        ChannelId::Bdo => &bdo::Bdo,
        ChannelId::Cebuana | ChannelId::Peralink => &cebuana_peralink::CebuanaPeralink,
        ChannelId::Chinabank => &chinabank::Chinabank,
        ChannelId::Cis => &cis::Cis,
        ChannelId::Ecpay => &ecpay::Ecpay,
        ChannelId::Metrobank => &metrobank::Metrobank,
        ChannelId::Pnb => &pnb::Pnb,
        ChannelId::Unionbank => &unionbank::Unionbank,
        ChannelId::Sm => &sm::Sm,
        ChannelId::Bancnet => &bancnet::Bancnet,
        ChannelId::Rob => &rob::Rob,
    }
}

pub use unionbank::POSITIONAL_LENGTH_THRESHOLD;

/// "First 4 digits" rule: keep only digits, then take the
/// leading 4. `None` if fewer than 4 digits remain.
pub(crate) fn first4_digits(field: &str) -> Option<ReferenceKey> {
    ReferenceKey::from_digits(field)
}

/// Parse a decimal amount field, stripping thousands-separator commas
/// first, since every source format uses it as a thousands separator.
pub(crate) fn parse_decimal(field: &str) -> Option<Decimal> {
    let cleaned: String = field.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<Decimal>().ok()
}

/// Parse an integer "cents" string and divide by 100, the encoding
/// most channels use for monetary amounts.
pub(crate) fn parse_cents(digits: &str) -> Option<Decimal> {
    let cleaned: String = digits.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = cleaned.parse().ok()?;
    Some(Decimal::new(value, 2))
}

/// Insert slashes after the 2nd and 4th characters: `"MMDDYYYY"` →
/// `"MM/DD/YYYY"`, `"DDMMYY"` → `"DD/MM/YY"`. The caller picks which
/// semantic the positions carry; this just does the mechanical split
/// the original per-channel code repeats for every date field.
pub(crate) fn slash_date(s: &str) -> Option<String> {
    if s.len() < 4 {
        return None;
    }
    Some(format!("{}/{}/{}", &s[0..2], &s[2..4], &s[4..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_date_splits_into_three_groups() {
        assert_eq!(slash_date("01052024"), Some("01/05/2024".to_string()));
        assert_eq!(slash_date("240115"), Some("24/01/15".to_string()));
    }

    #[test]
    fn slash_date_rejects_too_short() {
        assert_eq!(slash_date("01"), None);
    }

    #[test]
    fn parse_decimal_strips_thousands_separators() {
        assert_eq!(
            parse_decimal("1,234.56"),
            Some("1234.56".parse().unwrap())
        );
    }

    #[test]
    fn parse_cents_divides_by_100() {
        assert_eq!(parse_cents("100050"), Some("1000.50".parse().unwrap()));
    }

    #[test]
    fn parse_cents_rejects_non_digits() {
        assert_eq!(parse_cents("10A050"), None);
    }
}
