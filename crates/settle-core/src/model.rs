//! Record and group shapes shared between the parser and the aggregator.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::channel::ChannelId;
use crate::error::SettleError;

/// How a channel's raw line is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Pipe,
    Caret,
    Comma,
    Whitespace,
    Positional,
    MixedCaretPipe,
}

impl DelimiterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterKind::Pipe => "pipe",
            DelimiterKind::Caret => "caret",
            DelimiterKind::Comma => "comma",
            DelimiterKind::Whitespace => "whitespace",
            DelimiterKind::Positional => "positional",
            DelimiterKind::MixedCaretPipe => "mixed_caret_pipe",
        }
    }
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated grouping key: either exactly 4 ASCII digits, or the
/// `NOREF` sentinel. Constructing one enforces the invariant so a
/// `ReferenceKey` can never hold anything else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceKey(String);

impl TryFrom<String> for ReferenceKey {
    type Error = SettleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<ReferenceKey> for String {
    fn from(key: ReferenceKey) -> Self {
        key.0
    }
}

impl ReferenceKey {
    pub const NOREF: &'static str = "NOREF";

    /// Build from a string already known to be 4 digits or `NOREF`.
    /// Used internally by extractors that have already validated shape.
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        let key = key.into();
        debug_assert!(Self::is_valid(&key), "invalid reference key: {key}");
        Self(key)
    }

    /// The `NOREF` sentinel key.
    pub fn noref() -> Self {
        Self(Self::NOREF.to_string())
    }

    /// Try to build a reference key from the first 4 ASCII digits found
    /// in `raw`. Returns `None` if fewer than 4 digits are present.
    pub fn from_digits(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() >= 4 {
            Some(Self(digits[..4].to_string()))
        } else {
            None
        }
    }

    /// Try to build a reference key from the first 4 characters of
    /// `raw`, without filtering to digits first (METROBANK's rule —
    /// preserved as-is — an upstream quirk, not a bug).
    pub fn from_leading_chars(raw: &str) -> Option<Self> {
        if raw.chars().count() >= 4 {
            Some(Self(raw.chars().take(4).collect()))
        } else {
            None
        }
    }

    pub fn is_valid(s: &str) -> bool {
        s == Self::NOREF || (s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_noref(&self) -> bool {
        self.0 == Self::NOREF
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ReferenceKey {
    type Err = SettleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(SettleError::input_shape(format!(
                "reference key must be 4 digits or NOREF, got: {s}"
            )))
        }
    }
}

/// Why a line was skipped rather than turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line could not yield a reference key under the channel's rule.
    NoReference,
    /// The line was too short to carry any channel-specific field.
    TooShort,
    /// Bytes in the line could not be decoded under any supported
    /// encoding (should only ever surface at the file level).
    Undecodable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::NoReference => "no reference key could be extracted",
            SkipReason::TooShort => "line too short for channel's positional rule",
            SkipReason::Undecodable => "line bytes were not decodable",
        };
        f.write_str(msg)
    }
}

/// A single parsed line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub channel_id: ChannelId,
    pub raw_line: String,
    pub fields: Vec<String>,
    pub amount: Decimal,
    pub reference_key: ReferenceKey,
    pub date: Option<String>,
    pub is_valid: bool,
}

impl ParsedRecord {
    /// `true` if `amount` falls within the accepted sanity range:
    /// `[0, 1_000_000_000)`.
    pub fn amount_in_range(&self) -> bool {
        self.amount >= Decimal::ZERO && self.amount < Decimal::from(1_000_000_000i64)
    }
}

/// All records sharing a 4-digit reference key within one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub channel_id: ChannelId,
    pub count: u32,
    pub total: Decimal,
    pub raw_lines: Vec<String>,
    pub dates: BTreeSet<String>,
}

impl Group {
    pub fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            count: 0,
            total: Decimal::ZERO,
            raw_lines: Vec::new(),
            dates: BTreeSet::new(),
        }
    }

    /// Sorted date strings, in the order the report row expects.
    pub fn sorted_dates(&self) -> Vec<&str> {
        self.dates.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_key_from_digits_takes_first_four() {
        let key = ReferenceKey::from_digits("ab12cd3456").unwrap();
        assert_eq!(key.as_str(), "1234");
    }

    #[test]
    fn reference_key_from_digits_rejects_short() {
        assert!(ReferenceKey::from_digits("ab12").is_none());
    }

    #[test]
    fn reference_key_from_leading_chars_does_not_filter_digits() {
        let key = ReferenceKey::from_leading_chars("A1B2extra").unwrap();
        assert_eq!(key.as_str(), "A1B2");
    }

    #[test]
    fn reference_key_parses_noref() {
        assert_eq!(ReferenceKey::from_str("NOREF").unwrap(), ReferenceKey::noref());
    }

    #[test]
    fn reference_key_rejects_invalid() {
        assert!(ReferenceKey::from_str("12a4").is_err());
        assert!(ReferenceKey::from_str("123").is_err());
    }

    #[test]
    fn group_starts_empty() {
        let g = Group::new(ChannelId::Bdo);
        assert_eq!(g.count, 0);
        assert_eq!(g.total, Decimal::ZERO);
        assert!(g.raw_lines.is_empty());
    }
}
