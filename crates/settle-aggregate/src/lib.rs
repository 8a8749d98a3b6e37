//! # settle-aggregate
//!
//! Aggregator: groups parsed records by 4-digit reference key and
//! maintains per-group totals, counts, date sets, and raw-line
//! buffers, in ingest order.

use indexmap::IndexMap;
use settle_core::{ChannelId, Group, ParsedRecord, ReferenceKey};
use settle_parser::ParseOutcome;
use tracing::warn;

/// Accumulates [`ParsedRecord`]s and UNIONBANK continuation lines into
/// per-reference [`Group`]s.
///
/// A fresh `Aggregator` owns no groups until the first line is
/// ingested; `groups` is built incrementally so report building
/// never has to recompute totals or date sets — it only projects over
/// what's already here.
#[derive(Debug, Clone)]
pub struct Aggregator {
    channel_id: ChannelId,
    groups: IndexMap<ReferenceKey, Group>,
    current_key: Option<ReferenceKey>,
}

impl Aggregator {
    pub fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            groups: IndexMap::new(),
            current_key: None,
        }
    }

    /// Ensure a group exists for `key` and return it.
    fn group_mut(&mut self, key: ReferenceKey) -> &mut Group {
        self.groups
            .entry(key)
            .or_insert_with(|| Group::new(self.channel_id))
    }

    /// Fold one fully shaped record into its group: append the raw
    /// line, increment the count, add the amount to the running total,
    /// and record the date if present.
    pub fn ingest_record(&mut self, record: &ParsedRecord) {
        let key = record.reference_key.clone();
        let group = self.group_mut(key.clone());
        group.raw_lines.push(record.raw_line.clone());
        group.count += 1;
        group.total += record.amount;
        if let Some(date) = &record.date {
            group.dates.insert(date.clone());
        }
        self.current_key = Some(key);
    }

    /// Fold a UNIONBANK orphan/continuation line: it never creates a
    /// record, so count and total are left untouched. It is appended
    /// to whichever group is currently active, or to `NOREF` if no
    /// group has been established yet.
    pub fn ingest_continuation(&mut self, raw_line: &str) {
        let key = self.current_key.clone().unwrap_or_else(ReferenceKey::noref);
        if self.current_key.is_none() {
            warn!("continuation line with no established group, filed under NOREF");
        }
        let group = self.group_mut(key.clone());
        group.raw_lines.push(raw_line.to_string());
        self.current_key = Some(key);
    }

    /// Ingest every outcome from a [`settle_parser::ParseReport`] (or
    /// any outcome stream) in order. Skips contribute nothing; records
    /// and continuations are folded as above.
    pub fn ingest_all<'a>(&mut self, outcomes: impl IntoIterator<Item = &'a ParseOutcome>) {
        for outcome in outcomes {
            match outcome {
                ParseOutcome::Record(record) => self.ingest_record(record),
                ParseOutcome::Continuation(raw) => self.ingest_continuation(raw),
                ParseOutcome::Skip(_) => {}
            }
        }
    }

    /// Read-only view of the groups accumulated so far, in first-seen order.
    pub fn groups(&self) -> &IndexMap<ReferenceKey, Group> {
        &self.groups
    }

    /// Consume the aggregator, returning its groups in first-seen order.
    pub fn into_groups(self) -> IndexMap<ReferenceKey, Group> {
        self.groups
    }

    /// `Σ group.count` — the number of records folded so far.
    pub fn total_record_count(&self) -> u32 {
        self.groups.values().map(|g| g.count).sum()
    }

    /// `Σ group.total` — the file-wide running total.
    pub fn total_amount(&self) -> rust_decimal::Decimal {
        self.groups.values().map(|g| g.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use settle_core::ReferenceKey as Key;
    use std::str::FromStr;

    fn record(key: &str, amount: rust_decimal::Decimal, date: Option<&str>, raw: &str) -> ParsedRecord {
        ParsedRecord {
            channel_id: ChannelId::Bdo,
            raw_line: raw.to_string(),
            fields: vec![],
            amount,
            reference_key: Key::from_str(key).unwrap(),
            date: date.map(str::to_string),
            is_valid: true,
        }
    }

    #[test]
    fn ingest_record_creates_group_and_updates_totals() {
        let mut agg = Aggregator::new(ChannelId::Bdo);
        agg.ingest_record(&record("1234", dec!(100.50), Some("2024-01-05"), "line-1"));
        let group = agg.groups().get(&Key::from_str("1234").unwrap()).unwrap();
        assert_eq!(group.count, 1);
        assert_eq!(group.total, dec!(100.50));
        assert_eq!(group.raw_lines, vec!["line-1"]);
        assert_eq!(group.sorted_dates(), vec!["2024-01-05"]);
    }

    #[test]
    fn duplicate_reference_keys_are_grouped_with_order_preserved() {
        let mut agg = Aggregator::new(ChannelId::Bdo);
        agg.ingest_record(&record("1234", dec!(10.00), None, "first"));
        agg.ingest_record(&record("5678", dec!(20.00), None, "second"));
        agg.ingest_record(&record("1234", dec!(5.00), None, "third"));
        let group = agg.groups().get(&Key::from_str("1234").unwrap()).unwrap();
        assert_eq!(group.count, 2);
        assert_eq!(group.total, dec!(15.00));
        assert_eq!(group.raw_lines, vec!["first", "third"]);
    }

    #[test]
    fn continuation_line_appends_without_touching_count_or_total() {
        let mut agg = Aggregator::new(ChannelId::Unionbank);
        agg.ingest_record(&record("1234", dec!(50.00), Some("24/01/15"), "main line"));
        agg.ingest_continuation("orphan 1");
        agg.ingest_continuation("orphan 2");
        let group = agg.groups().get(&Key::from_str("1234").unwrap()).unwrap();
        assert_eq!(group.count, 1);
        assert_eq!(group.total, dec!(50.00));
        assert_eq!(group.raw_lines, vec!["main line", "orphan 1", "orphan 2"]);
    }

    #[test]
    fn continuation_before_any_record_files_under_noref() {
        let mut agg = Aggregator::new(ChannelId::Unionbank);
        agg.ingest_continuation("stray line");
        let group = agg.groups().get(&Key::noref()).unwrap();
        assert_eq!(group.count, 0);
        assert_eq!(group.raw_lines, vec!["stray line"]);
    }

    #[test]
    fn invariants_hold_after_mixed_ingest() {
        let mut agg = Aggregator::new(ChannelId::Bdo);
        agg.ingest_record(&record("1234", dec!(100.00), None, "a"));
        agg.ingest_record(&record("1234", dec!(0), None, "b"));
        agg.ingest_record(&record("5678", dec!(50.00), None, "c"));
        assert_eq!(agg.total_record_count(), 3);
        for group in agg.groups().values() {
            assert_eq!(group.count as usize, group.raw_lines.len());
        }
    }
}
