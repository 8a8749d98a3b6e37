//! Parser: per-channel orchestrator. Reads file bytes, decodes
//! them, drives the line splitter and field extractors, and
//! yields one [`ParseOutcome`] per input line.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use settle_core::{registry, ChannelId, ParsedRecord, SkipReason};

use crate::extractors::{rules_for, POSITIONAL_LENGTH_THRESHOLD};
use crate::splitter::split_fields;

/// Sanity range for a parsed amount: `[0, 1_000_000_000)`.
fn in_sanity_range(amount: Decimal) -> bool {
    amount >= Decimal::ZERO && amount < Decimal::from(1_000_000_000i64)
}

/// Decode `bytes` as text. Tries strict UTF-8 first. Latin-1 and
/// ISO-8859-1 are the same total function over any byte string (every
/// byte is its own codepoint), and CP1252 only diverges from them
/// across 0x80-0x9F — so the "first of Latin-1, CP1252, ISO-8859-1
/// that decodes without error" cascade collapses to "UTF-8, then
/// Latin-1": Latin-1 always succeeds, so CP1252 and ISO-8859-1 are
/// never reached. Decoded by hand rather than through `encoding_rs`,
/// since that crate's `ISO-8859-1` label aliases to Windows-1252 per
/// the WHATWG Encoding Standard and so cannot produce a true Latin-1
/// decode; a true byte-for-byte decode matters here because the
/// decoded line is preserved verbatim into the raw-line extracts.
pub fn decode(bytes: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }
    bytes.iter().map(|&b| b as char).collect()
}

/// What one input line produced.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// A fully shaped record, ready for the aggregator.
    Record(ParsedRecord),
    /// A UNIONBANK orphan/continuation line: too short to carry a
    /// fresh reference. The aggregator appends it to whichever group
    /// is currently active without touching count or total.
    Continuation(String),
    /// The line was dropped; see [`SkipReason`] for why.
    Skip(SkipReason),
}

/// Per-file tally of why lines were skipped, kept for diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounters {
    pub no_reference: u32,
    pub too_short: u32,
    pub undecodable: u32,
}

impl SkipCounters {
    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::NoReference => self.no_reference += 1,
            SkipReason::TooShort => self.too_short += 1,
            SkipReason::Undecodable => self.undecodable += 1,
        }
    }

    /// Total lines skipped, across every reason.
    pub fn total(&self) -> u32 {
        self.no_reference + self.too_short + self.undecodable
    }
}

/// The result of parsing one file under one channel's rules.
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub outcomes: Vec<ParseOutcome>,
    pub skips: SkipCounters,
}

impl ParseReport {
    /// Just the successfully shaped records, in file order.
    pub fn records(&self) -> impl Iterator<Item = &ParsedRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            ParseOutcome::Record(r) => Some(r),
            _ => None,
        })
    }
}

/// Parse `bytes` under `channel_id`'s rules. Never aborts on a single
/// bad line — failures are caught per-line and folded into
/// [`ParseReport::skips`].
pub fn parse(bytes: &[u8], channel_id: ChannelId) -> ParseReport {
    parse_checked(bytes, channel_id, || true)
}

/// Like [`parse`], but `keep_going` is polled between lines; once it
/// returns `false` the remaining input is abandoned and the report
/// reflects only what was processed so far. Parsing itself is
/// CPU-bound and needs no suspension point of its own — this is the
/// hook a caller (the job worker) uses to thread a cooperative
/// cancellation token through without the parser depending on
/// `tokio_util` itself.
pub fn parse_checked(
    bytes: &[u8],
    channel_id: ChannelId,
    mut keep_going: impl FnMut() -> bool,
) -> ParseReport {
    let text = decode(bytes);
    let descriptor = registry::lookup(channel_id);
    let rules = rules_for(channel_id);

    let mut outcomes = Vec::new();
    let mut skips = SkipCounters::default();

    for raw_line in text.split('\n') {
        if !keep_going() {
            warn!(%channel_id, "parse cancelled before reaching end of file");
            break;
        }

        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            continue;
        }

        if channel_id == ChannelId::Unionbank && line.len() < POSITIONAL_LENGTH_THRESHOLD {
            debug!(len = line.len(), "unionbank continuation line");
            outcomes.push(ParseOutcome::Continuation(line.to_string()));
            continue;
        }

        let fields = split_fields(line, descriptor.delimiter_kind);

        let reference_key = match rules.extract_reference(&fields, line) {
            Some(key) => key,
            None => {
                debug!(%channel_id, "line skipped: no reference key");
                skips.record(SkipReason::NoReference);
                outcomes.push(ParseOutcome::Skip(SkipReason::NoReference));
                continue;
            }
        };

        let date = rules.extract_date(&fields, line);
        let (amount, is_valid) = match rules.extract_amount(&fields, line) {
            Some(amount) if in_sanity_range(amount) => (amount, true),
            Some(out_of_range) => {
                warn!(%channel_id, %out_of_range, "amount outside sanity range, treated as zero");
                (Decimal::ZERO, false)
            }
            None => {
                warn!(%channel_id, "amount not numeric, record kept with zero amount");
                (Decimal::ZERO, false)
            }
        };

        outcomes.push(ParseOutcome::Record(ParsedRecord {
            channel_id,
            raw_line: line.to_string(),
            fields,
            amount,
            reference_key,
            date,
            is_valid,
        }));
    }

    ParseReport { outcomes, skips }
}
