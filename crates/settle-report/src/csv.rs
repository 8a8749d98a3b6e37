//! Summary CSV rows. Built as plain strings, not through a writer
//! abstraction — byte-for-byte compatibility (UTF-8 BOM, CRLF
//! terminators) is a hard requirement, and the row shapes are fixed
//! and few, so hand-assembly mirrors `datasynth-output`'s own
//! `csv_sink.rs` rather than reaching for the `csv` crate.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use settle_core::{registry, Group, ReferenceKey};

const BOM: &str = "\u{feff}";
const CRLF: &str = "\r\n";

/// Render a decimal amount with thousands separators and exactly two
/// fractional digits, e.g. `1234.5` → `"1,234.50"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (plain, "00".to_string()),
    };
    let frac_part = format!("{frac_part:0<2}");
    let frac_part = &frac_part[..2];

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Build `transactions_summary.csv`'s full contents: overall summary,
/// then the per-group breakdown table. Encoded as UTF-8 with a leading
/// BOM and CRLF line terminators.
pub fn build_summary_csv(groups: &IndexMap<ReferenceKey, Group>) -> String {
    let total_transactions: u32 = groups.values().map(|g| g.count).sum();
    let total_amount: Decimal = groups.values().map(|g| g.total).sum();

    let mut rows: Vec<String> = Vec::new();
    rows.push("OVERALL SUMMARY REPORT".to_string());
    rows.push(String::new());
    rows.push(format!("Total Transactions, {total_transactions}"));
    rows.push(format!("Total Amount, \u{20b1}{}", format_amount(total_amount)));
    rows.push(String::new());
    rows.push("ATM REFERENCE BREAKDOWN".to_string());
    rows.push("ATM Reference, Count, Amount, PaymentMode, Dates".to_string());

    for (key, group) in groups {
        let display_name = registry::lookup(group.channel_id).display_name;
        let dates = group.sorted_dates().join(", ");
        rows.push(format!(
            "{}, {}, {}, {}, {}",
            key,
            group.count,
            format_amount(group.total),
            display_name,
            dates
        ));
    }

    let mut out = String::with_capacity(BOM.len() + rows.iter().map(|r| r.len() + 2).sum::<usize>());
    out.push_str(BOM);
    for row in rows {
        out.push_str(&row);
        out.push_str(CRLF);
    }
    out
}

/// Build one group's raw-line extract file contents: its raw lines in
/// ingest order, one per line, each terminated by `\n`.
pub fn build_group_extract(group: &Group) -> String {
    let mut out = String::new();
    for line in &group.raw_lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// `ATM_<reference_key>_<channel_display_name>_<area_tag>.txt`
pub fn group_extract_filename(key: &ReferenceKey, display_name: &str, area_tag: &str) -> String {
    format!("ATM_{key}_{display_name}_{area_tag}.txt")
}
