//! Channel registry: a declarative table of channel descriptors.
//!
//! This crate owns only the *declarative* half of a channel (its id,
//! display name, delimiter kind, and filename aliases). The
//! *behavioural* half — how to pull a reference, amount, and date out
//! of a split line — lives in `settle-parser`, dispatched by
//! [`ChannelId`] so this crate stays free of parsing logic.

use crate::channel::ChannelId;
use crate::model::DelimiterKind;

/// An immutable, process-wide channel descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDescriptor {
    pub id: ChannelId,
    pub display_name: &'static str,
    pub delimiter_kind: DelimiterKind,
    pub known_aliases: &'static [&'static str],
}

/// The authoritative channel table. Row order follows the alias list —
/// `classify_by_filename` walks it in this order and the first hit
/// wins.
pub static REGISTRY: &[ChannelDescriptor] = &[
    ChannelDescriptor {
        id: ChannelId::Bdo,
        display_name: "BDO",
        delimiter_kind: DelimiterKind::Pipe,
        known_aliases: &["BDO"],
    },
    ChannelDescriptor {
        id: ChannelId::Cebuana,
        display_name: "CEBUANA",
        delimiter_kind: DelimiterKind::Comma,
        known_aliases: &["CEBUANA LHUILLIER", "CEBUANA LHUILIER", "CEBUANA"],
    },
    ChannelDescriptor {
        id: ChannelId::Chinabank,
        display_name: "CHINABANK",
        delimiter_kind: DelimiterKind::Whitespace,
        known_aliases: &["CHINA BANK", "CHINABANK"],
    },
    ChannelDescriptor {
        id: ChannelId::Cis,
        display_name: "CIS",
        delimiter_kind: DelimiterKind::Caret,
        known_aliases: &["CIS"],
    },
    ChannelDescriptor {
        id: ChannelId::Ecpay,
        display_name: "ECPAY",
        delimiter_kind: DelimiterKind::Comma,
        known_aliases: &["EC PAY", "ECPAY"],
    },
    ChannelDescriptor {
        id: ChannelId::Metrobank,
        display_name: "METROBANK",
        delimiter_kind: DelimiterKind::Whitespace,
        known_aliases: &["METRO BANK", "METRO", "METROBANK"],
    },
    ChannelDescriptor {
        id: ChannelId::Pnb,
        display_name: "PNB",
        delimiter_kind: DelimiterKind::Caret,
        known_aliases: &["PNB"],
    },
    ChannelDescriptor {
        id: ChannelId::Unionbank,
        display_name: "UNIONBANK",
        delimiter_kind: DelimiterKind::Positional,
        known_aliases: &["UNION BANK", "UNIONBANK", "UB"],
    },
    ChannelDescriptor {
        id: ChannelId::Sm,
        display_name: "SM",
        delimiter_kind: DelimiterKind::Positional,
        known_aliases: &["SM"],
    },
    ChannelDescriptor {
        id: ChannelId::Bancnet,
        display_name: "BANCNET",
        delimiter_kind: DelimiterKind::Positional,
        known_aliases: &["BANCNET"],
    },
    ChannelDescriptor {
        id: ChannelId::Peralink,
        display_name: "PERALINK",
        delimiter_kind: DelimiterKind::Comma,
        known_aliases: &["PERALINK"],
    },
    ChannelDescriptor {
        id: ChannelId::Rob,
        display_name: "ROB",
        delimiter_kind: DelimiterKind::MixedCaretPipe,
        known_aliases: &[
            "ROBINSONS_BANK",
            "ROBINSONS BANK",
            "ROBINSON BANK",
            "ROBINSONS",
            "ROBINSON",
            "ROB",
        ],
    },
];

/// Look up a descriptor by channel id. Panics if `REGISTRY` is ever
/// edited to drop a variant — every [`ChannelId`] must have exactly
/// one row.
pub fn lookup(id: ChannelId) -> &'static ChannelDescriptor {
    REGISTRY
        .iter()
        .find(|d| d.id == id)
        .expect("every ChannelId must have a registry row")
}

/// Classify a channel from a filename by case-insensitive substring
/// match against each descriptor's aliases, in registry order. First
/// hit wins.
pub fn classify_by_filename(name: &str) -> Option<ChannelId> {
    let upper = name.to_uppercase();
    for descriptor in REGISTRY {
        for alias in descriptor.known_aliases {
            if upper.contains(alias) {
                return Some(descriptor.id);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_id_has_a_row() {
        for id in ChannelId::ALL {
            assert_eq!(lookup(id).id, id);
        }
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify_by_filename("bdo_settlement.txt"), Some(ChannelId::Bdo));
        assert_eq!(classify_by_filename("BDO_SETTLEMENT.TXT"), Some(ChannelId::Bdo));
    }

    #[test]
    fn classify_matches_cebuana_variants() {
        for name in [
            "CEBUANA_20240101.txt",
            "cebuana lhuillier weekly.txt",
            "CEBUANA LHUILIER.txt",
        ] {
            assert_eq!(classify_by_filename(name), Some(ChannelId::Cebuana));
        }
    }

    #[test]
    fn classify_matches_robinsons_variants() {
        for name in ["ROB_file.txt", "ROBINSONS_BANK_export.txt", "robinson.txt"] {
            assert_eq!(classify_by_filename(name), Some(ChannelId::Rob));
        }
    }

    #[test]
    fn classify_distinguishes_cebuana_from_peralink() {
        assert_eq!(classify_by_filename("PERALINK_weekly.txt"), Some(ChannelId::Peralink));
    }

    #[test]
    fn classify_returns_none_for_unknown() {
        assert_eq!(classify_by_filename("mystery_export.txt"), None);
    }

    #[test]
    fn metrobank_does_not_shadow_metro_substring_in_other_aliases() {
        assert_eq!(classify_by_filename("METRO_settlement.txt"), Some(ChannelId::Metrobank));
    }
}
