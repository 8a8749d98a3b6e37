//! Channel and area identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettleError;

/// A payment channel whose settlement file the parser recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelId {
    Bdo,
    Cebuana,
    Chinabank,
    Cis,
    Ecpay,
    Metrobank,
    Pnb,
    Unionbank,
    Sm,
    Bancnet,
    Peralink,
    Rob,
}

impl ChannelId {
    /// All known channels, in their canonical registry order.
    pub const ALL: [ChannelId; 12] = [
        ChannelId::Bdo,
        ChannelId::Cebuana,
        ChannelId::Chinabank,
        ChannelId::Cis,
        ChannelId::Ecpay,
        ChannelId::Metrobank,
        ChannelId::Pnb,
        ChannelId::Unionbank,
        ChannelId::Sm,
        ChannelId::Bancnet,
        ChannelId::Peralink,
        ChannelId::Rob,
    ];

    /// The canonical uppercase wire name, as used in `payment_mode` and
    /// in extract filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelId::Bdo => "BDO",
            ChannelId::Cebuana => "CEBUANA",
            ChannelId::Chinabank => "CHINABANK",
            ChannelId::Cis => "CIS",
            ChannelId::Ecpay => "ECPAY",
            ChannelId::Metrobank => "METROBANK",
            ChannelId::Pnb => "PNB",
            ChannelId::Unionbank => "UNIONBANK",
            ChannelId::Sm => "SM",
            ChannelId::Bancnet => "BANCNET",
            ChannelId::Peralink => "PERALINK",
            ChannelId::Rob => "ROB",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelId {
    type Err = SettleError;

    /// Parses a declared `payment_mode`. `ROBINSONS`/`ROBINSON`/`ROBINSONS
    /// BANK`/`ROBINSON BANK`/`ROBINSONS_BANK` are canonicalised to `ROB`
    /// before matching against known aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let canonical = match upper.as_str() {
            "ROBINSONS" | "ROBINSON" | "ROBINSONS BANK" | "ROBINSON BANK" | "ROBINSONS_BANK" => {
                "ROB".to_string()
            }
            other => other.to_string(),
        };
        for id in ChannelId::ALL {
            if id.as_str() == canonical {
                return Ok(id);
            }
        }
        Err(SettleError::validation(format!(
            "invalid payment mode: {s}"
        )))
    }
}

impl TryFrom<String> for ChannelId {
    type Error = SettleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<ChannelId> for String {
    fn from(id: ChannelId) -> Self {
        id.as_str().to_string()
    }
}

/// A three-letter operational region tag appended to output filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AreaTag {
    Epr,
    Pic,
    Fpr,
}

impl AreaTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaTag::Epr => "EPR",
            AreaTag::Pic => "PIC",
            AreaTag::Fpr => "FPR",
        }
    }
}

impl fmt::Display for AreaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaTag {
    type Err = SettleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "EPR" => Ok(AreaTag::Epr),
            "PIC" => Ok(AreaTag::Pic),
            "FPR" => Ok(AreaTag::Fpr),
            other => Err(SettleError::validation(format!("invalid area: {other}"))),
        }
    }
}

impl TryFrom<String> for AreaTag {
    type Error = SettleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<AreaTag> for String {
    fn from(tag: AreaTag) -> Self {
        tag.as_str().to_string()
    }
}
