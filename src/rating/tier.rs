//! MMR to tier/division mapping.
//!
//! Six tiers of 300 MMR, each split into three 100-MMR divisions, then
//! Grand Champion from 1800 up with a single division:
//!
//! | MMR          | Tier           |
//! |--------------|----------------|
//! | 0–299        | Bronze 1–3     |
//! | 300–599      | Silver 1–3     |
//! | 600–899      | Gold 1–3       |
//! | 900–1199     | Platinum 1–3   |
//! | 1200–1499    | Diamond 1–3    |
//! | 1500–1799    | Champion 1–3   |
//! | 1800+        | Grand Champion |

use serde::{Deserialize, Serialize};
use std::fmt;

/// MMR span of one tier.
pub const TIER_SPAN: u32 = 300;

/// MMR span of one division.
pub const DIVISION_SPAN: u32 = 100;

/// Lowest Grand Champion MMR.
pub const GRAND_CHAMPION_MMR: u32 = 1800;

/// Rank tier, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierName {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Champion,
    #[serde(rename = "Grand Champion")]
    GrandChampion,
}

impl TierName {
    pub const ALL: [TierName; 7] = [
        TierName::Bronze,
        TierName::Silver,
        TierName::Gold,
        TierName::Platinum,
        TierName::Diamond,
        TierName::Champion,
        TierName::GrandChampion,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TierName::Bronze => "Bronze",
            TierName::Silver => "Silver",
            TierName::Gold => "Gold",
            TierName::Platinum => "Platinum",
            TierName::Diamond => "Diamond",
            TierName::Champion => "Champion",
            TierName::GrandChampion => "Grand Champion",
        }
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tier and a division inside it (1 = lowest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TierDivision {
    pub tier: TierName,
    pub division: u8,
}

impl TierDivision {
    #[must_use]
    pub const fn new(tier: TierName, division: u8) -> Self {
        Self { tier, division }
    }

    /// Display label. Division 1 is left implicit: `"Gold"`, `"Gold 2"`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.division > 1 {
            format!("{} {}", self.tier, self.division)
        } else {
            self.tier.name().to_string()
        }
    }
}

impl Default for TierDivision {
    fn default() -> Self {
        Self::new(TierName::Bronze, 1)
    }
}

impl fmt::Display for TierDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Tier and division for an MMR.
#[must_use]
pub fn tier_from_mmr(mmr: u32) -> TierDivision {
    if mmr >= GRAND_CHAMPION_MMR {
        return TierDivision::new(TierName::GrandChampion, 1);
    }
    let tier = TierName::ALL[(mmr / TIER_SPAN) as usize];
    let division = (mmr % TIER_SPAN) / DIVISION_SPAN + 1;
    TierDivision::new(tier, division as u8)
}
