use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A referring office from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Office {
    pub office_id: String,
    pub name: String,
}

/// Referrals received from one office in one calendar month, as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReferral {
    pub office_id: String,
    pub year_month: String,
    pub patient_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    #[serde(rename = "VIP")]
    Vip,
    Warm,
    Cold,
    Dormant,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Vip, Tier::Warm, Tier::Cold, Tier::Dormant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Vip => "VIP",
            Tier::Warm => "Warm",
            Tier::Cold => "Cold",
            Tier::Dormant => "Dormant",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vip" => Ok(Tier::Vip),
            "warm" => Ok(Tier::Warm),
            "cold" => Ok(Tier::Cold),
            "dormant" => Ok(Tier::Dormant),
            other => Err(format!("unknown tier '{other}'")),
        }
    }
}

/// Secondary flag on active offices whose recent volume diverges from their
/// trailing-year standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConditionalLabel {
    #[serde(rename = "At-Risk")]
    AtRisk,
    Emerging,
}

impl ConditionalLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionalLabel::AtRisk => "At-Risk",
            ConditionalLabel::Emerging => "Emerging",
        }
    }
}

impl fmt::Display for ConditionalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived per-office figures. Recomputed from scratch on every scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeMetrics {
    pub office_id: String,
    pub total_referrals: u64,
    pub l12: u64,
    pub r3: u64,
    /// Months since last referral; `NEVER_REFERRED` when there is none.
    pub mslr: u32,
    pub score: Option<f64>,
    pub tier: Tier,
    pub percentile: Option<u8>,
    pub conditional_label: Option<ConditionalLabel>,
}

impl OfficeMetrics {
    pub fn is_active(&self) -> bool {
        self.score.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierSummary {
    pub vip: usize,
    pub warm: usize,
    pub cold: usize,
    pub dormant: usize,
    pub at_risk: usize,
    pub emerging: usize,
}

impl TierSummary {
    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Vip => self.vip,
            Tier::Warm => self.warm,
            Tier::Cold => self.cold,
            Tier::Dormant => self.dormant,
        }
    }

    pub fn total(&self) -> usize {
        self.vip + self.warm + self.cold + self.dormant
    }
}
