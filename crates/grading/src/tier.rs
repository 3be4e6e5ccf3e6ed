use gtl_core::Frequency;
use gtl_core::TIER_HIGH_FLOOR;
use gtl_core::TIER_MEDIUM_FLOOR;

/// Frequency band of an action within a reference mix.
///
/// `High` is the best tier; the derived ordering follows the wire labels
/// (`High` = 1 < `Medium` = 2 < `Low` = 3), so "better" means "smaller".
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Tier {
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }
    /// Buckets a percentage weight. Zero-weight actions have no tier.
    pub fn bucket(frequency: Frequency) -> Option<Self> {
        match frequency {
            f if f >= TIER_HIGH_FLOOR => Some(Self::High),
            f if f >= TIER_MEDIUM_FLOOR => Some(Self::Medium),
            f if f > 0.0 => Some(Self::Low),
            _ => None,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier as u8
    }
}

impl TryFrom<u8> for Tier {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::High),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Low),
            n => Err(n),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
