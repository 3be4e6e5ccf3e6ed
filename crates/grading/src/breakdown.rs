use super::*;
use gtl_core::Frequency;
use gtl_gameplay::Action;
use gtl_gameplay::Key;

/// A reference mix partitioned into its three frequency tiers.
///
/// Every key of the [`Solution`] lands in exactly one list. Within a list,
/// keys are ordered by descending weight, then by key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    high: Vec<(Key, Tier)>,
    medium: Vec<(Key, Tier)>,
    low: Vec<(Key, Tier)>,
}

impl Breakdown {
    /// One tier's list.
    pub fn get(&self, tier: Tier) -> &[(Key, Tier)] {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }
    /// All pairs, best tier first.
    pub fn iter(&self) -> impl Iterator<Item = &(Key, Tier)> {
        self.high.iter().chain(self.medium.iter()).chain(self.low.iter())
    }
    /// Tier of a learner action, or `None` if it is absent from every list.
    pub fn tier_of(&self, action: &Action) -> Option<Tier> {
        self.iter()
            .find(|(key, _)| key.matches(action))
            .map(|(_, tier)| *tier)
    }
}

impl From<&Solution> for Breakdown {
    fn from(solution: &Solution) -> Self {
        let mut sorted = solution
            .iter()
            .map(|(key, entry)| (key.clone(), entry.tier(), entry.weight()))
            .collect::<Vec<(Key, Tier, Frequency)>>();
        sorted.sort_by(|(k1, t1, w1), (k2, t2, w2)| match solution.encoding() {
            Encoding::Percent => w2.total_cmp(w1).then_with(|| k1.cmp(k2)),
            Encoding::Tiers => t1.cmp(t2).then_with(|| k1.cmp(k2)),
        });
        sorted
            .into_iter()
            .fold(Self::default(), |mut breakdown, (key, tier, _)| {
                match tier {
                    Tier::High => breakdown.high.push((key, tier)),
                    Tier::Medium => breakdown.medium.push((key, tier)),
                    Tier::Low => breakdown.low.push((key, tier)),
                }
                breakdown
            })
    }
}
