use super::*;
use gtl_core::Arbitrary;
use gtl_core::Frequency;
use gtl_core::PERCENT_TOLERANCE;
use gtl_core::PERCENT_TOTAL;
use gtl_gameplay::Action;
use std::collections::BTreeMap;

/// How a stored reference solution writes its numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Frequencies in percent, summing to 100.
    Percent,
    /// Tier labels 1, 2, 3 directly.
    Tiers,
}

/// A reference solution exactly as authored: key text to number.
///
/// Converted once into a [`Solution`] when a scenario is ingested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weights(BTreeMap<String, Frequency>);

impl Weights {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Frequency)> {
        self.0.iter()
    }
    /// Detects the encoding.
    ///
    /// Integer labels in {1, 2, 3} that do not add up to 100 are tiers;
    /// non-negative numbers adding up to 100 are percentages; anything else
    /// is malformed.
    pub fn encoding(&self) -> Result<Encoding, SolutionError> {
        let total = self.0.values().sum::<Frequency>();
        let labels = self
            .0
            .values()
            .all(|w| w.fract() == 0.0 && (1.0..=3.0).contains(w));
        let percent = self.0.values().all(|w| w.is_finite() && *w >= 0.0)
            && (total - PERCENT_TOTAL).abs() <= PERCENT_TOLERANCE;
        match (labels, percent) {
            (true, false) => Ok(Encoding::Tiers),
            (_, true) => Ok(Encoding::Percent),
            (false, false) => Err(SolutionError::Malformed(format!(
                "weights are neither tier labels nor percentages summing to {} (sum {})",
                PERCENT_TOTAL, total
            ))),
        }
    }
}

impl From<BTreeMap<String, Frequency>> for Weights {
    fn from(map: BTreeMap<String, Frequency>) -> Self {
        Self(map)
    }
}

impl<K: ToString> FromIterator<(K, Frequency)> for Weights {
    fn from_iter<I: IntoIterator<Item = (K, Frequency)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, w)| (k.to_string(), w)).collect())
    }
}

impl From<Weights> for BTreeMap<String, Frequency> {
    fn from(weights: Weights) -> Self {
        weights.0
    }
}

/// A random percentage mix over a random non-empty subset of canonical actions.
impl Arbitrary for Weights {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let mut actions = Action::all();
        actions.shuffle(rng);
        let n = rand::random_range(1..=actions.len());
        let mut remaining = 100u32;
        actions
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(i, action)| {
                let share = match i + 1 == n {
                    true => remaining,
                    false => rand::random_range(0..=remaining),
                };
                remaining -= share;
                (action, share as Frequency)
            })
            .collect()
    }
}
