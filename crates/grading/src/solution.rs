use super::*;
use gtl_core::Frequency;
use gtl_gameplay::Action;
use gtl_gameplay::Key;
use std::collections::BTreeMap;

/// Why an authored reference solution could not be ingested.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionError {
    Malformed(String),
    DuplicateKey(String),
}

impl std::fmt::Display for SolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed reference solution: {}", s),
            Self::DuplicateKey(s) => write!(f, "reference solution repeats key {:?}", s),
        }
    }
}

impl std::error::Error for SolutionError {}

/// One action of a reference mix after ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    weight: Frequency,
    tier: Tier,
}

impl Entry {
    /// The authored number: a percentage or a tier label, per the encoding.
    pub fn weight(&self) -> Frequency {
        self.weight
    }
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/// A reference mix in canonical form: every key carries exactly one tier.
///
/// Zero-weight percentage entries are dropped at ingestion, so every key
/// present here is part of the recommended mix.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    encoding: Encoding,
    entries: BTreeMap<Key, Entry>,
}

impl Solution {
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn get(&self, key: &Key) -> Option<&Entry> {
        self.entries.get(key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Entry)> {
        self.entries.iter()
    }
    /// Tier of a learner action, if the mix contains it.
    pub fn tier(&self, action: &Action) -> Option<Tier> {
        self.entries
            .iter()
            .find(|(key, _)| key.matches(action))
            .map(|(_, entry)| entry.tier)
    }
    /// Authored numbers keyed by wire text, for echoing back to clients.
    pub fn weights(&self) -> Weights {
        self.entries
            .iter()
            .map(|(key, entry)| (key, entry.weight))
            .collect()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self {
            encoding: Encoding::Percent,
            entries: BTreeMap::new(),
        }
    }
}

impl TryFrom<Weights> for Solution {
    type Error = SolutionError;
    fn try_from(weights: Weights) -> Result<Self, Self::Error> {
        if weights.is_empty() {
            return Ok(Self::default());
        }
        let encoding = weights.encoding()?;
        let mut entries = BTreeMap::new();
        for (text, weight) in weights.iter() {
            let tier = match encoding {
                Encoding::Tiers => Tier::try_from(*weight as u8).ok(),
                Encoding::Percent => Tier::bucket(*weight),
            };
            let Some(tier) = tier else {
                log::debug!("dropping zero-weight action {}", text);
                continue;
            };
            let key = Key::from(text.as_str());
            if key.is_foreign() {
                log::debug!("keeping non-canonical action key {:?}", text);
            }
            let weight = *weight;
            if entries.insert(key, Entry { weight, tier }).is_some() {
                return Err(SolutionError::DuplicateKey(text.clone()));
            }
        }
        Ok(Self { encoding, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtl_gameplay::Fraction;

    #[test]
    fn percentages_become_tiers() {
        let weights = Weights::from_iter([("call", 40.0), ("raise12", 60.0)]);
        let solution = Solution::try_from(weights).unwrap();
        assert!(solution.tier(&Action::Raise(Fraction::Half)) == Some(Tier::High));
        assert!(solution.tier(&Action::Call) == Some(Tier::Medium));
        assert!(solution.tier(&Action::Fold) == None);
    }
    #[test]
    fn tier_labels_pass_through() {
        let weights = Weights::from_iter([("call", 3.0), ("fold", 1.0)]);
        let solution = Solution::try_from(weights).unwrap();
        assert!(solution.encoding() == Encoding::Tiers);
        assert!(solution.tier(&Action::Fold) == Some(Tier::High));
        assert!(solution.tier(&Action::Call) == Some(Tier::Low));
    }
    #[test]
    fn zero_weights_are_dropped() {
        let weights = Weights::from_iter([("call", 0.0), ("fold", 100.0)]);
        let solution = Solution::try_from(weights).unwrap();
        assert!(solution.len() == 1);
        assert!(solution.weights() == Weights::from_iter([("fold", 100.0)]));
    }
    #[test]
    fn duplicate_spellings_are_rejected() {
        let weights = Weights::from_iter([("call", 50.0), ("CALL", 50.0)]);
        assert!(matches!(
            Solution::try_from(weights),
            Err(SolutionError::DuplicateKey(_))
        ));
    }
    #[test]
    fn foreign_keys_are_kept() {
        let weights = Weights::from_iter([("call", 20.0), ("raise80", 80.0)]);
        let solution = Solution::try_from(weights).unwrap();
        assert!(solution.len() == 2);
        let key = Key::from("raise80");
        assert!(solution.get(&key).map(Entry::tier) == Some(Tier::High));
    }
    #[test]
    fn empty_is_allowed_at_ingestion() {
        let solution = Solution::try_from(Weights::default()).unwrap();
        assert!(solution.is_empty());
    }
}
