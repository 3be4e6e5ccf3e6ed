use super::*;
use anyhow::Context;
use gtl_dto::ApiScenario;
use std::path::Path;

/// Built-in deck: every mode and both solution encodings are represented.
const SAMPLE: &str = include_str!("../decks/sample.json");

impl Store {
    /// Loads a deck file: a JSON array of scenarios with reference solutions.
    pub fn from_path(path: impl AsRef<Path>, policy: Policy) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading deck {}", path.display()))?;
        let store = Self::from_json(&json, policy)
            .with_context(|| format!("loading deck {}", path.display()))?;
        log::info!("loaded {} scenarios from {}", store.len(), path.display());
        Ok(store)
    }
    pub fn from_json(json: &str, policy: Policy) -> anyhow::Result<Self> {
        serde_json::from_str::<Vec<ApiScenario>>(json)
            .context("deck is not a JSON array of scenarios")?
            .into_iter()
            .map(Scenario::try_from)
            .collect::<anyhow::Result<Vec<Scenario>>>()
            .and_then(|scenarios| Self::new(scenarios, policy))
    }
    pub fn sample(policy: Policy) -> anyhow::Result<Self> {
        Self::from_json(SAMPLE, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtl_grading::Encoding;
    use gtl_grading::Spot;

    #[test]
    fn sample_covers_modes_and_encodings() {
        let store = Store::sample(Policy::RoundRobin).unwrap();
        assert!(store.len() == 5);
        assert!(store.modes().len() == Mode::all().len());
        let encodings = (1..=5)
            .map(|id| store.get_scenario_by_id(id).unwrap().solution().encoding())
            .collect::<Vec<Encoding>>();
        assert!(encodings.contains(&Encoding::Percent));
        assert!(encodings.contains(&Encoding::Tiers));
    }
    #[test]
    fn rejects_duplicate_ids() {
        let one = r#"{"id": 9, "mode": "bluff", "position": "BB", "stage": "preflop",
                      "stacks": [100, 100, 100, 100, 100, 100], "ref_solution": {"fold": 100}}"#;
        let json = format!("[{}, {}]", one, one);
        assert!(Store::from_json(&json, Policy::RoundRobin).is_err());
    }
    #[test]
    fn rejects_non_array() {
        assert!(Store::from_json("{}", Policy::RoundRobin).is_err());
    }
    #[test]
    fn missing_file() {
        assert!(Store::from_path("no/such/deck.json", Policy::RoundRobin).is_err());
    }
}
