use super::ApiQuestion;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A scenario as authored in a deck file: the question plus its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiScenario {
    #[serde(flatten)]
    pub question: ApiQuestion,
    #[serde(default)]
    pub ref_solution: BTreeMap<String, f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_deck_entry() {
        let json = r#"{
            "id": 1,
            "mode": "comprehensive",
            "position": "BTN",
            "stage": "preflop",
            "stacks": [100, 100, 100, 100, 100, 100],
            "pot": 4.5,
            "action_history": {"preflop": ["UTG raise 3", "UTG1 fold", "CO call"]},
            "hole_cards": ["As", "Kh"],
            "board": [],
            "ref_solution": {"call": 40, "raise12": 60}
        }"#;
        let scenario = serde_json::from_str::<ApiScenario>(json).unwrap();
        assert!(scenario.question.id == 1);
        assert!(scenario.question.action_history.preflop.len() == 3);
        assert!(scenario.question.action_history.flop.is_empty());
        assert!(scenario.ref_solution.get("raise12") == Some(&60.0));
    }
    #[test]
    fn question_serializes_without_answer() {
        let json = r#"{"id": 7, "mode": "bluff", "position": "BB", "stage": "river",
                       "stacks": [0, 0, 0, 0, 0, 0], "ref_solution": {"fold": 100}}"#;
        let scenario = serde_json::from_str::<ApiScenario>(json).unwrap();
        let value = serde_json::to_value(&scenario.question).unwrap();
        assert!(value.get("ref_solution").is_none());
        assert!(value["id"] == 7);
    }
}
