use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Prior moves by street, each move in `"<SEAT> <kind> [<size>]"` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiHistory {
    #[serde(default)]
    pub preflop: Vec<String>,
    #[serde(default)]
    pub flop: Vec<String>,
    #[serde(default)]
    pub turn: Vec<String>,
    #[serde(default)]
    pub river: Vec<String>,
}

/// A scenario as served before the learner answers: no reference solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiQuestion {
    pub id: u64,
    pub mode: String,
    pub position: String,
    pub stage: String,
    pub stacks: Vec<f32>,
    #[serde(default)]
    pub pot: f32,
    #[serde(default)]
    pub action_history: ApiHistory,
    #[serde(default)]
    pub hole_cards: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiTierEntry {
    pub action: String,
    pub tier: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiTiers {
    pub high: Vec<ApiTierEntry>,
    pub medium: Vec<ApiTierEntry>,
    pub low: Vec<ApiTierEntry>,
}

/// Graded answer. Field names follow the client's camelCase contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiJudgment {
    pub question_id: u64,
    pub is_correct: u8,
    pub user_action: String,
    pub user_tier: Option<u8>,
    pub ref_solution: BTreeMap<String, f32>,
    pub tiers: ApiTiers,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiExplanation {
    pub explanation: String,
}

/// Error body; `error` is the machine-readable kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiBanner {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    pub scenarios: usize,
}

// NOTE: impl From<&Scenario> for ApiQuestion is in gtl-scenarios
// NOTE: impl From<&Judgment> for ApiJudgment is in gtl-server
