use serde::Deserialize;
use serde::Serialize;

/// Query string of the question routes; `mode` defaults server-side.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ModeQuery {
    #[serde(default)]
    pub mode: Option<String>,
}

/// Body of `POST /api/v1/judge` and `POST /api/v1/explain`.
///
/// `user_action` is either a canonical key (`"raise12"`) or, when `size` is
/// present, the bare kind word (`"raise"`) with `size` as the pot fraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct JudgeRequest {
    pub question_id: u64,
    pub user_action: String,
    #[serde(default)]
    pub size: Option<String>,
}
