use super::ApiError;
use gtl_core::QuestionId;
use gtl_dto::ApiJudgment;
use gtl_dto::ApiQuestion;
use gtl_dto::ApiTierEntry;
use gtl_dto::ApiTiers;
use gtl_gameplay::Action;
use gtl_gameplay::Fraction;
use gtl_gameplay::normalize;
use gtl_grading::Breakdown;
use gtl_grading::Spot;
use gtl_grading::Tier;
use gtl_grading::Verdict;
use gtl_scenarios::Mode;
use gtl_scenarios::Scenario;
use gtl_scenarios::Store;
use std::sync::Arc;

/// A graded answer to one scenario.
#[derive(Debug, Clone)]
pub struct Judgment {
    pub scenario: Arc<Scenario>,
    pub action: Action,
    pub verdict: Verdict,
    pub breakdown: Breakdown,
    pub explanation: String,
}

impl Judgment {
    pub fn tier(&self) -> Option<Tier> {
        self.breakdown.tier_of(&self.action)
    }
}

impl From<&Judgment> for ApiJudgment {
    fn from(judgment: &Judgment) -> Self {
        let tier = |tier: Tier| {
            judgment
                .breakdown
                .get(tier)
                .iter()
                .map(|(key, tier)| ApiTierEntry {
                    action: key.to_string(),
                    tier: u8::from(*tier),
                })
                .collect::<Vec<ApiTierEntry>>()
        };
        Self {
            question_id: judgment.scenario.id(),
            is_correct: u8::from(judgment.verdict),
            user_action: judgment.action.to_string(),
            user_tier: judgment.tier().map(u8::from),
            ref_solution: judgment.scenario.solution().weights().into(),
            tiers: ApiTiers {
                high: tier(Tier::High),
                medium: tier(Tier::Medium),
                low: tier(Tier::Low),
            },
            explanation: judgment.explanation.clone(),
        }
    }
}

/// Stateless orchestration over a shared scenario store.
pub struct API(Arc<Store>);

impl From<Arc<Store>> for API {
    fn from(store: Arc<Store>) -> Self {
        Self(store)
    }
}

impl From<Store> for API {
    fn from(store: Store) -> Self {
        Self(Arc::new(store))
    }
}

impl API {
    pub fn store(&self) -> &Store {
        &self.0
    }

    /// Parses an optional mode parameter; absent or blank means comprehensive.
    pub fn mode(mode: Option<&str>) -> Result<Mode, ApiError> {
        match mode.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Mode::default()),
            Some(s) => Mode::try_from(s).map_err(|_| ApiError::UnknownMode(s.to_string())),
        }
    }

    /// A scenario of `mode`, redacted for the learner.
    pub fn fetch(&self, mode: Mode) -> Result<ApiQuestion, ApiError> {
        let scenario = self.0.get_scenario(mode)?;
        log::debug!("serving question {} ({})", scenario.id(), mode);
        Ok(ApiQuestion::from(scenario.as_ref()))
    }

    /// A scenario of `mode` other than `current`. Never substitutes on failure.
    pub fn fetch_next(&self, current: QuestionId, mode: Mode) -> Result<ApiQuestion, ApiError> {
        let scenario = self.0.get_next_scenario(current, mode)?;
        log::debug!("serving question {} after {} ({})", scenario.id(), current, mode);
        Ok(ApiQuestion::from(scenario.as_ref()))
    }

    /// Grades the learner's answer to question `id` and explains the verdict.
    ///
    /// With a `size`, `action` is the bare kind word and `size` the pot
    /// fraction; without one, `action` is read as a canonical key.
    pub fn judge(&self, id: QuestionId, action: &str, size: Option<&str>) -> Result<Judgment, ApiError> {
        let scenario = self.0.get_scenario_by_id(id)?;
        let action = Self::action(action, size)?;
        let (verdict, breakdown) = gtl_grading::grade(scenario.solution(), &action)?;
        let explanation = gtl_grading::explain(scenario.as_ref(), &action, verdict, &breakdown);
        log::info!("question {} answered {}: {}", id, action, verdict);
        Ok(Judgment {
            scenario,
            action,
            verdict,
            breakdown,
            explanation,
        })
    }

    /// Same pipeline as [`API::judge`], keeping only the rationale.
    pub fn explain(&self, id: QuestionId, action: &str, size: Option<&str>) -> Result<String, ApiError> {
        self.judge(id, action, size).map(|judgment| judgment.explanation)
    }

    /// A canonical raise key may carry a redundant `size`, which must agree.
    fn action(action: &str, size: Option<&str>) -> Result<Action, ApiError> {
        match (Action::try_from(action), size.map(str::trim).filter(|s| !s.is_empty())) {
            (Ok(Action::Raise(fraction)), Some(size)) => match Fraction::try_from(size) {
                Ok(sized) if sized == fraction => Ok(Action::Raise(fraction)),
                _ => Err(ApiError::InvalidSize(Some(size.to_string()))),
            },
            (_, Some(size)) => Ok(normalize(action, Some(size))?),
            (parsed, None) => Ok(parsed?),
        }
    }
}
