use super::Mode;
use anyhow::Context;
use gtl_cards::Board;
use gtl_cards::Hole;
use gtl_cards::Street;
use gtl_core::Chips;
use gtl_core::N;
use gtl_core::QuestionId;
use gtl_dto::ApiHistory;
use gtl_dto::ApiQuestion;
use gtl_dto::ApiScenario;
use gtl_gameplay::History;
use gtl_gameplay::Seat;
use gtl_grading::Solution;
use gtl_grading::Spot;
use gtl_grading::Weights;

/// A decision point the learner is asked to act in, with its reference mix.
///
/// Constructed only through [`TryFrom<ApiScenario>`], which enforces:
///
/// - six finite, non-negative stacks and a non-negative pot
/// - a board sized for the stage
/// - no card shared between the hole cards and the board
/// - a history that ends before the hero's turn on the stage
/// - a reference solution in one consistent encoding
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    id: QuestionId,
    mode: Mode,
    seat: Seat,
    stage: Street,
    stacks: [Chips; N],
    pot: Chips,
    history: History,
    hole: Hole,
    board: Board,
    solution: Solution,
}

impl Scenario {
    pub fn id(&self) -> QuestionId {
        self.id
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Spot for Scenario {
    fn seat(&self) -> Seat {
        self.seat
    }
    fn stage(&self) -> Street {
        self.stage
    }
    fn pot(&self) -> Chips {
        self.pot
    }
    fn stacks(&self) -> &[Chips; N] {
        &self.stacks
    }
    fn hole(&self) -> &Hole {
        &self.hole
    }
    fn board(&self) -> &Board {
        &self.board
    }
    fn history(&self) -> &History {
        &self.history
    }
    fn solution(&self) -> &Solution {
        &self.solution
    }
}

impl TryFrom<ApiScenario> for Scenario {
    type Error = anyhow::Error;
    fn try_from(record: ApiScenario) -> Result<Self, Self::Error> {
        let ApiScenario {
            question,
            ref_solution,
        } = record;
        let id = question.id;
        let parse = || -> anyhow::Result<Self> {
            let mode = Mode::try_from(question.mode.as_str())?;
            let seat = Seat::try_from(question.position.as_str())?;
            let stage = Street::try_from(question.stage.as_str())?;
            let stacks = <[Chips; N]>::try_from(question.stacks.as_slice())
                .map_err(|_| anyhow::anyhow!("expected {} stacks, got {}", N, question.stacks.len()))?;
            if stacks.iter().any(|s| !s.is_finite() || *s < 0.0) {
                return Err(anyhow::anyhow!("stacks must be non-negative"));
            }
            if !question.pot.is_finite() || question.pot < 0.0 {
                return Err(anyhow::anyhow!("pot must be non-negative"));
            }
            let hole = Hole::try_from(question.hole_cards.as_slice())?;
            let board = Board::try_from(question.board.as_slice())?;
            if board.street() != Some(stage) {
                return Err(anyhow::anyhow!(
                    "{} needs {} board cards, got {}",
                    stage,
                    stage.n_board(),
                    board.size()
                ));
            }
            if let Some(card) = hole.cards().into_iter().find(|c| board.cards().contains(c)) {
                return Err(anyhow::anyhow!("{} is both a hole card and on the board", card));
            }
            let history = streets(&question.action_history)?;
            history.validate(seat, stage)?;
            let solution = Solution::try_from(Weights::from(ref_solution))?;
            if solution.is_empty() {
                log::warn!("scenario {} has no reference solution", id);
            }
            Ok(Self {
                id,
                mode,
                seat,
                stage,
                stacks,
                pot: question.pot,
                history,
                hole,
                board,
                solution,
            })
        };
        parse().with_context(|| format!("invalid scenario {}", id))
    }
}

fn streets(history: &ApiHistory) -> anyhow::Result<History> {
    Street::all()
        .into_iter()
        .zip([&history.preflop, &history.flop, &history.turn, &history.river])
        .map(|(street, plays)| History::parse(plays).map(|plays| (street, plays)))
        .collect()
}

/// Redacted view: everything the learner sees, never the reference solution.
impl From<&Scenario> for ApiQuestion {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id,
            mode: scenario.mode.to_string(),
            position: scenario.seat.to_string(),
            stage: scenario.stage.name().to_string(),
            stacks: scenario.stacks.to_vec(),
            pot: scenario.pot,
            action_history: ApiHistory {
                preflop: scenario.history.entries(Street::Pref),
                flop: scenario.history.entries(Street::Flop),
                turn: scenario.history.entries(Street::Turn),
                river: scenario.history.entries(Street::Rive),
            },
            hole_cards: scenario.hole.entries(),
            board: Vec::<String>::from(&scenario.board),
        }
    }
}
