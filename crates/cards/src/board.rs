use super::card::Card;
use super::street::Street;

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 distinct cards corresponding to preflop,
/// flop, turn, and river respectively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board(Vec<Card>);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Infers the street from board size.
    pub fn street(&self) -> Option<Street> {
        Street::all().into_iter().find(|s| s.n_board() == self.size())
    }
}

impl TryFrom<&[String]> for Board {
    type Error = anyhow::Error;
    fn try_from(cards: &[String]) -> Result<Self, Self::Error> {
        let cards = cards
            .iter()
            .map(|s| Card::try_from(s.as_str()))
            .collect::<Result<Vec<Card>, _>>()?;
        if cards.len() > 5 {
            return Err(anyhow::anyhow!("board holds at most 5 cards"));
        }
        if (1..cards.len()).any(|i| cards[..i].contains(&cards[i])) {
            return Err(anyhow::anyhow!("board repeats a card"));
        }
        Ok(Self(cards))
    }
}

impl From<&Board> for Vec<String> {
    fn from(board: &Board) -> Self {
        board.0.iter().map(|c| c.to_string()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
