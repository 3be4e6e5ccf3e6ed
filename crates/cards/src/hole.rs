use super::card::Card;
use super::rank::Rank;

/// The learner's private holding.
///
/// Scenarios either deal two concrete cards, abstract the holding to a
/// hand class (`AKs`, `QQ`, `T9o`), or hide it entirely.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Hole {
    Hidden,
    Cards(Card, Card),
    Class(Rank, Rank, Suitedness),
}

/// Whether a hand class is suited, offsuit, or a pocket pair.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Suitedness {
    Pair,
    Suited,
    Offsuit,
}

impl Hole {
    /// Concrete cards, if any were dealt.
    pub fn cards(&self) -> Vec<Card> {
        match *self {
            Self::Cards(a, b) => vec![a, b],
            _ => vec![],
        }
    }
    /// Wire entries: 0, 1, or 2 strings.
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Hidden => vec![],
            Self::Cards(a, b) => vec![a.to_string(), b.to_string()],
            Self::Class(..) => vec![self.to_string()],
        }
    }
    fn class(s: &str) -> anyhow::Result<Self> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        let (hi, lo) = match chars.as_slice() {
            [a, b] | [a, b, _] => (Rank::try_from(*a)?, Rank::try_from(*b)?),
            _ => return Err(anyhow::anyhow!("invalid hand class: {}", s)),
        };
        let (hi, lo) = (hi.max(lo), hi.min(lo));
        match (hi == lo, chars.get(2).map(|c| c.to_ascii_lowercase())) {
            (true, None) => Ok(Self::Class(hi, lo, Suitedness::Pair)),
            (false, Some('s')) => Ok(Self::Class(hi, lo, Suitedness::Suited)),
            (false, Some('o')) => Ok(Self::Class(hi, lo, Suitedness::Offsuit)),
            _ => Err(anyhow::anyhow!("invalid hand class: {}", s)),
        }
    }
}

impl TryFrom<&[String]> for Hole {
    type Error = anyhow::Error;
    fn try_from(entries: &[String]) -> Result<Self, Self::Error> {
        match entries {
            [] => Ok(Self::Hidden),
            [class] => Self::class(class),
            [a, b] => {
                let a = Card::try_from(a.as_str())?;
                let b = Card::try_from(b.as_str())?;
                match a == b {
                    true => Err(anyhow::anyhow!("hole cards repeat {}", a)),
                    false => Ok(Self::Cards(a, b)),
                }
            }
            _ => Err(anyhow::anyhow!("hole holds at most 2 entries")),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "??"),
            Self::Cards(a, b) => write!(f, "{}{}", a, b),
            Self::Class(hi, lo, Suitedness::Pair) => write!(f, "{}{}", hi, lo),
            Self::Class(hi, lo, Suitedness::Suited) => write!(f, "{}{}s", hi, lo),
            Self::Class(hi, lo, Suitedness::Offsuit) => write!(f, "{}{}o", hi, lo),
        }
    }
}
