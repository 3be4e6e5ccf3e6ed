use super::*;
use gtl_core::Chips;

/// The kind of a prior move in a hand's history.
///
/// Broader than [`Action`]: earlier actors may check, and history sizes are
/// chip amounts rather than pot fractions.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Kind {
    Fold,
    Check,
    Call,
    Raise,
}

impl Kind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Raise => "raise",
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "fold" => Ok(Self::Fold),
            "check" => Ok(Self::Check),
            "call" => Ok(Self::Call),
            "raise" => Ok(Self::Raise),
            _ => Err(anyhow::anyhow!("unknown move: {}", s)),
        }
    }
}

/// One prior move: who acted, how, and for how many big blinds.
///
/// Wire form is `"<SEAT> <kind> [<size>]"`, e.g. `"UTG raise 3"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Play {
    seat: Seat,
    kind: Kind,
    size: Option<Chips>,
}

impl Play {
    pub fn new(seat: Seat, kind: Kind, size: Option<Chips>) -> Self {
        Self { seat, kind, size }
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn size(&self) -> Option<Chips> {
        self.size
    }
}

impl TryFrom<&str> for Play {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        let (seat, kind, size) = match parts.as_slice() {
            [seat, kind] => (seat, kind, None),
            [seat, kind, size] => (seat, kind, Some(size.parse::<Chips>()?)),
            _ => return Err(anyhow::anyhow!("malformed move: {:?}", s)),
        };
        match size {
            Some(size) if !size.is_finite() || size < 0.0 => {
                Err(anyhow::anyhow!("negative move size: {:?}", s))
            }
            _ => Ok(Self::new(Seat::try_from(*seat)?, Kind::try_from(*kind)?, size)),
        }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.size {
            Some(size) => write!(f, "{} {} {}", self.seat, self.kind.name(), size),
            None => write!(f, "{} {}", self.seat, self.kind.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_moves() {
        let play = Play::try_from("UTG raise 3").unwrap();
        assert!(play.seat() == Seat::Utg);
        assert!(play.kind() == Kind::Raise);
        assert!(play.size() == Some(3.0));
        assert!(Play::try_from("CO call").unwrap().size() == None);
    }
    #[test]
    fn displays_wire_moves() {
        assert!(Play::try_from("UTG raise 3").unwrap().to_string() == "UTG raise 3");
        assert!(Play::try_from("sb check").unwrap().to_string() == "SB check");
        assert!(Play::try_from("BTN raise 7.5").unwrap().to_string() == "BTN raise 7.5");
    }
    #[test]
    fn rejects_malformed_moves() {
        assert!(Play::try_from("UTG").is_err());
        assert!(Play::try_from("UTG shove 100").is_err());
        assert!(Play::try_from("XX call").is_err());
        assert!(Play::try_from("UTG raise -2").is_err());
        assert!(Play::try_from("UTG raise three").is_err());
    }
}
