/// The four betting rounds in Texas Hold'em.
///
/// A scenario's `stage` is a street. Streets are totally ordered, and the
/// number of community cards on the board is fixed by the street.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Wire name, as used for `stage` and `action_history` keys.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pref => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::Rive => "river",
        }
    }
    /// Community cards visible on this street.
    pub const fn n_board(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "preflop" | "pref" | "p" => Ok(Self::Pref),
            "flop" | "f" => Ok(Self::Flop),
            "turn" | "t" => Ok(Self::Turn),
            "river" | "rive" | "r" => Ok(Self::Rive),
            _ => Err(anyhow::anyhow!("unknown street: {}", s)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
