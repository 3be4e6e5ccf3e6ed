use super::Tier;

/// Graded outcome of a learner's action. Wire values are 0, 1, 2.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Incorrect = 0,
    Partial = 1,
    Correct = 2,
}

impl Verdict {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Incorrect => "incorrect",
            Self::Partial => "partially correct",
            Self::Correct => "correct",
        }
    }
}

/// Tier 1 is fully correct, tier 2 partially; tier 3 and absent actions are wrong.
impl From<Option<Tier>> for Verdict {
    fn from(tier: Option<Tier>) -> Self {
        match tier {
            Some(Tier::High) => Self::Correct,
            Some(Tier::Medium) => Self::Partial,
            Some(Tier::Low) | None => Self::Incorrect,
        }
    }
}

impl From<Verdict> for u8 {
    fn from(verdict: Verdict) -> Self {
        verdict as u8
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), u8::from(*self))
    }
}
