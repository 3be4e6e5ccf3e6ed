use super::*;

/// An action key as it appears in a reference solution.
///
/// Keys that parse into a canonical [`Action`] are `Known`; anything else
/// (a legacy unsized `"raise"`, an off-grid `"raise80"`) is kept verbatim as
/// `Foreign` so it can still be displayed, but it never matches a learner's
/// action.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Key {
    Known(Action),
    Foreign(String),
}

impl Key {
    /// True if this key names exactly the given learner action.
    pub fn matches(&self, action: &Action) -> bool {
        matches!(self, Self::Known(known) if known == action)
    }
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign(_))
    }
}

impl From<Action> for Key {
    fn from(action: Action) -> Self {
        Self::Known(action)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match Action::try_from(s) {
            Ok(action) if s.split_whitespace().count() == 1 => Self::Known(action),
            _ => Self::Foreign(s.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Known(action) => write!(f, "{}", action),
            Self::Foreign(raw) => write!(f, "{}", raw),
        }
    }
}
