use super::*;
use gtl_core::Arbitrary;

/// A learner's decision in canonical form.
///
/// The closed variant replaces the free-form string keys used on the wire;
/// conversion to and from those keys happens only at the boundary through
/// [`Display`](std::fmt::Display) and [`TryFrom<&str>`].
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Call,
    Fold,
    Raise(Fraction),
}

impl Action {
    /// Every canonical action.
    pub fn all() -> Vec<Self> {
        [Self::Call, Self::Fold]
            .into_iter()
            .chain(Fraction::all().map(Self::Raise))
            .collect()
    }
    /// Human-readable description (e.g., "Raise 1/2 pot").
    pub fn label(&self) -> String {
        match self {
            Self::Call => format!("Call"),
            Self::Fold => format!("Fold"),
            Self::Raise(f) => format!("Raise {}", f.label()),
        }
    }
}

/// Parses the wire form of a learner action.
///
/// Accepts the canonical key (`"call"`, `"raise12"`) or a kind word followed
/// by a fraction token (`"raise 1/2"`).
impl TryFrom<&str> for Action {
    type Error = NormalizeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        match parts.as_slice() {
            [kind, size] => normalize(kind, Some(size)),
            [key] => {
                let key = key.to_lowercase();
                match key.strip_prefix("raise") {
                    None => normalize(&key, None),
                    Some("") => Err(NormalizeError::InvalidSize(None)),
                    Some(digits) if digits.chars().all(|c| c.is_ascii_digit()) => {
                        Fraction::from_digits(digits)
                            .map(Self::Raise)
                            .ok_or_else(|| NormalizeError::InvalidSize(Some(digits.to_string())))
                    }
                    Some(token) if token.starts_with(|c: char| c.is_ascii_digit()) => {
                        Fraction::try_from(token)
                            .map(Self::Raise)
                            .map_err(|_| NormalizeError::InvalidSize(Some(token.to_string())))
                    }
                    Some(_) => Err(NormalizeError::UnsupportedAction(key.clone())),
                }
            }
            _ => Err(NormalizeError::UnsupportedAction(s.trim().to_string())),
        }
    }
}

impl Arbitrary for Action {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Call,
            1 => Self::Fold,
            _ => Self::Raise(Fraction::random()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Fold => write!(f, "fold"),
            Self::Raise(fraction) => write!(f, "raise{}", fraction.digits()),
        }
    }
}
