use super::*;

/// Why a learner's raw selection could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A raise without a size, or with a size outside 1/3, 1/2, 2/3, 1.
    InvalidSize(Option<String>),
    /// Anything other than call, raise, or fold.
    UnsupportedAction(String),
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize(None) => write!(f, "invalid size: raise requires a pot fraction"),
            Self::InvalidSize(Some(s)) => write!(f, "invalid size: {:?}", s),
            Self::UnsupportedAction(s) => write!(f, "unsupported action: {:?}", s),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Map a discrete selection plus optional pot fraction to its canonical action.
///
/// `size` is required for `raise` and ignored for `call` and `fold`.
pub fn normalize(kind: &str, size: Option<&str>) -> Result<Action, NormalizeError> {
    let size = size.map(str::trim).filter(|s| !s.is_empty());
    match (kind.trim().to_lowercase().as_str(), size) {
        ("call", _) => Ok(Action::Call),
        ("fold", _) => Ok(Action::Fold),
        ("raise", None) => Err(NormalizeError::InvalidSize(None)),
        ("raise", Some(token)) => Fraction::try_from(token)
            .map(Action::Raise)
            .map_err(|_| NormalizeError::InvalidSize(Some(token.to_string()))),
        _ => Err(NormalizeError::UnsupportedAction(kind.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_keys_concatenate_digits() {
        let keys = ["1/3", "1/2", "2/3", "1"]
            .map(|f| normalize("raise", Some(f)).unwrap().to_string());
        assert!(keys == ["raise13", "raise12", "raise23", "raise1"]);
    }
    #[test]
    fn raise_without_size() {
        assert!(normalize("raise", None) == Err(NormalizeError::InvalidSize(None)));
        assert!(normalize("raise", Some("  ")) == Err(NormalizeError::InvalidSize(None)));
    }
    #[test]
    fn raise_with_unsupported_size() {
        assert!(
            normalize("raise", Some("3/4"))
                == Err(NormalizeError::InvalidSize(Some("3/4".to_string())))
        );
    }
    #[test]
    fn passive_actions() {
        assert!(normalize("call", None) == Ok(Action::Call));
        assert!(normalize("FOLD", None) == Ok(Action::Fold));
        assert!(normalize(" call ", Some("1/2")) == Ok(Action::Call));
    }
    #[test]
    fn unsupported_kinds() {
        for kind in ["check", "shove", "bet", ""] {
            assert!(matches!(
                normalize(kind, None),
                Err(NormalizeError::UnsupportedAction(_))
            ));
        }
    }
}
