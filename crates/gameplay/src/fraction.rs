/// Pot-relative raise size a learner may choose.
///
/// The token form (`"1/3"`) is what clients submit; the digit form (`"13"`)
/// is the token with its separator removed and is what reference-solution
/// keys are built from. Both must stay bit-for-bit stable.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Fraction {
    OneThird,
    Half,
    TwoThirds,
    Pot,
}

impl Fraction {
    /// Every supported size, smallest first.
    pub const fn all() -> [Self; 4] {
        [Self::OneThird, Self::Half, Self::TwoThirds, Self::Pot]
    }
    /// Client-facing token.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::OneThird => "1/3",
            Self::Half => "1/2",
            Self::TwoThirds => "2/3",
            Self::Pot => "1",
        }
    }
    /// Token with the separator removed.
    pub const fn digits(&self) -> &'static str {
        match self {
            Self::OneThird => "13",
            Self::Half => "12",
            Self::TwoThirds => "23",
            Self::Pot => "1",
        }
    }
    /// Human-readable sizing.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneThird => "1/3 pot",
            Self::Half => "1/2 pot",
            Self::TwoThirds => "2/3 pot",
            Self::Pot => "pot",
        }
    }
    /// Inverse of [`Fraction::digits`].
    pub fn from_digits(digits: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.digits() == digits)
    }
}

impl TryFrom<&str> for Fraction {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|f| f.token() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("unsupported raise size: {}", s))
    }
}

impl gtl_core::Arbitrary for Fraction {
    fn random() -> Self {
        Self::all()[rand::random_range(0..4)]
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_drop_separator() {
        for fraction in Fraction::all() {
            assert!(fraction.digits() == fraction.token().replace('/', ""));
        }
    }
    #[test]
    fn bijective_digits() {
        for fraction in Fraction::all() {
            assert!(Some(fraction) == Fraction::from_digits(fraction.digits()));
        }
    }
    #[test]
    fn rejects_unsupported() {
        assert!(Fraction::try_from("3/4").is_err());
        assert!(Fraction::try_from("1/1").is_err());
        assert!(Fraction::try_from("").is_err());
    }
}
