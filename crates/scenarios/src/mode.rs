/// Practice mode a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Mode {
    #[default]
    Comprehensive,
    Value,
    Bluff,
}

impl Mode {
    pub const fn all() -> [Self; 3] {
        [Self::Comprehensive, Self::Value, Self::Bluff]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::Value => "value",
            Self::Bluff => "bluff",
        }
    }
}

/// English tags, plus the localized labels older clients send.
impl TryFrom<&str> for Mode {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "comprehensive" | "综合练习" => Ok(Self::Comprehensive),
            "value" | "价值练习" => Ok(Self::Value),
            "bluff" | "bluff练习" => Ok(Self::Bluff),
            _ => Err(anyhow::anyhow!("unknown mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_name() {
        for mode in Mode::all() {
            assert!(Mode::try_from(mode.name()).unwrap() == mode);
        }
    }
    #[test]
    fn localized_aliases() {
        assert!(Mode::try_from("综合练习").unwrap() == Mode::Comprehensive);
        assert!(Mode::try_from("价值练习").unwrap() == Mode::Value);
        assert!(Mode::try_from("Bluff练习").unwrap() == Mode::Bluff);
        assert!(Mode::try_from(" VALUE ").unwrap() == Mode::Value);
        assert!(Mode::try_from("tournament").is_err());
    }
}
