/// One of the six fixed seats at a six-max table, in acting order preflop.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    Utg = 0,
    Utg1 = 1,
    Co = 2,
    Btn = 3,
    Sb = 4,
    Bb = 5,
}

impl Seat {
    /// All seats in table order; also the index order of `stacks`.
    pub const fn all() -> [Self; gtl_core::N] {
        [Self::Utg, Self::Utg1, Self::Co, Self::Btn, Self::Sb, Self::Bb]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Utg => "UTG",
            Self::Utg1 => "UTG1",
            Self::Co => "CO",
            Self::Btn => "BTN",
            Self::Sb => "SB",
            Self::Bb => "BB",
        }
    }
}

impl TryFrom<&str> for Seat {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "UTG" => Ok(Self::Utg),
            "UTG1" | "UTG+1" => Ok(Self::Utg1),
            "CO" => Ok(Self::Co),
            "BTN" => Ok(Self::Btn),
            "SB" => Ok(Self::Sb),
            "BB" => Ok(Self::Bb),
            _ => Err(anyhow::anyhow!("unknown seat: {}", s)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_name() {
        for seat in Seat::all() {
            assert!(seat == Seat::try_from(seat.name()).unwrap());
        }
    }
    #[test]
    fn table_order() {
        assert!(Seat::all().iter().enumerate().all(|(i, s)| s.index() == i));
    }
    #[test]
    fn case_insensitive() {
        assert!(Seat::try_from("btn").unwrap() == Seat::Btn);
        assert!(Seat::try_from("HJ").is_err());
    }
}
