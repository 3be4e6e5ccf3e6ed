use super::*;
use gtl_cards::Street;
use std::collections::BTreeMap;

/// Prior moves of a hand, grouped by street.
///
/// Streets are keyed in order, so moves on a later street can never precede
/// moves on an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History(BTreeMap<Street, Vec<Play>>);

impl History {
    /// Moves on one street, in acting order.
    pub fn on(&self, street: Street) -> &[Play] {
        self.0.get(&street).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Every move in acting order across streets.
    pub fn plays(&self) -> impl Iterator<Item = &Play> {
        self.0.values().flatten()
    }
    /// Wire form of one street's moves.
    pub fn entries(&self, street: Street) -> Vec<String> {
        self.on(street).iter().map(|p| p.to_string()).collect()
    }
    /// Parses one street's wire moves.
    pub fn parse(plays: &[String]) -> anyhow::Result<Vec<Play>> {
        plays.iter().map(|s| Play::try_from(s.as_str())).collect()
    }

    /// Checks that this history can lead to `hero` deciding on `stage`.
    ///
    /// - nothing has happened on streets after `stage`
    /// - a folded seat never acts again, and `hero` has not folded
    /// - the current street does not end with a move by `hero`, whose turn it is
    pub fn validate(&self, hero: Seat, stage: Street) -> anyhow::Result<()> {
        if let Some(street) = self
            .0
            .iter()
            .filter(|(_, plays)| !plays.is_empty())
            .map(|(street, _)| *street)
            .find(|street| *street > stage)
        {
            return Err(anyhow::anyhow!(
                "history has moves on {} but the stage is {}",
                street,
                stage
            ));
        }
        let mut folded = Vec::<Seat>::new();
        for play in self.plays() {
            if folded.contains(&play.seat()) {
                return Err(anyhow::anyhow!("{} acts after folding", play.seat()));
            }
            if play.kind() == Kind::Fold {
                folded.push(play.seat());
            }
        }
        if folded.contains(&hero) {
            return Err(anyhow::anyhow!("{} has already folded", hero));
        }
        if self.on(stage).last().map(|p| p.seat()) == Some(hero) {
            return Err(anyhow::anyhow!("history runs past {}'s turn", hero));
        }
        Ok(())
    }
}

impl FromIterator<(Street, Vec<Play>)> for History {
    fn from_iter<I: IntoIterator<Item = (Street, Vec<Play>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, plays)| !plays.is_empty())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(streets: &[(Street, Vec<&str>)]) -> History {
        streets
            .iter()
            .map(|(street, plays)| {
                let plays = plays.iter().map(|s| s.to_string()).collect::<Vec<_>>();
                (*street, History::parse(&plays).unwrap())
            })
            .collect()
    }

    #[test]
    fn preflop_open_is_valid() {
        let h = history(&[(Street::Pref, vec!["UTG raise 3", "UTG1 fold", "CO call"])]);
        assert!(h.validate(Seat::Btn, Street::Pref).is_ok());
        assert!(h.on(Street::Flop).is_empty());
        assert!(h.entries(Street::Pref) == vec!["UTG raise 3", "UTG1 fold", "CO call"]);
    }
    #[test]
    fn rejects_future_streets() {
        let h = history(&[(Street::Pref, vec!["UTG raise 3"]), (Street::Flop, vec!["UTG check"])]);
        assert!(h.validate(Seat::Btn, Street::Pref).is_err());
        assert!(h.validate(Seat::Btn, Street::Flop).is_ok());
    }
    #[test]
    fn rejects_acting_after_fold() {
        let h = history(&[
            (Street::Pref, vec!["UTG fold", "CO raise 3"]),
            (Street::Flop, vec!["UTG check"]),
        ]);
        assert!(h.validate(Seat::Btn, Street::Flop).is_err());
    }
    #[test]
    fn rejects_folded_hero() {
        let h = history(&[(Street::Pref, vec!["UTG raise 3", "BTN fold", "SB call"])]);
        assert!(h.validate(Seat::Btn, Street::Pref).is_err());
    }
    #[test]
    fn rejects_history_past_hero_turn() {
        let h = history(&[(Street::Pref, vec!["UTG raise 3", "BTN call"])]);
        assert!(h.validate(Seat::Btn, Street::Pref).is_err());
        assert!(h.validate(Seat::Sb, Street::Pref).is_ok());
    }
    #[test]
    fn empty_streets_are_dropped() {
        let h = history(&[(Street::Pref, vec![]), (Street::Flop, vec![])]);
        assert!(h.plays().next().is_none());
        assert!(h == History::default());
    }
}
