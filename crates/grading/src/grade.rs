use super::*;
use gtl_gameplay::Action;

/// Grading failures. Only a data fault in the stored scenario can fail grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeError {
    NoReferenceSolution,
}

impl std::fmt::Display for GradeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoReferenceSolution => write!(f, "scenario has no reference solution"),
        }
    }
}

impl std::error::Error for GradeError {}

/// Scores a canonical action against a reference mix.
///
/// An action absent from the mix grades as incorrect rather than failing.
pub fn grade(solution: &Solution, action: &Action) -> Result<(Verdict, Breakdown), GradeError> {
    if solution.is_empty() {
        return Err(GradeError::NoReferenceSolution);
    }
    let breakdown = Breakdown::from(solution);
    let verdict = Verdict::from(breakdown.tier_of(action));
    Ok((verdict, breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtl_core::Arbitrary;
    use gtl_gameplay::Fraction;
    use gtl_gameplay::Key;
    use std::collections::BTreeSet;

    fn solution(weights: &[(&str, f32)]) -> Solution {
        Solution::try_from(weights.iter().copied().collect::<Weights>()).unwrap()
    }

    #[test]
    fn empty_solution_fails() {
        for action in Action::all() {
            assert!(grade(&Solution::default(), &action) == Err(GradeError::NoReferenceSolution));
        }
    }
    #[test]
    fn dominant_action_is_correct() {
        let s = solution(&[("fold", 100.0)]);
        let (verdict, _) = grade(&s, &Action::Fold).unwrap();
        assert!(verdict == Verdict::Correct);
    }
    #[test]
    fn mixed_action_is_partial() {
        let s = solution(&[("call", 40.0), ("raise12", 60.0)]);
        assert!(grade(&s, &Action::Call).unwrap().0 == Verdict::Partial);
        assert!(grade(&s, &Action::Raise(Fraction::Half)).unwrap().0 == Verdict::Correct);
    }
    #[test]
    fn rare_and_absent_actions_are_incorrect() {
        let s = solution(&[("call", 20.0), ("raise80", 80.0)]);
        let (verdict, breakdown) = grade(&s, &Action::Raise(Fraction::Pot)).unwrap();
        assert!(verdict == Verdict::Incorrect);
        assert!(breakdown.tier_of(&Action::Raise(Fraction::Pot)) == None);
        assert!(grade(&s, &Action::Call).unwrap().0 == Verdict::Incorrect);
    }
    #[test]
    fn idempotent() {
        for _ in 0..64 {
            let s = Solution::try_from(Weights::random()).unwrap();
            let action = Action::random();
            assert!(grade(&s, &action) == grade(&s, &action));
        }
    }
    #[test]
    fn breakdown_partitions_solution() {
        for _ in 0..128 {
            let s = Solution::try_from(Weights::random()).unwrap();
            let Ok((_, breakdown)) = grade(&s, &Action::random()) else {
                continue;
            };
            let expected = s.iter().map(|(k, _)| k.clone()).collect::<BTreeSet<Key>>();
            let listed = breakdown.iter().map(|(k, _)| k.clone()).collect::<Vec<Key>>();
            let unique = listed.iter().cloned().collect::<BTreeSet<Key>>();
            assert!(listed.len() == unique.len());
            assert!(unique == expected);
        }
    }
    #[test]
    fn verdict_monotone_in_tier() {
        for _ in 0..128 {
            let s = Solution::try_from(Weights::random()).unwrap();
            for a in Action::all() {
                for b in Action::all() {
                    let (ta, tb) = (s.tier(&a), s.tier(&b));
                    let better = match (ta, tb) {
                        (Some(ta), Some(tb)) => ta < tb,
                        (Some(_), None) => true,
                        _ => false,
                    };
                    if better {
                        let (va, _) = grade(&s, &a).unwrap();
                        let (vb, _) = grade(&s, &b).unwrap();
                        assert!(va >= vb);
                    }
                }
            }
        }
    }
}
