use super::*;
use crate::policy::Selector;
use gtl_core::QuestionId;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Why a store could not produce a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(QuestionId),
    EmptyPool(Mode),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no scenario with id {}", id),
            Self::EmptyPool(mode) => write!(f, "no scenarios in {} mode", mode),
        }
    }
}

impl std::error::Error for StoreError {}

/// Immutable scenarios, bucketed by mode, plus the selection state.
///
/// Pools hold ids in ascending order. The selector is the only mutable
/// state; every pick reads and advances it under one lock.
#[derive(Debug)]
pub struct Store {
    scenarios: BTreeMap<QuestionId, Arc<Scenario>>,
    pools: BTreeMap<Mode, Vec<QuestionId>>,
    policy: Policy,
    selector: Mutex<Selector>,
}

impl Store {
    /// Builds a store from validated scenarios; ids must be unique.
    pub fn new(scenarios: Vec<Scenario>, policy: Policy) -> anyhow::Result<Self> {
        let mut map = BTreeMap::<QuestionId, Arc<Scenario>>::new();
        for scenario in scenarios {
            let id = scenario.id();
            if map.insert(id, Arc::new(scenario)).is_some() {
                return Err(anyhow::anyhow!("duplicate scenario id {}", id));
            }
        }
        let mut pools = BTreeMap::<Mode, Vec<QuestionId>>::new();
        for (id, scenario) in map.iter() {
            pools.entry(scenario.mode()).or_default().push(*id);
        }
        Ok(Self {
            scenarios: map,
            pools,
            policy,
            selector: Mutex::new(Selector::from(policy)),
        })
    }

    /// Serves a scenario of `mode` according to the store's policy.
    pub fn get_scenario(&self, mode: Mode) -> Result<Arc<Scenario>, StoreError> {
        let pool = self.pool(mode)?;
        let id = self.selector().pick(mode, pool);
        self.get_scenario_by_id(id)
    }

    /// Serves a scenario of `mode` other than `current`.
    ///
    /// `current` must exist in the store, in any mode. Round-robin returns
    /// the next id above `current`, wrapping to the smallest.
    pub fn get_next_scenario(&self, current: QuestionId, mode: Mode) -> Result<Arc<Scenario>, StoreError> {
        self.get_scenario_by_id(current)?;
        let candidates = self
            .pool(mode)?
            .iter()
            .copied()
            .filter(|id| *id != current)
            .collect::<Vec<QuestionId>>();
        if candidates.is_empty() {
            return Err(StoreError::EmptyPool(mode));
        }
        let id = self.selector().next(current, &candidates);
        self.get_scenario_by_id(id)
    }

    pub fn get_scenario_by_id(&self, id: QuestionId) -> Result<Arc<Scenario>, StoreError> {
        self.scenarios
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }
    pub fn policy(&self) -> Policy {
        self.policy
    }
    /// Scenario count per mode; modes without scenarios are omitted.
    pub fn modes(&self) -> BTreeMap<Mode, usize> {
        self.pools
            .iter()
            .map(|(mode, pool)| (*mode, pool.len()))
            .collect()
    }

    fn pool(&self, mode: Mode) -> Result<&[QuestionId], StoreError> {
        self.pools
            .get(&mode)
            .map(Vec::as_slice)
            .filter(|pool| !pool.is_empty())
            .ok_or(StoreError::EmptyPool(mode))
    }
    fn selector(&self) -> std::sync::MutexGuard<'_, Selector> {
        self.selector.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(policy: Policy) -> Store {
        Store::sample(policy).unwrap()
    }

    #[test]
    fn unknown_current_id() {
        let store = store(Policy::RoundRobin);
        assert!(store.get_next_scenario(999, Mode::Value).unwrap_err() == StoreError::NotFound(999));
    }
    #[test]
    fn unknown_id() {
        let store = store(Policy::RoundRobin);
        assert!(store.get_scenario_by_id(999).unwrap_err() == StoreError::NotFound(999));
    }
    #[test]
    fn empty_pool() {
        let store = Store::new(vec![], Policy::RoundRobin).unwrap();
        assert!(store.get_scenario(Mode::Bluff).unwrap_err() == StoreError::EmptyPool(Mode::Bluff));
    }
    #[test]
    fn round_robin_visits_each_once_per_cycle() {
        let store = store(Policy::RoundRobin);
        for (mode, n) in store.modes() {
            let mut seen = (0..n)
                .map(|_| store.get_scenario(mode).unwrap().id())
                .collect::<Vec<QuestionId>>();
            seen.sort();
            seen.dedup();
            assert!(seen.len() == n);
            assert!(store.get_scenario(mode).unwrap().id() == seen[0]);
        }
    }
    #[test]
    fn served_scenarios_match_mode() {
        let store = store(Policy::Random { seed: 1 });
        for mode in store.modes().into_keys() {
            for _ in 0..10 {
                assert!(store.get_scenario(mode).unwrap().mode() == mode);
            }
        }
    }
    #[test]
    fn next_never_repeats_current() {
        let store = store(Policy::Random { seed: 3 });
        let current = store.get_scenario(Mode::Comprehensive).unwrap().id();
        for _ in 0..20 {
            let next = store.get_next_scenario(current, Mode::Comprehensive).unwrap();
            assert!(next.id() != current);
            assert!(next.mode() == Mode::Comprehensive);
        }
    }
    #[test]
    fn next_with_only_current_left() {
        let store = store(Policy::RoundRobin);
        let only = store.get_scenario(Mode::Bluff).unwrap().id();
        assert!(store.modes()[&Mode::Bluff] == 1);
        assert!(store.get_next_scenario(only, Mode::Bluff).unwrap_err() == StoreError::EmptyPool(Mode::Bluff));
    }
    #[test]
    fn seeded_selection_reproduces() {
        let a = store(Policy::Random { seed: 42 });
        let b = store(Policy::Random { seed: 42 });
        for _ in 0..20 {
            assert!(a.get_scenario(Mode::Value).unwrap().id() == b.get_scenario(Mode::Value).unwrap().id());
        }
    }
    #[test]
    fn round_robin_is_fair_across_threads() {
        let store = Arc::new(store(Policy::RoundRobin));
        let handles = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..1000)
                        .map(|_| store.get_scenario(Mode::Comprehensive).unwrap().id())
                        .collect::<Vec<QuestionId>>()
                })
            })
            .collect::<Vec<_>>();
        let mut counts = BTreeMap::<QuestionId, usize>::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                *counts.entry(id).or_default() += 1;
            }
        }
        assert!(counts.len() == store.modes()[&Mode::Comprehensive]);
        assert!(counts.values().all(|n| *n == 8000 / counts.len()));
    }
    #[test]
    fn duplicate_ids_are_rejected() {
        let store = store(Policy::RoundRobin);
        let one = store.get_scenario_by_id(1).unwrap();
        let scenarios = vec![Scenario::clone(&one), Scenario::clone(&one)];
        assert!(Store::new(scenarios, Policy::RoundRobin).is_err());
    }
}
