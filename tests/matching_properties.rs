use gift_exchange::{
    Assignment, ExchangeEngine, ExchangeError, MatchSettings, MatchStrategy, Participant,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn strategy_strategy() -> impl Strategy<Value = MatchStrategy> {
    prop_oneof![Just(MatchStrategy::Sampling), Just(MatchStrategy::Constructive)]
}

fn check_pool(pool: &[Participant], assignments: &[Assignment]) -> Result<(), TestCaseError> {
    let by_name: HashMap<String, &Participant> =
        pool.iter().map(|p| (p.full_name(), p)).collect();

    let mut givers: Vec<&str> = assignments.iter().map(|a| a.giver.as_str()).collect();
    let mut receivers: Vec<&str> = assignments.iter().map(|a| a.receiver.as_str()).collect();
    let mut names: Vec<&str> = by_name.keys().map(String::as_str).collect();
    givers.sort();
    receivers.sort();
    names.sort();
    prop_assert_eq!(&givers, &names);
    prop_assert_eq!(&receivers, &names);

    for assignment in assignments {
        let giver = by_name[&assignment.giver];
        let receiver = by_name[&assignment.receiver];
        prop_assert_ne!(&assignment.giver, &assignment.receiver);
        prop_assert_ne!(giver.group_key(), receiver.group_key());
    }
    Ok(())
}

fn spans_groups(pool: &[Participant]) -> bool {
    pool.len() < 2 || pool.iter().any(|p| p.group_key() != pool[0].group_key())
}

fn is_feasible(pool: &[Participant]) -> bool {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for person in pool {
        *counts.entry(person.group_key()).or_default() += 1;
    }
    counts.values().all(|&count| count * 2 <= pool.len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_assignments_are_constrained_derangements(
        // 每個家族的人數；至少兩個家族，且沒有家族超過半數
        group_sizes in prop::collection::vec(1usize..4, 2..6),
        core_group_count in 0usize..6,
        strategy in strategy_strategy(),
        seed in any::<u64>(),
    ) {
        let total: usize = group_sizes.iter().sum();
        prop_assume!(group_sizes.iter().all(|&size| size * 2 <= total));

        let mut engine = ExchangeEngine::with_settings(
            Vec::<String>::new(),
            MatchSettings { strategy, seed: Some(seed), ..MatchSettings::default() },
        );

        let core_group_count = core_group_count.min(group_sizes.len());
        let core_names: Vec<String> =
            (0..core_group_count).map(|group| format!("Family{}", group)).collect();
        engine.set_core_families(&core_names);

        for (group, &size) in group_sizes.iter().enumerate() {
            for member in 0..size {
                engine
                    .add_person(&format!("Person{}", member), &format!("Family{}", group), None)
                    .unwrap();
            }
        }

        let (core_pool, other_pool) = engine.pools();
        match engine.shuffle_and_assign() {
            Ok(assignments) => {
                let (core_part, other_part) = assignments.split_at(core_pool.len());
                check_pool(&core_pool, core_part)?;
                check_pool(&other_pool, other_part)?;
            }
            Err(ExchangeError::SingletonPool { .. }) => {
                prop_assert!(core_pool.len() == 1 || other_pool.len() == 1);
            }
            Err(ExchangeError::UnmatchablePool { .. }) => {
                prop_assert!(!spans_groups(&core_pool) || !spans_groups(&other_pool));
            }
            Err(ExchangeError::AssignmentFailure { .. }) => {
                // 建構法只會在真的無解時失敗
                if strategy == MatchStrategy::Constructive {
                    prop_assert!(!is_feasible(&core_pool) || !is_feasible(&other_pool));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_normalized_core_families_are_stable(
        names in prop::collection::vec("[ A-Za-z]{0,8}", 0..8),
    ) {
        let mut engine = ExchangeEngine::default();
        engine.set_core_families(&names);
        let normalized = engine.core_families();

        engine.set_core_families(&normalized);
        prop_assert_eq!(engine.core_families(), normalized);
    }
}
