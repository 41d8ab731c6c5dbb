use crate::domain::model::{Assignment, Participant};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MAX_ATTEMPTS: usize = 2000;
pub const DEFAULT_MAX_RETRIES: usize = 10;

/// How a single pool's giver -> receiver permutation is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Shuffle receivers and reject until every pair is allowed. Uniform over
    /// valid permutations but bounded by `max_attempts`.
    Sampling,
    /// Build the permutation giver by giver, only choosing receivers that keep
    /// a complete matching possible. Always succeeds when one exists.
    #[default]
    Constructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub strategy: MatchStrategy,
    pub max_attempts: usize,
    pub max_retries: usize,
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_retries: DEFAULT_MAX_RETRIES,
            seed: None,
        }
    }
}

/// Produce an assignment for one pool. Givers keep the pool order.
///
/// Returns `None` when no valid permutation was found; an empty pool yields an
/// empty list.
pub fn generate_assignments<R: Rng + ?Sized>(
    pool: &[Participant],
    settings: &MatchSettings,
    rng: &mut R,
) -> Option<Vec<Assignment>> {
    if pool.is_empty() {
        return Some(Vec::new());
    }

    match settings.strategy {
        MatchStrategy::Sampling => sample(pool, settings.max_attempts, rng),
        MatchStrategy::Constructive => construct(pool, rng),
    }
}

/// Every pool member of size >= 2 must span at least two family groups.
pub fn is_pool_matchable(pool: &[Participant]) -> bool {
    match pool.len() {
        0 => true,
        1 => false,
        _ => {
            let first = pool[0].group_key();
            pool.iter().any(|person| person.group_key() != first)
        }
    }
}

fn sample<R: Rng + ?Sized>(
    pool: &[Participant],
    max_attempts: usize,
    rng: &mut R,
) -> Option<Vec<Assignment>> {
    let mut receivers: Vec<&Participant> = pool.iter().collect();

    for attempt in 1..=max_attempts {
        receivers.shuffle(rng);

        let valid = pool
            .iter()
            .zip(&receivers)
            .all(|(giver, receiver)| giver.can_give_to(receiver));

        if valid {
            tracing::debug!("Pool of {} matched after {} attempts", pool.len(), attempt);
            return Some(
                pool.iter()
                    .zip(&receivers)
                    .map(|(giver, receiver)| Assignment::new(giver, receiver))
                    .collect(),
            );
        }
    }

    tracing::debug!(
        "No valid permutation for pool of {} within {} attempts",
        pool.len(),
        max_attempts
    );
    None
}

fn construct<R: Rng + ?Sized>(pool: &[Participant], rng: &mut R) -> Option<Vec<Assignment>> {
    let size = pool.len();
    let groups: Vec<String> = pool.iter().map(Participant::group_key).collect();

    let mut givers_left: HashMap<&str, usize> = HashMap::new();
    for group in &groups {
        *givers_left.entry(group.as_str()).or_default() += 1;
    }
    let mut receivers_left = givers_left.clone();

    // Hall 條件：每個家族的給予者 + 接收者數量不得超過剩餘人數
    if givers_left.values().any(|&count| count * 2 > size) {
        tracing::debug!("Pool of {} has a family group larger than half the pool", size);
        return None;
    }

    let mut order: Vec<usize> = (0..size).collect();
    order.shuffle(rng);
    let mut open: Vec<usize> = (0..size).collect();
    let mut receiver_of: Vec<Option<usize>> = vec![None; size];

    for (step, &giver) in order.iter().enumerate() {
        let remaining = size - step - 1;
        let giver_group = groups[giver].as_str();
        decrement(&mut givers_left, giver_group);

        open.shuffle(rng);
        let slot = open.iter().position(|&candidate| {
            let candidate_group = groups[candidate].as_str();
            candidate_group != giver_group
                && pool[giver].can_give_to(&pool[candidate])
                && keeps_matching(&givers_left, &receivers_left, candidate_group, remaining)
        })?;

        let receiver = open.swap_remove(slot);
        decrement(&mut receivers_left, groups[receiver].as_str());
        receiver_of[giver] = Some(receiver);
    }

    pool.iter()
        .zip(receiver_of)
        .map(|(giver, receiver)| receiver.map(|index| Assignment::new(giver, &pool[index])))
        .collect()
}

fn decrement(counts: &mut HashMap<&str, usize>, group: &str) {
    if let Some(count) = counts.get_mut(group) {
        *count = count.saturating_sub(1);
    }
}

fn keeps_matching(
    givers_left: &HashMap<&str, usize>,
    receivers_left: &HashMap<&str, usize>,
    taken_group: &str,
    remaining: usize,
) -> bool {
    givers_left.iter().all(|(group, &givers)| {
        let receivers = receivers_left.get(group).copied().unwrap_or(0)
            - usize::from(*group == taken_group);
        givers + receivers <= remaining
    })
}
