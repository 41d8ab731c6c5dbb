use crate::core::families::CoreFamilies;
use crate::core::matcher::{generate_assignments, is_pool_matchable, MatchSettings};
use crate::domain::model::{Assignment, Participant, PoolKind};
use crate::utils::error::{ExchangeError, Result};
use crate::utils::validation::validate_person_name;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Owns the roster and the core family configuration and draws the
/// giver -> receiver assignments.
pub struct ExchangeEngine {
    people: Vec<Participant>,
    core_families: CoreFamilies,
    settings: MatchSettings,
    rng: ChaCha8Rng,
}

impl ExchangeEngine {
    pub fn new<I, S>(core_families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_settings(core_families, MatchSettings::default())
    }

    pub fn with_settings<I, S>(core_families: I, settings: MatchSettings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            people: Vec::new(),
            core_families: CoreFamilies::new(core_families),
            settings,
            rng,
        }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn set_core_families<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.core_families.replace(names);
        tracing::debug!("Core families set to: {}", self.core_families.display());
    }

    pub fn core_families(&self) -> Vec<String> {
        self.core_families.names()
    }

    pub fn core_families_display(&self) -> String {
        self.core_families.display()
    }

    pub fn is_core_last_name(&self, last_name: &str) -> bool {
        self.core_families.contains(last_name)
    }

    pub fn is_name_taken(&self, first_name: &str, last_name: &str) -> bool {
        self.people
            .iter()
            .any(|person| person.has_name(first_name, last_name))
    }

    pub fn add_person(
        &mut self,
        first_name: &str,
        last_name: &str,
        family_group: Option<&str>,
    ) -> Result<Participant> {
        if self.is_name_taken(first_name, last_name) {
            return Err(ExchangeError::DuplicateName {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            });
        }

        let person = Participant::new(first_name, last_name, family_group);
        tracing::debug!("Added {}", person);
        self.people.push(person.clone());
        Ok(person)
    }

    /// `add_person` with the caller-side check that both names are present.
    pub fn add_validated_person(
        &mut self,
        first_name: &str,
        last_name: &str,
        family_group: Option<&str>,
    ) -> Result<Participant> {
        validate_person_name(first_name, last_name)?;
        self.add_person(first_name, last_name, family_group)
    }

    /// Out-of-range indices are ignored.
    pub fn remove_person(&mut self, index: usize) -> Option<Participant> {
        if index < self.people.len() {
            let removed = self.people.remove(index);
            tracing::debug!("Removed {}", removed);
            Some(removed)
        } else {
            None
        }
    }

    pub fn people(&self) -> Vec<Participant> {
        self.people.clone()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Split the roster into the core and non-core pools, preserving order.
    pub fn pools(&self) -> (Vec<Participant>, Vec<Participant>) {
        self.people
            .iter()
            .cloned()
            .partition(|person| self.core_families.contains(&person.last_name))
    }

    pub fn shuffle_and_assign(&mut self) -> Result<Vec<Assignment>> {
        if self.people.len() < 2 {
            return Err(ExchangeError::InsufficientParticipants {
                count: self.people.len(),
            });
        }

        let (core_pool, other_pool) = self.pools();
        tracing::debug!(
            "Pools split: {} core ({}), {} other",
            core_pool.len(),
            self.core_families.display(),
            other_pool.len()
        );

        for (kind, pool) in [(PoolKind::Core, &core_pool), (PoolKind::Other, &other_pool)] {
            if pool.len() == 1 {
                return Err(ExchangeError::SingletonPool {
                    pool: kind,
                    core_families: self.core_families.display(),
                });
            }
        }

        for (kind, pool) in [(PoolKind::Core, &core_pool), (PoolKind::Other, &other_pool)] {
            if !is_pool_matchable(pool) {
                return Err(ExchangeError::UnmatchablePool { pool: kind });
            }
        }

        let mut core_assignments = None;
        let mut other_assignments = None;

        // 只重試尚未成功的池
        for retry in 1..=self.settings.max_retries {
            if core_assignments.is_none() {
                core_assignments =
                    generate_assignments(&core_pool, &self.settings, &mut self.rng);
            }
            if other_assignments.is_none() {
                other_assignments =
                    generate_assignments(&other_pool, &self.settings, &mut self.rng);
            }

            if let (Some(core), Some(other)) = (&mut core_assignments, &mut other_assignments) {
                let mut assignments = std::mem::take(core);
                assignments.append(other);
                tracing::info!(
                    "Assigned {} participants on retry {}",
                    assignments.len(),
                    retry
                );
                return Ok(assignments);
            }

            tracing::debug!(
                "Retry {} of {} did not match every pool",
                retry,
                self.settings.max_retries
            );
        }

        tracing::warn!(
            "Giving up after {} retries (strategy: {:?})",
            self.settings.max_retries,
            self.settings.strategy
        );
        Err(ExchangeError::AssignmentFailure {
            attempts: self.settings.max_retries,
        })
    }
}

impl Default for ExchangeEngine {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
