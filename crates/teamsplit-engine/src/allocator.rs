//! Allocation entry points.
//!
//! Allocation runs validation as a gate, reserves rule teams, splits the
//! rest at random and numbers the result: rule teams first in rule order,
//! then the randomly filled teams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use teamsplit_config::{AllocationConfig, DEFAULT_TEAM_NAME_PREFIX};
use teamsplit_core::{AllocationError, Person, Result, Team, TeamConfig, ValidationOutcome};
use tracing::{info, warn};

use crate::partition::partition;
use crate::reservation::{apply_rules, TeamDraft};
use crate::validator::validate;

/// Allocates `roster` into teams using the thread-local RNG and the
/// default `WIP` name prefix.
///
/// # Errors
///
/// Returns [`AllocationError::Validation`] carrying the first blocking
/// validation error when the request is infeasible.
///
/// # Example
///
/// ```
/// use teamsplit_core::{Group, Person, TeamConfig};
/// use teamsplit_engine::allocate;
///
/// let roster: Vec<Person> = (1..=10)
///     .map(|i| {
///         let group = if i % 2 == 0 { Group::A } else { Group::B };
///         Person::new(format!("p-{i}"), format!("P{i}"), group)
///     })
///     .collect();
///
/// let teams = allocate(&roster, &TeamConfig::new(3)).unwrap();
/// assert_eq!(teams.len(), 3);
/// assert_eq!(teams[0].name, "WIP 1");
/// assert_eq!(teams[2].id, "team-3");
/// ```
pub fn allocate(roster: &[Person], config: &TeamConfig) -> Result<Vec<Team>> {
    allocate_with_rng(roster, config, &mut rand::rng())
}

/// Like [`allocate`], drawing randomness from `rng`.
pub fn allocate_with_rng<R: Rng + ?Sized>(
    roster: &[Person],
    config: &TeamConfig,
    rng: &mut R,
) -> Result<Vec<Team>> {
    run_allocation(roster, config, DEFAULT_TEAM_NAME_PREFIX, rng)
}

/// Allocator owning its random source and naming scheme.
///
/// Use [`TeamAllocator::with_seed`] for reproducible allocations.
///
/// # Example
///
/// ```
/// use teamsplit_core::{Group, Person, TeamConfig};
/// use teamsplit_engine::TeamAllocator;
///
/// let roster: Vec<Person> = (1..=6)
///     .map(|i| Person::new(format!("p-{i}"), format!("P{i}"), Group::A))
///     .collect();
/// let config = TeamConfig::new(2);
///
/// let first = TeamAllocator::with_seed(9).allocate(&roster, &config).unwrap();
/// let second = TeamAllocator::with_seed(9).allocate(&roster, &config).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug)]
pub struct TeamAllocator {
    rng: StdRng,
    team_name_prefix: String,
}

impl Default for TeamAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamAllocator {
    /// Creates an allocator seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            team_name_prefix: DEFAULT_TEAM_NAME_PREFIX.to_string(),
        }
    }

    /// Creates an allocator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            team_name_prefix: DEFAULT_TEAM_NAME_PREFIX.to_string(),
        }
    }

    /// Creates an allocator from file configuration, honoring its seed and
    /// name prefix.
    pub fn from_config(config: &AllocationConfig) -> Self {
        let allocator = match config.random_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        allocator.with_team_name_prefix(config.team_name_prefix.clone())
    }

    /// Sets the team name prefix.
    pub fn with_team_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.team_name_prefix = prefix.into();
        self
    }

    pub fn team_name_prefix(&self) -> &str {
        &self.team_name_prefix
    }

    /// Validates without allocating.
    pub fn validate(&self, roster: &[Person], config: &TeamConfig) -> ValidationOutcome {
        validate(roster, config)
    }

    /// Allocates `roster` into teams.
    pub fn allocate(&mut self, roster: &[Person], config: &TeamConfig) -> Result<Vec<Team>> {
        run_allocation(roster, config, &self.team_name_prefix, &mut self.rng)
    }
}

fn run_allocation<R: Rng + ?Sized>(
    roster: &[Person],
    config: &TeamConfig,
    prefix: &str,
    rng: &mut R,
) -> Result<Vec<Team>> {
    info!(
        event = "allocate_start",
        members = roster.len(),
        total_teams = config.total_teams,
        rules = config.rules.len(),
    );

    let outcome = validate(roster, config);
    if let Some(first) = outcome.errors.into_iter().next() {
        warn!(event = "allocate_rejected", error = %first);
        return Err(AllocationError::Validation(first));
    }

    let reservation = apply_rules(roster, &config.rules)?;
    let reserved = reservation.teams.len();
    info!(
        event = "rules_applied",
        reserved_teams = reserved,
        remaining = reservation.remaining.len(),
    );

    let random_teams = config.total_teams.saturating_sub(reserved);
    let drafts = reservation
        .teams
        .into_iter()
        .chain(partition(&reservation.remaining, random_teams, rng));

    let teams: Vec<Team> = drafts
        .enumerate()
        .map(|(index, draft)| number_team(index + 1, prefix, draft))
        .collect();

    info!(
        event = "allocate_end",
        teams = teams.len(),
        reserved_teams = reserved,
    );
    Ok(teams)
}

fn number_team(position: usize, prefix: &str, draft: TeamDraft) -> Team {
    Team {
        id: format!("team-{}", position),
        name: format!("{} {}", prefix, position),
        members: draft.members,
        origin: draft.origin,
    }
}
