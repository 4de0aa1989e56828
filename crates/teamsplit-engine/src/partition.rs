//! Balanced random partitioning of the unreserved pool.

use rand::seq::SliceRandom;
use rand::Rng;
use teamsplit_core::Person;
use tracing::{debug, warn};

use crate::reservation::TeamDraft;

/// Returns a shuffled copy of `items` (Fisher-Yates, every permutation
/// equally likely). The input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// Splits `pool` into `team_count` teams of random membership.
///
/// Sizes differ by at most one: the first `len % team_count` teams get one
/// extra member. Teams are contiguous slices of a single shuffle. A
/// `team_count` of zero yields no teams.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use teamsplit_core::{Group, Person};
/// use teamsplit_engine::partition;
///
/// let pool: Vec<Person> = (1..=10)
///     .map(|i| Person::new(format!("p-{i}"), format!("P{i}"), Group::A))
///     .collect();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let teams = partition(&pool, 3, &mut rng);
/// let sizes: Vec<usize> = teams.iter().map(|t| t.members.len()).collect();
/// assert_eq!(sizes, vec![4, 3, 3]);
/// ```
pub fn partition<R: Rng + ?Sized>(
    pool: &[Person],
    team_count: usize,
    rng: &mut R,
) -> Vec<TeamDraft> {
    if team_count == 0 {
        if !pool.is_empty() {
            warn!(
                event = "partition_skipped",
                members = pool.len(),
                "no teams left for unreserved members"
            );
        }
        return Vec::new();
    }

    let base = pool.len() / team_count;
    let extra = pool.len() % team_count;
    let mut members = shuffled(pool, rng).into_iter();

    let teams: Vec<TeamDraft> = (0..team_count)
        .map(|i| {
            let size = base + usize::from(i < extra);
            TeamDraft::unconstrained(members.by_ref().take(size).collect())
        })
        .collect();

    debug!(
        event = "partitioned",
        members = pool.len(),
        teams = team_count,
        base_size = base,
        larger_teams = extra,
    );

    teams
}
