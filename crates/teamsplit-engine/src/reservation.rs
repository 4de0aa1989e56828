//! Composition rule reservation.
//!
//! Rules are applied strictly in order. Members are picked first-available
//! in roster order, so reserved teams are reproducible for a fixed roster.
//!
//! Mixed teams take the first available member of each group, then fill
//! their remaining slots first-available from the combined pool. A member
//! is skipped while their group's remaining supply is already promised to
//! later rules, so an early mixed rule never starves a later group-only
//! rule of members validation counted on.

use teamsplit_core::{AllocationError, CompositionRule, Group, Person, Result, RuleOrigin};
use tracing::debug;

/// Member list of a team before it is numbered and named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDraft {
    pub members: Vec<Person>,
    /// The generating rule, `None` for randomly filled teams.
    pub origin: Option<RuleOrigin>,
}

impl TeamDraft {
    /// Creates a draft for a randomly filled team.
    pub fn unconstrained(members: Vec<Person>) -> Self {
        Self {
            members,
            origin: None,
        }
    }
}

/// Output of [`apply_rules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    /// Reserved teams, in rule order.
    pub teams: Vec<TeamDraft>,
    /// Members left for random assignment, in roster order.
    pub remaining: Vec<Person>,
}

/// Reserves teams for every rule and returns them with the leftover pool.
///
/// Expects a request that passed [`validate`](crate::validate). A rule that
/// cannot be filled yields [`AllocationError::Internal`].
///
/// # Example
///
/// ```
/// use teamsplit_core::{CompositionRule, Group, Person, TeamComposition};
/// use teamsplit_engine::apply_rules;
///
/// let roster = vec![
///     Person::new("b-1", "One", Group::B),
///     Person::new("a-1", "Two", Group::A),
///     Person::new("a-2", "Three", Group::A),
/// ];
/// let rules = vec![CompositionRule::new("r1", TeamComposition::AOnly, 1, 2)];
///
/// let reservation = apply_rules(&roster, &rules).unwrap();
/// assert_eq!(reservation.teams[0].members[0].id, "a-1");
/// assert_eq!(reservation.teams[0].members[1].id, "a-2");
/// assert_eq!(reservation.remaining[0].id, "b-1");
/// ```
pub fn apply_rules(roster: &[Person], rules: &[CompositionRule]) -> Result<Reservation> {
    let mut pool = ReservationPool::new(roster, rules);
    let mut teams = Vec::new();

    for rule in rules {
        pool.begin_rule(rule);

        for team_index in 0..rule.team_count {
            let members = match rule.composition.required_group() {
                Some(group) => pool.take_group(group, rule.members_per_team),
                None => {
                    let outstanding = rule.team_count - team_index - 1;
                    pool.take_mixed(rule.members_per_team, outstanding)
                }
            };

            if members.len() != rule.members_per_team {
                debug_assert!(
                    false,
                    "rule {} misfilled despite validation: {} of {}",
                    rule.id,
                    members.len(),
                    rule.members_per_team
                );
                return Err(AllocationError::Internal(format!(
                    "rule {} reserved {} instead of {} members for team {}",
                    rule.id,
                    members.len(),
                    rule.members_per_team,
                    team_index + 1
                )));
            }

            teams.push(TeamDraft {
                members,
                origin: Some(RuleOrigin::from(rule)),
            });
        }

        debug!(
            event = "rule_applied",
            rule_id = %rule.id,
            composition = %rule.composition,
            teams = rule.team_count,
            remaining = pool.len(),
        );
    }

    Ok(Reservation {
        teams,
        remaining: pool.into_remaining(),
    })
}

/// Working copy of the roster plus the demand still promised to later rules.
struct ReservationPool {
    members: Vec<Person>,
    // Per-group demand of rules not yet started, indexed by `slot`.
    pending: [usize; 2],
}

fn slot(group: Group) -> usize {
    match group {
        Group::A => 0,
        Group::B => 1,
    }
}

/// Minimum per-group demand a rule places on the pool.
fn group_demand(rule: &CompositionRule) -> [usize; 2] {
    match rule.composition.required_group() {
        Some(group) => {
            let mut demand = [0; 2];
            demand[slot(group)] = rule.reserved_members();
            demand
        }
        None => [rule.team_count, rule.team_count],
    }
}

impl ReservationPool {
    fn new(roster: &[Person], rules: &[CompositionRule]) -> Self {
        let pending = rules.iter().map(group_demand).fold([0usize; 2], |acc, d| {
            [acc[0].saturating_add(d[0]), acc[1].saturating_add(d[1])]
        });
        Self {
            members: roster.to_vec(),
            pending,
        }
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn begin_rule(&mut self, rule: &CompositionRule) {
        let demand = group_demand(rule);
        for i in 0..2 {
            self.pending[i] = self.pending[i].saturating_sub(demand[i]);
        }
    }

    fn available(&self, group: Group) -> usize {
        self.members.iter().filter(|p| p.group == group).count()
    }

    fn take_group(&mut self, group: Group, count: usize) -> Vec<Person> {
        let picks: Vec<usize> = self
            .members
            .iter()
            .enumerate()
            .filter(|(_, p)| p.group == group)
            .map(|(i, _)| i)
            .take(count)
            .collect();
        self.extract(picks)
    }

    /// `outstanding` is the number of teams this rule still has to build
    /// after the current one; each needs one member of every group.
    fn take_mixed(&mut self, size: usize, outstanding: usize) -> Vec<Person> {
        let mut picks = Vec::with_capacity(size);
        for group in Group::ALL {
            if let Some(i) = self.members.iter().position(|p| p.group == group) {
                picks.push(i);
            }
        }

        let mut spare = [Group::A, Group::B].map(|group| {
            let taken = picks
                .iter()
                .filter(|&&i| self.members[i].group == group)
                .count();
            (self.available(group) - taken)
                .saturating_sub(self.pending[slot(group)])
                .saturating_sub(outstanding)
        });

        for (i, person) in self.members.iter().enumerate() {
            if picks.len() >= size {
                break;
            }
            if picks.contains(&i) {
                continue;
            }
            let s = slot(person.group);
            if spare[s] > 0 {
                spare[s] -= 1;
                picks.push(i);
            }
        }

        picks.sort_unstable();
        self.extract(picks)
    }

    /// Removes the members at `picks` (ascending) and returns them in order.
    fn extract(&mut self, picks: Vec<usize>) -> Vec<Person> {
        let mut taken = Vec::with_capacity(picks.len());
        let mut next = picks.iter().peekable();
        let mut kept = Vec::with_capacity(self.members.len() - picks.len());
        for (i, person) in self.members.drain(..).enumerate() {
            if next.peek() == Some(&&i) {
                next.next();
                taken.push(person);
            } else {
                kept.push(person);
            }
        }
        self.members = kept;
        taken
    }

    fn into_remaining(self) -> Vec<Person> {
        self.members
    }
}
