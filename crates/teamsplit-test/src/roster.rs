//! Roster builders.
//!
//! Generated ids follow `a-<n>` / `b-<n>` with a 1-based per-group counter.
//!
//! # Example
//!
//! ```
//! use teamsplit_test::roster::roster;
//! use teamsplit_core::Group;
//!
//! let people = roster(3, 2);
//! assert_eq!(people.len(), 5);
//! assert_eq!(people[0].id, "a-1");
//! assert_eq!(people[3].group, Group::B);
//! ```

use teamsplit_core::{CompositionRule, Group, Person, TeamComposition};

/// Creates a roster with `a` group-A members followed by `b` group-B members.
pub fn roster(a: usize, b: usize) -> Vec<Person> {
    let groups: Vec<Group> = std::iter::repeat(Group::A)
        .take(a)
        .chain(std::iter::repeat(Group::B).take(b))
        .collect();
    roster_from_groups(&groups)
}

/// Creates a roster whose members carry the given groups, in order.
pub fn roster_from_groups(groups: &[Group]) -> Vec<Person> {
    let mut next_a = 0;
    let mut next_b = 0;
    groups
        .iter()
        .map(|&group| {
            let (prefix, counter) = match group {
                Group::A => ("a", &mut next_a),
                Group::B => ("b", &mut next_b),
            };
            *counter += 1;
            Person::new(
                format!("{}-{}", prefix, counter),
                format!("Member {}{}", prefix.to_uppercase(), counter),
                group,
            )
        })
        .collect()
}

/// The ten-person sample roster: five of each group.
pub fn sample_roster() -> Vec<Person> {
    roster(5, 5)
}

/// Shorthand for [`CompositionRule::new`].
pub fn rule(
    id: &str,
    composition: TeamComposition,
    team_count: usize,
    members_per_team: usize,
) -> CompositionRule {
    CompositionRule::new(id, composition, team_count, members_per_team)
}
