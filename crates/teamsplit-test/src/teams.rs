//! Helpers for inspecting allocation output.

use teamsplit_core::{Person, Team};

/// Member ids of all teams, in team order.
pub fn member_ids(teams: &[Team]) -> Vec<String> {
    teams
        .iter()
        .flat_map(|t| t.members.iter().map(|p| p.id.clone()))
        .collect()
}

/// Member ids of all teams, sorted.
pub fn sorted_member_ids(teams: &[Team]) -> Vec<String> {
    let mut ids = member_ids(teams);
    ids.sort();
    ids
}

/// Roster ids, sorted. Compare against [`sorted_member_ids`].
pub fn sorted_roster_ids(roster: &[Person]) -> Vec<String> {
    let mut ids: Vec<String> = roster.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids
}

/// Size of each team, in team order.
pub fn team_sizes(teams: &[Team]) -> Vec<usize> {
    teams.iter().map(Team::len).collect()
}
