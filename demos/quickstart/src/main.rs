//! Quickstart
//!
//! Splits a ten-person sample roster into teams. Reads `allocation.toml`
//! from the working directory when present, otherwise uses the defaults
//! (four teams, no rules).

use teamsplit::prelude::*;

/// Sample roster: five members of each group.
fn sample_roster() -> Vec<Person> {
    let group_a = ["Yamamoto", "Ishizawa", "Ishii", "Nakanishi", "Kokubo"];
    let group_b = ["Okamoto", "Takasaki", "Yamanaka", "Iguro", "Hasunuma"];

    let a = group_a
        .iter()
        .enumerate()
        .map(|(i, name)| Person::new(format!("a-{}", i + 1), *name, Group::A));
    let b = group_b
        .iter()
        .enumerate()
        .map(|(i, name)| Person::new(format!("b-{}", i + 1), *name, Group::B));
    a.chain(b).collect()
}

fn print_teams(teams: &[Team]) {
    let reserved = teams.iter().filter(|t| t.is_reserved()).count();
    println!("{} teams, {} reserved by rules", teams.len(), reserved);
    for team in teams {
        let label = match &team.origin {
            Some(origin) => format!(" [{}]", origin.composition),
            None => String::new(),
        };
        println!("\n{}{} ({} members)", team.name, label, team.len());
        for person in &team.members {
            let tag = match person.group {
                Group::A => "A",
                Group::B => "B",
            };
            println!("  - {} ({})", person.name, tag);
        }
    }
}

fn main() {
    teamsplit::console::init();

    let config = AllocationConfig::load("allocation.toml").unwrap_or_default();
    let roster = sample_roster();
    let team_config = config.team_config();

    let outcome = validate(&roster, &team_config);
    for warning in &outcome.warnings {
        println!("warning: {}", warning);
    }
    if !outcome.is_feasible() {
        for message in outcome.error_messages() {
            eprintln!("error: {}", message);
        }
        std::process::exit(1);
    }

    let mut allocator = TeamAllocator::from_config(&config);
    match allocator.allocate(&roster, &team_config) {
        Ok(teams) => print_teams(&teams),
        Err(err) => {
            eprintln!("allocation failed: {}", err);
            std::process::exit(1);
        }
    }
}
