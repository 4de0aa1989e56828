//! Pre-flight feasibility checks.
//!
//! [`validate`] is cheap enough to run on every edit of the roster or
//! configuration. It never mutates its inputs and never fails: every
//! problem is collected into the returned [`ValidationOutcome`].
//!
//! Rule checks run against a running demand ledger, in rule order, so a
//! rule that only fails because an earlier rule already claimed the
//! members it needs is still reported.

use std::collections::HashSet;

use teamsplit_core::{
    group_counts, CompositionRule, Group, GroupCounts, Person, TeamConfig, ValidationError,
    ValidationOutcome, ValidationWarning,
};
use tracing::debug;

/// Validates a roster against an allocation configuration.
///
/// An empty roster yields exactly one error and nothing else.
///
/// # Example
///
/// ```
/// use teamsplit_core::{CompositionRule, Group, Person, TeamComposition, TeamConfig};
/// use teamsplit_engine::validate;
///
/// let roster = vec![
///     Person::new("a-1", "One", Group::A),
///     Person::new("a-2", "Two", Group::A),
///     Person::new("b-1", "Three", Group::B),
///     Person::new("b-2", "Four", Group::B),
/// ];
/// let config = TeamConfig::new(2)
///     .with_rule(CompositionRule::new("rule-1", TeamComposition::AOnly, 1, 5));
///
/// let outcome = validate(&roster, &config);
/// assert!(!outcome.is_feasible());
/// assert!(outcome.errors[0].to_string().contains("required: 5, current: 2"));
/// ```
pub fn validate(roster: &[Person], config: &TeamConfig) -> ValidationOutcome {
    if roster.is_empty() {
        return ValidationOutcome {
            errors: vec![ValidationError::EmptyRoster],
            warnings: Vec::new(),
        };
    }

    let roster_size = roster.len();
    let total_teams = config.total_teams;
    let mut errors = Vec::new();

    if total_teams == 0 {
        errors.push(ValidationError::InvalidTeamCount { total_teams });
    }

    if total_teams > roster_size {
        errors.push(ValidationError::TeamCountExceedsRoster {
            required: total_teams,
            current: roster_size,
        });
    }

    let counts = group_counts(roster);
    let mut ledger = DemandLedger::default();
    for rule in &config.rules {
        check_rule(rule, counts, &mut ledger, &mut errors);
    }

    let rule_teams = config.rule_team_count();
    if rule_teams > total_teams {
        errors.push(ValidationError::RuleTeamCountOverflow {
            required: rule_teams,
            current: total_teams,
        });
    }

    // Members left for the unconstrained teams, when the rules fit at all.
    let unreserved = (!config.rules.is_empty() && total_teams > 0 && ledger.combined <= roster_size)
        .then(|| roster_size - ledger.combined);
    if let Some(unreserved) = unreserved {
        if rule_teams == total_teams && unreserved > 0 {
            errors.push(ValidationError::UnassignedMembers {
                unassigned: unreserved,
            });
        }
    }

    let mut seen = HashSet::with_capacity(roster_size);
    let mut reported = HashSet::new();
    for person in roster {
        if !seen.insert(person.id.as_str()) && reported.insert(person.id.as_str()) {
            errors.push(ValidationError::DuplicateMember {
                id: person.id.clone(),
            });
        }
    }

    let mut warnings = Vec::new();
    if total_teams.saturating_mul(2) > roster_size {
        warnings.push(ValidationWarning::TooManyTeams {
            total_teams,
            roster_size,
        });
    }
    if !config.rules.is_empty() && rule_teams < total_teams {
        let count = total_teams - rule_teams;
        warnings.push(ValidationWarning::UnconstrainedTeams { count });
        if let Some(members) = unreserved.filter(|&m| m < count) {
            warnings.push(ValidationWarning::EmptyTeams {
                teams: count,
                members,
            });
        }
    }

    debug!(
        event = "validated",
        members = roster_size,
        total_teams,
        errors = errors.len(),
        warnings = warnings.len(),
    );

    ValidationOutcome { errors, warnings }
}

/// Members claimed so far by the rules already checked.
#[derive(Debug, Default)]
struct DemandLedger {
    a: usize,
    b: usize,
    combined: usize,
    pool_reported: bool,
}

impl DemandLedger {
    fn claim(&mut self, group: Group, count: usize) -> usize {
        let slot = match group {
            Group::A => &mut self.a,
            Group::B => &mut self.b,
        };
        *slot = slot.saturating_add(count);
        *slot
    }

    fn over_group_supply(&self, counts: GroupCounts) -> bool {
        self.a > counts.a || self.b > counts.b
    }
}

fn check_rule(
    rule: &CompositionRule,
    counts: GroupCounts,
    ledger: &mut DemandLedger,
    errors: &mut Vec<ValidationError>,
) {
    if rule.team_count == 0 || rule.members_per_team == 0 {
        errors.push(ValidationError::InvalidRule {
            rule_id: rule.id.clone(),
            reason: "team_count and members_per_team must be at least 1".to_string(),
        });
        return;
    }

    let is_mixed = match rule.composition.required_group() {
        Some(group) => {
            let required = ledger.claim(group, rule.reserved_members());
            let current = counts.get(group);
            if required > current {
                errors.push(ValidationError::GroupShortfall {
                    rule_id: rule.id.clone(),
                    group,
                    required,
                    current,
                });
            }
            false
        }
        None => {
            if rule.members_per_team < 2 {
                errors.push(ValidationError::InvalidRule {
                    rule_id: rule.id.clone(),
                    reason: "mixed teams need at least 2 members per team".to_string(),
                });
                return;
            }
            // One member of each group per team.
            for group in Group::ALL {
                let required = ledger.claim(group, rule.team_count);
                let current = counts.get(group);
                if required > current {
                    errors.push(ValidationError::MixedGroupShortfall {
                        rule_id: rule.id.clone(),
                        group,
                        required,
                        current,
                    });
                }
            }
            true
        }
    };

    ledger.combined = ledger.combined.saturating_add(rule.reserved_members());

    let current = counts.total();
    if ledger.combined > current
        && !ledger.pool_reported
        && (is_mixed || !ledger.over_group_supply(counts))
    {
        ledger.pool_reported = true;
        errors.push(ValidationError::MixedPoolShortfall {
            rule_id: rule.id.clone(),
            required: ledger.combined,
            current,
        });
    }
}

#[cfg(test)]
mod tests;
