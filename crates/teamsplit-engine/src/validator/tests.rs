//! Tests for the validator.

use super::*;
use teamsplit_core::{TeamComposition, ValidationField};
use teamsplit_test::{roster, roster_from_groups, rule};

fn config(total_teams: usize, rules: Vec<CompositionRule>) -> TeamConfig {
    TeamConfig { total_teams, rules }
}

// ============================================================================
// Roster Tests
// ============================================================================

mod roster_checks {
    use super::*;

    #[test]
    fn test_empty_roster_single_error() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 3, 3)];
        let outcome = validate(&[], &config(20, rules));

        assert!(!outcome.is_feasible());
        assert_eq!(outcome.errors, vec![ValidationError::EmptyRoster]);
        assert_eq!(outcome.errors[0].field(), ValidationField::Members);
        assert!(outcome.errors[0].to_string().starts_with("roster empty"));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_non_empty_roster_ok() {
        let outcome = validate(&roster(5, 5), &config(2, vec![]));
        assert!(outcome.is_feasible());
        assert!(outcome.errors.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_member_reported_once() {
        let mut people = roster(3, 3);
        people.push(people[0].clone());
        people.push(people[0].clone());

        let outcome = validate(&people, &config(2, vec![]));
        assert_eq!(
            outcome.errors,
            vec![ValidationError::DuplicateMember { id: "a-1".into() }]
        );
    }
}

// ============================================================================
// Team Count Tests
// ============================================================================

mod team_count_checks {
    use super::*;

    #[test]
    fn test_zero_teams() {
        let outcome = validate(&roster(5, 5), &config(0, vec![]));
        assert_eq!(
            outcome.errors,
            vec![ValidationError::InvalidTeamCount { total_teams: 0 }]
        );
        assert_eq!(outcome.errors[0].field(), ValidationField::TotalTeams);
    }

    #[test]
    fn test_team_count_exceeds_roster() {
        let outcome = validate(&roster(5, 5), &config(15, vec![]));

        assert!(!outcome.is_feasible());
        assert_eq!(outcome.errors[0].field(), ValidationField::TotalTeams);
        assert!(outcome.errors[0]
            .to_string()
            .contains("required: 15, current: 10"));
    }

    #[test]
    fn test_team_count_within_roster() {
        let outcome = validate(&roster(5, 5), &config(5, vec![]));
        assert!(outcome.is_feasible());
    }

    #[test]
    fn test_too_many_teams_warning() {
        let outcome = validate(&roster(5, 5), &config(6, vec![]));
        assert!(outcome.is_feasible());
        assert_eq!(
            outcome.warnings,
            vec![ValidationWarning::TooManyTeams {
                total_teams: 6,
                roster_size: 10,
            }]
        );
    }

    #[test]
    fn test_half_roster_is_not_too_many() {
        let outcome = validate(&roster(5, 5), &config(5, vec![]));
        assert!(outcome.warnings.is_empty());
    }
}

// ============================================================================
// Group-only Rule Tests
// ============================================================================

mod group_rule_checks {
    use super::*;

    #[test]
    fn test_group_a_shortfall() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 2, 3)];
        let outcome = validate(&roster(3, 5), &config(3, rules));

        assert!(!outcome.is_feasible());
        assert_eq!(outcome.errors[0].field(), ValidationField::Rules);
        assert_eq!(
            outcome.errors[0],
            ValidationError::GroupShortfall {
                rule_id: "r1".into(),
                group: Group::A,
                required: 6,
                current: 3,
            }
        );
        let message = outcome.errors[0].to_string();
        assert!(message.contains("group A"));
        assert!(message.contains("required: 6, current: 3"));
    }

    #[test]
    fn test_group_a_enough() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 2, 3)];
        let outcome = validate(&roster(6, 5), &config(3, rules));
        assert!(outcome.is_feasible());
    }

    #[test]
    fn test_group_b_shortfall() {
        let rules = vec![rule("r1", TeamComposition::BOnly, 1, 4)];
        let outcome = validate(&roster(5, 2), &config(3, rules));

        assert!(!outcome.is_feasible());
        let message = outcome.errors[0].to_string();
        assert!(message.contains("group B"));
        assert!(message.contains("required: 4, current: 2"));
    }

    #[test]
    fn test_group_b_enough() {
        let rules = vec![rule("r1", TeamComposition::BOnly, 1, 4)];
        let outcome = validate(&roster(5, 4), &config(3, rules));
        assert!(outcome.is_feasible());
    }

    #[test]
    fn test_reports_every_failing_rule_in_order() {
        let rules = vec![
            rule("r1", TeamComposition::AOnly, 1, 3),
            rule("r2", TeamComposition::BOnly, 1, 3),
        ];
        let outcome = validate(&roster(2, 2), &config(4, rules));

        assert!(!outcome.is_feasible());
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].to_string().contains("group A"));
        assert!(outcome.errors[1].to_string().contains("group B"));
    }

    #[test]
    fn test_cumulative_demand_across_rules() {
        // Each rule fits on its own; together they need 6 of 4.
        let rules = vec![
            rule("r1", TeamComposition::AOnly, 1, 3),
            rule("r2", TeamComposition::AOnly, 1, 3),
        ];
        let outcome = validate(&roster(4, 6), &config(3, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::GroupShortfall {
                rule_id: "r2".into(),
                group: Group::A,
                required: 6,
                current: 4,
            }]
        );
    }

    #[test]
    fn test_zero_sized_rule_is_invalid() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 1, 0)];
        let outcome = validate(&roster(3, 3), &config(2, rules));
        assert!(matches!(
            &outcome.errors[0],
            ValidationError::InvalidRule { rule_id, .. } if rule_id == "r1"
        ));
    }
}

// ============================================================================
// Mixed Rule Tests
// ============================================================================

mod mixed_rule_checks {
    use super::*;

    #[test]
    fn test_mixed_rule_feasible() {
        let rules = vec![rule("r1", TeamComposition::Mixed, 2, 3)];
        let outcome = validate(&roster(5, 5), &config(3, rules));
        assert!(outcome.is_feasible());
    }

    #[test]
    fn test_mixed_rule_needs_one_of_each_per_team() {
        let rules = vec![rule("r1", TeamComposition::Mixed, 3, 2)];
        let outcome = validate(&roster(5, 2), &config(4, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::MixedGroupShortfall {
                rule_id: "r1".into(),
                group: Group::B,
                required: 3,
                current: 2,
            }]
        );
    }

    #[test]
    fn test_mixed_rule_combined_pool() {
        let rules = vec![rule("r1", TeamComposition::Mixed, 2, 6)];
        let outcome = validate(&roster(5, 5), &config(2, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::MixedPoolShortfall {
                rule_id: "r1".into(),
                required: 12,
                current: 10,
            }]
        );
        assert!(outcome.errors[0]
            .to_string()
            .contains("required: 12, current: 10"));
    }

    #[test]
    fn test_mixed_rule_reports_all_shortfalls() {
        let rules = vec![rule("r1", TeamComposition::Mixed, 3, 4)];
        let outcome = validate(&roster(2, 2), &config(3, rules));

        let kinds: Vec<_> = outcome
            .errors
            .iter()
            .filter(|e| e.field() == ValidationField::Rules)
            .collect();
        assert_eq!(kinds.len(), 3);
        assert!(matches!(
            kinds[0],
            ValidationError::MixedGroupShortfall { group: Group::A, .. }
        ));
        assert!(matches!(
            kinds[1],
            ValidationError::MixedGroupShortfall { group: Group::B, .. }
        ));
        assert!(matches!(kinds[2], ValidationError::MixedPoolShortfall { .. }));
    }

    #[test]
    fn test_mixed_rule_single_member_is_invalid() {
        let rules = vec![rule("r1", TeamComposition::Mixed, 1, 1)];
        let outcome = validate(&roster(3, 3), &config(2, rules));
        assert!(matches!(outcome.errors[0], ValidationError::InvalidRule { .. }));
    }

    #[test]
    fn test_mixed_then_group_only_pool_exhausted() {
        // Mixed teams take 8 of 10 people; the group-only rule fits its own
        // group but not what is left overall.
        let rules = vec![
            rule("mixed", TeamComposition::Mixed, 2, 4),
            rule("a", TeamComposition::AOnly, 1, 3),
        ];
        let outcome = validate(&roster(5, 5), &config(3, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::MixedPoolShortfall {
                rule_id: "a".into(),
                required: 11,
                current: 10,
            }]
        );
    }

    #[test]
    fn test_mixed_minimums_count_against_group_rules() {
        let rules = vec![
            rule("mixed", TeamComposition::Mixed, 2, 2),
            rule("b", TeamComposition::BOnly, 1, 3),
        ];
        let people = roster_from_groups(&[
            Group::A,
            Group::B,
            Group::A,
            Group::B,
            Group::B,
            Group::A,
        ]);
        let outcome = validate(&people, &config(3, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::GroupShortfall {
                rule_id: "b".into(),
                group: Group::B,
                required: 5,
                current: 3,
            }]
        );
    }
}

// ============================================================================
// Team Budget Tests
// ============================================================================

mod team_budget_checks {
    use super::*;

    #[test]
    fn test_rule_team_overflow() {
        let rules = vec![
            rule("r1", TeamComposition::AOnly, 2, 1),
            rule("r2", TeamComposition::BOnly, 2, 1),
        ];
        let outcome = validate(&roster(5, 5), &config(3, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::RuleTeamCountOverflow {
                required: 4,
                current: 3,
            }]
        );
    }

    #[test]
    fn test_all_teams_reserved_with_leftover_members() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 1, 3)];
        let outcome = validate(&roster(5, 5), &config(1, rules));

        assert_eq!(
            outcome.errors,
            vec![ValidationError::UnassignedMembers { unassigned: 7 }]
        );
    }

    #[test]
    fn test_all_teams_reserved_exactly() {
        let rules = vec![
            rule("r1", TeamComposition::AOnly, 1, 5),
            rule("r2", TeamComposition::BOnly, 1, 5),
        ];
        let outcome = validate(&roster(5, 5), &config(2, rules));
        assert!(outcome.is_feasible());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_more_unconstrained_teams_than_members_is_feasible() {
        let people = roster_from_groups(&[Group::A, Group::A, Group::A, Group::B]);
        let rules = vec![rule("r1", TeamComposition::AOnly, 1, 3)];
        let outcome = validate(&people, &config(3, rules));

        assert!(outcome.is_feasible());
        assert_eq!(
            outcome.warnings,
            vec![
                ValidationWarning::UnconstrainedTeams { count: 2 },
                ValidationWarning::EmptyTeams {
                    teams: 2,
                    members: 1,
                },
            ]
        );
    }

    #[test]
    fn test_huge_team_counts_saturate() {
        let huge = usize::MAX / 2 + 1;
        let rules = vec![
            rule("r1", TeamComposition::AOnly, huge, 1),
            rule("r2", TeamComposition::AOnly, huge, 1),
        ];
        let outcome = validate(&roster(2, 2), &config(2, rules));

        assert!(!outcome.is_feasible());
        assert_eq!(
            outcome.errors.last(),
            Some(&ValidationError::RuleTeamCountOverflow {
                required: usize::MAX,
                current: 2,
            })
        );
    }

    #[test]
    fn test_unconstrained_teams_warning() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 1, 3)];
        let outcome = validate(&roster(6, 6), &config(3, rules));

        assert!(outcome.is_feasible());
        assert_eq!(
            outcome.warnings,
            vec![ValidationWarning::UnconstrainedTeams { count: 2 }]
        );
        assert_eq!(
            outcome.warning_messages(),
            vec!["2 teams will be filled by unconstrained random assignment".to_string()]
        );
    }

    #[test]
    fn test_warnings_in_order() {
        let rules = vec![rule("r1", TeamComposition::AOnly, 1, 2)];
        let outcome = validate(&roster(3, 3), &config(4, rules));

        assert!(outcome.is_feasible());
        assert!(matches!(
            outcome.warnings[0],
            ValidationWarning::TooManyTeams { .. }
        ));
        assert_eq!(
            outcome.warnings[1],
            ValidationWarning::UnconstrainedTeams { count: 3 }
        );
    }
}
