//! Composition rules and allocation configuration.

use std::fmt;

use super::person::Group;

/// Required composition of the teams a rule reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TeamComposition {
    /// Every member belongs to group A.
    AOnly,
    /// Every member belongs to group B.
    BOnly,
    /// At least one member of each group.
    Mixed,
}

impl TeamComposition {
    /// Returns the single group this composition is restricted to.
    ///
    /// `None` for mixed teams.
    pub fn required_group(self) -> Option<Group> {
        match self {
            TeamComposition::AOnly => Some(Group::A),
            TeamComposition::BOnly => Some(Group::B),
            TeamComposition::Mixed => None,
        }
    }
}

impl fmt::Display for TeamComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamComposition::AOnly => write!(f, "group A only"),
            TeamComposition::BOnly => write!(f, "group B only"),
            TeamComposition::Mixed => write!(f, "mixed"),
        }
    }
}

/// Reserves `team_count` teams of `members_per_team` people with a given
/// composition before the remainder is split at random.
///
/// # Example
///
/// ```
/// use teamsplit_core::{CompositionRule, TeamComposition};
///
/// let rule = CompositionRule::new("rule-1", TeamComposition::AOnly, 2, 3);
/// assert_eq!(rule.reserved_members(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionRule {
    /// Unique rule identifier.
    pub id: String,
    /// Composition every reserved team must have.
    pub composition: TeamComposition,
    /// Number of teams this rule reserves.
    pub team_count: usize,
    /// Size of each reserved team.
    pub members_per_team: usize,
}

impl CompositionRule {
    pub fn new(
        id: impl Into<String>,
        composition: TeamComposition,
        team_count: usize,
        members_per_team: usize,
    ) -> Self {
        Self {
            id: id.into(),
            composition,
            team_count,
            members_per_team,
        }
    }

    /// Total number of people this rule takes out of the pool.
    pub fn reserved_members(&self) -> usize {
        self.team_count.saturating_mul(self.members_per_team)
    }
}

/// Per-call allocation configuration: how many teams, and which rules
/// apply first.
///
/// Rules are ordered; order decides precedence and team numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamConfig {
    /// Total number of teams to produce.
    pub total_teams: usize,
    /// Composition rules, applied in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Vec<CompositionRule>,
}

impl TeamConfig {
    /// Creates a configuration without rules.
    pub fn new(total_teams: usize) -> Self {
        Self {
            total_teams,
            rules: Vec::new(),
        }
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: CompositionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns a copy without the rule identified by `rule_id`.
    pub fn without_rule(&self, rule_id: &str) -> Self {
        Self {
            total_teams: self.total_teams,
            rules: self
                .rules
                .iter()
                .filter(|r| r.id != rule_id)
                .cloned()
                .collect(),
        }
    }

    /// Number of teams reserved by rules, saturating at `usize::MAX`.
    pub fn rule_team_count(&self) -> usize {
        self.rules
            .iter()
            .fold(0usize, |n, r| n.saturating_add(r.team_count))
    }
}
