//! Allocation output.

use super::person::Person;
use super::rule::{CompositionRule, TeamComposition};

/// Identifies the rule a team was reserved for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleOrigin {
    pub rule_id: String,
    pub composition: TeamComposition,
}

impl From<&CompositionRule> for RuleOrigin {
    fn from(rule: &CompositionRule) -> Self {
        Self {
            rule_id: rule.id.clone(),
            composition: rule.composition,
        }
    }
}

/// A finished team.
///
/// Teams are rebuilt on every allocation and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Position-derived identifier (`team-1`, `team-2`, ...).
    pub id: String,
    /// Display name (`WIP 1`, `WIP 2`, ...).
    pub name: String,
    pub members: Vec<Person>,
    /// The rule that reserved this team, `None` for randomly filled teams.
    pub origin: Option<RuleOrigin>,
}

impl Team {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if this team was produced by a composition rule.
    pub fn is_reserved(&self) -> bool {
        self.origin.is_some()
    }
}
