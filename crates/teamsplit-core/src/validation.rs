//! Validation outcome types.
//!
//! Validation never fails: it collects blocking errors and advisory
//! warnings into a [`ValidationOutcome`]. Error messages carrying counts use
//! the `required: X, current: Y` pattern.

use std::fmt;

use thiserror::Error;

use crate::domain::Group;

/// Input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationField {
    Members,
    TotalTeams,
    Rules,
}

impl ValidationField {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationField::Members => "members",
            ValidationField::TotalTeams => "total_teams",
            ValidationField::Rules => "rules",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blocking validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The roster has no members. Reported alone.
    #[error("roster empty: no members registered")]
    EmptyRoster,

    #[error("total_teams must be at least 1 (current: {total_teams})")]
    InvalidTeamCount { total_teams: usize },

    #[error("team count exceeds roster size (required: {required}, current: {current})")]
    TeamCountExceedsRoster { required: usize, current: usize },

    /// A group-only rule reserves more members than the group has.
    #[error("not enough {group} members (required: {required}, current: {current})")]
    GroupShortfall {
        rule_id: String,
        group: Group,
        required: usize,
        current: usize,
    },

    /// A mixed rule cannot place one member of `group` in each of its teams.
    #[error("not enough {group} members for mixed teams (required: {required}, current: {current})")]
    MixedGroupShortfall {
        rule_id: String,
        group: Group,
        required: usize,
        current: usize,
    },

    /// Reservations so far exceed the whole roster.
    #[error("not enough members for reserved teams (required: {required}, current: {current})")]
    MixedPoolShortfall {
        rule_id: String,
        required: usize,
        current: usize,
    },

    #[error("rule teams exceed total teams (required: {required}, current: {current})")]
    RuleTeamCountOverflow { required: usize, current: usize },

    #[error("rule {rule_id}: {reason}")]
    InvalidRule { rule_id: String, reason: String },

    /// Rules take every team but leave members behind.
    #[error("every team is reserved by a rule but {unassigned} members would have no team")]
    UnassignedMembers { unassigned: usize },

    #[error("duplicate member id {id}")]
    DuplicateMember { id: String },
}

impl ValidationError {
    /// Returns the input field this error refers to.
    pub fn field(&self) -> ValidationField {
        match self {
            ValidationError::EmptyRoster | ValidationError::DuplicateMember { .. } => {
                ValidationField::Members
            }
            ValidationError::InvalidTeamCount { .. }
            | ValidationError::TeamCountExceedsRoster { .. }
            | ValidationError::UnassignedMembers { .. } => ValidationField::TotalTeams,
            ValidationError::GroupShortfall { .. }
            | ValidationError::MixedGroupShortfall { .. }
            | ValidationError::MixedPoolShortfall { .. }
            | ValidationError::RuleTeamCountOverflow { .. }
            | ValidationError::InvalidRule { .. } => ValidationField::Rules,
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// A non-blocking advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// More teams than half the roster; teams will be small.
    TooManyTeams { total_teams: usize, roster_size: usize },
    /// Teams left over after rule reservations are filled at random.
    UnconstrainedTeams { count: usize },
    /// Fewer unreserved members than unconstrained teams; some teams stay empty.
    EmptyTeams { teams: usize, members: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::TooManyTeams {
                total_teams,
                roster_size,
            } => write!(
                f,
                "too many teams, each will be small ({} teams for {} members)",
                total_teams, roster_size
            ),
            ValidationWarning::UnconstrainedTeams { count } => write!(
                f,
                "{} teams will be filled by unconstrained random assignment",
                count
            ),
            ValidationWarning::EmptyTeams { teams, members } => write!(
                f,
                "{} unconstrained teams share {} unreserved members, some will be empty",
                teams, members
            ),
        }
    }
}

/// Result of validating a roster against a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Blocking errors, in check order.
    pub errors: Vec<ValidationError>,
    /// Advisory warnings, in check order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationOutcome {
    /// Returns true if no blocking error was found.
    pub fn is_feasible(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first blocking error, if any.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Error messages, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Warning messages, in order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}
