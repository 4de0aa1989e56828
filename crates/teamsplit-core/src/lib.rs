//! teamsplit core - domain types for team allocation
//!
//! This crate provides the fundamental types shared by the teamsplit crates:
//! - Roster types (`Person`, `Group`)
//! - Composition rules and the per-call `TeamConfig`
//! - Output `Team`s and their rule origin
//! - Validation outcome types and the crate error

pub mod domain;
pub mod error;
pub mod validation;

pub use domain::{
    group_counts, CompositionRule, Group, GroupCounts, Person, RuleOrigin, Team, TeamComposition,
    TeamConfig,
};
pub use error::{AllocationError, Result};
pub use validation::{ValidationError, ValidationField, ValidationOutcome, ValidationWarning};
