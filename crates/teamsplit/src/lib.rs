//! teamsplit - Constraint-aware random team allocation
//!
//! Describe your roster and the teams you want, then call `allocate`.
//!
//! # Example
//!
//! ```rust
//! use teamsplit::prelude::*;
//!
//! let roster = vec![
//!     Person::new("a-1", "Aki", Group::A),
//!     Person::new("a-2", "Ren", Group::A),
//!     Person::new("b-1", "Mio", Group::B),
//!     Person::new("b-2", "Sora", Group::B),
//! ];
//! let config = TeamConfig::new(2)
//!     .with_rule(CompositionRule::new("rule-1", TeamComposition::AOnly, 1, 2));
//!
//! assert!(validate(&roster, &config).is_feasible());
//!
//! let teams = allocate(&roster, &config).unwrap();
//! assert_eq!(teams[0].name, "WIP 1");
//! assert!(teams[0].members.iter().all(|p| p.group == Group::A));
//! ```

// Domain types
pub use teamsplit_core::{
    group_counts, AllocationError, CompositionRule, Group, GroupCounts, Person, Result,
    RuleOrigin, Team, TeamComposition, TeamConfig, ValidationError, ValidationField,
    ValidationOutcome, ValidationWarning,
};

// Configuration
pub use teamsplit_config::{AllocationConfig, ConfigError};

// Engine
pub use teamsplit_engine::{
    allocate, allocate_with_rng, apply_rules, partition, shuffled, validate, Reservation,
    TeamAllocator, TeamDraft,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{allocate, allocate_with_rng, validate, TeamAllocator};
    pub use super::{AllocationConfig, AllocationError};
    pub use super::{
        CompositionRule, Group, Person, Team, TeamComposition, TeamConfig, ValidationOutcome,
    };
}
