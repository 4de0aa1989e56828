//! Domain model for team allocation
//!
//! - `Person` / `Group`: the roster supplied by the caller
//! - `CompositionRule` / `TeamConfig`: what the caller asks for
//! - `Team` / `RuleOrigin`: what the engine produces

mod person;
mod rule;
mod team;


pub use person::{group_counts, Group, GroupCounts, Person};
pub use rule::{CompositionRule, TeamComposition, TeamConfig};
pub use team::{RuleOrigin, Team};
