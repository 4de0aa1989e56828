//! Shared test fixtures for teamsplit crates.
//!
//! This crate provides roster builders and pure helper functions for tests.
//! It depends only on `teamsplit-core`.
//!
//! - [`roster`] - Roster builders
//! - [`teams`] - Helpers for inspecting allocation output
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! teamsplit-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use teamsplit_test::roster::{roster, rule};
//! use teamsplit_test::teams::sorted_member_ids;
//! ```

pub mod roster;
pub mod teams;

// Re-export commonly used fixtures at crate root for convenience
pub use roster::{roster, roster_from_groups, rule, sample_roster};
pub use teams::{member_ids, sorted_member_ids, sorted_roster_ids, team_sizes};
