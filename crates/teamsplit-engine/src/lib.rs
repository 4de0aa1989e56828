//! Allocation engine for teamsplit
//!
//! Splits a roster into teams in four steps:
//! - [`validate`]: pre-flight feasibility check producing errors and warnings
//! - [`apply_rules`]: reserves teams for the ordered composition rules
//! - [`partition`]: size-balanced random split of the remaining members
//! - [`allocate`] / [`TeamAllocator`]: runs the above and numbers the teams
//!
//! Randomness is injected through [`rand::Rng`]; seed it for reproducible
//! output.

pub mod allocator;
pub mod partition;
pub mod reservation;
pub mod validator;

pub use allocator::{allocate, allocate_with_rng, TeamAllocator};
pub use partition::{partition, shuffled};
pub use reservation::{apply_rules, Reservation, TeamDraft};
pub use validator::validate;
