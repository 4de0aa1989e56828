//! Roster members and their group labels.

use std::fmt;

/// One of the two group labels a person can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Group {
    A,
    B,
}

impl Group {
    /// Both groups, in display order.
    pub const ALL: [Group; 2] = [Group::A, Group::B];
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A => write!(f, "group A"),
            Group::B => write!(f, "group B"),
        }
    }
}

/// A person on the roster.
///
/// # Example
///
/// ```
/// use teamsplit_core::{Group, Person};
///
/// let p = Person::new("a-1", "Yamamoto", Group::A);
/// assert_eq!(p.id, "a-1");
/// assert_eq!(p.group, Group::A);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Unique identifier within a roster.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Group label.
    pub group: Group,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: Group) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group,
        }
    }
}

/// Head count per group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounts {
    pub a: usize,
    pub b: usize,
}

impl GroupCounts {
    /// Returns the count for `group`.
    pub fn get(&self, group: Group) -> usize {
        match group {
            Group::A => self.a,
            Group::B => self.b,
        }
    }

    /// Returns the combined count.
    pub fn total(&self) -> usize {
        self.a + self.b
    }
}

/// Counts roster members per group.
pub fn group_counts(roster: &[Person]) -> GroupCounts {
    roster
        .iter()
        .fold(GroupCounts::default(), |mut counts, person| {
            match person.group {
                Group::A => counts.a += 1,
                Group::B => counts.b += 1,
            }
            counts
        })
}
