//! Types for the activity registry
//!
//! An [`Activity`] is one extracurricular offering and its roster. Errors
//! raised by enrollment operations are collected in [`RegistryError`].

use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// A named extracurricular offering with its current roster
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    /// Unique, case-sensitive lookup key. Serialized as the listing key
    /// instead of a field.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Enrolled student emails in signup order, each at most once
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed the roster with the given emails
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            let email = email.into();
            if !self.is_enrolled(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

/// Snapshot of every activity, serialized as a JSON object keyed by name
/// in catalogue order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing(pub Vec<Activity>);

impl Listing {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (&a.name, a)))
    }
}

/// Whether signup respects `max_participants`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Capacity is informational only
    #[default]
    Advisory,
    /// Signup is rejected once the roster is full
    Enforced,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Advisory
        }
    }
}

impl std::fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityPolicy::Advisory => write!(f, "advisory"),
            CapacityPolicy::Enforced => write!(f, "enforced"),
        }
    }
}

/// Broad category of a rejected enrollment operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

/// Errors that can occur during enrollment operations
///
/// The display strings are the messages shown to students.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No activity carries the requested name
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// The email is already on the roster
    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    /// The email is not on the roster
    #[error("Student not found in this activity")]
    ParticipantNotFound { activity: String, email: String },

    /// Roster is at `max_participants` and capacity is enforced
    #[error("Activity is full")]
    ActivityFull { activity: String, capacity: usize },
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::ActivityNotFound(_) | RegistryError::ParticipantNotFound { .. } => {
                ErrorKind::NotFound
            }
            RegistryError::AlreadySignedUp { .. } | RegistryError::ActivityFull { .. } => {
                ErrorKind::Conflict
            }
        }
    }
}
