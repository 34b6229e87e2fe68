//! In-memory activity store and the enrollment rules applied to it

use super::types::{Activity, CapacityPolicy, Listing, RegistryError};

/// Activities in catalogue order, looked up by exact name
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
    policy: CapacityPolicy,
}

impl ActivityStore {
    /// Build a store from a catalogue. Later entries with an already-seen
    /// name are dropped so names stay unique.
    pub fn new(catalogue: impl IntoIterator<Item = Activity>) -> Self {
        let mut activities: Vec<Activity> = Vec::new();
        for activity in catalogue {
            if activities.iter().all(|a| a.name != activity.name) {
                activities.push(activity);
            }
        }
        Self {
            activities,
            policy: CapacityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CapacityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity, RegistryError> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))
    }

    /// Snapshot of every activity and roster
    pub fn all(&self) -> Listing {
        Listing(self.activities.clone())
    }

    /// Add `email` to the roster of `activity`
    pub fn signup(&mut self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let policy = self.policy;
        let entry = self.get_mut(activity)?;

        if entry.is_enrolled(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        if policy == CapacityPolicy::Enforced && entry.is_full() {
            return Err(RegistryError::ActivityFull {
                activity: activity.to_string(),
                capacity: entry.max_participants,
            });
        }

        entry.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of `activity`
    pub fn unregister(&mut self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let entry = self.get_mut(activity)?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        entry.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        ActivityStore::new([
            Activity::new("Soccer Team", "Practice and matches", "Tue/Thu", 2)
                .with_participants(["alex@mergington.edu"]),
            Activity::new("Art Club", "Painting", "Thursdays", 15),
        ])
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let store = store();
        assert!(store.get("Soccer Team").is_some());
        assert!(store.get("soccer team").is_none());
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_duplicate_names_are_dropped() {
        let store = ActivityStore::new([
            Activity::new("Art Club", "first", "Mon", 1),
            Activity::new("Art Club", "second", "Tue", 1),
        ]);
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.get("Art Club").unwrap().description, "first");
    }

    #[test]
    fn test_signup_appends() {
        let mut store = store();
        store.signup("Soccer Team", "new@mergington.edu").unwrap();

        assert_eq!(
            store.get("Soccer Team").unwrap().participants,
            vec!["alex@mergington.edu", "new@mergington.edu"]
        );
    }

    #[test]
    fn test_signup_duplicate_leaves_roster_unchanged() {
        let mut store = store();
        let err = store.signup("Soccer Team", "alex@mergington.edu").unwrap_err();

        assert!(matches!(err, RegistryError::AlreadySignedUp { .. }));
        assert_eq!(
            store.get("Soccer Team").unwrap().participants,
            vec!["alex@mergington.edu"]
        );
    }

    #[test]
    fn test_signup_unknown_activity() {
        let mut store = store();
        assert_eq!(
            store.signup("Unknown", "any@mergington.edu"),
            Err(RegistryError::ActivityNotFound("Unknown".to_string()))
        );
    }

    #[test]
    fn test_capacity_is_advisory_by_default() {
        let mut store = store();
        store.signup("Soccer Team", "b@mergington.edu").unwrap();
        store.signup("Soccer Team", "c@mergington.edu").unwrap();

        assert_eq!(store.get("Soccer Team").unwrap().participants.len(), 3);
    }

    #[test]
    fn test_capacity_enforced() {
        let mut store = store().with_policy(CapacityPolicy::Enforced);
        store.signup("Soccer Team", "b@mergington.edu").unwrap();

        let err = store.signup("Soccer Team", "c@mergington.edu").unwrap_err();
        assert_eq!(
            err,
            RegistryError::ActivityFull {
                activity: "Soccer Team".to_string(),
                capacity: 2,
            }
        );

        // duplicate check wins over the capacity check
        let err = store.signup("Soccer Team", "alex@mergington.edu").unwrap_err();
        assert!(matches!(err, RegistryError::AlreadySignedUp { .. }));
    }

    #[test]
    fn test_unregister_removes() {
        let mut store = store();
        store.unregister("Soccer Team", "alex@mergington.edu").unwrap();
        assert!(store.get("Soccer Team").unwrap().participants.is_empty());
    }

    #[test]
    fn test_unregister_missing_participant() {
        let mut store = store();
        let err = store
            .unregister("Soccer Team", "notexists@mergington.edu")
            .unwrap_err();

        assert!(matches!(err, RegistryError::ParticipantNotFound { .. }));
        assert_eq!(
            store.get("Soccer Team").unwrap().participants,
            vec!["alex@mergington.edu"]
        );
    }

    #[test]
    fn test_unregister_unknown_activity() {
        let mut store = store();
        let err = store.unregister("Unknown", "alex@mergington.edu").unwrap_err();
        assert!(matches!(err, RegistryError::ActivityNotFound(_)));
    }

    #[test]
    fn test_all_is_a_snapshot() {
        let mut store = store();
        let before = store.all();
        assert_eq!(before, store.all());

        store.signup("Art Club", "new@mergington.edu").unwrap();
        assert!(before.get("Art Club").unwrap().participants.is_empty());
        assert_ne!(before, store.all());
    }
}
