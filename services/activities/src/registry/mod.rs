//! Activity Registry
//!
//! Owns the in-memory [`ActivityStore`] behind a single lock. Each signup or
//! unregister runs its check and its mutation under one write guard, so two
//! requests for the same roster never interleave.
//!
//! ## Usage
//! ```no_run
//! # async fn demo() -> Result<(), activities::registry::RegistryError> {
//! use activities::registry::Registry;
//!
//! let registry = Registry::seeded();
//! registry.signup("Chess Club", "new@mergington.edu").await?;
//! let listing = registry.list_activities().await;
//! assert!(listing.get("Chess Club").unwrap().is_enrolled("new@mergington.edu"));
//! # Ok(())
//! # }
//! ```

pub mod seed;
pub mod store;
pub mod types;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub use store::ActivityStore;
pub use types::{Activity, CapacityPolicy, ErrorKind, Listing, RegistryError};

/// Shared handle to the activity store
#[derive(Debug, Clone)]
pub struct Registry {
    store: Arc<RwLock<ActivityStore>>,
}

impl Registry {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Registry holding this term's catalogue with advisory capacity
    pub fn seeded() -> Self {
        Self::new(ActivityStore::new(seed::catalogue()))
    }

    /// Registry holding this term's catalogue with the given capacity policy
    pub fn seeded_with(policy: CapacityPolicy) -> Self {
        Self::new(ActivityStore::new(seed::catalogue()).with_policy(policy))
    }

    pub async fn policy(&self) -> CapacityPolicy {
        self.store.read().await.policy()
    }

    pub async fn list_activities(&self) -> Listing {
        self.store.read().await.all()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.store.read().await.get(name).cloned()
    }

    /// Enroll `email` in `activity` and return a confirmation message
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, RegistryError> {
        let mut store = self.store.write().await;
        match store.signup(activity, email) {
            Ok(()) => {
                info!(activity, email, "Signed up participant");
                Ok(format!("Signed up {} for {}", email, activity))
            }
            Err(e) => {
                warn!(activity, email, "Signup rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Remove `email` from `activity` and return a confirmation message
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, RegistryError> {
        let mut store = self.store.write().await;
        match store.unregister(activity, email) {
            Ok(()) => {
                info!(activity, email, "Unregistered participant");
                Ok(format!("Unregistered {} from {}", email, activity))
            }
            Err(e) => {
                warn!(activity, email, "Unregister rejected: {}", e);
                Err(e)
            }
        }
    }
}
