//! The activity directory — the service's only piece of state.
//!
//! One [`ActivityDirectory`] is built at startup and shared with the HTTP
//! layer behind an `Arc`. Every operation takes the inner `RwLock` for the
//! length of a single check-and-mutate, so overlapping signups and
//! unregistrations on the same roster are serialized and never lose updates.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::DirectoryError;

use super::model::{Activity, ActivityMap};
use super::seed;

pub struct ActivityDirectory {
    activities: RwLock<ActivityMap>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Directory holding a fresh copy of the seed activities.
    pub fn seeded() -> Self {
        Self::new(seed::activities())
    }

    /// Snapshot of every activity, in directory order.
    pub fn list(&self) -> Result<ActivityMap, DirectoryError> {
        Ok(self.read()?.clone())
    }

    /// Snapshot of a single activity.
    pub fn get(&self, name: &str) -> Result<Activity, DirectoryError> {
        self.read()?
            .get(name)
            .cloned()
            .ok_or(DirectoryError::NotFound)
    }

    /// Append `email` to the roster of `name`. Returns the confirmation
    /// message on success.
    pub fn signup(&self, name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.write()?;
        let activity = activities.get_mut(name).ok_or(DirectoryError::NotFound)?;

        if !activity.add_participant(email.to_string()) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        debug!(activity = %name, participants = activity.participants.len(), "roster grew");
        Ok(format!("Signed up {email} for {name}"))
    }

    /// Remove `email` from the roster of `name`. Returns the confirmation
    /// message on success.
    pub fn unregister(&self, name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.write()?;
        let activity = activities.get_mut(name).ok_or(DirectoryError::NotFound)?;

        if !activity.remove_participant(email) {
            return Err(DirectoryError::NotSignedUp);
        }

        debug!(activity = %name, participants = activity.participants.len(), "roster shrank");
        Ok(format!("Unregistered {email} from {name}"))
    }

    pub fn len(&self) -> Result<usize, DirectoryError> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ActivityMap>, DirectoryError> {
        self.activities
            .read()
            .map_err(|_| DirectoryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ActivityMap>, DirectoryError> {
        self.activities
            .write()
            .map_err(|_| DirectoryError::LockPoisoned)
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
