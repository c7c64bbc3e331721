//! Activity record and the insertion-ordered name → activity mapping.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ── Activity ──────────────────────────────────────────────────────────────────

/// A named extracurricular offering. The name is the key in [`ActivityMap`],
/// not a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity; signups are never refused because of it.
    pub max_participants: u32,
    /// Participant emails in signup order, without duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            self.add_participant(email.into());
        }
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append `email` to the roster. Returns `false` (and leaves the roster
    /// alone) when it is already present.
    pub fn add_participant(&mut self, email: String) -> bool {
        if self.is_signed_up(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Remove `email`, keeping the remaining participants in order.
    /// Returns `false` when it was not on the roster.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}

// ── ActivityMap ───────────────────────────────────────────────────────────────

/// Name → [`Activity`] mapping that keeps insertion order.
///
/// Serializes as a JSON object whose keys appear in insertion order. Lookups
/// are linear; the directory only ever holds a handful of activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityMap {
    entries: Vec<(String, Activity)>,
}

impl ActivityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }
}

impl<S: Into<String>> FromIterator<(S, Activity)> for ActivityMap {
    fn from_iter<I: IntoIterator<Item = (S, Activity)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, activity) in iter {
            map.insert(name, activity);
        }
        map
    }
}

impl Serialize for ActivityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
