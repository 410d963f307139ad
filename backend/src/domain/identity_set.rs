//! Keyed set of foreign identities owned by an aggregate.
//!
//! Members are keyed by their string value, so membership is unique
//! regardless of insertion order. The set itself does not enforce
//! non-emptiness; aggregates validate that on every mutation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::identity::{Identity, IdentityKind};
use super::validation::HasLen;

/// Members removed and added by [`IdentitySet::sync`], in that order.
pub struct SetDiff<K> {
    /// Members dropped because the target set did not mention them.
    pub removed: Vec<Identity<K>>,
    /// Members inserted because they were missing.
    pub added: Vec<Identity<K>>,
}

impl<K> SetDiff<K> {
    /// Whether the sync changed nothing.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

impl<K> Default for SetDiff<K> {
    fn default() -> Self {
        Self {
            removed: Vec::new(),
            added: Vec::new(),
        }
    }
}

impl<K: IdentityKind> fmt::Debug for SetDiff<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetDiff")
            .field("removed", &self.removed)
            .field("added", &self.added)
            .finish()
    }
}

impl<K> PartialEq for SetDiff<K> {
    fn eq(&self, other: &Self) -> bool {
        self.removed == other.removed && self.added == other.added
    }
}

/// Unique, ordered set of identities of kind `K`.
pub struct IdentitySet<K> {
    members: BTreeMap<String, Identity<K>>,
}

impl<K> IdentitySet<K> {
    /// Empty set.
    pub fn new() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }

    /// Insert `id`; returns `false` when it was already a member.
    pub fn insert(&mut self, id: Identity<K>) -> bool {
        let key = id.as_ref().to_owned();
        if self.members.contains_key(&key) {
            return false;
        }
        self.members.insert(key, id);
        true
    }

    /// Remove `id`; returns `false` when it was not a member.
    pub fn remove(&mut self, id: &Identity<K>) -> bool {
        self.members.remove(id.as_ref()).is_some()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: &Identity<K>) -> bool {
        self.members.contains_key(id.as_ref())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Identity<K>> {
        self.members.values()
    }

    /// Replace the membership wholesale.
    ///
    /// An empty replacement is ignored so this path never clears the set.
    /// Returns whether the replacement was applied.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = Identity<K>>) -> bool {
        let replacement: Self = ids.into_iter().collect();
        if replacement.is_empty() {
            return false;
        }
        *self = replacement;
        true
    }

    /// Make the membership exactly `ids` by removing absent members first
    /// and then inserting missing ones.
    ///
    /// An empty target is ignored so this path never clears the set.
    pub fn sync(&mut self, ids: impl IntoIterator<Item = Identity<K>>) -> SetDiff<K> {
        let target: Self = ids.into_iter().collect();
        if target.is_empty() {
            return SetDiff::default();
        }

        let removed: Vec<Identity<K>> = self
            .iter()
            .filter(|member| !target.contains(member))
            .cloned()
            .collect();
        for member in &removed {
            self.remove(member);
        }

        let added: Vec<Identity<K>> = target
            .members
            .into_values()
            .filter(|candidate| !self.contains(candidate))
            .collect();
        for candidate in &added {
            self.insert(candidate.clone());
        }

        SetDiff { removed, added }
    }
}

impl<K> Default for IdentitySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for IdentitySet<K> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl<K> PartialEq for IdentitySet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<K> Eq for IdentitySet<K> {}

impl<K: IdentityKind> fmt::Debug for IdentitySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.values()).finish()
    }
}

impl<K> FromIterator<Identity<K>> for IdentitySet<K> {
    fn from_iter<I: IntoIterator<Item = Identity<K>>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<K> HasLen for IdentitySet<K> {
    fn len(&self) -> usize {
        self.members.len()
    }
}

impl<K> Serialize for IdentitySet<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.members.values())
    }
}
