// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared storage mapping event keys to ordered listener sequences.

use super::key::EventKey;
use super::listener::{Listener, ListenerEntry, ListenerId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Entries<P> = HashMap<EventKey, Vec<ListenerEntry<P>>>;

/// A cloneable handle to a key-to-listeners map.
///
/// Clones alias the same storage: a map handed to
/// [`EventRegistry::with_listeners`](crate::EventRegistry::with_listeners)
/// stays visible to (and mutable by) whoever kept another clone.
/// Insertion order within a key is dispatch order.
pub struct ListenerMap<P> {
    inner: Arc<Mutex<Entries<P>>>,
}

impl<P: 'static> ListenerMap<P> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Appends a listener under `key`, e.g. to pre-seed a map before handing
    /// it to a registry.
    ///
    /// ## Arguments
    /// * `key` - The event type the listener is stored under.
    /// * `listener` - The callable to append to that type's sequence.
    ///
    /// ## Returns
    /// The identity token of the new entry.
    pub fn insert_listener<F>(&self, key: impl Into<EventKey>, listener: F) -> ListenerId
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let listener: Listener<P> = Arc::new(listener);
        self.push(key.into(), ListenerEntry::new(listener))
    }

    /// Number of listeners stored under `key`.
    pub fn len_for(&self, key: &EventKey) -> usize {
        self.lock().get(key).map_or(0, Vec::len)
    }

    /// Number of listeners across every key.
    pub fn total_len(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    /// Returns `true` if `key` has been touched, even if its sequence is now empty.
    pub fn contains_key(&self, key: &EventKey) -> bool {
        self.lock().contains_key(key)
    }

    /// Every key present in the map, sorted.
    pub fn keys(&self) -> Vec<EventKey> {
        let mut keys: Vec<EventKey> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Returns `true` if both handles refer to the same storage.
    pub fn same_as(&self, other: &ListenerMap<P>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn push(&self, key: EventKey, entry: ListenerEntry<P>) -> ListenerId {
        let id = entry.id;
        self.lock().entry(key).or_default().push(entry);
        id
    }

    /// Empties the sequence under `key` in place. Returns `false` if there was
    /// nothing to clear.
    pub(crate) fn truncate(&self, key: &EventKey) -> bool {
        match self.lock().get_mut(key) {
            Some(entries) if !entries.is_empty() => {
                entries.clear();
                true
            }
            _ => false,
        }
    }

    /// Removes the first entry under `key` matching `pred`.
    pub(crate) fn remove_first<F>(&self, key: &EventKey, pred: F) -> bool
    where
        F: Fn(&ListenerEntry<P>) -> bool,
    {
        let mut guard = self.lock();
        let Some(entries) = guard.get_mut(key) else {
            return false;
        };
        match entries.iter().position(pred) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clones the entry at `index` under `key` so it can be invoked unlocked.
    pub(crate) fn entry_at(&self, key: &EventKey, index: usize) -> Option<ListenerEntry<P>> {
        self.lock().get(key).and_then(|entries| entries.get(index)).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Entries<P>> {
        // Listeners never run under this lock, so a poisoned guard still holds a consistent map.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: 'static> Default for ListenerMap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for ListenerMap<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> fmt::Debug for ListenerMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        if let Ok(guard) = self.inner.try_lock() {
            for (key, entries) in guard.iter() {
                map.entry(key, &entries.len());
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order_per_key() {
        let map = ListenerMap::<u32>::new();
        let a = map.insert_listener("tick", |_| Ok(()));
        let b = map.insert_listener("tick", |_| Ok(()));
        map.insert_listener(3, |_| Ok(()));

        let key = EventKey::from("tick");
        assert_eq!(map.len_for(&key), 2);
        assert_eq!(map.entry_at(&key, 0).unwrap().id, a);
        assert_eq!(map.entry_at(&key, 1).unwrap().id, b);
        assert!(map.entry_at(&key, 2).is_none());
        assert_eq!(map.total_len(), 3);
    }

    #[test]
    fn test_insert_accepts_empty_name() {
        let map = ListenerMap::<u32>::new();
        let id = map.insert_listener("", |_| Ok(()));
        let key = EventKey::from("");
        assert_eq!(map.len_for(&key), 1);
        assert_eq!(map.entry_at(&key, 0).unwrap().id, id);
    }

    #[test]
    fn test_integer_string_shares_slot_with_id() {
        let map = ListenerMap::<u32>::new();
        map.insert_listener(1, |_| Ok(()));
        map.insert_listener("1", |_| Ok(()));
        assert_eq!(map.len_for(&EventKey::from(1)), 2);
        assert_eq!(map.keys(), vec![EventKey::Id(1)]);
    }

    #[test]
    fn test_truncate_keeps_key() {
        let map = ListenerMap::<u32>::new();
        map.insert_listener("a", |_| Ok(()));
        let key = EventKey::from("a");

        assert!(map.truncate(&key));
        assert!(!map.truncate(&key));
        assert!(map.contains_key(&key));
        assert_eq!(map.len_for(&key), 0);
        assert!(!map.truncate(&EventKey::from("missing")));
    }

    #[test]
    fn test_remove_first_stops_at_first_match() {
        let map = ListenerMap::<u32>::new();
        let f: Listener<u32> = Arc::new(|_| Ok(()));
        let key = EventKey::from(1);
        map.push(key.clone(), ListenerEntry::new(Arc::clone(&f)));
        let second = map.push(key.clone(), ListenerEntry::new(Arc::clone(&f)));

        assert!(map.remove_first(&key, |entry| entry.holds(&f)));
        assert_eq!(map.len_for(&key), 1);
        assert_eq!(map.entry_at(&key, 0).unwrap().id, second);
        assert!(!map.remove_first(&EventKey::from(2), |_| true));
    }

    #[test]
    fn test_clones_alias_storage() {
        let map = ListenerMap::<u32>::new();
        let alias = map.clone();
        alias.insert_listener("a", |_| Ok(()));

        assert!(map.same_as(&alias));
        assert_eq!(map.len_for(&EventKey::from("a")), 1);
        assert!(!map.same_as(&ListenerMap::new()));
    }

    #[test]
    fn test_keys_sorted() {
        let map = ListenerMap::<u32>::new();
        map.insert_listener("b", |_| Ok(()));
        map.insert_listener("a", |_| Ok(()));
        map.insert_listener(5, |_| Ok(()));
        assert_eq!(
            map.keys(),
            vec![EventKey::from("a"), EventKey::from("b"), EventKey::from(5)]
        );
    }
}
