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

//! The listener registry hosts embed to gain event dispatch.

use super::key::EventKey;
use super::listener::{Listener, ListenerEntry, ListenerId};
use super::map::ListenerMap;
use super::switch::GlobalSwitch;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Registers listeners per event key and notifies them synchronously.
///
/// Dispatch only has an effect while both the instance gate
/// ([`set_enabled`](Self::set_enabled)) and the [`GlobalSwitch`] are enabled.
/// The listener map is created lazily on first registration.
///
/// # Mutation during dispatch
///
/// [`dispatch`](Self::dispatch) walks the sequence by index, re-reading the
/// live sequence before each call, and never holds a lock while a listener
/// runs. Listeners may therefore register, remove or clear without
/// deadlocking, but the outcome follows index semantics and is not otherwise
/// specified: a listener removing itself causes the next one to be skipped,
/// and listeners appended mid-dispatch are reached in the same round. A
/// [`clear_all`](Self::clear_all) issued by a listener does not end the
/// current round, which keeps walking the map it started with. Re-entrant
/// dispatch of the same key runs the nested round to completion before the
/// outer round resumes at its next index.
///
/// # Example
///
/// ```rust
/// use emitter_core::{EventRegistry, GlobalSwitch};
/// use std::sync::{Arc, Mutex};
///
/// let registry = EventRegistry::<u32>::new().with_switch(GlobalSwitch::detached());
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// registry.register(1, move |value: &u32| {
///     sink.lock().unwrap().push(*value);
///     Ok(())
/// });
///
/// assert_eq!(registry.dispatch(1, &42).unwrap(), 1);
/// assert_eq!(*seen.lock().unwrap(), vec![42]);
/// ```
pub struct EventRegistry<P> {
    listeners: Mutex<Option<ListenerMap<P>>>,
    enabled: AtomicBool,
    switch: GlobalSwitch,
    config: RegistryConfig,
}

impl<P: 'static> EventRegistry<P> {
    /// Creates a registry with no listener map, gated by the process-wide switch.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a registry whose instance gate and logging follow `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            listeners: Mutex::new(None),
            enabled: AtomicBool::new(config.events_enabled),
            switch: GlobalSwitch::process(),
            config,
        }
    }

    /// Creates a registry over an existing map.
    ///
    /// The map is shared, not copied: registrations and clears made through
    /// either side are visible to the other until [`clear_all`](Self::clear_all).
    ///
    /// ## Arguments
    /// * `listeners` - A handle to the map; keep a clone to observe it from outside.
    ///
    /// ## Returns
    /// A registry gated by the process-wide switch, with its instance gate enabled.
    pub fn with_listeners(listeners: ListenerMap<P>) -> Self {
        let registry = Self::new();
        *registry.slot() = Some(listeners);
        registry
    }

    /// Replaces the global gate this registry consults.
    pub fn with_switch(mut self, switch: GlobalSwitch) -> Self {
        self.switch = switch;
        self
    }

    /// Appends `listener` to the sequence for `key`.
    ///
    /// Duplicates are allowed; each registration gets its own [`ListenerId`].
    ///
    /// ## Arguments
    /// * `key` - The event type to listen for. Any name or integer is accepted.
    /// * `listener` - The callable invoked with each dispatched payload.
    ///
    /// ## Returns
    /// The identity token to pass to [`remove_listener`](Self::remove_listener).
    pub fn register<F>(&self, key: impl Into<EventKey>, listener: F) -> ListenerId
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register_listener(key, Arc::new(listener))
    }

    /// Same as [`register`](Self::register).
    pub fn add_listener<F>(&self, key: impl Into<EventKey>, listener: F) -> ListenerId
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register(key, listener)
    }

    /// Appends an already shared listener, so the caller can later remove it
    /// with [`remove_listener_ref`](Self::remove_listener_ref).
    pub fn register_listener(&self, key: impl Into<EventKey>, listener: Listener<P>) -> ListenerId {
        let key = key.into();
        let map = self.map_or_init();
        let id = map.push(key.clone(), ListenerEntry::new(listener));
        log::trace!("Registered listener {id} for event '{key}'.");
        id
    }

    /// Empties the sequence for `key` in place. The key itself stays present.
    pub fn clear_type(&self, key: impl Into<EventKey>) {
        let key = key.into();
        let Some(map) = self.current_map() else {
            return;
        };
        if map.truncate(&key) {
            log::debug!("Cleared listeners for event '{key}'.");
        }
    }

    /// Removes the first listener under `key` registered with `id`.
    ///
    /// Returns `false` when nothing matched.
    pub fn remove_listener(&self, key: impl Into<EventKey>, id: ListenerId) -> bool {
        self.remove_where(key.into(), |entry| entry.id == id)
    }

    /// Removes the first listener under `key` that is `listener` itself
    /// (pointer identity). Later duplicates stay registered.
    pub fn remove_listener_ref(&self, key: impl Into<EventKey>, listener: &Listener<P>) -> bool {
        self.remove_where(key.into(), |entry| entry.holds(listener))
    }

    /// Drops every listener for every key by swapping in a fresh map.
    ///
    /// A map supplied through [`with_listeners`](Self::with_listeners) is left
    /// as it was and is no longer shared with this registry.
    pub fn clear_all(&self) {
        let mut slot = self.slot();
        if slot.is_some() {
            *slot = Some(ListenerMap::new());
            log::debug!("Cleared all event listeners.");
        }
    }

    /// Invokes every listener registered for `key`, in registration order.
    ///
    /// The first listener error stops delivery. Panics are not caught.
    ///
    /// ## Arguments
    /// * `key` - The event type to notify.
    /// * `payload` - Passed by reference to every listener.
    ///
    /// ## Returns
    /// The number of listeners invoked, `Ok(0)` for a suppressed dispatch or an
    /// unknown key, or [`RegistryError::ListenerFailed`] naming the failing listener.
    pub fn dispatch(
        &self,
        key: impl Into<EventKey>,
        payload: &P,
    ) -> Result<usize, RegistryError> {
        let key = key.into();
        if !self.switch.is_enabled() || !self.is_enabled() {
            log::debug!("Dispatch of event '{key}' suppressed by a disabled gate.");
            return Ok(0);
        }
        let Some(map) = self.current_map() else {
            return Ok(0);
        };

        let mut index = 0;
        while let Some(entry) = map.entry_at(&key, index) {
            (entry.listener)(payload).map_err(|source| RegistryError::ListenerFailed {
                key: key.clone(),
                index,
                source,
            })?;
            index += 1;
        }

        log::log!(
            self.config.dispatch_level(),
            "Dispatched event '{key}' to {index} listener(s)."
        );
        Ok(index)
    }

    /// Same as [`dispatch`](Self::dispatch).
    pub fn dispatch_event(
        &self,
        key: impl Into<EventKey>,
        payload: &P,
    ) -> Result<usize, RegistryError> {
        self.dispatch(key, payload)
    }

    /// Returns the instance gate.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Sets the instance gate. The global gate is unaffected.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Returns the global gate this registry consults.
    pub fn global_switch(&self) -> &GlobalSwitch {
        &self.switch
    }

    /// Returns the configuration the registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns `true` once a listener map exists.
    pub fn is_initialized(&self) -> bool {
        self.slot().is_some()
    }

    /// Returns a handle to the current listener map, if one exists.
    pub fn listener_map(&self) -> Option<ListenerMap<P>> {
        self.current_map()
    }

    /// Number of listeners registered for `key`.
    pub fn listener_count(&self, key: impl Into<EventKey>) -> usize {
        let key = key.into();
        self.current_map().map_or(0, |map| map.len_for(&key))
    }

    /// Number of listeners across every key.
    pub fn total_listener_count(&self) -> usize {
        self.current_map().map_or(0, |map| map.total_len())
    }

    /// Returns `true` if at least one listener is registered for `key`.
    pub fn has_listeners(&self, key: impl Into<EventKey>) -> bool {
        self.listener_count(key) > 0
    }

    /// Every key touched since the last [`clear_all`](Self::clear_all), sorted.
    pub fn event_keys(&self) -> Vec<EventKey> {
        self.current_map().map(|map| map.keys()).unwrap_or_default()
    }

    fn remove_where<F>(&self, key: EventKey, pred: F) -> bool
    where
        F: Fn(&ListenerEntry<P>) -> bool,
    {
        let Some(map) = self.current_map() else {
            return false;
        };
        let removed = map.remove_first(&key, pred);
        if removed {
            log::trace!("Removed a listener for event '{key}'.");
        }
        removed
    }

    fn map_or_init(&self) -> ListenerMap<P> {
        self.slot().get_or_insert_with(ListenerMap::new).clone()
    }

    fn current_map(&self) -> Option<ListenerMap<P>> {
        self.slot().clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<ListenerMap<P>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: 'static> Default for EventRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("enabled", &self.enabled.load(Ordering::SeqCst))
            .field("switch", &self.switch)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
