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

//! The behavior host types implement to expose an [`EventRegistry`].

use super::key::EventKey;
use super::listener::ListenerId;
use super::registry::EventRegistry;
use crate::error::RegistryError;

/// Gives a host type the event API of the registry it embeds.
///
/// Implementors only provide [`events`](Self::events); every other method
/// delegates to it.
pub trait EventTarget<P: 'static> {
    /// Returns the registry backing this host.
    fn events(&self) -> &EventRegistry<P>;

    /// Registers `listener` for `key`. See [`EventRegistry::register`].
    fn on<F>(&self, key: impl Into<EventKey>, listener: F) -> ListenerId
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.events().register(key, listener)
    }

    /// Same as [`on`](Self::on).
    fn add_event_listener<F>(&self, key: impl Into<EventKey>, listener: F) -> ListenerId
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.on(key, listener)
    }

    /// Empties the listeners of `key`. See [`EventRegistry::clear_type`].
    fn remove_event_type(&self, key: impl Into<EventKey>) {
        self.events().clear_type(key);
    }

    /// Removes one listener. See [`EventRegistry::remove_listener`].
    fn remove_event_listener(&self, key: impl Into<EventKey>, id: ListenerId) -> bool {
        self.events().remove_listener(key, id)
    }

    /// Drops every listener. See [`EventRegistry::clear_all`].
    fn clear_events(&self) {
        self.events().clear_all();
    }

    /// Notifies the listeners of `key`. See [`EventRegistry::dispatch`].
    fn dispatch(&self, key: impl Into<EventKey>, payload: &P) -> Result<usize, RegistryError> {
        self.events().dispatch(key, payload)
    }

    /// Same as [`dispatch`](Self::dispatch).
    fn dispatch_event(
        &self,
        key: impl Into<EventKey>,
        payload: &P,
    ) -> Result<usize, RegistryError> {
        self.dispatch(key, payload)
    }
}

impl<P: 'static> EventTarget<P> for EventRegistry<P> {
    fn events(&self) -> &EventRegistry<P> {
        self
    }
}
