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

//! Listener callables and the tagged entries stored per event type.

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A one-argument callable invoked on dispatch.
///
/// Returning `Err` aborts delivery to the listeners that follow it.
pub type Listener<P> = Arc<dyn Fn(&P) -> anyhow::Result<()> + Send + Sync>;

/// Identity token minted for every registration.
///
/// Registering the same callable twice yields two distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered listener together with its identity token.
pub struct ListenerEntry<P> {
    /// Token returned by the registration that created this entry.
    pub id: ListenerId,
    /// The callable itself.
    pub listener: Listener<P>,
}

impl<P> ListenerEntry<P> {
    /// Wraps `listener` in a fresh entry.
    pub fn new(listener: Listener<P>) -> Self {
        Self {
            id: ListenerId::new(),
            listener,
        }
    }

    /// Returns `true` if this entry stores exactly `listener` (pointer identity).
    pub fn holds(&self, listener: &Listener<P>) -> bool {
        Arc::ptr_eq(&self.listener, listener)
    }
}

impl<P> Clone for ListenerEntry<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: Arc::clone(&self.listener),
        }
    }
}

impl<P> fmt::Debug for ListenerEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerEntry").field("id", &self.id).finish()
    }
}
