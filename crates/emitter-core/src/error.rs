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

//! Error types surfaced by the event registry.

use crate::event::EventKey;
use thiserror::Error;

/// An error produced while dispatching through an [`EventRegistry`](crate::EventRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A listener returned an error during dispatch.
    ///
    /// Listeners positioned after the failing one were not invoked.
    #[error("listener #{index} for event '{key}' failed: {source}")]
    ListenerFailed {
        /// The key that was being dispatched.
        key: EventKey,
        /// Position of the failing listener in the sequence.
        index: usize,
        /// The error returned by the listener.
        #[source]
        source: anyhow::Error,
    },
}

impl RegistryError {
    /// Returns the position of the failing listener.
    pub fn listener_index(&self) -> usize {
        match self {
            RegistryError::ListenerFailed { index, .. } => *index,
        }
    }

    /// Returns the key whose dispatch failed.
    pub fn key(&self) -> &EventKey {
        match self {
            RegistryError::ListenerFailed { key, .. } => key,
        }
    }
}
