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

//! # Emitter Core
//!
//! A synchronous, in-process listener registry. Host types embed an
//! [`EventRegistry`] and implement [`EventTarget`] to gain the ability to
//! register named listeners and notify them with a payload.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod event;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use event::{
    EventKey, EventRegistry, EventTarget, GlobalSwitch, Listener, ListenerEntry, ListenerId,
    ListenerMap,
};
