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

//! Synchronous event dispatch for host types.
//!
//! An [`EventRegistry`] maps each [`EventKey`] to an ordered sequence of
//! [`ListenerEntry`] values. Host types embed one and implement
//! [`EventTarget`] to expose `on` / `dispatch` style methods.
//!
//! Two gates control dispatch: the per-registry instance flag and a
//! [`GlobalSwitch`] shared by every registry holding the same handle.
//! Both must be enabled for any listener to run.

mod key;
mod listener;
mod map;
mod registry;
mod switch;
mod target;

pub use self::key::EventKey;
pub use self::listener::{Listener, ListenerEntry, ListenerId};
pub use self::map::ListenerMap;
pub use self::registry::EventRegistry;
pub use self::switch::GlobalSwitch;
pub use self::target::EventTarget;
