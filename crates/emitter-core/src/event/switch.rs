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

//! The process-wide dispatch gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static PROCESS_SWITCH: OnceLock<GlobalSwitch> = OnceLock::new();

/// A shared on/off gate consulted by every registry holding a handle to it.
///
/// Clones alias the same flag. Dispatch only has an effect while both this
/// gate and the registry's own instance gate are enabled.
#[derive(Debug, Clone)]
pub struct GlobalSwitch {
    enabled: Arc<AtomicBool>,
}

impl GlobalSwitch {
    /// Returns the switch shared by every registry built with [`EventRegistry::new`].
    ///
    /// [`EventRegistry::new`]: crate::EventRegistry::new
    pub fn process() -> Self {
        PROCESS_SWITCH.get_or_init(Self::detached).clone()
    }

    /// Creates an independent switch, enabled, shared only with its own clones.
    pub fn detached() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Returns the current state of the gate.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Sets the gate for every holder of this switch.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        log::debug!("Global event switch set to {enabled}.");
    }

    /// Shorthand for `set_enabled(true)`.
    pub fn enable(&self) {
        self.set_enabled(true);
    }

    /// Shorthand for `set_enabled(false)`.
    pub fn disable(&self) {
        self.set_enabled(false);
    }

    /// Returns `true` if both handles refer to the same flag.
    pub fn same_as(&self, other: &GlobalSwitch) -> bool {
        Arc::ptr_eq(&self.enabled, &other.enabled)
    }
}

impl Default for GlobalSwitch {
    fn default() -> Self {
        Self::process()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_switch_is_shared() {
        assert!(GlobalSwitch::process().same_as(&GlobalSwitch::process()));
        assert!(GlobalSwitch::default().same_as(&GlobalSwitch::process()));
    }

    #[test]
    fn test_detached_switches_are_independent() {
        let a = GlobalSwitch::detached();
        let b = GlobalSwitch::detached();
        assert!(!a.same_as(&b));

        a.disable();
        assert!(!a.is_enabled());
        assert!(b.is_enabled());
    }

    #[test]
    fn test_clones_alias() {
        let a = GlobalSwitch::detached();
        let b = a.clone();
        b.disable();
        assert!(!a.is_enabled());
        a.enable();
        assert!(b.is_enabled());
    }
}
