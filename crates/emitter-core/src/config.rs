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

//! Construction-time settings for an [`EventRegistry`](crate::EventRegistry).

use serde::{Deserialize, Serialize};

/// Configuration for a single registry instance.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Initial value of the instance-level gate.
    pub events_enabled: bool,
    /// Log every dispatch at `debug` instead of `trace`.
    pub log_dispatch: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            events_enabled: true,
            log_dispatch: false,
        }
    }
}

impl RegistryConfig {
    /// Returns the log level used when reporting a dispatch.
    pub(crate) fn dispatch_level(&self) -> log::Level {
        if self.log_dispatch {
            log::Level::Debug
        } else {
            log::Level::Trace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_events() {
        let config = RegistryConfig::default();
        assert!(config.events_enabled);
        assert!(!config.log_dispatch);
        assert_eq!(config.dispatch_level(), log::Level::Trace);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: RegistryConfig = serde_json::from_str(r#"{ "log_dispatch": true }"#).unwrap();
        assert!(config.events_enabled);
        assert!(config.log_dispatch);
        assert_eq!(config.dispatch_level(), log::Level::Debug);
    }

    #[test]
    fn test_disabled_events() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{ "events_enabled": false }"#).unwrap();
        assert_eq!(
            config,
            RegistryConfig {
                events_enabled: false,
                log_dispatch: false,
            }
        );
    }
}
