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

//! Event-type keys partitioning the listener map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an event type. Either a name or an integer.
///
/// Converting from a string that spells an integer in canonical form
/// (`"1"`, `"-3"`, not `"01"` or `"+1"`) yields [`EventKey::Id`], so `1` and
/// `"1"` address the same listeners. Every other string, including the empty
/// one, is a [`EventKey::Name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKey {
    /// A named event type, e.g. `"login"`.
    Name(String),
    /// A numeric event type.
    Id(i64),
}

impl EventKey {
    /// Builds a key from a name, folding canonical integer spellings into [`EventKey::Id`].
    pub fn name(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.parse::<i64>() {
            Ok(id) if id.to_string() == name => EventKey::Id(id),
            _ => EventKey::Name(name),
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Name(name) => f.write_str(name),
            EventKey::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for EventKey {
    fn from(name: &str) -> Self {
        EventKey::name(name)
    }
}

impl From<String> for EventKey {
    fn from(name: String) -> Self {
        EventKey::name(name)
    }
}

impl From<&String> for EventKey {
    fn from(name: &String) -> Self {
        EventKey::name(name.as_str())
    }
}

impl From<i64> for EventKey {
    fn from(id: i64) -> Self {
        EventKey::Id(id)
    }
}

impl From<i32> for EventKey {
    fn from(id: i32) -> Self {
        EventKey::Id(i64::from(id))
    }
}

impl From<u32> for EventKey {
    fn from(id: u32) -> Self {
        EventKey::Id(i64::from(id))
    }
}

impl From<&EventKey> for EventKey {
    fn from(key: &EventKey) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(EventKey::from("login"), EventKey::Name("login".to_string()));
        assert_eq!(EventKey::from(String::from("x")), EventKey::Name("x".to_string()));
        assert_eq!(EventKey::from(1), EventKey::Id(1));
        assert_eq!(EventKey::from(7u32), EventKey::Id(7));
        assert_eq!(EventKey::from(-3i64), EventKey::Id(-3));
    }

    #[test]
    fn test_integer_strings_fold_into_ids() {
        assert_eq!(EventKey::from("1"), EventKey::from(1));
        assert_eq!(EventKey::from("-3"), EventKey::Id(-3));
        assert_eq!(EventKey::from(String::from("0")), EventKey::Id(0));
    }

    #[test]
    fn test_non_canonical_integers_stay_names() {
        assert_eq!(EventKey::from("01"), EventKey::Name("01".to_string()));
        assert_eq!(EventKey::from("+1"), EventKey::Name("+1".to_string()));
        assert_eq!(EventKey::from("-0"), EventKey::Name("-0".to_string()));
        assert_eq!(EventKey::from(" 1"), EventKey::Name(" 1".to_string()));
        assert_eq!(EventKey::from("1.5"), EventKey::Name("1.5".to_string()));
        assert_eq!(EventKey::from(""), EventKey::Name(String::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(EventKey::from("login").to_string(), "login");
        assert_eq!(EventKey::from(42).to_string(), "42");
    }
}
