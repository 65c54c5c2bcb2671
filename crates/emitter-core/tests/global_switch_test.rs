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

use emitter_core::{EventRegistry, GlobalSwitch};

// Kept in its own test binary: it flips the process-wide switch.
#[test]
fn test_process_switch_gates_default_registries() {
    // --- 1. ARRANGE ---
    let first = EventRegistry::<u8>::new();
    let second = EventRegistry::<u8>::default();
    first.register("e", |_| Ok(()));
    second.register("e", |_| Ok(()));
    let isolated = EventRegistry::<u8>::new().with_switch(GlobalSwitch::detached());
    isolated.register("e", |_| Ok(()));

    // --- 2. ACT ---
    GlobalSwitch::process().disable();
    let suppressed = (
        first.dispatch("e", &0).unwrap(),
        second.dispatch("e", &0).unwrap(),
        isolated.dispatch("e", &0).unwrap(),
    );
    GlobalSwitch::process().enable();

    // --- 3. ASSERT ---
    assert_eq!(suppressed, (0, 0, 1));
    assert!(first.global_switch().same_as(second.global_switch()));
    assert_eq!(first.dispatch("e", &0).unwrap(), 1);
}
