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

// Emitter sandbox
// Runs a small host type through the event registry for manual inspection.

use anyhow::Result;
use emitter_core::{EventRegistry, EventTarget, GlobalSwitch, RegistryConfig};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Payload carried by every session event.
#[derive(Debug, Clone)]
enum SessionEvent {
    Login { user: String },
    Logout { user: String },
    Heartbeat(u32),
}

/// A host that composes the event registry.
struct Session {
    id: u32,
    events: EventRegistry<SessionEvent>,
}

impl Session {
    fn new(id: u32, config: RegistryConfig) -> Self {
        Self {
            id,
            events: EventRegistry::with_config(config),
        }
    }

    fn login(&self, user: &str) -> Result<()> {
        self.dispatch(
            "login",
            &SessionEvent::Login {
                user: user.to_string(),
            },
        )?;
        Ok(())
    }

    fn logout(&self, user: &str) -> Result<()> {
        self.dispatch(
            "logout",
            &SessionEvent::Logout {
                user: user.to_string(),
            },
        )?;
        Ok(())
    }
}

impl EventTarget<SessionEvent> for Session {
    fn events(&self) -> &EventRegistry<SessionEvent> {
        &self.events
    }
}

const HEARTBEAT: i64 = 1;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let session = Session::new(
        7,
        RegistryConfig {
            log_dispatch: true,
            ..RegistryConfig::default()
        },
    );
    let session_id = session.id;

    session.on("login", move |event: &SessionEvent| {
        if let SessionEvent::Login { user } = event {
            log::info!("Session {session_id}: '{user}' logged in.");
        }
        Ok(())
    });
    let audit = session.add_event_listener("logout", |event: &SessionEvent| {
        if let SessionEvent::Logout { user } = event {
            log::info!("Audit: '{user}' logged out.");
        }
        Ok(())
    });

    let beats = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&beats);
    session.on(HEARTBEAT, move |event: &SessionEvent| {
        if let SessionEvent::Heartbeat(n) = event {
            counter.fetch_add(*n, Ordering::SeqCst);
        }
        Ok(())
    });
    session.on(HEARTBEAT, |event: &SessionEvent| match event {
        SessionEvent::Heartbeat(0) => Err(anyhow::anyhow!("empty heartbeat")),
        _ => Ok(()),
    });

    session.login("alice")?;
    session.dispatch_event(HEARTBEAT, &SessionEvent::Heartbeat(3))?;

    if let Err(e) = session.dispatch(HEARTBEAT, &SessionEvent::Heartbeat(0)) {
        log::error!("Heartbeat listener failed: {e}");
    }

    session.events().set_enabled(false);
    session.login("ignored")?;
    session.events().set_enabled(true);

    let global = GlobalSwitch::process();
    global.disable();
    session.login("also-ignored")?;
    global.enable();

    session.logout("alice")?;
    session.remove_event_listener("logout", audit);
    session.logout("bob")?;

    session.remove_event_type("login");
    session.login("carol")?;

    log::info!(
        "Heartbeat total: {}, registered listeners: {}, keys: {:?}",
        beats.load(Ordering::SeqCst),
        session.events().total_listener_count(),
        session.events().event_keys()
    );

    session.clear_events();
    log::info!(
        "After clearing: {} listener(s).",
        session.events().total_listener_count()
    );
    Ok(())
}
