use std::sync::Arc;

use roster_core::Roster;
use roster_events::Bus;
use tokio::sync::Mutex;

/// Shared handles cloned into every handler.
///
/// The whole roster sits behind one async mutex; handlers hold the lock for
/// the full operation so cross-registry writes (the deletion sweep in
/// particular) stay atomic with respect to reads. No await happens while the
/// lock is held.
#[derive(Clone)]
pub(crate) struct AppState {
    bus: Bus,
    roster: Arc<Mutex<Roster>>,
    endpoints: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(bus: Bus, endpoints: Vec<String>) -> Self {
        Self {
            bus,
            roster: Arc::new(Mutex::new(Roster::new())),
            endpoints: Arc::new(endpoints),
        }
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn roster(&self) -> &Mutex<Roster> {
        &self.roster
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }
}
