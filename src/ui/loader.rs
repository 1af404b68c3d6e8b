//! Runs catalog fetches off the UI thread.
//!
//! At most one fetch is in flight: starting a new one, calling `cancel`, or
//! dropping the loader aborts the previous task, so a view that is no
//! longer mounted never receives its data.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::CatalogClient;
use crate::catalog::{Page, RecordKey};
use crate::ui::events::AppEvent;

pub struct ViewLoader {
    client: Arc<CatalogClient>,
    runtime: Handle,
    events: Sender<AppEvent>,
    in_flight: Option<JoinHandle<()>>,
}

impl ViewLoader {
    pub fn new(client: Arc<CatalogClient>, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client,
            runtime,
            events,
            in_flight: None,
        }
    }

    /// Fetch a whole roster; posts `AppEvent::RosterLoaded`.
    pub fn load_roster(&mut self, generation: u64, page: Page) {
        self.cancel();
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        debug!(generation, limit = page.limit, offset = page.offset, "Starting roster load");
        self.in_flight = Some(self.runtime.spawn(async move {
            let result = client.roster(page).await;
            let _ = events.send(AppEvent::RosterLoaded { generation, result });
        }));
    }

    /// Fetch one record; posts `AppEvent::RecordLoaded`.
    pub fn load_record(&mut self, generation: u64, key: RecordKey) {
        self.cancel();
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        debug!(generation, %key, "Starting record load");
        self.in_flight = Some(self.runtime.spawn(async move {
            let result = client.record(&key).await;
            let _ = events.send(AppEvent::RecordLoaded { generation, result });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!("Aborting in-flight fetch");
            }
            task.abort();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ViewLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
