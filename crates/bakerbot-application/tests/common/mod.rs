#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bakerbot_application::{HostPorts, LinkOpener, OrderDialogueController, PreviewSurface};
use bakerbot_core::config::BotConfig;
use bakerbot_core::error::Result;
use bakerbot_core::session::PreviewParams;
use bakerbot_core::storage::KeyValueStore;
use bakerbot_infrastructure::{MemoryStore, SessionPersistence};

#[derive(Default)]
pub struct RecordingLinks {
    pub opened: Mutex<Vec<String>>,
}

impl LinkOpener for RecordingLinks {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingPreview {
    pub launched: Mutex<Vec<PreviewParams>>,
}

impl PreviewSurface for RecordingPreview {
    fn launch(&self, params: &PreviewParams) -> Result<()> {
        self.launched.lock().unwrap().push(params.clone());
        Ok(())
    }
}

pub struct Harness {
    pub store: Arc<dyn KeyValueStore>,
    pub links: Arc<RecordingLinks>,
    pub preview: Arc<RecordingPreview>,
    pub controller: OrderDialogueController,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        let links = Arc::new(RecordingLinks::default());
        let preview = Arc::new(RecordingPreview::default());
        let controller = build_controller(store.clone(), links.clone(), preview.clone());
        Self {
            store,
            links,
            preview,
            controller,
        }
    }

    /// Simulates a page reload over the same store.
    pub fn reload(&mut self) {
        self.controller =
            build_controller(self.store.clone(), self.links.clone(), self.preview.clone());
    }

    pub fn opened_links(&self) -> Vec<String> {
        self.links.opened.lock().unwrap().clone()
    }
}

fn build_controller(
    store: Arc<dyn KeyValueStore>,
    links: Arc<RecordingLinks>,
    preview: Arc<RecordingPreview>,
) -> OrderDialogueController {
    let config = BotConfig::default();
    let persistence = SessionPersistence::new(store, config.storage.clone());
    OrderDialogueController::new(config, persistence, HostPorts { links, preview })
}

/// Quick replies that walk the standard flow up to the name step.
pub const CHOICES: [&str; 6] = [
    "🍰 Cake",
    "🍫 Chocolate",
    "🎂 Birthday",
    "👥 Medium (6-15)",
    "🌸 Floral",
    "💵 ₹1000-₹2000",
];
