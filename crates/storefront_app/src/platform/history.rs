use storefront_core::{NavigationEvent, NavigationPort};
use storefront_logging::storefront_debug;

const ROOT: &str = "#/";

/// In-memory stand-in for the browser's session history.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    entries: Vec<String>,
    cursor: usize,
    events: Vec<NavigationEvent>,
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self {
            entries: vec![ROOT.to_string()],
            cursor: 0,
            events: Vec::new(),
        }
    }
}

impl BrowserHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Navigation notifications raised so far, oldest first.
    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Entry created by the user editing the address, not by the app.
    pub fn visit(&mut self, hash: &str) {
        self.push(hash);
    }

    fn push(&mut self, hash: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(hash.to_string());
        self.cursor = self.entries.len() - 1;
    }
}

impl NavigationPort for BrowserHistory {
    fn push_history(&mut self, hash: &str) {
        storefront_debug!("pushState {}", hash);
        self.push(hash);
    }

    fn dispatch_event(&mut self, event: NavigationEvent) {
        storefront_debug!("dispatch {} at {}", event.name, self.current());
        self.events.push(event);
    }
}
