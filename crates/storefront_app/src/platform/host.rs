//! Line-oriented input: each line is one user action.

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use storefront_logging::storefront_warn;

use super::app::Dispatcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Show the detail page of a loaded product.
    Open(String),
    Back,
    Forward,
    /// User typed a location into the address bar.
    Url(String),
    /// Follow the storefront's home link.
    Home,
    Help,
    Quit,
    Unknown(String),
}

impl HostCommand {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let command = match (verb.to_ascii_lowercase().as_str(), rest) {
            ("open", id) if !id.is_empty() => HostCommand::Open(id.to_string()),
            ("url", location) if !location.is_empty() => HostCommand::Url(location.to_string()),
            ("back", "") => HostCommand::Back,
            ("forward", "") => HostCommand::Forward,
            ("home", "") => HostCommand::Home,
            ("help", "") => HostCommand::Help,
            ("quit" | "exit", "") => HostCommand::Quit,
            _ => HostCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Feed commands read from `reader` into the loop. End of input quits.
pub fn spawn_input_reader<R>(reader: R, dispatcher: Dispatcher) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    storefront_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if let Some(command) = HostCommand::parse(&line) {
                if !dispatcher.submit(command) {
                    return;
                }
            }
        }
        let _ = dispatcher.submit(HostCommand::Quit);
    })
}
