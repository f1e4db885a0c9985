pub mod app;
pub mod config;
pub mod effects;
pub mod history;
pub mod host;
pub mod logging;
pub mod ui;

pub use app::{channel, run_app, Dispatcher, Flow, Inbound, Storefront};
pub use config::{ConfigError, StorefrontConfig, CONFIG_FILENAME};
pub use effects::{catalogue_message, EffectRunner};
pub use history::BrowserHistory;
pub use host::{spawn_input_reader, HostCommand};
pub use logging::{LogDestination, LogSettings, LoggingError};
