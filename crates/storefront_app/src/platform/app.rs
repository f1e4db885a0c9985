use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use storefront_core::{
    hash_path, segments_from_hash, segments_from_href, update, AppState, AsyncTransaction, Msg,
};
use storefront_engine::EngineHandle;
use storefront_logging::{enter_dispatch, storefront_debug, storefront_info};

use super::config::StorefrontConfig;
use super::effects::EffectRunner;
use super::history::BrowserHistory;
use super::host::{spawn_input_reader, HostCommand};
use super::{logging, ui};

pub fn run_app(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = StorefrontConfig::load(config_path.as_deref())
        .context("loading storefront configuration")?;
    logging::initialize(&config.log_settings()?).context("initializing logging")?;
    storefront_info!(
        "Storefront starting, catalogue at {}",
        config.catalogue_url
    );

    let (dispatcher, inbox) = channel();
    let engine = EngineHandle::new(config.catalogue_settings());
    let runner = EffectRunner::new(
        engine,
        BrowserHistory::new(),
        config.startup_delay(),
        dispatcher.clone(),
    );
    spawn_input_reader(BufReader::new(io::stdin()), dispatcher);

    let mut storefront = Storefront::new(runner, inbox, io::stdout());
    storefront.run().context("running storefront")?;
    storefront_info!("Storefront stopped");
    Ok(())
}

/// Everything the loop consumes, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Dispatch(Msg),
    Input(HostCommand),
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::Sender<Inbound>,
}

impl Dispatcher {
    /// Returns `false` once the loop has gone away.
    pub fn dispatch(&self, msg: Msg) -> bool {
        self.tx.send(Inbound::Dispatch(msg)).is_ok()
    }

    pub fn submit(&self, command: HostCommand) -> bool {
        self.tx.send(Inbound::Input(command)).is_ok()
    }
}

pub fn channel() -> (Dispatcher, mpsc::Receiver<Inbound>) {
    let (tx, rx) = mpsc::channel();
    (Dispatcher { tx }, rx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Sole owner of the application state. Messages are applied one at a time.
pub struct Storefront<W: Write> {
    state: AppState,
    inbox: mpsc::Receiver<Inbound>,
    runner: EffectRunner<BrowserHistory>,
    out: W,
    dispatched: u64,
}

impl<W: Write> Storefront<W> {
    pub fn new(runner: EffectRunner<BrowserHistory>, inbox: mpsc::Receiver<Inbound>, out: W) -> Self {
        Self {
            state: AppState::new(),
            inbox,
            runner,
            out,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn history(&self) -> &BrowserHistory {
        self.runner.navigator()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Render the initial page and kick off the catalogue fetch.
    pub fn start(&mut self) -> io::Result<()> {
        self.present()?;
        self.dispatch(Msg::FetchProducts(AsyncTransaction::Begin))
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.start()?;
        while let Ok(inbound) = self.inbox.recv() {
            if self.handle(inbound)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle at most one inbound item. `None` if nothing arrived within `timeout`.
    pub fn step(&mut self, timeout: Duration) -> io::Result<Option<Flow>> {
        match self.inbox.recv_timeout(timeout) {
            Ok(inbound) => self.handle(inbound).map(Some),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Ok(Some(Flow::Quit)),
        }
    }

    pub fn handle(&mut self, inbound: Inbound) -> io::Result<Flow> {
        match inbound {
            Inbound::Dispatch(msg) => {
                self.dispatch(msg)?;
                Ok(Flow::Continue)
            }
            Inbound::Input(command) => self.handle_command(command),
        }
    }

    fn handle_command(&mut self, command: HostCommand) -> io::Result<Flow> {
        match command {
            HostCommand::Open(id) => match self.state.find_product(&id).cloned() {
                Some(product) => {
                    self.dispatch(Msg::LoadProductPage(product))?;
                    self.dispatch(Msg::ProductPageLoaded)?;
                }
                None => writeln!(self.out, "No product with id {id}.")?,
            },
            HostCommand::Back => {
                let location = self.runner.navigator_mut().back().map(ToOwned::to_owned);
                match location {
                    Some(hash) => self.dispatch(Msg::UrlChanged(segments_from_hash(&hash)))?,
                    None => writeln!(self.out, "Already at the first page.")?,
                }
            }
            HostCommand::Forward => {
                let location = self.runner.navigator_mut().forward().map(ToOwned::to_owned);
                match location {
                    Some(hash) => self.dispatch(Msg::UrlChanged(segments_from_hash(&hash)))?,
                    None => writeln!(self.out, "Already at the latest page.")?,
                }
            }
            HostCommand::Url(location) => match location_segments(&location) {
                Ok(segments) => {
                    self.runner.navigator_mut().visit(&hash_path(&segments));
                    self.dispatch(Msg::UrlChanged(segments))?;
                }
                Err(err) => writeln!(self.out, "Cannot open {location}: {err}")?,
            },
            HostCommand::Home => {
                // Following the `#/` link: the browser records the entry and reports it.
                self.runner.navigator_mut().visit(&hash_path(&[]));
                self.dispatch(Msg::UrlChanged(Vec::new()))?;
                self.dispatch(Msg::FetchProducts(AsyncTransaction::Begin))?;
            }
            HostCommand::Help => {
                for line in ui::render::HELP_LINES {
                    writeln!(self.out, "{line}")?;
                }
            }
            HostCommand::Quit => return Ok(Flow::Quit),
            HostCommand::Unknown(line) => {
                writeln!(self.out, "Unknown command: {line} (try `help`)")?;
            }
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        self.dispatched += 1;
        let _scope = enter_dispatch(self.dispatched);
        storefront_debug!("{}", describe(&msg));

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);

        if self.state.consume_dirty() {
            self.present()?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        for line in ui::render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

/// Accepts a bare hash (`#/products/1`) or a full href.
fn location_segments(location: &str) -> Result<Vec<String>, String> {
    if location.starts_with('#') {
        Ok(segments_from_hash(location))
    } else {
        segments_from_href(location).map_err(|err| err.to_string())
    }
}

fn describe(msg: &Msg) -> String {
    match msg {
        Msg::FetchProducts(AsyncTransaction::Begin) => "FetchProducts(Begin)".to_string(),
        Msg::FetchProducts(AsyncTransaction::Completed(Ok(products))) => {
            format!("FetchProducts(Completed(Ok({} products)))", products.len())
        }
        Msg::FetchProducts(AsyncTransaction::Completed(Err(message))) => {
            format!("FetchProducts(Completed(Err({message:?})))")
        }
        Msg::UrlChanged(segments) => format!("UrlChanged({segments:?})"),
        Msg::LoadProductPage(product) => format!("LoadProductPage({})", product.id),
        Msg::ProductPageLoaded => "ProductPageLoaded".to_string(),
    }
}
