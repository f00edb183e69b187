use std::sync::Arc;

use iced::Task;
use iced_runtime::window;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use wallet_ui::widget::Element;

use crate::{
    app::{self, config::Timings, wallet::Network, App},
    backend::SimulatedBackend,
    dir::WalletDirectory,
    logger::setup_logger,
    VERSION,
};

pub struct GUI {
    app: App,
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    App(app::Message),
}

impl From<app::Message> for Message {
    fn from(msg: app::Message) -> Self {
        Self::App(msg)
    }
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Blockchain Wallet v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, LevelFilter)) -> (GUI, Task<Message>) {
        if let Err(e) = setup_logger(log_level, &config.wallet_directory) {
            tracing::warn!("Error while setting up the logger: {}", e);
        }
        info!(
            "Starting on {} with data directory {}",
            config.network,
            config.wallet_directory.path().display()
        );
        let backend = Arc::new(SimulatedBackend::new(config.timings));
        (
            Self {
                app: App::new(config.network, config.timings, backend),
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => window::get_latest().and_then(window::close),
            Message::App(msg) => self.app.update(msg).map(Message::App),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.app.view().map(Message::App)
    }
}

pub struct Config {
    pub wallet_directory: WalletDirectory,
    network: Network,
    timings: Timings,
}

impl Config {
    pub fn new(wallet_directory: WalletDirectory, network: Network, timings: Timings) -> Self {
        Self {
            wallet_directory,
            network,
            timings,
        }
    }
}
