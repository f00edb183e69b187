pub mod cache;
pub mod config;
pub mod history;
pub mod message;
pub mod notification;
pub mod state;
pub mod view;
pub mod wallet;

mod error;

use std::sync::Arc;

use iced::Task;
use tracing::{debug, error, info};

use wallet_ui::widget::{Column, Element};

pub use config::Config;
pub use error::Error;
pub use message::Message;

use crate::{
    app::{
        cache::Cache,
        config::Timings,
        history::TransactionStatus,
        notification::{Toast, Toasts},
        state::{SendPanel, State, WalletInfoPanel},
        wallet::Network,
    },
    backend::Backend,
};

const HELP_DESCRIPTION: &str = "Contact support@blockchainwallet.com for assistance.";

/// Owns the session and the transaction list, and routes the messages
/// to the panels.
pub struct App {
    cache: Cache,
    timings: Timings,
    backend: Arc<dyn Backend + Sync + Send>,
    wallet_info: WalletInfoPanel,
    send: SendPanel,
    toasts: Toasts,
}

impl App {
    pub fn new(
        network: Network,
        timings: Timings,
        backend: Arc<dyn Backend + Sync + Send>,
    ) -> Self {
        Self {
            cache: Cache::new(network),
            wallet_info: WalletInfoPanel::new(timings.copied_reset()),
            send: SendPanel::new(),
            toasts: Toasts::default(),
            timings,
            backend,
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    fn connect(&mut self) -> Task<Message> {
        let session = &mut self.cache.session;
        if session.connected || session.connecting {
            return Task::none();
        }
        session.connecting = true;
        let network = session.network;
        info!("Connecting {} wallet", network);
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.connect(network).await.map_err(Error::from) },
            move |res| Message::Connected(network, res),
        )
    }

    fn disconnect(&mut self) -> Task<Message> {
        if !self.cache.session.connected {
            return Task::none();
        }
        self.cache.session.disconnect();
        self.send.reset();
        self.wallet_info.reset();
        info!("Wallet disconnected");
        self.notify(Toast::info("Wallet disconnected"))
    }

    fn switch_network(&mut self, network: Network) -> Task<Message> {
        if !view::footer::can_switch(&self.cache.session, network) {
            return Task::none();
        }
        let session = &mut self.cache.session;
        session.network = network;
        session.address.clear();
        session.balance = None;
        info!("Switched to {} network", network);
        Task::batch(vec![
            self.load_wallet_data(),
            self.notify(Toast::success(format!("Switched to {} network", network))),
        ])
    }

    fn load_wallet_data(&mut self) -> Task<Message> {
        self.cache.session.loading = true;
        let network = self.cache.network();
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.get_wallet_data(network).await.map_err(Error::from) },
            move |res| Message::WalletDataLoaded(network, res),
        )
    }

    fn notify(&mut self, toast: Toast) -> Task<Message> {
        let duration = toast.duration.unwrap_or_else(|| self.timings.toast());
        let id = self.toasts.push(toast);
        Task::perform(
            async move { tokio::time::sleep(duration).await },
            move |_| Message::ToastExpired(id),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::ConnectWallet) => self.connect(),
            Message::View(view::Message::DisconnectWallet) => self.disconnect(),
            Message::View(view::Message::SwitchNetwork(network)) => self.switch_network(network),
            Message::View(view::Message::ShowHelp) => self.notify(
                Toast::info("Help Center")
                    .with_description(HELP_DESCRIPTION)
                    .with_duration(self.timings.help_toast()),
            ),
            Message::View(view::Message::DismissToast(id)) | Message::ToastExpired(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::Notify(toast) => self.notify(toast),
            Message::Connected(network, res) => {
                if !self.cache.session.connecting {
                    return Task::none();
                }
                match res {
                    Ok(()) => {
                        self.cache.session.connect();
                        info!("{} wallet connected", network);
                        Task::batch(vec![
                            self.load_wallet_data(),
                            self.notify(Toast::success(format!(
                                "{} wallet connected successfully",
                                network
                            ))),
                        ])
                    }
                    Err(e) => {
                        self.cache.session.connecting = false;
                        error!("Failed to connect {} wallet: {}", network, e);
                        self.notify(Toast::error("Failed to connect wallet"))
                    }
                }
            }
            Message::WalletDataLoaded(network, res) => {
                let session = &mut self.cache.session;
                if !session.connected || session.network != network {
                    debug!("Discarding {} wallet data, no longer selected", network);
                    return Task::none();
                }
                session.loading = false;
                match res {
                    Ok(data) => {
                        session.set_wallet_data(network, data);
                        Task::none()
                    }
                    Err(e) => {
                        error!("Failed to load {} wallet data: {}", network, e);
                        self.notify(Toast::error("Failed to load wallet data"))
                    }
                }
            }
            Message::TransactionSubmitted(ref res) => {
                let res = res.clone();
                let task = self
                    .send
                    .update(self.backend.clone(), &self.cache, message);
                match res {
                    Ok(tx) => {
                        info!("Transaction {} submitted", tx.id);
                        let id = tx.id.clone();
                        self.cache.history.prepend(tx);
                        let backend = self.backend.clone();
                        Task::batch(vec![
                            task,
                            self.notify(Toast::success("Transaction sent successfully!")),
                            Task::perform(
                                {
                                    let id = id.clone();
                                    async move {
                                        backend.confirm_transaction(id).await.map_err(Error::from)
                                    }
                                },
                                move |res| Message::TransactionSettled(id.clone(), res),
                            ),
                        ])
                    }
                    Err(e) => {
                        error!("Failed to send transaction: {}", e);
                        Task::batch(vec![
                            task,
                            self.notify(Toast::error(
                                "Failed to send transaction. Please try again.",
                            )),
                        ])
                    }
                }
            }
            Message::TransactionSettled(id, res) => {
                let status = match res {
                    Ok(status) => status,
                    Err(e) => {
                        error!("Failed to confirm transaction {}: {}", id, e);
                        TransactionStatus::Failed
                    }
                };
                let amount = self
                    .cache
                    .history
                    .set_status(&id, status)
                    .map(|tx| tx.amount);
                info!("Transaction {} settled: {}", id, status);
                if let (Some(amount), TransactionStatus::Success) = (amount, status) {
                    self.cache.session.debit(amount);
                }
                Task::none()
            }
            msg @ Message::View(view::Message::Send(_)) => {
                self.send.update(self.backend.clone(), &self.cache, msg)
            }
            msg @ (Message::View(view::Message::CopyAddress) | Message::CopiedReset(_)) => self
                .wallet_info
                .update(self.backend.clone(), &self.cache, msg),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let connected = self.cache.is_connected();
        let left = Column::new()
            .spacing(30)
            .push(self.wallet_info.view(&self.cache))
            .push_maybe(connected.then(|| self.send.view(&self.cache)));
        let right = connected
            .then(|| view::history::history(&self.cache.history, self.cache.network()));

        view::with_toasts(
            view::dashboard(
                view::header::header(&self.cache.session),
                left.into(),
                right,
                view::footer::footer(&self.cache.session),
            ),
            &self.toasts,
        )
        .map(Message::View)
    }
}
