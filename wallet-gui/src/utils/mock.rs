use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app::{
        history::{Transaction, TransactionStatus},
        wallet::{wallet_data, Network, WalletData},
    },
    backend::{Backend, BackendError},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Connect(Network),
    GetWalletData(Network),
    SendTransaction(Network, String, f64),
    ConfirmTransaction(String),
}

/// Answers instantly like the simulated wallet, unless told to fail.
/// Records every call.
#[derive(Debug, Default)]
pub struct MockBackend {
    connect_error: Option<BackendError>,
    wallet_data_error: Option<BackendError>,
    send_error: Option<BackendError>,
    confirm_error: Option<BackendError>,
    calls: Mutex<Vec<Call>>,
}

impl MockBackend {
    pub fn fail_connect(mut self, e: BackendError) -> Self {
        self.connect_error = Some(e);
        self
    }

    pub fn fail_wallet_data(mut self, e: BackendError) -> Self {
        self.wallet_data_error = Some(e);
        self
    }

    pub fn fail_send(mut self, e: BackendError) -> Self {
        self.send_error = Some(e);
        self
    }

    pub fn fail_confirm(mut self, e: BackendError) -> Self {
        self.confirm_error = Some(e);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn result<T>(error: &Option<BackendError>, ok: T) -> Result<T, BackendError> {
    match error {
        Some(e) => Err(e.clone()),
        None => Ok(ok),
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn connect(&self, network: Network) -> Result<(), BackendError> {
        self.record(Call::Connect(network));
        result(&self.connect_error, ())
    }

    async fn get_wallet_data(&self, network: Network) -> Result<WalletData, BackendError> {
        self.record(Call::GetWalletData(network));
        result(&self.wallet_data_error, wallet_data(network))
    }

    async fn send_transaction(
        &self,
        network: Network,
        recipient: String,
        amount: f64,
    ) -> Result<Transaction, BackendError> {
        self.record(Call::SendTransaction(network, recipient.clone(), amount));
        result(&self.send_error, Transaction::new_pending(recipient, amount))
    }

    async fn confirm_transaction(&self, id: String) -> Result<TransactionStatus, BackendError> {
        self.record(Call::ConfirmTransaction(id));
        result(&self.confirm_error, TransactionStatus::Success)
    }
}
