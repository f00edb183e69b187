pub mod simulated;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::app::{
    history::{Transaction, TransactionStatus},
    wallet::{Network, WalletData},
};

pub use simulated::SimulatedBackend;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The wallet refused the request.
    #[error("Wallet rejected the request: {0}")]
    Rejected(String),
    /// Something unexpected happened.
    #[error("Backend unexpected error: {0}")]
    Unexpected(String),
}

/// Source of the wallet data and of the transaction results.
#[async_trait]
pub trait Backend: Debug {
    /// Opens the wallet on the given network.
    async fn connect(&self, network: Network) -> Result<(), BackendError>;

    async fn get_wallet_data(&self, network: Network) -> Result<WalletData, BackendError>;

    /// Submits a spend, the returned transaction is pending.
    async fn send_transaction(
        &self,
        network: Network,
        recipient: String,
        amount: f64,
    ) -> Result<Transaction, BackendError>;

    /// Waits for the final status of a submitted transaction.
    async fn confirm_transaction(&self, id: String) -> Result<TransactionStatus, BackendError>;
}
