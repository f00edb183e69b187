use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use super::{Backend, BackendError};
use crate::app::{
    config::Timings,
    history::{Transaction, TransactionStatus},
    wallet::{wallet_data, Network, WalletData},
};

/// Fake wallet: every call waits for its configured latency, then answers
/// from the fixed wallet of the network. It never fails.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    timings: Timings,
}

impl SimulatedBackend {
    pub fn new(timings: Timings) -> Self {
        Self { timings }
    }
}

#[async_trait]
impl Backend for SimulatedBackend {
    async fn connect(&self, network: Network) -> Result<(), BackendError> {
        sleep(self.timings.connect()).await;
        debug!("Simulated {} wallet connected", network);
        Ok(())
    }

    async fn get_wallet_data(&self, network: Network) -> Result<WalletData, BackendError> {
        sleep(self.timings.fetch()).await;
        Ok(wallet_data(network))
    }

    async fn send_transaction(
        &self,
        network: Network,
        recipient: String,
        amount: f64,
    ) -> Result<Transaction, BackendError> {
        sleep(self.timings.submit()).await;
        let tx = Transaction::new_pending(recipient, amount);
        debug!("Simulated {} transaction {} submitted", network, tx.id);
        Ok(tx)
    }

    async fn confirm_transaction(&self, id: String) -> Result<TransactionStatus, BackendError> {
        sleep(self.timings.settle()).await;
        debug!("Simulated transaction {} settled", id);
        Ok(TransactionStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_simulated_backend() {
        let backend = SimulatedBackend::new(Timings::instant());
        backend.connect(Network::Ethereum).await.unwrap();
        assert_eq!(
            backend.get_wallet_data(Network::Solana).await.unwrap(),
            wallet_data(Network::Solana)
        );
        let tx = backend
            .send_transaction(Network::Ethereum, "0xrecipient".to_string(), 0.5)
            .await
            .unwrap();
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.recipient, "0xrecipient");
        assert_eq!(tx.amount, 0.5);
        assert_eq!(
            backend.confirm_transaction(tx.id).await,
            Ok(TransactionStatus::Success)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let backend = SimulatedBackend::new(Timings::default());
        let start = tokio::time::Instant::now();
        backend.connect(Network::Ethereum).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));

        let start = tokio::time::Instant::now();
        backend.get_wallet_data(Network::Ethereum).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));

        let start = tokio::time::Instant::now();
        backend.confirm_transaction("0x1".to_string()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5000));
    }
}
