use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Ethereum,
    Solana,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Ethereum, Network::Solana];

    pub fn ticker(&self) -> &'static str {
        match self {
            Self::Ethereum => "ETH",
            Self::Solana => "SOL",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Solana => "Solana",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown network '{0}'")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethereum" | "eth" => Ok(Self::Ethereum),
            "solana" | "sol" => Ok(Self::Solana),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Address and balance of the wallet on a network.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletData {
    pub address: String,
    pub balance: f64,
}

/// The fixed wallet of each network.
pub fn wallet_data(network: Network) -> WalletData {
    match network {
        Network::Ethereum => WalletData {
            address: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string(),
            balance: 4.5623,
        },
        Network::Solana => WalletData {
            address: "8YmMHxADRNqgeyd7TLa5i6SXJkTE11JKY4t8sCRK2hZ".to_string(),
            balance: 123.4567,
        },
    }
}

/// The wallet state visible to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub connected: bool,
    /// A connection request is in flight.
    pub connecting: bool,
    /// A wallet data fetch is in flight.
    pub loading: bool,
    pub network: Network,
    /// Empty while unknown.
    pub address: String,
    pub balance: Option<f64>,
}

impl Session {
    pub fn new(network: Network) -> Self {
        Self {
            connected: false,
            connecting: false,
            loading: false,
            network,
            address: String::new(),
            balance: None,
        }
    }

    pub fn connect(&mut self) {
        self.connected = true;
        self.connecting = false;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.connecting = false;
        self.loading = false;
        self.address.clear();
        self.balance = None;
    }

    /// Returns false and keeps the session unchanged if the data is for
    /// another network or if the wallet is disconnected.
    pub fn set_wallet_data(&mut self, network: Network, data: WalletData) -> bool {
        if !self.connected || network != self.network {
            return false;
        }
        self.address = data.address;
        self.balance = Some(data.balance);
        true
    }

    /// Applies a settled spend to the balance. An unknown balance stays unknown.
    pub fn debit(&mut self, amount: f64) {
        if let Some(balance) = &mut self.balance {
            *balance -= amount;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_str() {
        assert_eq!(Network::from_str("ethereum"), Ok(Network::Ethereum));
        assert_eq!(Network::from_str("ETH"), Ok(Network::Ethereum));
        assert_eq!(Network::from_str("Solana"), Ok(Network::Solana));
        assert_eq!(Network::from_str("sol"), Ok(Network::Solana));
        assert_eq!(
            Network::from_str("bitcoin"),
            Err(UnknownNetwork("bitcoin".to_string()))
        );
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Ethereum.to_string(), "Ethereum");
        assert_eq!(Network::Solana.ticker(), "SOL");
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::new(Network::Solana);
        assert!(!session.connected);
        assert!(session.address.is_empty());
        assert_eq!(session.balance, None);

        // Data for a disconnected session is dropped.
        assert!(!session.set_wallet_data(Network::Solana, wallet_data(Network::Solana)));
        assert!(session.address.is_empty());

        session.connect();
        assert!(session.connected);
        assert!(!session.set_wallet_data(Network::Ethereum, wallet_data(Network::Ethereum)));
        assert!(session.set_wallet_data(Network::Solana, wallet_data(Network::Solana)));
        assert_eq!(session.address, wallet_data(Network::Solana).address);
        assert_eq!(session.balance, Some(123.4567));

        session.disconnect();
        assert!(!session.connected);
        assert!(session.address.is_empty());
        assert_eq!(session.balance, None);
        assert_eq!(session.network, Network::Solana);
    }

    #[test]
    fn test_debit_has_no_floor() {
        let mut session = Session::default();
        session.debit(1.0);
        assert_eq!(session.balance, None);

        session.balance = Some(1.0);
        session.debit(3.5);
        assert_eq!(session.balance, Some(-2.5));
    }
}
