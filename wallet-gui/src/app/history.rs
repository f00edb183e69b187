use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Success => write!(f, "Success"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub recipient: String,
    /// Display label, like "Just now".
    pub timestamp: String,
}

impl Transaction {
    /// A freshly submitted transaction, with a random `0x` prefixed hex id.
    pub fn new_pending(recipient: String, amount: f64) -> Self {
        Self {
            id: format!("0x{:x}", rand::random::<u64>()),
            amount,
            status: TransactionStatus::Pending,
            recipient,
            timestamp: "Just now".to_string(),
        }
    }
}

/// Transactions, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History(Vec<Transaction>);

impl History {
    /// The history the wallet starts with.
    pub fn seed() -> Self {
        Self(vec![
            Transaction {
                id: "0x123".to_string(),
                amount: 0.5,
                status: TransactionStatus::Success,
                recipient: "0xabcdef1234567890".to_string(),
                timestamp: "10 min ago".to_string(),
            },
            Transaction {
                id: "0x456".to_string(),
                amount: 1.2,
                status: TransactionStatus::Pending,
                recipient: "0x0987654321fedcba".to_string(),
                timestamp: "1 hr ago".to_string(),
            },
            Transaction {
                id: "0x789".to_string(),
                amount: 0.1,
                status: TransactionStatus::Failed,
                recipient: "0x123456789abcdef0".to_string(),
                timestamp: "2 hrs ago".to_string(),
            },
        ])
    }

    pub fn prepend(&mut self, tx: Transaction) {
        self.0.insert(0, tx);
    }

    /// Updates the status in place, the order of the list is kept.
    /// Returns the updated transaction if it was found.
    pub fn set_status(&mut self, id: &str, status: TransactionStatus) -> Option<&Transaction> {
        let tx = self.0.iter_mut().find(|tx| tx.id == id)?;
        tx.status = status;
        Some(tx)
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.0.iter().find(|tx| tx.id == id)
    }

    pub fn list(&self) -> &[Transaction] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
