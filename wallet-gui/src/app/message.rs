use crate::app::{
    error::Error,
    history::{Transaction, TransactionStatus},
    notification::Toast,
    view,
    wallet::{Network, WalletData},
};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    Connected(Network, Result<(), Error>),
    WalletDataLoaded(Network, Result<WalletData, Error>),
    TransactionSubmitted(Result<Transaction, Error>),
    TransactionSettled(String, Result<TransactionStatus, Error>),
    /// End of the "copied" window started by the copy with the given sequence number.
    CopiedReset(u64),
    Notify(Toast),
    ToastExpired(u64),
}

impl From<view::Message> for Message {
    fn from(msg: view::Message) -> Self {
        Self::View(msg)
    }
}
