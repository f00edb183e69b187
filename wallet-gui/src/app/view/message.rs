use crate::app::wallet::Network;

#[derive(Debug, Clone)]
pub enum Message {
    ConnectWallet,
    DisconnectWallet,
    SwitchNetwork(Network),
    CopyAddress,
    ShowHelp,
    Send(SendMessage),
    DismissToast(u64),
}

#[derive(Debug, Clone)]
pub enum SendMessage {
    RecipientEdited(String),
    AmountEdited(String),
    Submit,
}
