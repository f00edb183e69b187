use iced::{Alignment, Length};

use wallet_ui::{
    component::{button, text},
    theme,
    widget::*,
};

use crate::app::{
    view::{network, Message},
    wallet::{Network, Session},
};

pub fn header<'a>(session: &Session) -> Element<'a, Message> {
    let toggle = if session.connected {
        button::alert(None, "Disconnect Wallet").on_press(Message::DisconnectWallet)
    } else if session.connecting {
        button::primary(None, "Connecting...")
    } else {
        button::primary(None, "Connect Wallet").on_press(Message::ConnectWallet)
    };

    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .spacing(8)
            .push(network::badge(Network::Ethereum))
            .push(network::badge(Network::Solana))
            .push(text::h3("Blockchain Wallet").width(Length::Fill))
            .push(toggle),
    )
    .padding([16, 24])
    .width(Length::Fill)
    .style(theme::container::bar)
    .into()
}
