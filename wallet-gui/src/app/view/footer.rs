use iced::{widget::Space, Alignment, Length};

use wallet_ui::{component::button, theme, widget::*};

use crate::app::{
    view::{network, Message},
    wallet::{Network, Session},
};

/// A switch is only offered to a connected wallet, towards another network.
pub fn can_switch(session: &Session, network: Network) -> bool {
    session.connected && session.network != network
}

pub fn footer<'a>(session: &Session) -> Element<'a, Message> {
    let switches = Network::ALL.iter().fold(Row::new().spacing(8), |row, n| {
        row.push(
            button::selectable(
                None,
                n.name(),
                session.network == *n,
                network::button_style(*n),
            )
            .on_press_maybe(can_switch(session, *n).then_some(Message::SwitchNetwork(*n))),
        )
    });

    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .push(switches)
            .push(Space::with_width(Length::Fill))
            .push(button::transparent(None, "? Help").on_press(Message::ShowHelp)),
    )
    .padding([16, 24])
    .width(Length::Fill)
    .style(theme::container::bar)
    .into()
}
