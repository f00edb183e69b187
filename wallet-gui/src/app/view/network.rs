use iced::widget::container::Style;

use wallet_ui::{
    component::pill,
    theme::{self, Theme},
    widget::*,
};

use crate::app::wallet::Network;

pub fn pill_style(network: Network) -> fn(&Theme) -> Style {
    match network {
        Network::Ethereum => theme::pill::ethereum,
        Network::Solana => theme::pill::solana,
    }
}

pub fn button_style(
    network: Network,
) -> fn(&Theme, iced::widget::button::Status) -> iced::widget::button::Style {
    match network {
        Network::Ethereum => theme::button::ethereum,
        Network::Solana => theme::button::solana,
    }
}

/// Small badge with the network ticker.
pub fn badge<'a, T: 'a>(network: Network) -> Container<'a, T> {
    pill::pill(network.ticker(), pill_style(network))
}

/// Pill with the full network name.
pub fn network_pill<'a, T: 'a>(network: Network) -> Container<'a, T> {
    pill::pill(network.name(), pill_style(network))
}
