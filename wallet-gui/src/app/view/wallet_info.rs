use iced::{Alignment, Length};

use wallet_ui::{
    component::{address::format_address, amount, button, card, separation, text},
    theme,
    widget::*,
};

use crate::app::{
    view::{network, Message},
    wallet::Session,
};

pub fn not_connected<'a>() -> Element<'a, Message> {
    card::simple(
        Column::new()
            .spacing(8)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .push(text::h4_bold("Wallet Not Connected"))
            .push(
                text::p1_regular("Connect your wallet to view your balance and address")
                    .style(theme::text::secondary),
            ),
    )
    .padding(40)
    .into()
}

pub fn wallet_info<'a>(session: &'a Session, copied: bool) -> Element<'a, Message> {
    let ticker = session.network.ticker();
    card::with_header(
        Row::new()
            .align_y(Alignment::Center)
            .push(text::h4_bold("Wallet Info").width(Length::Fill))
            .push(network::network_pill(session.network)),
        Column::new()
            .spacing(15)
            .push(
                Column::new()
                    .spacing(5)
                    .push(text::p2_regular("Your Address").style(theme::text::secondary))
                    .push(card::muted(
                        Row::new()
                            .align_y(Alignment::Center)
                            .push(text::mono(format_address(&session.address)).width(Length::Fill))
                            .push(
                                button::transparent(None, if copied { "Copied" } else { "Copy" })
                                    .on_press_maybe(
                                        (!session.address.is_empty())
                                            .then_some(Message::CopyAddress),
                                    ),
                            ),
                    )),
            )
            .push(separation())
            .push(
                Column::new()
                    .spacing(5)
                    .push(text::p2_regular("Balance").style(theme::text::secondary))
                    .push(match session.balance {
                        Some(balance) => amount::amount_with_size(balance, ticker, text::H2_SIZE),
                        None => amount::unknown_amount_with_size(ticker, text::H2_SIZE),
                    }),
            ),
    )
    .into()
}
