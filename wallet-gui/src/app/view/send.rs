use iced::Length;

use wallet_ui::{
    component::{button, card, form},
    widget::*,
};

use crate::app::{
    view::{Message, SendMessage},
    wallet::Network,
};

pub fn send_form<'a>(
    network: Network,
    recipient: &'a form::Value<String>,
    amount: &'a form::Value<String>,
    sending: bool,
) -> Element<'a, Message> {
    let title = match network {
        Network::Ethereum => "Send ETH",
        Network::Solana => "Send SOL",
    };
    let placeholder = match network {
        Network::Ethereum => "Enter Ethereum address",
        Network::Solana => "Enter Solana address",
    };
    card::titled(
        title,
        Column::new()
            .spacing(15)
            .push(
                form::Form::new_trimmed(placeholder, recipient, |s| {
                    Message::Send(SendMessage::RecipientEdited(s))
                })
                .label("Recipient Address")
                .warning("Please enter a recipient address")
                .monospace()
                .padding(10),
            )
            .push(
                form::Form::new_amount("0.0", amount, |s| {
                    Message::Send(SendMessage::AmountEdited(s))
                })
                .label(match network {
                    Network::Ethereum => "Amount (ETH)",
                    Network::Solana => "Amount (SOL)",
                })
                .warning("Please enter a valid amount")
                .on_submit(Message::Send(SendMessage::Submit))
                .padding(10),
            )
            .push(
                button::primary(None, if sending { "Sending..." } else { "Send Transaction" })
                    .on_press_maybe((!sending).then_some(Message::Send(SendMessage::Submit)))
                    .width(Length::Fill),
            ),
    )
    .into()
}
