use iced::{widget::container::Style, Alignment, Length};

use wallet_ui::{
    component::{address::format_address, amount, card, pill, text},
    theme::{self, Theme},
    widget::*,
};

use crate::app::{
    history::{History, Transaction, TransactionStatus},
    view::Message,
    wallet::Network,
};

pub fn history<'a>(history: &'a History, network: Network) -> Element<'a, Message> {
    let content: Element<'a, Message> = if history.is_empty() {
        text::p1_regular("No transaction history available")
            .style(theme::text::secondary)
            .into()
    } else {
        history
            .list()
            .iter()
            .fold(Column::new().spacing(10), |col, tx| {
                col.push(transaction(tx, network))
            })
            .into()
    };
    card::titled("Transaction History", content).into()
}

pub fn status_style(status: TransactionStatus) -> fn(&Theme) -> Style {
    match status {
        TransactionStatus::Success => theme::pill::success,
        TransactionStatus::Pending => theme::pill::pending,
        TransactionStatus::Failed => theme::pill::failed,
    }
}

pub fn status_pill<'a>(status: TransactionStatus) -> Container<'a, Message> {
    pill::pill(status, status_style(status))
}

fn transaction<'a>(tx: &'a Transaction, network: Network) -> Element<'a, Message> {
    card::border(
        Row::new()
            .align_y(Alignment::Center)
            .spacing(10)
            .push(
                Column::new()
                    .spacing(5)
                    .width(Length::Fill)
                    .push(
                        Row::new()
                            .spacing(8)
                            .align_y(Alignment::Center)
                            .push(status_pill(tx.status))
                            .push(text::caption(&tx.timestamp).style(theme::text::secondary)),
                    )
                    .push(text::p2_regular(format!("To: {}", format_address(&tx.recipient)))),
            )
            .push(amount::amount(tx.amount, network.ticker())),
    )
    .into()
}
