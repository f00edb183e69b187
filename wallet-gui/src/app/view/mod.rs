mod message;

pub mod footer;
pub mod header;
pub mod history;
pub mod network;
pub mod send;
pub mod wallet_info;

pub use message::*;

use iced::{widget::scrollable, Length};

use wallet_ui::{component::notification, theme, widget::*};

use crate::app::notification::Toasts;

/// Header, the two columns of the dashboard and the footer.
pub fn dashboard<'a>(
    header: Element<'a, Message>,
    left: Element<'a, Message>,
    right: Option<Element<'a, Message>>,
    footer: Element<'a, Message>,
) -> Element<'a, Message> {
    let columns = Row::new()
        .spacing(30)
        .push(Container::new(left).width(Length::FillPortion(1)))
        .push_maybe(right.map(|r| Container::new(r).width(Length::FillPortion(1))));

    Column::new()
        .push(header)
        .push(
            Container::new(
                scrollable(
                    Container::new(Container::new(columns).max_width(1200))
                        .padding(30)
                        .center_x(Length::Fill),
                )
                .style(theme::scrollable::primary),
            )
            .height(Length::Fill)
            .style(theme::container::background),
        )
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Renders the toasts above the content.
pub fn with_toasts<'a>(content: Element<'a, Message>, toasts: &'a Toasts) -> Element<'a, Message> {
    if toasts.is_empty() {
        return content;
    }
    Stack::new()
        .push(content)
        .push(notification::layer(
            toasts
                .list()
                .iter()
                .map(|(id, toast)| {
                    notification::toast(
                        toast.kind,
                        &toast.title,
                        toast.description.as_deref(),
                        Message::DismissToast(*id),
                    )
                    .into()
                })
                .collect(),
        ))
        .into()
}
