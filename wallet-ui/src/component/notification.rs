use iced::{
    alignment::{Horizontal, Vertical},
    Alignment, Length,
};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

pub const TOAST_WIDTH: f32 = 340.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
    Info,
}

impl Kind {
    fn style(self) -> fn(&theme::Theme) -> iced::widget::container::Style {
        match self {
            Kind::Success => theme::notification::success,
            Kind::Error => theme::notification::error,
            Kind::Info => theme::notification::info,
        }
    }
}

/// A single toast, with a close button producing `on_close`.
pub fn toast<'a, T: 'a + Clone>(
    kind: Kind,
    title: &'a str,
    description: Option<&'a str>,
    on_close: T,
) -> Container<'a, T> {
    Container::new(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Start)
            .push(
                Column::new()
                    .spacing(4)
                    .width(Length::Fill)
                    .push(text::p2_medium(title))
                    .push_maybe(
                        description.map(|d| text::caption(d).style(theme::text::secondary)),
                    ),
            )
            .push(button::transparent(None, "✕").on_press(on_close)),
    )
    .padding(12)
    .width(Length::Fixed(TOAST_WIDTH))
    .style(kind.style())
}

/// Layer stacking the toasts in the bottom right corner of the window.
pub fn layer<'a, T: 'a>(toasts: Vec<Element<'a, T>>) -> Container<'a, T> {
    Container::new(Column::with_children(toasts).spacing(8))
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
}
