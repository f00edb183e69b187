use iced::Length;

use crate::{component::text::h4_bold, theme, widget::*};

pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::card::simple)
}

/// A card with a title row above its content.
pub fn titled<'a, T: 'a, C: Into<Element<'a, T>>>(
    title: &'a str,
    content: C,
) -> Container<'a, T> {
    with_header(h4_bold(title), content)
}

pub fn with_header<'a, T: 'a, H: Into<Element<'a, T>>, C: Into<Element<'a, T>>>(
    header: H,
    content: C,
) -> Container<'a, T> {
    simple(Column::new().spacing(15).push(header).push(content))
}

pub fn muted<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(8)
        .width(Length::Fill)
        .style(theme::card::muted)
}

pub fn border<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(12)
        .width(Length::Fill)
        .style(theme::card::border)
}
