use super::text::{text, P2_SIZE};
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::button::{Status, Style};
use iced::widget::{container, row};

pub fn primary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::secondary)
}

pub fn alert<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(icon, text(t).font(MEDIUM))).style(theme::button::destructive)
}

pub fn transparent<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content_left_aligned(icon, text(t).size(P2_SIZE))).style(theme::button::transparent)
}

/// Outlined button, rendered with the given accent style once selected.
pub fn selectable<'a, T: 'a>(
    icon: Option<Text<'a>>,
    t: &'static str,
    selected: bool,
    accent: fn(&theme::Theme, Status) -> Style,
) -> Button<'a, T> {
    Button::new(content_left_aligned(icon, text(t).size(P2_SIZE))).style(if selected {
        accent
    } else {
        theme::button::secondary
    })
}

// Content function for centered buttons (primary, secondary, alert)
fn content<'a, T: 'a>(icon: Option<Text<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text)
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center)
            .padding(5),
        Some(i) => container(
            row![i, text]
                .spacing(10)
                .align_y(Vertical::Center)
                .width(iced::Length::Shrink),
        )
        .align_x(Horizontal::Center)
        .padding(5),
    }
}

fn content_left_aligned<'a, T: 'a>(icon: Option<Text<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text).align_y(Vertical::Center).padding(2),
        Some(i) => container(row![i, text].spacing(5).align_y(Vertical::Center)).padding(2),
    }
}
