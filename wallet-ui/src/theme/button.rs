use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

pub const RADIUS: f32 = 8.0;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn destructive(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.destructive, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

pub fn ethereum(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.ethereum, status)
}

pub fn solana(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.solana, status)
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: RADIUS.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => p.pressed.as_ref().map(style).unwrap_or_else(|| style(&p.hovered)),
        Status::Disabled => {
            if let Some(disabled) = &p.disabled {
                style(disabled)
            } else {
                let active = style(&p.active);
                Style {
                    text_color: Color {
                        a: 0.4,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}
