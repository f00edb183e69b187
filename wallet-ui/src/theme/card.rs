use iced::widget::container::Style;
use iced::{Background, Border, Shadow, Vector};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: radius.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: radius.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn simple(theme: &Theme) -> Style {
    Style {
        shadow: Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..card(&theme.colors.cards.simple, 16.0)
    }
}

/// Inset box inside a card, used for the address line.
pub fn muted(theme: &Theme) -> Style {
    card(&theme.colors.cards.muted, 6.0)
}

pub fn border(theme: &Theme) -> Style {
    card(&theme.colors.cards.border, 10.0)
}
