use iced::widget::container;
use iced::widget::scrollable::{Catalog, Rail, Scroller, Status, Style, StyleFn};
use iced::{Background, Border};

use super::Theme;

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
    let scroller = match status {
        Status::Active => theme.colors.scrollables.scroller,
        Status::Hovered { .. } | Status::Dragged { .. } => {
            theme.colors.scrollables.scroller_hovered
        }
    };
    let rail = || Rail {
        background: Some(Background::Color(theme.colors.scrollables.rail)),
        border: Border::default(),
        scroller: Scroller {
            color: scroller,
            border: Border {
                radius: 4.0.into(),
                width: 0.0,
                color: scroller,
            },
        },
    };
    Style {
        container: container::Style::default(),
        vertical_rail: rail(),
        horizontal_rail: rail(),
        gap: None,
    }
}
