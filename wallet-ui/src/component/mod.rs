pub mod address;
pub mod amount;
pub mod button;
pub mod card;
pub mod form;
pub mod notification;
pub mod pill;
pub mod text;

use iced::{widget::Space, Length};

use crate::{theme, widget::*};

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Space::with_height(Length::Fixed(1.0)))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(theme::container::rule)
}
