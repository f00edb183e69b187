use iced::widget::container::Style;

use crate::{component::text, theme, widget::*};

pub fn pill<'a, T: 'a>(
    label: impl std::fmt::Display,
    style: fn(&theme::Theme) -> Style,
) -> Container<'a, T> {
    Container::new(text::caption(label))
        .padding([2, 10])
        .style(style)
}
