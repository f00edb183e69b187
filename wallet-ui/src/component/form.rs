use iced::Length;

use crate::{color, component::text, font, theme, widget::*};

#[derive(Debug, Clone)]
pub struct Value<T> {
    pub value: T,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            valid: true,
        }
    }
}

/// Returns true if the input can be the beginning of a decimal amount,
/// like `12`, `0.` or `.5`.
pub fn is_decimal_input(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || c == '.') && s.matches('.').count() <= 1
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    label: Option<&'a str>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: iced::widget::text_input(placeholder, &value.value).on_input(on_change),
            label: None,
            warning: None,
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that trims input values before applying the `on_change` function.
    pub fn new_trimmed<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: iced::widget::text_input(placeholder, &value.value)
                .on_input(move |s| on_change(s.trim().to_string())),
            label: None,
            warning: None,
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that only accepts decimal amounts, any other
    /// edit keeps the current value.
    pub fn new_amount<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: iced::widget::text_input(placeholder, &value.value).on_input(move |s| {
                if is_decimal_input(&s) {
                    on_change(s)
                } else {
                    on_change(value.value.clone())
                }
            }),
            label: None,
            warning: None,
            valid: value.valid,
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the [`Form`] with a warning message
    pub fn warning(mut self, warning: &'a str) -> Self {
        self.warning = Some(warning);
        self
    }

    /// Sets the message produced when the user presses enter.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Renders the value with a monospace font.
    pub fn monospace(mut self) -> Self {
        self.input = self.input.font(font::MONOSPACE);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(text::p2_medium))
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).color(color::RED))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_decimal_input() {
        assert!(is_decimal_input(""));
        assert!(is_decimal_input("12"));
        assert!(is_decimal_input("0."));
        assert!(is_decimal_input(".5"));
        assert!(is_decimal_input("0.0001"));
        assert!(!is_decimal_input("1.2.3"));
        assert!(!is_decimal_input("-1"));
        assert!(!is_decimal_input("1e5"));
        assert!(!is_decimal_input("abc"));
    }
}
