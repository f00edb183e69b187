use crate::{component::text::*, widget::*};

/// Amounts are displayed with four decimals, like the balance of the wallet.
pub fn amount_as_string(amount: f64) -> String {
    format!("{:.4}", amount)
}

pub fn amount<'a, T: 'a>(amount: f64, ticker: &'a str) -> Row<'a, T> {
    amount_with_size(amount, ticker, P1_SIZE)
}

pub fn amount_with_size<'a, T: 'a>(amount: f64, ticker: &'a str, size: u16) -> Row<'a, T> {
    Row::new()
        .spacing(if size > P1_SIZE { 8 } else { 4 })
        .align_y(iced::Alignment::End)
        .push(p1_bold(amount_as_string(amount)).size(size))
        .push(p1_regular(ticker).size(size))
}

/// Balance that is not known yet.
pub fn unknown_amount_with_size<'a, T: 'a>(ticker: &'a str, size: u16) -> Row<'a, T> {
    Row::new()
        .spacing(if size > P1_SIZE { 8 } else { 4 })
        .align_y(iced::Alignment::End)
        .push(p1_bold("—").size(size))
        .push(p1_regular(ticker).size(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_as_string() {
        assert_eq!("4.5623", amount_as_string(4.5623));
        assert_eq!("123.4567", amount_as_string(123.4567));
        assert_eq!("0.1000", amount_as_string(0.1));
        assert_eq!("-0.4377", amount_as_string(4.5623 - 5.0));
        assert_eq!("0.0000", amount_as_string(0.0));
    }
}
