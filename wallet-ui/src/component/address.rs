const PREFIX_LEN: usize = 6;
const SUFFIX_LEN: usize = 4;

/// Shortens an address to its first 6 and last 4 characters, `0xd8dA...6045`.
///
/// An empty address stays empty. Addresses shorter than 10 characters are not
/// padded: both ends are taken from what is available, so `abc` gives
/// `abc...abc`.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let prefix: String = chars.iter().take(PREFIX_LEN).collect();
    let suffix: String = chars[chars.len().saturating_sub(SUFFIX_LEN)..]
        .iter()
        .collect();
    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        assert_eq!(
            "0xd8dA...6045",
            format_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")
        );
        assert_eq!(
            "8YmMHx...K2hZ",
            format_address("8YmMHxADRNqgeyd7TLa5i6SXJkTE11JKY4t8sCRK2hZ")
        );
        assert_eq!("0xabcd...7890", format_address("0xabcdef1234567890"));
        assert_eq!("", format_address(""));
    }

    #[test]
    fn test_format_address_any_length() {
        for len in 10..64 {
            let address: String = (0..len)
                .map(|i| char::from(b'a' + (i % 26) as u8))
                .collect();
            let formatted = format_address(&address);
            let (prefix, suffix) = formatted.split_once("...").unwrap();
            assert_eq!(prefix, &address[..6]);
            assert_eq!(suffix, &address[len - 4..]);
        }
    }

    #[test]
    fn test_format_short_address() {
        assert_eq!("abc...abc", format_address("abc"));
        assert_eq!("0x1234...2345", format_address("0x12345"));
        assert_eq!("é€ab...é€ab", format_address("é€ab"));
    }
}
