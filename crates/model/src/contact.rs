//! Contact link parsing for click-to-copy

use percent_encoding::percent_decode_str;

/// A `mailto:` or `tel:` link reduced to the text worth copying
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactLink {
    Email(String),
    Phone(String),
}

impl ContactLink {
    /// Parse an anchor `href`. Other schemes are not copyable and return `None`.
    pub fn parse(href: &str) -> Option<Self> {
        if let Some(rest) = href.strip_prefix("mailto:") {
            // mailto:me@example.com?subject=Hi copies just the address
            let address = rest.split('?').next().unwrap_or_default();
            return Some(Self::Email(decode(address)));
        }
        href.strip_prefix("tel:")
            .map(|number| Self::Phone(decode(number)))
    }

    /// Text placed on the clipboard
    pub fn copy_text(&self) -> &str {
        match self {
            Self::Email(address) => address,
            Self::Phone(number) => number,
        }
    }

    /// Text shown in the confirmation toast
    pub fn display(&self) -> String {
        match self {
            Self::Email(address) => address.clone(),
            Self::Phone(number) => format_phone_number(number),
        }
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Format a 12-digit number (country code + 10 digits) as `+CC AAAA-BBBBBB`.
/// Anything else is returned unchanged.
pub fn format_phone_number(phone_number: &str) -> String {
    let digits: String = phone_number.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 12 {
        return phone_number.to_string();
    }
    format!("+{} {}-{}", &digits[..2], &digits[2..6], &digits[6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mailto() {
        let link = ContactLink::parse("mailto:jane.doe@example.com").unwrap();
        assert_eq!(link, ContactLink::Email("jane.doe@example.com".into()));
        assert_eq!(link.copy_text(), "jane.doe@example.com");
    }

    #[test]
    fn test_parse_mailto_drops_query_and_decodes() {
        let link = ContactLink::parse("mailto:jane%2Bwork@example.com?subject=Hello%20there").unwrap();
        assert_eq!(link.copy_text(), "jane+work@example.com");
    }

    #[test]
    fn test_parse_tel() {
        let link = ContactLink::parse("tel:+91%209876543210").unwrap();
        assert_eq!(link, ContactLink::Phone("+91 9876543210".into()));
        assert_eq!(link.display(), "+91 9876-543210");
    }

    #[test]
    fn test_parse_other_schemes() {
        assert!(ContactLink::parse("https://github.com/someone").is_none());
        assert!(ContactLink::parse("#contact").is_none());
        assert!(ContactLink::parse("MAILTO:x@y.z").is_none());
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("919876543210"), "+91 9876-543210");
        assert_eq!(format_phone_number("+91 (98) 7654-3210"), "+91 9876-543210");
        // wrong digit count: untouched
        assert_eq!(format_phone_number("555-0100"), "555-0100");
        assert_eq!(format_phone_number(""), "");
    }
}
