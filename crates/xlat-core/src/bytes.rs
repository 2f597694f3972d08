// Byte classification for the map-file grammar, and name truncation.

use crate::MAX_NAME_LEN;

/// Value of an ASCII decimal digit, or `None`.
#[inline]
pub fn decimal_value(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

/// Value of an ASCII hexadecimal digit (either case), or `None`.
#[inline]
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(10 + b - b'a'),
        b'A'..=b'F' => Some(10 + b - b'A'),
        _ => None,
    }
}

/// Decode exactly three decimal digits into a byte value.
///
/// Fails when fewer than three bytes are available, when any of them is not
/// a digit, or when the value exceeds 255.
pub fn decode_decimal(digits: &[u8]) -> Option<u8> {
    let [a, b, c, ..] = *digits else {
        return None;
    };
    let value = u16::from(decimal_value(a)?) * 100
        + u16::from(decimal_value(b)?) * 10
        + u16::from(decimal_value(c)?);
    u8::try_from(value).ok()
}

/// Decode exactly two hexadecimal digits into a byte value.
pub fn decode_hex(digits: &[u8]) -> Option<u8> {
    let [hi, lo, ..] = *digits else {
        return None;
    };
    Some(hex_value(hi)? * 16 + hex_value(lo)?)
}

/// Truncate a raw display name to [`MAX_NAME_LEN`] bytes.
///
/// Names are kept in the map's own codeset, so the cut is by byte count and
/// no decoding happens here.
pub fn truncate_name(raw: &[u8]) -> Box<[u8]> {
    Box::from(&raw[..raw.len().min(MAX_NAME_LEN)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digits() {
        assert_eq!(decode_decimal(b"065"), Some(65));
        assert_eq!(decode_decimal(b"000"), Some(0));
        assert_eq!(decode_decimal(b"255"), Some(255));
        assert_eq!(decode_decimal(b"2551"), Some(255)); // trailing input untouched
    }

    #[test]
    fn decimal_rejects() {
        assert_eq!(decode_decimal(b"256"), None);
        assert_eq!(decode_decimal(b"999"), None);
        assert_eq!(decode_decimal(b"06X"), None);
        assert_eq!(decode_decimal(b"65"), None);
        assert_eq!(decode_decimal(b" 65"), None);
        assert_eq!(decode_decimal(b""), None);
    }

    #[test]
    fn hex_digits() {
        assert_eq!(decode_hex(b"41"), Some(0x41));
        assert_eq!(decode_hex(b"ff"), Some(0xFF));
        assert_eq!(decode_hex(b"Fe"), Some(0xFE));
        assert_eq!(decode_hex(b"4g"), None);
        assert_eq!(decode_hex(b"4"), None);
    }

    #[test]
    fn short_names_kept() {
        assert_eq!(&*truncate_name(b"Latin-1"), b"Latin-1");
        assert!(truncate_name(b"").is_empty());
    }

    #[test]
    fn long_names_truncated() {
        let name = truncate_name(b"A very long table name indeed");
        assert_eq!(&*name, b"A very long table n");
        assert_eq!(name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn non_utf8_name_bytes_kept() {
        assert_eq!(&*truncate_name(b"Fran\xe7ais"), b"Fran\xe7ais");
        // cut by bytes even inside a multibyte sequence
        let raw = "abcdefghijklmnopqr\u{00E4}x".as_bytes();
        assert_eq!(&*truncate_name(raw), b"abcdefghijklmnopqr\xc3");
    }
}
