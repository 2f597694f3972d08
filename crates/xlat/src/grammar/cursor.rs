// Byte cursor over map-file text.

/// Forward-only cursor over an immutable byte slice.
///
/// Map text ends at the first NUL byte, if any; everything after it is
/// invisible to the cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        Self {
            data: &text[..end],
            pos: 0,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume and return the next byte.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Skip up to `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.data.len());
    }

    /// Unconsumed bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Bytes up to (not including) the next newline.
    pub fn line(&self) -> &'a [u8] {
        let rest = self.rest();
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        &rest[..end]
    }

    /// Move past the next newline, or to the end of the text.
    ///
    /// Returns `true` if a newline was consumed.
    pub fn skip_line(&mut self) -> bool {
        let len = self.line().len();
        self.advance(len);
        self.bump().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_and_peek() {
        let mut c = Cursor::new(b"ab");
        assert_eq!(c.peek(), Some(b'a'));
        assert_eq!(c.bump(), Some(b'a'));
        assert_eq!(c.bump(), Some(b'b'));
        assert_eq!(c.bump(), None);
        assert!(c.is_eof());
    }

    #[test]
    fn nul_ends_text() {
        let mut c = Cursor::new(b"ab\0cd");
        assert_eq!(c.rest(), b"ab");
        c.advance(10);
        assert!(c.is_eof());
    }

    #[test]
    fn line_and_skip_line() {
        let mut c = Cursor::new(b"first\r\nsecond");
        assert_eq!(c.line(), b"first\r");
        assert!(c.skip_line());
        assert_eq!(c.line(), b"second");
        assert!(!c.skip_line());
        assert!(c.is_eof());
    }
}
