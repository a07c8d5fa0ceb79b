/// Read position over the raw source bytes.
///
/// Owns both the byte offset and the 1-based line, so every advance keeps
/// them in step: the line only moves when a `\n` is consumed.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    pub fn peek_next(&self) -> Option<u8> {
        self.source.get(self.position + 1).copied()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    /// Consumes the next byte only if it is `expected`.
    pub fn advance_if(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().map(&pred).unwrap_or(false) {
            self.advance();
        }
    }

    /// Consumes one whole UTF-8 character whose first byte was already read at
    /// `start`. Invalid sequences are consumed one byte at a time.
    pub fn finish_char(&mut self, start: usize) -> char {
        let rest = &self.source[start..];
        for len in 1..=rest.len().min(4) {
            if let Ok(s) = std::str::from_utf8(&rest[..len]) {
                if let Some(c) = s.chars().next() {
                    self.position = start + len;
                    return c;
                }
            }
        }
        char::REPLACEMENT_CHARACTER
    }

    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    pub fn text_from(&self, start: usize) -> String {
        String::from_utf8_lossy(self.slice_from(start)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_line_one() {
        let cursor = Cursor::new(b"");
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.position(), 0);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn peek_does_not_move() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek_next(), Some(b'b'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn newline_bumps_line_but_carriage_return_does_not() {
        let mut cursor = Cursor::new(b"a\r\nb\n");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn advance_if_only_on_match() {
        let mut cursor = Cursor::new(b"==");
        cursor.advance();
        assert!(!cursor.advance_if(b'!'));
        assert!(cursor.advance_if(b'='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn advance_while_and_slice() {
        let mut cursor = Cursor::new(b"123abc");
        cursor.advance_while(|b| b.is_ascii_digit());
        assert_eq!(cursor.slice_from(0), b"123");
        assert_eq!(cursor.text_from(0), "123");
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn finish_char_decodes_multibyte() {
        let source = "é!".as_bytes();
        let mut cursor = Cursor::new(source);
        cursor.advance();
        assert_eq!(cursor.finish_char(0), 'é');
        assert_eq!(cursor.peek(), Some(b'!'));
    }

    #[test]
    fn finish_char_on_invalid_byte() {
        let mut cursor = Cursor::new(&[0xff, b'a']);
        cursor.advance();
        assert_eq!(cursor.finish_char(0), char::REPLACEMENT_CHARACTER);
        assert_eq!(cursor.peek(), Some(b'a'));
    }
}
