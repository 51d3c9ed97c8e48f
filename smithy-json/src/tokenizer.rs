/*!
A hand-rolled, pull-style JSON tokenizer (spec.md §4.3). Nothing in the reference corpus
hands back a reusable pull tokenizer over `serde_json` (its public API is DOM-first,
`serde_json::Value`), so this reads bytes directly; it is the one piece of this crate with
no teacher original to adapt.

Structural separators (`:`, `,`) are consumed silently between tokens — they carry no
information a [`JsonReader`] consumer needs, since object/array membership is already
delimited by `ObjectBegin`/`ObjectEnd`/`ArrayBegin`/`ArrayEnd`.
*/

use smithy_symbols::error::{ErrorKind, Result};
use smithy_symbols::reader::{JsonReader, ScopeItem, ScopeVisitor, Token, TokenKind};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A [`JsonReader`] over an in-memory UTF-8 JSON document.
///
#[derive(Debug)]
pub struct JsonTokenizer<'a> {
    bytes: &'a [u8],
    pos: usize,
    peeked: Option<Token>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a> JsonTokenizer<'a> {
    /// Construct a tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
            peeked: None,
        }
    }

    fn fill_peek(&mut self) -> Result<()> {
        if self.peeked.is_none() {
            self.peeked = Some(self.scan_token()?);
        }
        Ok(())
    }

    fn take(&mut self) -> Result<Token> {
        self.fill_peek()?;
        Ok(self.peeked.take().expect("fill_peek always populates peeked"))
    }

    fn current_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_insignificant(&mut self) {
        loop {
            match self.current_byte() {
                Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => self.pos += 1,
                Some(b':') | Some(b',') => self.pos += 1,
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token> {
        self.skip_insignificant();
        match self.current_byte() {
            None => Ok(Token::Eof),
            Some(b'{') => {
                self.pos += 1;
                Ok(Token::ObjectBegin)
            }
            Some(b'}') => {
                self.pos += 1;
                Ok(Token::ObjectEnd)
            }
            Some(b'[') => {
                self.pos += 1;
                Ok(Token::ArrayBegin)
            }
            Some(b']') => {
                self.pos += 1;
                Ok(Token::ArrayEnd)
            }
            Some(b'"') => self.scan_string().map(Token::String),
            Some(b't') => self.scan_literal("true").map(|_| Token::Boolean(true)),
            Some(b'f') => self.scan_literal("false").map(|_| Token::Boolean(false)),
            Some(b'n') => self.scan_literal("null").map(|_| Token::Null),
            Some(c) if c == b'-' || c.is_ascii_digit() => self.scan_number(),
            Some(c) => Err(ErrorKind::MalformedJson(format!("unexpected byte '{}'", c as char)).into()),
        }
    }

    fn scan_literal(&mut self, literal: &str) -> Result<()> {
        let end = self.pos + literal.len();
        if end <= self.bytes.len() && &self.bytes[self.pos..end] == literal.as_bytes() {
            self.pos = end;
            Ok(())
        } else {
            Err(ErrorKind::MalformedJson(format!("expected literal '{}'", literal)).into())
        }
    }

    fn scan_string(&mut self) -> Result<String> {
        debug_assert_eq!(self.current_byte(), Some(b'"'));
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.current_byte() {
                None => return Err(ErrorKind::MalformedJson("unterminated string".to_string()).into()),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.pos += 1;
                    match self.current_byte() {
                        Some(b'"') => out.push('"'),
                        Some(b'\\') => out.push('\\'),
                        Some(b'/') => out.push('/'),
                        Some(b'b') => out.push('\u{8}'),
                        Some(b'f') => out.push('\u{c}'),
                        Some(b'n') => out.push('\n'),
                        Some(b'r') => out.push('\r'),
                        Some(b't') => out.push('\t'),
                        Some(b'u') => {
                            let code = self.scan_unicode_escape()?;
                            out.push(code);
                            continue;
                        }
                        _ => return Err(ErrorKind::MalformedJson("invalid escape sequence".to_string()).into()),
                    }
                    self.pos += 1;
                }
                Some(_) => {
                    // Advance by whole UTF-8 code points so multi-byte characters survive.
                    let rest = std::str::from_utf8(&self.bytes[self.pos..])
                        .map_err(|_| ErrorKind::MalformedJson("invalid UTF-8".to_string()))?;
                    let ch = rest.chars().next().expect("non-empty since current_byte is Some");
                    out.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    fn scan_unicode_escape(&mut self) -> Result<char> {
        // `self.pos` is on the `u` of `\u`.
        self.pos += 1;
        let hex = self
            .bytes
            .get(self.pos..self.pos + 4)
            .ok_or_else(|| ErrorKind::MalformedJson("truncated unicode escape".to_string()))?;
        let hex = std::str::from_utf8(hex).map_err(|_| ErrorKind::MalformedJson("invalid unicode escape".to_string()))?;
        let code = u32::from_str_radix(hex, 16)
            .map_err(|_| ErrorKind::MalformedJson(format!("invalid unicode escape '{}'", hex)))?;
        self.pos += 4;
        char::from_u32(code).ok_or_else(|| ErrorKind::MalformedJson(format!("invalid code point U+{:04X}", code)).into())
    }

    fn scan_number(&mut self) -> Result<Token> {
        let start = self.pos;
        if self.current_byte() == Some(b'-') {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(c) = self.current_byte() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.current_byte() == Some(b'.') {
            is_float = true;
            self.pos += 1;
            while let Some(c) = self.current_byte() {
                if c.is_ascii_digit() {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }
        if matches!(self.current_byte(), Some(b'e') | Some(b'E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.current_byte(), Some(b'+') | Some(b'-')) {
                self.pos += 1;
            }
            while let Some(c) = self.current_byte() {
                if c.is_ascii_digit() {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).expect("ASCII number literal");
        if is_float {
            text.parse::<f64>()
                .map(Token::Float)
                .map_err(|e| ErrorKind::MalformedJson(format!("malformed number '{}': {}", text, e)).into())
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|e| ErrorKind::MalformedJson(format!("malformed number '{}': {}", text, e)).into())
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.take()?;
        let actual = token_kind(&token);
        if actual == kind {
            Ok(token)
        } else {
            Err(ErrorKind::UnexpectedToken(format!("{:?}", kind), format!("{:?}", actual)).into())
        }
    }
}

fn token_kind(token: &Token) -> TokenKind {
    match token {
        Token::ObjectBegin => TokenKind::ObjectBegin,
        Token::ObjectEnd => TokenKind::ObjectEnd,
        Token::ArrayBegin => TokenKind::ArrayBegin,
        Token::ArrayEnd => TokenKind::ArrayEnd,
        Token::String(_) => TokenKind::String,
        Token::Integer(_) | Token::Float(_) => TokenKind::Number,
        Token::Boolean(_) => TokenKind::Boolean,
        Token::Null => TokenKind::Null,
        Token::Eof => TokenKind::Eof,
    }
}

impl<'a> JsonReader for JsonTokenizer<'a> {
    fn peek(&mut self) -> Result<TokenKind> {
        self.fill_peek()?;
        Ok(token_kind(self.peeked.as_ref().expect("fill_peek always populates peeked")))
    }

    fn next(&mut self) -> Result<Token> {
        self.take()
    }

    fn next_object_begin(&mut self) -> Result<()> {
        self.expect(TokenKind::ObjectBegin).map(|_| ())
    }

    fn next_object_end(&mut self) -> Result<()> {
        self.expect(TokenKind::ObjectEnd).map(|_| ())
    }

    fn next_array_begin(&mut self) -> Result<()> {
        self.expect(TokenKind::ArrayBegin).map(|_| ())
    }

    fn next_array_end(&mut self) -> Result<()> {
        self.expect(TokenKind::ArrayEnd).map(|_| ())
    }

    fn next_document_end(&mut self) -> Result<()> {
        self.expect(TokenKind::Eof).map(|_| ())
    }

    fn next_null(&mut self) -> Result<()> {
        self.expect(TokenKind::Null).map(|_| ())
    }

    fn next_boolean(&mut self) -> Result<bool> {
        match self.expect(TokenKind::Boolean)? {
            Token::Boolean(b) => Ok(b),
            _ => unreachable!("expect() already validated the token kind"),
        }
    }

    fn next_integer(&mut self) -> Result<i64> {
        match self.expect(TokenKind::Number)? {
            Token::Integer(n) => Ok(n),
            Token::Float(n) => Ok(n as i64),
            _ => unreachable!("expect() already validated the token kind"),
        }
    }

    fn next_float(&mut self) -> Result<f64> {
        match self.expect(TokenKind::Number)? {
            Token::Float(n) => Ok(n),
            Token::Integer(n) => Ok(n as f64),
            _ => unreachable!("expect() already validated the token kind"),
        }
    }

    fn next_string(&mut self) -> Result<String> {
        match self.expect(TokenKind::String)? {
            Token::String(s) => Ok(s),
            _ => unreachable!("expect() already validated the token kind"),
        }
    }

    fn skip_value_or_scope(&mut self) -> Result<()> {
        match self.peek()? {
            TokenKind::ObjectBegin => {
                self.next_object_begin()?;
                self.skip_current_scope()
            }
            TokenKind::ArrayBegin => {
                self.next_array_begin()?;
                self.skip_current_scope()
            }
            _ => self.take().map(|_| ()),
        }
    }

    fn skip_current_scope(&mut self) -> Result<()> {
        let mut depth = 1usize;
        loop {
            match self.peek()? {
                TokenKind::ObjectBegin | TokenKind::ArrayBegin => {
                    depth += 1;
                    let _ = self.take()?;
                }
                TokenKind::ObjectEnd | TokenKind::ArrayEnd => {
                    depth -= 1;
                    let _ = self.take()?;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                TokenKind::Eof => {
                    return Err(ErrorKind::MalformedJson("unterminated scope".to_string()).into());
                }
                _ => {
                    let _ = self.take()?;
                }
            }
        }
    }

    fn next_scope(&mut self, visitor: &mut ScopeVisitor<'_>) -> Result<()> {
        match self.peek()? {
            TokenKind::ObjectBegin => {
                self.next_object_begin()?;
                loop {
                    if self.peek()? == TokenKind::ObjectEnd {
                        self.next_object_end()?;
                        return Ok(());
                    }
                    let key = self.next_string()?;
                    visitor(ScopeItem::ObjectProperty(&key), self)?;
                }
            }
            TokenKind::ArrayBegin => {
                self.next_array_begin()?;
                let mut index = 0usize;
                loop {
                    if self.peek()? == TokenKind::ArrayEnd {
                        self.next_array_end()?;
                        return Ok(());
                    }
                    visitor(ScopeItem::ArrayElement(index), self)?;
                    index += 1;
                }
            }
            other => Err(ErrorKind::UnexpectedToken("object or array".to_string(), format!("{:?}", other)).into()),
        }
    }
}
