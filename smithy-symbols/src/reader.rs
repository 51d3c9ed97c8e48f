/*!
The pull-style JSON reader interface (spec.md §4.3).

This trait is defined here, rather than in `smithy_json`, because the trait registry
(spec.md §4.2) needs a reader type to hand to a trait's parse function and the registry
lives in the symbol-store crate; `smithy_json` provides the one concrete implementation
of this trait (a hand-rolled tokenizer over a byte stream) and the parser (spec.md §4.4)
that drives it.
*/

use crate::error::Result;
use crate::value::Value;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The kind of the next token, without consuming it (spec.md §4.3 `peek`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    ObjectBegin,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayBegin,
    /// `]`
    ArrayEnd,
    /// A JSON string literal.
    String,
    /// A JSON number literal.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// End of the document.
    Eof,
}

/// A consumed token, carrying its value where it has one (spec.md §4.3 `next`).
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// `{`
    ObjectBegin,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayBegin,
    /// `]`
    ArrayEnd,
    /// A JSON string literal.
    String(String),
    /// A JSON integer literal.
    Integer(i64),
    /// A JSON floating-point literal.
    Float(f64),
    /// `true`/`false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// End of the document.
    Eof,
}

/// An item yielded by [`JsonReader::next_scope`]: either an object property's key or an
/// array element's index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeItem<'a> {
    /// The key of the object property about to be read.
    ObjectProperty(&'a str),
    /// The zero-based index of the array element about to be read.
    ArrayElement(usize),
}

/// The per-element callback passed to [`JsonReader::next_scope`].
pub type ScopeVisitor<'a> = dyn FnMut(ScopeItem<'_>, &mut dyn JsonReader) -> Result<()> + 'a;

///
/// A pull-style, one-token-at-a-time JSON reader (spec.md §4.3).
///
/// Every `next_*` helper that expects a particular token kind fails with
/// `ErrorKind::UnexpectedToken` when the actual token differs; `next_string_eql` fails
/// with `ErrorKind::UnexpectedValue` when the string token's value does not match.
///
pub trait JsonReader {
    /// Return the kind of the next token without consuming it.
    fn peek(&mut self) -> Result<TokenKind>;

    /// Consume and return the next token.
    fn next(&mut self) -> Result<Token>;

    /// Consume a `{`.
    fn next_object_begin(&mut self) -> Result<()>;

    /// Consume a `}`.
    fn next_object_end(&mut self) -> Result<()>;

    /// Consume a `[`.
    fn next_array_begin(&mut self) -> Result<()>;

    /// Consume a `]`.
    fn next_array_end(&mut self) -> Result<()>;

    /// Consume the end-of-document marker; fails if more tokens remain.
    fn next_document_end(&mut self) -> Result<()>;

    /// Consume a `null`.
    fn next_null(&mut self) -> Result<()>;

    /// Consume `true`/`false` and return it.
    fn next_boolean(&mut self) -> Result<bool>;

    /// Consume a JSON number and return it as an integer.
    fn next_integer(&mut self) -> Result<i64>;

    /// Consume a JSON number and return it as a float.
    fn next_float(&mut self) -> Result<f64>;

    /// Consume a JSON string and return its value.
    fn next_string(&mut self) -> Result<String>;

    /// Consume a JSON string and fail with `UnexpectedValue` unless it equals `expected`.
    fn next_string_eql(&mut self, expected: &str) -> Result<()> {
        let found = self.next_string()?;
        if found == expected {
            Ok(())
        } else {
            Err(crate::error::ErrorKind::UnexpectedValue(expected.to_string(), found).into())
        }
    }

    /// Skip the value or scope about to be read. Assumes the opening token of a scope
    /// (`{`/`[`) has *not* yet been consumed; use [`JsonReader::skip_current_scope`]
    /// when it has.
    fn skip_value_or_scope(&mut self) -> Result<()>;

    /// Skip the remainder of the current object/array scope. Assumes the scope's
    /// `next_object_begin`/`next_array_begin` has already been consumed.
    fn skip_current_scope(&mut self) -> Result<()>;

    /// Iterate the properties of an object, or the elements of an array, invoking
    /// `visitor` once per item with the reader positioned at that item's value. Consumes
    /// the closing token of the scope before returning.
    fn next_scope(&mut self, visitor: &mut ScopeVisitor<'_>) -> Result<()>;

    /// Read an arbitrary, untyped JSON value (used for metadata and trait payloads with
    /// no more specific parser registered). Provided in terms of the primitives above so
    /// a concrete reader only has to implement the primitives.
    fn read_value(&mut self) -> Result<Value> {
        match self.peek()? {
            TokenKind::Null => {
                self.next_null()?;
                Ok(Value::Null)
            }
            TokenKind::Boolean => Ok(Value::Boolean(self.next_boolean()?)),
            TokenKind::Number => {
                // Integers and floats are indistinguishable at the `peek` level; a
                // reader implementation decides which `next()` variant to hand back,
                // and `read_value` simply consumes whichever one it gets.
                match self.next()? {
                    Token::Integer(n) => Ok(Value::Integer(n)),
                    Token::Float(n) => Ok(Value::Float(n)),
                    other => Err(crate::error::ErrorKind::UnexpectedToken(
                        "number".to_string(),
                        format!("{:?}", other),
                    )
                    .into()),
                }
            }
            TokenKind::String => Ok(Value::String(self.next_string()?)),
            TokenKind::ArrayBegin => {
                self.next_array_begin()?;
                let mut items = Vec::new();
                loop {
                    if self.peek()? == TokenKind::ArrayEnd {
                        self.next_array_end()?;
                        break;
                    }
                    items.push(self.read_value()?);
                }
                Ok(Value::List(items))
            }
            TokenKind::ObjectBegin => {
                self.next_object_begin()?;
                let mut entries = Vec::new();
                loop {
                    if self.peek()? == TokenKind::ObjectEnd {
                        self.next_object_end()?;
                        break;
                    }
                    let key = self.next_string()?;
                    let value = self.read_value()?;
                    entries.push((crate::identity::ShapeId::of(&key), value));
                }
                Ok(Value::Map(entries))
            }
            TokenKind::ObjectEnd | TokenKind::ArrayEnd | TokenKind::Eof => {
                Err(crate::error::ErrorKind::UnexpectedToken(
                    "value".to_string(),
                    format!("{:?}", self.peek()?),
                )
                .into())
            }
        }
    }
}
