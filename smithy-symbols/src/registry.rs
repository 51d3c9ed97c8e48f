/*!
The trait registry (spec.md §4.2): an extensible mapping from a trait's `ShapeId` to a
function that consumes its JSON payload and returns an opaque, typed value.
*/

use crate::error::{ErrorKind, Result};
use crate::identity::ShapeId;
use crate::reader::JsonReader;
use crate::syntax::*;
use crate::value::{TraitValue, Value};
use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// A trait's identity, the same `ShapeId` space as shapes and members occupy.
pub type TraitId = ShapeId;

/// A trait payload parser: consumes the trait's JSON value from the reader (positioned
/// just before it) and returns the opaque payload to store against the shape.
pub type TraitParseFn = fn(&mut dyn JsonReader) -> Result<TraitValue>;

///
/// Maps a [`TraitId`] to an optional [`TraitParseFn`]. A registered `None` parser marks
/// a tag trait whose body, an empty object, is skipped rather than interpreted
/// (spec.md §4.2).
///
#[derive(Default)]
pub struct TraitRegistry {
    parsers: HashMap<TraitId, Option<TraitParseFn>>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl TraitRegistry {
    /// An empty registry with none of the built-in traits registered.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// A registry pre-populated with the handful of prelude traits spec.md §1 requires
    /// for code shape: `documentation`, `default`, `required`, `enumValue`, `sparse`,
    /// `error`, `httpError`, `retryable`, `uniqueItems`, `mixin`, `clientOptional`, plus
    /// the SPEC_FULL ambient additions `deprecated` and `paginated` (see SPEC_FULL.md).
    pub fn with_builtin_traits() -> Self {
        let mut registry = Self::empty();
        registry
            .register_all(&[
                (prelude_id(TRAIT_DOCUMENTATION), Some(parse_documentation as TraitParseFn)),
                (prelude_id(TRAIT_DEFAULT), Some(parse_default as TraitParseFn)),
                (prelude_id(TRAIT_REQUIRED), None),
                (prelude_id(TRAIT_ENUM_VALUE), Some(parse_enum_value as TraitParseFn)),
                (prelude_id(TRAIT_SPARSE), None),
                (prelude_id(TRAIT_ERROR), Some(parse_error as TraitParseFn)),
                (prelude_id(TRAIT_HTTP_ERROR), Some(parse_http_error as TraitParseFn)),
                (prelude_id(TRAIT_RETRYABLE), Some(parse_retryable as TraitParseFn)),
                (prelude_id(TRAIT_UNIQUE_ITEMS), None),
                (prelude_id(TRAIT_MIXIN), None),
                (prelude_id(TRAIT_CLIENT_OPTIONAL), None),
                (prelude_id(TRAIT_DEPRECATED), Some(parse_deprecated as TraitParseFn)),
                (prelude_id(TRAIT_SINCE), Some(parse_documentation as TraitParseFn)),
                (prelude_id(TRAIT_PAGINATED), Some(parse_value as TraitParseFn)),
            ])
            .expect("built-in trait ids are unique by construction");
        registry
    }

    /// Register a single trait id with an optional parser. Fails if the id is already
    /// registered.
    pub fn register(&mut self, id: TraitId, parser: Option<TraitParseFn>) -> Result<()> {
        if self.parsers.contains_key(&id) {
            return Err(ErrorKind::DuplicateTraitRegistration(format!("{:?}", id)).into());
        }
        let _ = self.parsers.insert(id, parser);
        Ok(())
    }

    /// Register a batch of `(id, parser)` pairs; fails on the first duplicate.
    pub fn register_all(&mut self, items: &[(TraitId, Option<TraitParseFn>)]) -> Result<()> {
        for (id, parser) in items {
            self.register(*id, *parser)?;
        }
        Ok(())
    }

    /// Returns `true` if `id` has a registered parser (tag or otherwise).
    pub fn is_registered(&self, id: TraitId) -> bool {
        self.parsers.contains_key(&id)
    }

    /// Parse one trait occurrence: if `id` is a registered tag trait, skip its `{}`
    /// body and return `None`; if it has a parser, invoke it; otherwise fail with
    /// `UnknownTrait` (the caller applies the parser policy's `trait` resolution to
    /// that failure, per spec.md §4.4).
    pub fn parse(&self, id: TraitId, reader: &mut dyn JsonReader) -> Result<TraitValue> {
        match self.parsers.get(&id) {
            Some(None) => {
                reader.skip_value_or_scope()?;
                Ok(None)
            }
            Some(Some(parse_fn)) => parse_fn(reader),
            None => Err(ErrorKind::UnknownTrait(format!("{:?}", id)).into()),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn prelude_id(name: &str) -> TraitId {
    ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, name))
}

fn parse_value(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(reader.read_value()?))
}

fn parse_documentation(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(Value::String(reader.next_string()?)))
}

fn parse_default(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(reader.read_value()?))
}

fn parse_enum_value(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    use crate::reader::TokenKind;
    match reader.peek()? {
        TokenKind::String => Ok(Some(Value::String(reader.next_string()?))),
        _ => Ok(Some(Value::Integer(reader.next_integer()?))),
    }
}

fn parse_error(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(Value::String(reader.next_string()?)))
}

fn parse_http_error(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(Value::Integer(reader.next_integer()?)))
}

fn parse_retryable(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(reader.read_value()?))
}

fn parse_deprecated(reader: &mut dyn JsonReader) -> Result<TraitValue> {
    Ok(Some(reader.read_value()?))
}
