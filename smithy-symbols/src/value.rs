/*!
The generic JSON-like value used for metadata (spec.md §3.4) and as the opaque payload
for a parsed trait (spec.md §4.2, §9).

The design note in spec.md §9 offers two choices for trait payloads: a truly opaque,
type-erased handle, or "a sum type covering all known trait payload variants [that]
keeps this type-safe at the cost of a closed world." This crate takes the closed-world
sum type: there is no FFI boundary here forcing type erasure, every trait this system
parses (spec.md §1's handful, plus whatever a caller registers through
[`crate::registry::TraitRegistry::register`]) produces a value expressible in this
enum, and `Option<Value>` is already the exact shape spec.md §4.2 describes
("`Option<OpaquePayload>`").
*/

use crate::identity::ShapeId;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A metadata value, or a trait's opaque payload (spec.md §3.4). Object keys are
/// themselves interned as [`ShapeId`]s rather than kept as strings: nothing downstream
/// of the symbol store ever needs to print an arbitrary nested metadata key back out,
/// only to look one up by the same string it was declared with.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON `true`/`false`.
    Boolean(bool),
    /// A JSON number with no fractional part.
    Integer(i64),
    /// A JSON number with a fractional part.
    Float(f64),
    /// A JSON string.
    String(String),
    /// A JSON array.
    List(Vec<Value>),
    /// A JSON object, keyed by the interned form of each property name.
    Map(Vec<(ShapeId, Value)>),
}

/// Metadata values share the same shape as trait payloads (spec.md §3.4).
pub type MetaValue = Value;

/// The value carried by an applied trait; `None` for a tag trait (spec.md §4.2).
pub type TraitValue = Option<Value>;

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Value {
    /// Look up a key in a `Value::Map`, returning `None` for every other variant or an
    /// absent key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => {
                let id = ShapeId::of(key);
                entries.iter().find(|(k, _)| *k == id).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Returns the boolean value, or `None` if `self` is not `Value::Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string value, or `None` if `self` is not `Value::String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer value, or `None` if `self` is not `Value::Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}
