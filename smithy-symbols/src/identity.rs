/*!
Stable 32-bit identity for Smithy shapes and dense dispatch for recognized JSON AST
property keys.

Shape identity (spec.md §3.1, §4.1) is a 32-bit hash of one of three canonical byte
string forms: a built-in type keyword, an absolute shape name (`namespace#Shape`), or a
composed member name (`namespace#Shape$member`). The hash itself only needs to be fixed
and collision-free over the corpus this system processes; the design notes (spec.md §9)
explicitly allow swapping CityHash-32 for "any fixed 32-bit hash" and call the choice a
wire-format decision. This crate fixes on 32-bit FNV-1a: it needs no external crate,
hashes deterministically, and its collision behavior over short ASCII identifiers is
well understood.
*/

use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// An interned, 32-bit identifier for a Smithy shape, member, or built-in type keyword.
///
/// `ShapeId` values are opaque; the only way to produce one is [`ShapeId::of`] or
/// [`ShapeId::compose`]. Two `ShapeId`s are equal iff they were derived from the same
/// canonical string (spec.md §3.1).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u32);

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl ShapeId {
    /// The distinguished null shape id; the hash of the empty string. Used as the
    /// "unset" sentinel for `Model::service_id` (spec.md §9).
    pub const NULL: ShapeId = ShapeId(fnv1a32(b""));

    /// Intern a canonical shape-identity string. Smithy prelude aliases
    /// (`smithy.api#Boolean`, `smithy.api#PrimitiveBoolean`, ...) are first resolved to
    /// their canonical built-in keyword so that, e.g., `ShapeId::of("smithy.api#String")`
    /// and `ShapeId::of("string")` are equal (spec.md §3.1).
    pub fn of(s: &str) -> ShapeId {
        let canonical = canonicalize(s);
        ShapeId(fnv1a32(canonical.as_bytes()))
    }

    /// Compose the id of a member from its owning shape's canonical string and the
    /// member name. Guaranteed to equal `ShapeId::of(&format!("{}${}", shape, member))`
    /// (spec.md §4.1).
    pub fn compose(shape: &str, member: &str) -> ShapeId {
        let canonical = canonicalize(shape);
        let mut buf = String::with_capacity(canonical.len() + 1 + member.len());
        buf.push_str(&canonical);
        buf.push('$');
        buf.push_str(member);
        ShapeId(fnv1a32(buf.as_bytes()))
    }

    /// Expose the raw 32-bit value, e.g. for use as a map key in contexts that prefer a
    /// bare integer (generated lookup tables, debug output).
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ShapeId {
    /// Construct a `ShapeId` from an already-hashed value. Only meaningful for values
    /// produced by `as_u32` on a `ShapeId` obtained from `of`/`compose`; this is *not*
    /// a hashing operation.
    fn from(raw: u32) -> Self {
        ShapeId(raw)
    }
}

impl Default for ShapeId {
    /// `ShapeId::NULL`, for use as the "unset" value in `#[derive(Default)]` structs.
    fn default() -> Self {
        ShapeId::NULL
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

/// Smithy's built-in type keywords (spec.md §3.1), plus `unitType` which stands in for
/// the unit shape as the spec's keyword list names it.
const BUILTIN_KEYWORDS: &[&str] = &[
    "blob",
    "boolean",
    "string",
    "byte",
    "short",
    "integer",
    "long",
    "float",
    "double",
    "bigInteger",
    "bigDecimal",
    "timestamp",
    "document",
    "enum",
    "intEnum",
    "list",
    "map",
    "structure",
    "union",
    "unitType",
    "operation",
    "resource",
    "service",
    "apply",
];

lazy_static! {
    /// `smithy.api#<Alias>` -> canonical built-in keyword. Covers both the boxed and
    /// `Primitive*` forms of every numeric/boolean alias (spec.md §3.1, §9): both
    /// resolve to the same canonical shape id, and it is the parser's job (not this
    /// table's) to additionally synthesize the `default` trait for the `Primitive*`
    /// spelling.
    static ref PRELUDE_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("smithy.api#Blob", "blob");
        m.insert("smithy.api#Boolean", "boolean");
        m.insert("smithy.api#PrimitiveBoolean", "boolean");
        m.insert("smithy.api#String", "string");
        m.insert("smithy.api#Byte", "byte");
        m.insert("smithy.api#PrimitiveByte", "byte");
        m.insert("smithy.api#Short", "short");
        m.insert("smithy.api#PrimitiveShort", "short");
        m.insert("smithy.api#Integer", "integer");
        m.insert("smithy.api#PrimitiveInteger", "integer");
        m.insert("smithy.api#Long", "long");
        m.insert("smithy.api#PrimitiveLong", "long");
        m.insert("smithy.api#Float", "float");
        m.insert("smithy.api#PrimitiveFloat", "float");
        m.insert("smithy.api#Double", "double");
        m.insert("smithy.api#PrimitiveDouble", "double");
        m.insert("smithy.api#BigInteger", "bigInteger");
        m.insert("smithy.api#BigDecimal", "bigDecimal");
        m.insert("smithy.api#Timestamp", "timestamp");
        m.insert("smithy.api#Document", "document");
        m.insert("smithy.api#Unit", "unitType");
        m
    };
}

/// Returns `true` if `alias` is one of the `Primitive*` prelude spellings that carries
/// an implicit zero-value default (spec.md §3.3, §9).
pub fn is_primitive_alias(alias: &str) -> bool {
    alias.starts_with("smithy.api#Primitive")
}

fn canonicalize(s: &str) -> std::borrow::Cow<'_, str> {
    if let Some(canonical) = PRELUDE_ALIASES.get(s) {
        std::borrow::Cow::Borrowed(*canonical)
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

const fn fnv1a32(bytes: &[u8]) -> u32 {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

// ------------------------------------------------------------------------------------------------
// SmithyProperty: dense dispatch over recognized JSON AST property keys
// ------------------------------------------------------------------------------------------------

///
/// An 8-byte packed representation of the first 8 bytes of a recognized Smithy JSON AST
/// property key (spec.md §4.1). The parser matches on these instead of comparing
/// `&str`s key-by-key, since every recognized key is known at compile time.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmithyProperty(u64);

macro_rules! smithy_properties {
    ($( $const_name:ident => $key:expr ),* $(,)?) => {
        impl SmithyProperty {
            $(
                #[allow(missing_docs)]
                pub const $const_name: SmithyProperty = SmithyProperty(pack_key($key.as_bytes()));
            )*
        }

        impl SmithyProperty {
            /// Look up the dense form of a property key, if it is one this parser
            /// recognizes. Unrecognized keys are the caller's responsibility (policy
            /// `property` in spec.md §4.4).
            pub fn from_key(key: &str) -> Option<SmithyProperty> {
                let packed = SmithyProperty(pack_key(key.as_bytes()));
                match packed {
                    $( SmithyProperty::$const_name if key == $key => Some(packed), )*
                    _ => None,
                }
            }
        }
    };
}

smithy_properties! {
    SHAPES => "shapes",
    TYPE => "type",
    TRAITS => "traits",
    MEMBERS => "members",
    TARGET => "target",
    OPERATIONS => "operations",
    RESOURCES => "resources",
    IDENTIFIERS => "identifiers",
    PROPERTIES => "properties",
    CREATE => "create",
    PUT => "put",
    READ => "read",
    UPDATE => "update",
    DELETE => "delete",
    LIST => "list",
    ERRORS => "errors",
    COLLECTION_OPERATIONS => "collectionOperations",
    RENAME => "rename",
    MIXINS => "mixins",
    METADATA => "metadata",
    SMITHY => "smithy",
    VERSION => "version",
    INPUT => "input",
    OUTPUT => "output",
    MEMBER => "member",
    KEY => "key",
    VALUE => "value",
}

const fn pack_key(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    let mut i = 0;
    while i < bytes.len() && i < 8 {
        buf[i] = bytes[i];
        i += 1;
    }
    u64::from_le_bytes(buf)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_is_deterministic() {
        assert_eq!(ShapeId::of("test.simple#Blob"), ShapeId::of("test.simple#Blob"));
    }

    #[test]
    fn compose_matches_of_with_dollar() {
        let direct = ShapeId::of("test.simple#Struct$fooBar");
        let composed = ShapeId::compose("test.simple#Struct", "fooBar");
        assert_eq!(direct, composed);
    }

    #[test]
    fn prelude_aliases_hash_to_canonical_builtin() {
        assert_eq!(ShapeId::of("smithy.api#Boolean"), ShapeId::of("boolean"));
        assert_eq!(ShapeId::of("smithy.api#PrimitiveBoolean"), ShapeId::of("boolean"));
        assert_eq!(ShapeId::of("smithy.api#String"), ShapeId::of("string"));
        assert_eq!(ShapeId::of("smithy.api#Unit"), ShapeId::of("unitType"));
    }

    #[test]
    fn null_is_hash_of_empty_string() {
        assert_eq!(ShapeId::NULL, ShapeId::of(""));
    }

    #[test]
    fn builtin_keywords_are_distinct() {
        let ids: Vec<ShapeId> = BUILTIN_KEYWORDS.iter().map(|k| ShapeId::of(k)).collect();
        for (i, a) in ids.iter().enumerate() {
            for (j, b) in ids.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "collision between {} and {}", BUILTIN_KEYWORDS[i], BUILTIN_KEYWORDS[j]);
                }
            }
        }
    }

    #[test]
    fn smithy_property_recognizes_known_keys() {
        assert_eq!(SmithyProperty::from_key("shapes"), Some(SmithyProperty::SHAPES));
        assert_eq!(SmithyProperty::from_key("traits"), Some(SmithyProperty::TRAITS));
        assert_eq!(SmithyProperty::from_key("notAKey"), None);
    }

    #[test]
    fn smithy_property_does_not_confuse_shared_prefixes() {
        // "key" and "keyboard" share an 8-byte-or-shorter prefix window; the exact
        // string comparison inside from_key must still disambiguate them.
        assert_eq!(SmithyProperty::from_key("key"), Some(SmithyProperty::KEY));
        assert_eq!(SmithyProperty::from_key("keyboard"), None);
    }
}
