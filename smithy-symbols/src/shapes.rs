/*!
Shape bodies (spec.md §3.2). A [`Shape`] is the value side of the symbol store's
`shapes: Map<ShapeId, Shape>` table; shape *identity* and *traits* live alongside it in
[`crate::model::Model`], not inside the `Shape` itself, since a member's `target`
indirection and a structure's own declaration are both just entries in the same table.
*/

use crate::identity::ShapeId;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// One declared or synthesized shape body.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// The unit type; legal only as a member target (spec.md §3.3).
    Unit,
    /// `blob`
    Blob,
    /// `boolean`
    Boolean,
    /// `string`
    String,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `integer`
    Integer,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `bigInteger`
    BigInteger,
    /// `bigDecimal`
    BigDecimal,
    /// `timestamp`
    Timestamp,
    /// `document`
    Document,
    /// Indirection to another shape; used for every member's own table entry.
    Target(ShapeId),
    /// An ordered list of member ids, each a `unit` shape carrying an `enumValue`
    /// string trait.
    StrEnum(Vec<ShapeId>),
    /// An ordered list of member ids, each carrying an `enumValue` integer trait.
    IntEnum(Vec<ShapeId>),
    /// A single element-member id.
    List(ShapeId),
    /// `[key, value]` member ids.
    Map([ShapeId; 2]),
    /// An ordered list of member ids.
    Structure(Vec<ShapeId>),
    /// An ordered list of variant member ids.
    TaggedUnion(Vec<ShapeId>),
    /// A service operation.
    Operation(Operation),
    /// A resource and its lifecycle operations.
    Resource(Box<Resource>),
    /// A service and its bound resources/operations.
    Service(Box<Service>),
}

/// `operation { input?, output?, errors }` (spec.md §3.2).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operation {
    /// The operation's input structure, if it takes one.
    pub input: Option<ShapeId>,
    /// The operation's output structure, if it returns one.
    pub output: Option<ShapeId>,
    /// Errors this operation may raise, in declaration order.
    pub errors: Vec<ShapeId>,
}

/// `resource { identifiers, properties, create?, put?, read?, update?, delete?, list?,
/// operations, collectionOperations, resources }` (spec.md §3.2).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resource {
    /// Ordered `name -> ShapeId` identifier bindings.
    pub identifiers: Vec<(String, ShapeId)>,
    /// Ordered `name -> ShapeId` property bindings.
    pub properties: Vec<(String, ShapeId)>,
    /// The `create` lifecycle operation, if bound.
    pub create: Option<ShapeId>,
    /// The `put` lifecycle operation, if bound.
    pub put: Option<ShapeId>,
    /// The `read` lifecycle operation, if bound.
    pub read: Option<ShapeId>,
    /// The `update` lifecycle operation, if bound.
    pub update: Option<ShapeId>,
    /// The `delete` lifecycle operation, if bound.
    pub delete: Option<ShapeId>,
    /// The `list` lifecycle operation, if bound.
    pub list: Option<ShapeId>,
    /// Non-lifecycle instance operations, in declaration order.
    pub operations: Vec<ShapeId>,
    /// Non-lifecycle collection operations, in declaration order.
    pub collection_operations: Vec<ShapeId>,
    /// Child resources, in declaration order.
    pub resources: Vec<ShapeId>,
}

/// `service { version?, operations, resources, errors, rename }` (spec.md §3.2).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Service {
    /// The service's API version string, if declared.
    pub version: Option<String>,
    /// Bound operations, in declaration order.
    pub operations: Vec<ShapeId>,
    /// Bound resources, in declaration order.
    pub resources: Vec<ShapeId>,
    /// Errors common to every operation of this service, in declaration order.
    pub errors: Vec<ShapeId>,
    /// `(new_name, target)` renames applied to shapes referenced transitively by this
    /// service, in declaration order.
    pub rename: Vec<(String, ShapeId)>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Shape {
    /// Returns `true` if this shape kind supports members at all (spec.md §3.2:
    /// everything but the leaf primitives, `target`, `operation`, `resource`, and
    /// `service`).
    pub fn has_members(&self) -> bool {
        matches!(
            self,
            Shape::StrEnum(_)
                | Shape::IntEnum(_)
                | Shape::List(_)
                | Shape::Map(_)
                | Shape::Structure(_)
                | Shape::TaggedUnion(_)
        )
    }

    /// Returns `true` if this shape is one of the leaf primitive kinds (spec.md §3.2).
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Shape::Unit
                | Shape::Blob
                | Shape::Boolean
                | Shape::String
                | Shape::Byte
                | Shape::Short
                | Shape::Integer
                | Shape::Long
                | Shape::Float
                | Shape::Double
                | Shape::BigInteger
                | Shape::BigDecimal
                | Shape::Timestamp
                | Shape::Document
        )
    }

    /// The member ids this shape directly names, in declaration order (does not
    /// recurse into mixins; see `Model::structure_members` for that).
    pub fn member_ids(&self) -> Vec<ShapeId> {
        match self {
            Shape::StrEnum(members) | Shape::IntEnum(members) => members.clone(),
            Shape::List(member) => vec![*member],
            Shape::Map([key, value]) => vec![*key, *value],
            Shape::Structure(members) | Shape::TaggedUnion(members) => members.clone(),
            _ => Vec::new(),
        }
    }
}
