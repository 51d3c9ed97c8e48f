/*!
The symbol store (spec.md §3.3): the in-memory model a parser populates and an emitter
walks. All edges are [`ShapeId`]-valued, so cyclic shape references (routine in real
Smithy models) need no special handling here — see spec.md §9 "Cyclic shape references".
*/

use crate::identity::ShapeId;
use crate::shapes::Shape;
use crate::value::{TraitValue, Value};
use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The relational model populated by a parser and walked by an emitter.
///
#[derive(Clone, Debug, Default)]
pub struct Model {
    service_id: ShapeId,
    metadata: HashMap<ShapeId, Value>,
    shapes: HashMap<ShapeId, Shape>,
    names: HashMap<ShapeId, String>,
    traits: HashMap<ShapeId, Vec<(ShapeId, TraitValue)>>,
    mixins: HashMap<ShapeId, Vec<ShapeId>>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Model {
    /// A model with no shapes, no service, and no metadata.
    pub fn new() -> Self {
        Self {
            service_id: ShapeId::NULL,
            ..Default::default()
        }
    }

    // -- service -----------------------------------------------------------------------------

    /// The root service shape id, or `ShapeId::NULL` if no `service` shape has been
    /// parsed yet (spec.md §9 "Service uniqueness").
    pub fn service_id(&self) -> ShapeId {
        self.service_id
    }

    /// Set the root service shape. Per spec.md §4.4, when a model contains more than
    /// one `service` shape the last one parsed wins; callers simply call this again.
    pub fn set_service_id(&mut self, id: ShapeId) {
        self.service_id = id;
    }

    // -- shapes --------------------------------------------------------------------------------

    /// Look up a shape body by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Returns `true` if `id` has a declared shape body.
    pub fn has_shape(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Insert or replace a shape's body.
    pub fn add_shape(&mut self, id: ShapeId, shape: Shape) {
        let _ = self.shapes.insert(id, shape);
    }

    /// Iterate every declared shape id.
    pub fn shape_ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.keys().copied()
    }

    // -- names -----------------------------------------------------------------------------------

    /// The human-readable name for a named shape or non-reserved member (spec.md
    /// §3.3: the three reserved member names `member`/`key`/`value` are never stored
    /// here).
    pub fn name(&self, id: ShapeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Record a shape or member's human-readable name.
    pub fn set_name(&mut self, id: ShapeId, name: impl Into<String>) {
        let _ = self.names.insert(id, name.into());
    }

    // -- traits ----------------------------------------------------------------------------------

    /// The ordered list of traits applied to `id`, most recently appended last.
    pub fn traits(&self, id: ShapeId) -> &[(ShapeId, TraitValue)] {
        self.traits.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `id` has the trait `trait_id` applied.
    pub fn has_trait(&self, id: ShapeId, trait_id: ShapeId) -> bool {
        self.traits(id).iter().any(|(t, _)| *t == trait_id)
    }

    /// The payload of the first occurrence of `trait_id` on `id`, if applied.
    pub fn trait_value(&self, id: ShapeId, trait_id: ShapeId) -> Option<&TraitValue> {
        self.traits(id).iter().find(|(t, _)| *t == trait_id).map(|(_, v)| v)
    }

    /// Append a trait occurrence to `id`'s trait list. Used both for a shape's own
    /// `traits` property during parsing and for `apply` merge declarations (spec.md
    /// §4.4): both cases simply append, preserving order, with no deduplication
    /// (spec.md §8).
    pub fn add_trait(&mut self, id: ShapeId, trait_id: ShapeId, value: TraitValue) {
        self.traits.entry(id).or_default().push((trait_id, value));
    }

    // -- mixins ----------------------------------------------------------------------------------

    /// The mixins `id` declares, in declaration order.
    pub fn mixins(&self, id: ShapeId) -> &[ShapeId] {
        self.mixins.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record `id`'s mixin list.
    pub fn set_mixins(&mut self, id: ShapeId, mixins: Vec<ShapeId>) {
        let _ = self.mixins.insert(id, mixins);
    }

    // -- metadata --------------------------------------------------------------------------------

    /// Look up a metadata value by key.
    pub fn metadatum(&self, key: ShapeId) -> Option<&Value> {
        self.metadata.get(&key)
    }

    /// Set a metadata value.
    pub fn add_metadata(&mut self, key: ShapeId, value: Value) {
        let _ = self.metadata.insert(key, value);
    }

    /// Iterate every metadata key.
    pub fn metadata_keys(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.metadata.keys().copied()
    }
}
