/*!
The Smithy JSON AST parser (spec.md §4.4): consumes `{ smithy, metadata?, shapes? }` and
populates a [`Model`].
*/

use smithy_symbols::error::{ErrorKind, Result};
use smithy_symbols::identity::{is_primitive_alias, ShapeId, SmithyProperty};
use smithy_symbols::issues::{Issue, IssueBag};
use smithy_symbols::model::Model;
use smithy_symbols::policy::{ParsePolicy, Resolution};
use smithy_symbols::reader::{JsonReader, ScopeItem};
use smithy_symbols::registry::TraitRegistry;
use smithy_symbols::shapes::{Operation, Resource, Service, Shape};
use smithy_symbols::syntax::TRAIT_DEFAULT;
use smithy_symbols::value::Value;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Parse a Smithy JSON AST document into a [`Model`] (spec.md §4.4).
///
pub fn parse_json(
    registry: &TraitRegistry,
    policy: ParsePolicy,
    issues: &mut IssueBag,
    reader: &mut dyn JsonReader,
) -> Result<Model> {
    let mut model = Model::new();
    let mut parser = Parser {
        registry,
        policy,
        issues,
        model: &mut model,
    };
    parser.parse_document(reader)?;
    Ok(model)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct Parser<'a> {
    registry: &'a TraitRegistry,
    policy: ParsePolicy,
    issues: &'a mut IssueBag,
    model: &'a mut Model,
}

impl<'a> Parser<'a> {
    fn parse_document(&mut self, reader: &mut dyn JsonReader) -> Result<()> {
        reader.next_scope(&mut |item, reader| {
            let key = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("top level is always an object"),
            };
            debug!("parsing top-level key '{}'", key);
            match SmithyProperty::from_key(&key) {
                Some(SmithyProperty::SMITHY) => self.parse_version(reader),
                Some(SmithyProperty::SHAPES) => self.parse_shapes(reader),
                Some(SmithyProperty::METADATA) => self.parse_metadata(reader),
                _ => {
                    self.unexpected_property("<document>", &key)?;
                    reader.skip_value_or_scope()
                }
            }
        })?;
        reader.next_document_end()
    }

    fn parse_version(&mut self, reader: &mut dyn JsonReader) -> Result<()> {
        let v = reader.next_string()?;
        if v == "2.0" || v == "2" {
            Ok(())
        } else {
            Err(ErrorKind::InvalidVersion(v).into())
        }
    }

    fn parse_metadata(&mut self, reader: &mut dyn JsonReader) -> Result<()> {
        reader.next_scope(&mut |item, reader| {
            let key = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("metadata is always an object"),
            };
            let value = reader.read_value()?;
            self.model.add_metadata(ShapeId::of(&key), value);
            Ok(())
        })
    }

    fn parse_shapes(&mut self, reader: &mut dyn JsonReader) -> Result<()> {
        reader.next_scope(&mut |item, reader| {
            let shape_name = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("shapes is always an object"),
            };
            self.parse_shape(&shape_name, reader)
        })
    }

    fn parse_shape(&mut self, shape_name: &str, reader: &mut dyn JsonReader) -> Result<()> {
        let shape_id = ShapeId::of(shape_name);
        let mut builder = ShapeBuilder::new();

        reader.next_scope(&mut |item, reader| {
            let key = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("a shape body is always an object"),
            };
            match SmithyProperty::from_key(&key) {
                Some(SmithyProperty::TYPE) => {
                    builder.kind = Some(reader.next_string()?);
                    Ok(())
                }
                Some(SmithyProperty::TRAITS) => self.parse_traits(shape_id, shape_name, reader),
                Some(SmithyProperty::MIXINS) => self.parse_mixins(shape_id, reader),
                Some(SmithyProperty::MEMBERS) => self.parse_members(shape_id, shape_name, reader, &mut builder),
                Some(SmithyProperty::MEMBER) => {
                    builder.member = Some(self.parse_member(shape_id, shape_name, "member", reader)?);
                    Ok(())
                }
                Some(SmithyProperty::KEY) => {
                    builder.key = Some(self.parse_member(shape_id, shape_name, "key", reader)?);
                    Ok(())
                }
                Some(SmithyProperty::VALUE) => {
                    builder.value = Some(self.parse_member(shape_id, shape_name, "value", reader)?);
                    Ok(())
                }
                _ => self.parse_shape_specific_property(&key, shape_name, reader, &mut builder),
            }
        })?;

        self.finish_shape(shape_id, shape_name, builder)
    }

    fn parse_shape_specific_property(
        &mut self,
        key: &str,
        context: &str,
        reader: &mut dyn JsonReader,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        match SmithyProperty::from_key(key) {
            Some(SmithyProperty::VERSION) => {
                builder.version = Some(reader.next_string()?);
                Ok(())
            }
            Some(SmithyProperty::INPUT) => {
                builder.input = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::OUTPUT) => {
                builder.output = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::ERRORS) => {
                builder.errors = self.read_target_list(reader)?;
                Ok(())
            }
            Some(SmithyProperty::OPERATIONS) => {
                builder.operations = self.read_target_list(reader)?;
                Ok(())
            }
            Some(SmithyProperty::RESOURCES) => {
                builder.resources = self.read_target_list(reader)?;
                Ok(())
            }
            Some(SmithyProperty::COLLECTION_OPERATIONS) => {
                builder.collection_operations = self.read_target_list(reader)?;
                Ok(())
            }
            Some(SmithyProperty::IDENTIFIERS) => {
                builder.identifiers = self.read_named_target_map(reader)?;
                Ok(())
            }
            Some(SmithyProperty::PROPERTIES) => {
                builder.properties = self.read_named_target_map(reader)?;
                Ok(())
            }
            Some(SmithyProperty::RENAME) => {
                builder.rename = self.read_named_target_map(reader)?;
                Ok(())
            }
            Some(SmithyProperty::CREATE) => {
                builder.create = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::PUT) => {
                builder.put = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::READ) => {
                builder.read = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::UPDATE) => {
                builder.update = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::DELETE) => {
                builder.delete = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            Some(SmithyProperty::LIST) => {
                builder.list = Some(reader.read_value()?.get_string_field("target"));
                Ok(())
            }
            _ => {
                self.unexpected_property(context, key)?;
                reader.skip_value_or_scope()
            }
        }
    }

    fn parse_traits(&mut self, shape_id: ShapeId, context: &str, reader: &mut dyn JsonReader) -> Result<()> {
        reader.next_scope(&mut |item, reader| {
            let trait_name = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("traits is always an object"),
            };
            let trait_id = ShapeId::of(&trait_name);
            if self.registry.is_registered(trait_id) {
                let value = self.registry.parse(trait_id, reader)?;
                self.model.add_trait(shape_id, trait_id, value);
                Ok(())
            } else {
                match self.policy.r#trait {
                    Resolution::Skip => {
                        warn!("skipping unknown trait '{}' on '{}'", trait_name, context);
                        self.issues.push(Issue::ParseUnknownTrait {
                            context: context.to_string(),
                            item: trait_name,
                        });
                        reader.skip_value_or_scope()
                    }
                    Resolution::Abort => Err(ErrorKind::PolicyAbort(format!("unknown trait '{}'", trait_name)).into()),
                }
            }
        })
    }

    fn parse_mixins(&mut self, shape_id: ShapeId, reader: &mut dyn JsonReader) -> Result<()> {
        let mixins = self.read_target_list(reader)?;
        self.model.set_mixins(shape_id, mixins);
        Ok(())
    }

    fn parse_members(
        &mut self,
        parent_id: ShapeId,
        parent_name: &str,
        reader: &mut dyn JsonReader,
        builder: &mut ShapeBuilder,
    ) -> Result<()> {
        reader.next_scope(&mut |item, reader| {
            let member_name = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("members is always an object"),
            };
            let member_id = self.parse_member(parent_id, parent_name, &member_name, reader)?;
            builder.members.push((member_name, member_id));
            Ok(())
        })
    }

    /// Parse one `{target, traits?}` member body, binding its id and `target` shape
    /// (spec.md §4.4 "Member ID binding").
    fn parse_member(
        &mut self,
        parent_id: ShapeId,
        parent_name: &str,
        member_name: &str,
        reader: &mut dyn JsonReader,
    ) -> Result<ShapeId> {
        let member_id = ShapeId::compose(parent_name, member_name);
        if !is_reserved_member_name(member_name) {
            self.model.set_name(member_id, member_name.to_string());
        }

        let mut target: Option<String> = None;
        reader.next_scope(&mut |item, reader| {
            let key = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("a member body is always an object"),
            };
            match SmithyProperty::from_key(&key) {
                Some(SmithyProperty::TARGET) => {
                    target = Some(reader.next_string()?);
                    Ok(())
                }
                Some(SmithyProperty::TRAITS) => self.parse_traits(member_id, member_name, reader),
                _ => {
                    self.unexpected_property(member_name, &key)?;
                    reader.skip_value_or_scope()
                }
            }
        })?;

        let target = target
            .ok_or_else(|| ErrorKind::InvalidMemberTarget(parent_id_string(parent_id), member_name.to_string()))?;
        if is_primitive_alias(&target) {
            let default_id = ShapeId::of(TRAIT_DEFAULT);
            self.model.add_trait(member_id, default_id, Some(primitive_alias_zero_value(&target)));
        }
        self.model.add_shape(member_id, Shape::Target(ShapeId::of(&target)));
        Ok(member_id)
    }

    fn read_target_list(&mut self, reader: &mut dyn JsonReader) -> Result<Vec<ShapeId>> {
        let mut ids = Vec::new();
        reader.next_scope(&mut |_item, reader| {
            let value = reader.read_value()?;
            ids.push(ShapeId::of(&value.get_string_field("target")));
            Ok(())
        })?;
        Ok(ids)
    }

    fn read_named_target_map(&mut self, reader: &mut dyn JsonReader) -> Result<Vec<(String, ShapeId)>> {
        let mut out = Vec::new();
        reader.next_scope(&mut |item, reader| {
            let name = match item {
                ScopeItem::ObjectProperty(key) => key.to_string(),
                ScopeItem::ArrayElement(_) => unreachable!("a named target map is always an object"),
            };
            let value = reader.read_value()?;
            out.push((name, ShapeId::of(&value.get_string_field("target"))));
            Ok(())
        })?;
        Ok(out)
    }

    fn unexpected_property(&mut self, context: &str, item: &str) -> Result<()> {
        match self.policy.property {
            Resolution::Skip => {
                warn!("skipping unexpected property '{}' on '{}'", item, context);
                self.issues.push(Issue::ParseUnexpectedProp {
                    context: context.to_string(),
                    item: item.to_string(),
                });
                Ok(())
            }
            Resolution::Abort => Err(ErrorKind::PolicyAbort(format!("unexpected property '{}' on '{}'", item, context)).into()),
        }
    }

    fn finish_shape(&mut self, shape_id: ShapeId, shape_name: &str, builder: ShapeBuilder) -> Result<()> {
        let kind = match &builder.kind {
            Some(k) => k.as_str(),
            None => return Err(ErrorKind::InvalidShapeProperty(shape_name.to_string(), "type".to_string()).into()),
        };

        if kind == "apply" {
            // `apply` is merge-only: its traits were already appended during
            // `parse_traits` against `shape_id`; there is no shape body to store.
            return Ok(());
        }

        self.model.set_name(shape_id, shape_name_suffix(shape_name));

        let shape = match kind {
            "blob" => Shape::Blob,
            "boolean" => Shape::Boolean,
            "string" => Shape::String,
            "byte" => Shape::Byte,
            "short" => Shape::Short,
            "integer" => Shape::Integer,
            "long" => Shape::Long,
            "float" => Shape::Float,
            "double" => Shape::Double,
            "bigInteger" => Shape::BigInteger,
            "bigDecimal" => Shape::BigDecimal,
            "timestamp" => Shape::Timestamp,
            "document" => Shape::Document,
            "enum" => Shape::StrEnum(builder.members.iter().map(|(_, id)| *id).collect()),
            "intEnum" => Shape::IntEnum(builder.members.iter().map(|(_, id)| *id).collect()),
            "list" => {
                let member = builder
                    .member
                    .ok_or_else(|| ErrorKind::InvalidShapeProperty(shape_name.to_string(), "member".to_string()))?;
                Shape::List(member)
            }
            "map" => {
                let key = builder
                    .key
                    .ok_or_else(|| ErrorKind::InvalidShapeProperty(shape_name.to_string(), "key".to_string()))?;
                let value = builder
                    .value
                    .ok_or_else(|| ErrorKind::InvalidShapeProperty(shape_name.to_string(), "value".to_string()))?;
                Shape::Map([key, value])
            }
            "structure" => Shape::Structure(builder.members.iter().map(|(_, id)| *id).collect()),
            "union" => Shape::TaggedUnion(builder.members.iter().map(|(_, id)| *id).collect()),
            "operation" => Shape::Operation(Operation {
                input: builder.input.map(|t| ShapeId::of(&t)),
                output: builder.output.map(|t| ShapeId::of(&t)),
                errors: builder.errors,
            }),
            "resource" => Shape::Resource(Box::new(Resource {
                identifiers: builder.identifiers,
                properties: builder.properties,
                create: builder.create.map(|t| ShapeId::of(&t)),
                put: builder.put.map(|t| ShapeId::of(&t)),
                read: builder.read.map(|t| ShapeId::of(&t)),
                update: builder.update.map(|t| ShapeId::of(&t)),
                delete: builder.delete.map(|t| ShapeId::of(&t)),
                list: builder.list.map(|t| ShapeId::of(&t)),
                operations: builder.operations,
                collection_operations: builder.collection_operations,
                resources: builder.resources,
            })),
            "service" => {
                self.model.set_service_id(shape_id);
                Shape::Service(Box::new(Service {
                    version: builder.version,
                    operations: builder.operations,
                    resources: builder.resources,
                    errors: builder.errors,
                    rename: builder.rename,
                }))
            }
            other => return Err(ErrorKind::UnknownType(other.to_string()).into()),
        };

        self.model.add_shape(shape_id, shape);
        Ok(())
    }
}

/// Accumulates a shape's properties as they arrive, in whatever order the document uses,
/// before `finish_shape` assembles the final `Shape` (spec.md doesn't mandate property
/// order within a shape object).
#[derive(Default)]
struct ShapeBuilder {
    kind: Option<String>,
    members: Vec<(String, ShapeId)>,
    member: Option<ShapeId>,
    key: Option<ShapeId>,
    value: Option<ShapeId>,
    version: Option<String>,
    input: Option<String>,
    output: Option<String>,
    errors: Vec<ShapeId>,
    operations: Vec<ShapeId>,
    resources: Vec<ShapeId>,
    collection_operations: Vec<ShapeId>,
    identifiers: Vec<(String, ShapeId)>,
    properties: Vec<(String, ShapeId)>,
    rename: Vec<(String, ShapeId)>,
    create: Option<String>,
    put: Option<String>,
    read: Option<String>,
    update: Option<String>,
    delete: Option<String>,
    list: Option<String>,
}

impl ShapeBuilder {
    fn new() -> Self {
        Self::default()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn is_reserved_member_name(name: &str) -> bool {
    matches!(name, "member" | "key" | "value")
}

fn shape_name_suffix(absolute_name: &str) -> String {
    match absolute_name.rsplit_once('#') {
        Some((_, name)) => name.to_string(),
        None => absolute_name.to_string(),
    }
}

fn parent_id_string(id: ShapeId) -> String {
    format!("{:?}", id)
}

/// The type-appropriate zero value synthesized for a `Primitive*` prelude alias member
/// (spec.md §3.3). `smithy.api#Primitive` has already been stripped off by the caller's
/// `is_primitive_alias` check; only the suffix distinguishes the zero value.
fn primitive_alias_zero_value(alias: &str) -> Value {
    match alias.strip_prefix("smithy.api#Primitive") {
        Some("Boolean") => Value::Boolean(false),
        Some("Byte") | Some("Short") | Some("Integer") | Some("Long") => Value::Integer(0),
        Some("Float") | Some("Double") => Value::Float(0.0),
        _ => Value::Integer(0),
    }
}

trait ValueExt {
    fn get_string_field(&self, key: &str) -> String;
}

impl ValueExt for Value {
    fn get_string_field(&self, key: &str) -> String {
        self.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
    }
}
