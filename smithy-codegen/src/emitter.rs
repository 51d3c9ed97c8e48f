/*!
The shape emitter (spec.md §4.5): walks a model from a root shape, dispatching on shape
kind to drive a [`Builder`].
*/

use crate::builder::{Builder, TypeKind};
use crate::docstring::html_to_markdown;
use crate::hooks::Hooks;
use smithy_casing::{error_variant_name, to_camel_case, to_pascal_case, to_snake_case};
use smithy_symbols::error::{ErrorKind, ErrorSource, Result};
use smithy_symbols::identity::ShapeId;
use smithy_symbols::issues::{Issue, IssueBag};
use smithy_symbols::model::Model;
use smithy_symbols::policy::{EmitPolicy, Resolution};
use smithy_symbols::shapes::{Operation, Resource, Service, Shape};
use smithy_symbols::syntax::{
    PRELUDE_NAMESPACE, TRAIT_CLIENT_OPTIONAL, TRAIT_DEFAULT, TRAIT_DOCUMENTATION, TRAIT_ENUM_VALUE, TRAIT_ERROR, TRAIT_HTTP_ERROR,
    TRAIT_REQUIRED, TRAIT_RETRYABLE, TRAIT_SPARSE, TRAIT_UNIQUE_ITEMS,
};
use std::collections::{HashSet, VecDeque};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Emit `root_id` and every shape it transitively reaches into `out` (spec.md §4.5
/// `writeScript`).
///
pub fn write_script(
    model: &Model,
    out: &mut dyn Builder,
    hooks: &dyn Hooks,
    policy: EmitPolicy,
    issues: &mut IssueBag,
    root_id: ShapeId,
) -> Result<()> {
    hooks.write_script_head(out, model);

    let mut emitter = Emitter {
        model,
        hooks,
        policy,
        issues,
        queue: VecDeque::new(),
        enqueued: HashSet::new(),
        emitted: HashSet::new(),
        service_errors: Vec::new(),
    };
    emitter.enqueue(root_id);
    emitter.run(out)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct Emitter<'a> {
    model: &'a Model,
    hooks: &'a dyn Hooks,
    policy: EmitPolicy,
    issues: &'a mut IssueBag,
    queue: VecDeque<ShapeId>,
    enqueued: HashSet<ShapeId>,
    emitted: HashSet<ShapeId>,
    /// The enclosing service's `errors` list, cached on first `emit_service` (spec.md
    /// §4.5): an operation with no own errors still gets an error union when its service
    /// declares any.
    service_errors: Vec<ShapeId>,
}

impl<'a> Emitter<'a> {
    fn enqueue(&mut self, id: ShapeId) {
        if self.enqueued.insert(id) {
            self.queue.push_back(id);
        }
    }

    fn run(&mut self, out: &mut dyn Builder) -> Result<()> {
        let mut first = true;
        while let Some(id) = self.queue.pop_front() {
            if !self.emitted.insert(id) {
                continue;
            }
            trace!("dequeued shape {:?}", id);
            if let Err(err) = self.emit_shape(out, id, first) {
                let item = self.display_name(id);
                self.route_failure(
                    Issue::CodegenShapeFail { err: err.to_string(), item: item.clone() },
                    self.policy.shape_codegen_fail,
                    ErrorKind::ShapeCodegenFail(item, err.to_string()),
                )?;
            }
            first = false;
        }
        Ok(())
    }

    fn route_failure(&mut self, issue: Issue, resolution: Resolution, fatal: ErrorKind) -> Result<()> {
        if resolution.is_abort() {
            Err(fatal.into())
        } else {
            self.issues.push(issue);
            Ok(())
        }
    }

    fn emit_shape(&mut self, out: &mut dyn Builder, id: ShapeId, is_root: bool) -> Result<()> {
        let shape = match self.model.shape(id) {
            Some(shape) => shape.clone(),
            None => {
                let name_or_id = self.display_name(id);
                return self.route_failure(
                    Issue::CodegenUnknownShape { id: id.as_u32() },
                    self.policy.unknown_shape,
                    ErrorKind::UnknownShape(name_or_id),
                );
            }
        };

        if is_root && shape.is_primitive() && !self.is_enum_constrained_string(id, &shape) {
            let name_or_id = self.display_name(id);
            return self.route_failure(
                Issue::CodegenInvalidRoot { name_or_id: name_or_id.clone() },
                self.policy.invalid_root,
                ErrorKind::InvalidRootShape(name_or_id),
            );
        }

        self.write_docstring(out, id);

        match &shape {
            Shape::List(element) => self.emit_list(out, id, *element),
            Shape::Map([key, value]) => self.emit_map(out, id, *key, *value),
            Shape::StrEnum(members) => self.emit_str_enum(out, id, members),
            Shape::IntEnum(members) => self.emit_int_enum(out, id, members),
            Shape::TaggedUnion(members) => self.emit_tagged_union(out, id, members),
            Shape::Structure(members) => self.emit_structure(out, id, members),
            Shape::Operation(operation) => self.emit_operation(out, id, operation),
            Shape::Resource(resource) => self.emit_resource(out, id, resource),
            Shape::Service(service) => self.emit_service(out, id, service),
            _ => Ok(()),
        }
    }

    fn is_enum_constrained_string(&self, id: ShapeId, shape: &Shape) -> bool {
        matches!(shape, Shape::String) && self.model.has_trait(id, ShapeId::of("smithy.api#enum"))
    }

    // -- names ---------------------------------------------------------------------------------

    fn display_name(&self, id: ShapeId) -> String {
        self.model.name(id).map(str::to_string).unwrap_or_else(|| format!("{:?}", id))
    }

    /// The target-language type name for a member's target: a primitive keyword name
    /// when it targets a primitive, or the enqueued target's own name otherwise
    /// (spec.md §4.5 "Name unwrapping").
    ///
    /// Prelude primitives (`smithy.api#String`, bare `string`, ...) are matched by id
    /// directly rather than through a model lookup: a member that targets one never has
    /// a corresponding entry in the symbol store's `shapes` table, since nothing ever
    /// declares a built-in keyword as a shape (spec.md §3.1, §4.1).
    fn type_name_for(&mut self, target: ShapeId) -> String {
        if let Some(name) = primitive_type_name(target) {
            return name.to_string();
        }
        match self.model.shape(target) {
            Some(Shape::String) | Some(Shape::BigInteger) | Some(Shape::BigDecimal) => "String".to_string(),
            Some(Shape::Blob) => "Vec<u8>".to_string(),
            Some(Shape::Timestamp) => "u64".to_string(),
            Some(Shape::Document) => "serde_json::Value".to_string(),
            Some(Shape::Unit) => "()".to_string(),
            Some(_) => {
                self.enqueue(target);
                to_pascal_case(&self.display_name(target))
            }
            None => {
                self.issues.push(Issue::CodegenUnknownShape { id: target.as_u32() });
                self.enqueue(target);
                format!("Unknown{:?}", target)
            }
        }
    }

    fn write_docstring(&self, out: &mut dyn Builder, id: ShapeId) {
        let doc_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_DOCUMENTATION));
        if let Some(Some(value)) = self.model.trait_value(id, doc_trait) {
            if let Some(html) = value.as_str() {
                out.doc_comment(&html_to_markdown(html));
            }
        }
    }

    // -- list / map ------------------------------------------------------------------------------

    fn emit_list(&mut self, out: &mut dyn Builder, id: ShapeId, element: ShapeId) -> Result<()> {
        let name = to_pascal_case(&self.display_name(id));
        let mut element_ty = self.type_name_for(element);
        if self.model.has_trait(id, ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_SPARSE))) {
            element_ty = format!("Option<{}>", element_ty);
        }
        let alias = if self.model.has_trait(id, ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_UNIQUE_ITEMS))) {
            self.hooks.unique_list_type(self.model, &element_ty)
        } else {
            format!("Vec<{}>", element_ty)
        };
        out.begin_type(TypeKind::Alias(alias), &name);
        Ok(())
    }

    fn emit_map(&mut self, out: &mut dyn Builder, id: ShapeId, key: ShapeId, value: ShapeId) -> Result<()> {
        let name = to_pascal_case(&self.display_name(id));
        let key_ty = self.type_name_for(key);
        let mut value_ty = self.type_name_for(value);
        if self.model.has_trait(id, ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_SPARSE))) {
            value_ty = format!("Option<{}>", value_ty);
        }
        let alias = if key_ty == "String" {
            format!("std::collections::BTreeMap<String, {}>", value_ty)
        } else {
            format!("std::collections::HashMap<{}, {}>", key_ty, value_ty)
        };
        out.begin_type(TypeKind::Alias(alias), &name);
        Ok(())
    }

    // -- enums -----------------------------------------------------------------------------------

    fn emit_str_enum(&mut self, out: &mut dyn Builder, id: ShapeId, members: &[ShapeId]) -> Result<()> {
        let name = to_pascal_case(&self.display_name(id));
        let enum_value_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_ENUM_VALUE));
        let wire_values: Vec<(String, String)> = members
            .iter()
            .map(|member| {
                let variant = to_pascal_case(&self.display_name(*member));
                let wire = self
                    .model
                    .trait_value(*member, enum_value_trait)
                    .and_then(|v| v.as_ref())
                    .and_then(|v| v.as_str())
                    .unwrap_or_else(|| self.model.name(*member).unwrap_or(""))
                    .to_string();
                (variant, wire)
            })
            .collect();

        out.begin_type(TypeKind::TaggedUnion, &name);
        for (variant, _) in &wire_values {
            out.variant(variant, None);
        }
        out.variant("Unknown", Some("String"));
        out.end_type();

        let snake = to_snake_case(&name);
        out.begin_function(&format!("{}_parse", snake), &[("value".to_string(), "&str".to_string())], &name);
        out.begin_match("value");
        for (variant, wire) in &wire_values {
            out.match_arm(&format!("{:?}", wire), &format!("{}::{}", name, variant));
        }
        out.match_arm("other", &format!("{}::Unknown(other.to_string())", name));
        out.end_match();
        out.end_function();

        out.begin_function(&format!("{}_serialize", snake), &[("value".to_string(), format!("&{}", name))], "String");
        out.begin_match("value");
        for (variant, wire) in &wire_values {
            out.match_arm(&format!("{}::{}", name, variant), &format!("{:?}.to_string()", wire));
        }
        out.match_arm(&format!("{}::Unknown(raw)", name), "raw.clone()");
        out.end_match();
        out.end_function();
        Ok(())
    }

    fn emit_int_enum(&mut self, out: &mut dyn Builder, id: ShapeId, members: &[ShapeId]) -> Result<()> {
        let name = to_pascal_case(&self.display_name(id));
        let enum_value_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_ENUM_VALUE));
        let wire_values: Vec<(String, i64)> = members
            .iter()
            .map(|member| {
                let variant = to_pascal_case(&self.display_name(*member));
                let wire = self
                    .model
                    .trait_value(*member, enum_value_trait)
                    .and_then(|v| v.as_ref())
                    .and_then(|v| v.as_i64())
                    .unwrap_or(0);
                (variant, wire)
            })
            .collect();

        out.begin_type(TypeKind::IntEnum, &name);
        for (variant, wire) in &wire_values {
            out.variant(variant, None);
            out.statement(&format!("// {} = {}", variant, wire));
        }
        out.variant("Unknown", Some("i32"));
        out.end_type();

        let snake = to_snake_case(&name);
        out.begin_function(&format!("{}_from_int", snake), &[("value".to_string(), "i32".to_string())], &name);
        out.begin_match("value");
        for (variant, wire) in &wire_values {
            out.match_arm(&wire.to_string(), &format!("{}::{}", name, variant));
        }
        out.match_arm("other", &format!("{}::Unknown(other)", name));
        out.end_match();
        out.end_function();

        out.begin_function(&format!("{}_to_int", snake), &[("value".to_string(), format!("&{}", name))], "i32");
        out.begin_match("value");
        for (variant, wire) in &wire_values {
            out.match_arm(&format!("{}::{}", name, variant), &wire.to_string());
        }
        out.match_arm(&format!("{}::Unknown(raw)", name), "*raw");
        out.end_match();
        out.end_function();
        Ok(())
    }

    fn emit_tagged_union(&mut self, out: &mut dyn Builder, id: ShapeId, members: &[ShapeId]) -> Result<()> {
        let name = to_pascal_case(&self.display_name(id));
        out.begin_type(TypeKind::TaggedUnion, &name);
        for member in members {
            let variant = to_pascal_case(&self.display_name(*member));
            let target = self.member_target(*member);
            let payload = match target.and_then(|t| self.model.shape(t)) {
                Some(Shape::Unit) | None => None,
                Some(_) => {
                    let ty = self.type_name_for(target.unwrap());
                    Some(ty)
                }
            };
            out.variant(&variant, payload.as_deref());
        }
        out.end_type();
        Ok(())
    }

    // -- structure ---------------------------------------------------------------------------------

    fn emit_structure(&mut self, out: &mut dyn Builder, id: ShapeId, own_members: &[ShapeId]) -> Result<()> {
        let name = to_pascal_case(&self.display_name(id));
        let is_operation_input = self.is_operation_input(id);
        let is_error = self.model.has_trait(id, ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_ERROR)));

        out.begin_type(TypeKind::Struct, &name);
        for member in self.all_members(id, own_members) {
            self.emit_structure_field(out, member, is_operation_input);
        }
        out.end_type();

        if is_error {
            self.emit_error_side_constants(out, id, &name);
            self.hooks.write_error_shape(out, self.model, id);
        }
        Ok(())
    }

    /// `source`, `code`, `retryable` for a structure carrying the `error` trait (spec.md
    /// §4.5): `source` comes from the `error` trait's own value, `code` from `httpError`
    /// if present else 400/500 by source, `retryable` from the presence of the
    /// `retryable` trait.
    fn emit_error_side_constants(&mut self, out: &mut dyn Builder, id: ShapeId, name: &str) {
        let error_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_ERROR));
        let http_error_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_HTTP_ERROR));
        let retryable_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_RETRYABLE));

        let source = self
            .model
            .trait_value(id, error_trait)
            .and_then(|v| v.as_ref())
            .and_then(|v| v.as_str())
            .and_then(|s| ErrorSource::from_str(s).ok())
            .unwrap_or(ErrorSource::Server);

        let code = self
            .model
            .trait_value(id, http_error_trait)
            .and_then(|v| v.as_ref())
            .and_then(|v| v.as_i64())
            .unwrap_or(match source {
                ErrorSource::Client => 400,
                ErrorSource::Server => 500,
            });

        let retryable = self.model.has_trait(id, retryable_trait);

        let snake = to_snake_case(name);
        out.constant(&format!("{}_SOURCE", snake.to_uppercase()), "&str", &format!("{:?}", source.to_string()));
        out.constant(&format!("{}_CODE", snake.to_uppercase()), "u16", &code.to_string());
        out.constant(&format!("{}_RETRYABLE", snake.to_uppercase()), "bool", &retryable.to_string());
    }

    /// Depth-first mixin members (in declaration order) followed by the structure's own
    /// members (spec.md §4.5).
    fn all_members(&self, id: ShapeId, own_members: &[ShapeId]) -> Vec<ShapeId> {
        let mut result = Vec::new();
        for mixin in self.model.mixins(id) {
            if let Some(Shape::Structure(mixin_members)) = self.model.shape(*mixin) {
                result.extend(self.all_members(*mixin, mixin_members));
            }
        }
        result.extend_from_slice(own_members);
        result
    }

    fn emit_structure_field(&mut self, out: &mut dyn Builder, member: ShapeId, is_operation_input: bool) {
        let field_name = to_snake_case(self.model.name(member).unwrap_or("field"));
        let target = self.member_target(member).unwrap_or_default();
        let ty = self.type_name_for(target);

        let required_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_REQUIRED));
        let default_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_DEFAULT));
        let client_optional_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_CLIENT_OPTIONAL));

        let has_default = self.model.has_trait(member, default_trait);
        let required = !is_operation_input
            && (self.model.has_trait(member, required_trait) || has_default)
            && !self.model.has_trait(member, client_optional_trait);

        if required {
            let default_literal = has_default.then(|| self.default_literal(member, default_trait, target));
            out.field(&field_name, &ty, default_literal.flatten().as_deref());
        } else {
            out.field(&field_name, &format!("Option<{}>", ty), Some("None"));
        }
    }

    /// The default-value literal for a required field carrying the `default` trait: a
    /// `from_int` call for an `intEnum` target, a parsed variant for a `strEnum` target,
    /// otherwise the trait value's own literal form (spec.md §4.5 "Member optionality
    /// rule").
    fn default_literal(&self, member: ShapeId, default_trait: ShapeId, target: ShapeId) -> Option<String> {
        let value = self.model.trait_value(member, default_trait).and_then(|v| v.as_ref())?;
        match self.model.shape(target) {
            Some(Shape::IntEnum(_)) => {
                let name = to_pascal_case(self.model.name(target).unwrap_or("target"));
                let wire = value.as_i64().unwrap_or(0);
                Some(format!("{}_from_int({})", to_snake_case(&name), wire))
            }
            Some(Shape::StrEnum(_)) => {
                let name = to_pascal_case(self.model.name(target).unwrap_or("target"));
                let wire = value.as_str().unwrap_or("");
                Some(format!("{}_parse({:?})", to_snake_case(&name), wire))
            }
            _ => Some(match value {
                smithy_symbols::value::Value::Boolean(b) => b.to_string(),
                smithy_symbols::value::Value::Integer(n) => n.to_string(),
                smithy_symbols::value::Value::Float(f) => f.to_string(),
                smithy_symbols::value::Value::String(s) => format!("{:?}.to_string()", s),
                _ => "Default::default()".to_string(),
            }),
        }
    }

    fn member_target(&self, member: ShapeId) -> Option<ShapeId> {
        match self.model.shape(member) {
            Some(Shape::Target(target)) => Some(*target),
            _ => None,
        }
    }

    fn is_operation_input(&self, id: ShapeId) -> bool {
        self.model.shape_ids().any(|candidate| {
            matches!(self.model.shape(candidate), Some(Shape::Operation(op)) if op.input == Some(id))
        })
    }

    // -- operation ---------------------------------------------------------------------------------

    fn emit_operation(&mut self, out: &mut dyn Builder, id: ShapeId, operation: &Operation) -> Result<()> {
        if let Some(input) = operation.input {
            self.enqueue(input);
        }
        if let Some(output) = operation.output {
            self.enqueue(output);
        }
        for error in &operation.errors {
            self.enqueue(*error);
        }

        let method_name = to_camel_case(&self.display_name(id));
        let returns = self.hooks.operation_return_type(self.model, operation);
        let input_ty = operation.input.map(|i| to_pascal_case(self.model.name(i).unwrap_or("Input")));
        let args = match &input_ty {
            Some(ty) => vec![("self".to_string(), String::new()), ("input".to_string(), ty.clone())],
            None => vec![("self".to_string(), String::new())],
        };
        out.begin_function(&method_name, &args, &returns);
        self.hooks.write_operation_body(out, self.model, id, operation);
        out.end_function();

        if !operation.errors.is_empty() || !self.service_errors.is_empty() {
            let mut errors = operation.errors.clone();
            for error in &self.service_errors {
                if !errors.contains(error) {
                    errors.push(*error);
                }
            }
            for error in &errors {
                self.enqueue(*error);
            }
            self.emit_error_union(out, id, &errors);
        }
        Ok(())
    }

    fn emit_error_union(&mut self, out: &mut dyn Builder, owner: ShapeId, errors: &[ShapeId]) {
        let union_name = format!("{}Errors", to_pascal_case(&self.display_name(owner)));
        out.begin_type(TypeKind::TaggedUnion, &union_name);
        for error in errors {
            let variant = to_pascal_case(&error_variant_name(self.model.name(*error).unwrap_or("Error")));
            out.variant(&variant, Some(&to_pascal_case(self.model.name(*error).unwrap_or("Error"))));
        }
        out.end_type();
    }

    // -- resource ----------------------------------------------------------------------------------

    fn emit_resource(&mut self, out: &mut dyn Builder, id: ShapeId, resource: &Resource) -> Result<()> {
        self.hooks.write_resource_head(out, self.model, id, resource);

        let name = to_pascal_case(&self.display_name(id));
        out.begin_type(TypeKind::Struct, &name);
        for (identifier_name, target) in &resource.identifiers {
            let ty = self.type_name_for(*target);
            out.field(&to_snake_case(identifier_name), &ty, None);
        }
        out.end_type();

        for lifecycle in [resource.create, resource.put, resource.read, resource.update, resource.delete, resource.list]
            .into_iter()
            .flatten()
        {
            self.enqueue(*lifecycle);
        }
        for operation in resource.operations.iter().chain(resource.collection_operations.iter()) {
            self.enqueue(*operation);
        }
        for child in &resource.resources {
            self.enqueue(*child);
        }
        Ok(())
    }

    // -- service -----------------------------------------------------------------------------------

    fn emit_service(&mut self, out: &mut dyn Builder, id: ShapeId, service: &Service) -> Result<()> {
        self.hooks.write_service_head(out, self.model, id, service);

        let name = to_pascal_case(&self.display_name(id));
        out.begin_type(TypeKind::Struct, &name);
        out.end_type();

        self.service_errors = service.errors.clone();

        for operation in &service.operations {
            self.enqueue(*operation);
        }
        for resource in &service.resources {
            self.enqueue(*resource);
        }
        for error in &service.errors {
            self.enqueue(*error);
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

/// The Rust type for a Smithy built-in type keyword, matched by id rather than by
/// string since a `ShapeId` carries no name of its own (spec.md §9 "Shape identity").
fn primitive_type_name(id: ShapeId) -> Option<&'static str> {
    if id == ShapeId::of("boolean") {
        Some("bool")
    } else if id == ShapeId::of("byte") {
        Some("i8")
    } else if id == ShapeId::of("short") {
        Some("i16")
    } else if id == ShapeId::of("integer") {
        Some("i32")
    } else if id == ShapeId::of("long") {
        Some("i64")
    } else if id == ShapeId::of("float") {
        Some("f32")
    } else if id == ShapeId::of("double") {
        Some("f64")
    } else if id == ShapeId::of("string") {
        Some("String")
    } else if id == ShapeId::of("blob") {
        Some("Vec<u8>")
    } else if id == ShapeId::of("bigInteger") || id == ShapeId::of("bigDecimal") {
        Some("String")
    } else if id == ShapeId::of("timestamp") {
        Some("u64")
    } else if id == ShapeId::of("document") {
        Some("serde_json::Value")
    } else if id == ShapeId::of("unitType") {
        Some("()")
    } else {
        None
    }
}
