/*!
Emitter extension points (spec.md §6.5). All but [`Hooks::write_error_shape`] and
[`Hooks::write_operation_body`] have a default no-op/best-effort implementation; a caller
implements only what it needs to customize.
*/

use crate::builder::Builder;
use smithy_symbols::identity::ShapeId;
use smithy_symbols::model::Model;
use smithy_symbols::shapes::{Operation, Resource, Service};

///
/// Hooks an emitter caller plugs in to customize the shapes of generated source
/// (spec.md §6.5). A hook receives the `Model` so it can look up traits or names beyond
/// what the emitter already passes positionally.
///
pub trait Hooks {
    /// Called once, before any shape is emitted.
    fn write_script_head(&self, _out: &mut dyn Builder, _model: &Model) {}

    /// Called once per `service` shape, before its operations/resources are emitted.
    fn write_service_head(&self, _out: &mut dyn Builder, _model: &Model, _id: ShapeId, _service: &Service) {}

    /// Called once per `resource` shape, before its lifecycle methods are emitted.
    fn write_resource_head(&self, _out: &mut dyn Builder, _model: &Model, _id: ShapeId, _resource: &Resource) {}

    /// Emit the side-constants for a structure carrying the `error` trait (spec.md §4.5):
    /// `source`, `code`, `retryable`. Required — there is no sensible default rendering.
    fn write_error_shape(&self, out: &mut dyn Builder, model: &Model, id: ShapeId);

    /// Emit an operation's method body. Required — the emitter has no opinion on what an
    /// operation actually does at runtime.
    fn write_operation_body(&self, out: &mut dyn Builder, model: &Model, id: ShapeId, operation: &Operation);

    /// The return type of an operation's generated method; defaults to the output
    /// shape's emitted name, or `()` when the operation has no output.
    fn operation_return_type(&self, model: &Model, operation: &Operation) -> String {
        match operation.output {
            Some(output) => model.name(output).unwrap_or("()").to_string(),
            None => "()".to_string(),
        }
    }

    /// The target-language type used for a `list` shape carrying `uniqueItems`; defaults
    /// to a `BTreeSet`.
    fn unique_list_type(&self, _model: &Model, element_ty: &str) -> String {
        format!("std::collections::BTreeSet<{}>", element_ty)
    }
}
