#![cfg(all(feature = "json", feature = "codegen"))]

use smithy_lib::codegen::builder::{Builder, RustSource, TypeKind};
use smithy_lib::codegen::emitter::write_script;
use smithy_lib::codegen::hooks::Hooks;
use smithy_lib::json::parser::parse_json;
use smithy_lib::json::tokenizer::JsonTokenizer;
use smithy_lib::symbols::identity::ShapeId;
use smithy_lib::symbols::issues::IssueBag;
use smithy_lib::symbols::model::Model;
use smithy_lib::symbols::policy::EmitPolicy;
use smithy_lib::symbols::registry::TraitRegistry;
use smithy_lib::symbols::shapes::Operation;
use smithy_test_support::examples::message_of_the_day::message_of_the_day_json;

struct NoopHooks;

impl Hooks for NoopHooks {
    fn write_error_shape(&self, out: &mut dyn Builder, _model: &Model, _id: ShapeId) {
        out.statement("// error shape");
    }

    fn write_operation_body(&self, out: &mut dyn Builder, _model: &Model, _id: ShapeId, _operation: &Operation) {
        out.statement("unimplemented!()");
    }
}

#[test]
fn json_and_codegen_features_compose_through_the_facade() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut parse_issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    let model = parse_json(&registry, Default::default(), &mut parse_issues, &mut reader).unwrap();
    assert!(parse_issues.is_empty());

    let mut out = RustSource::new();
    let mut emit_issues = IssueBag::new();
    write_script(&model, &mut out, &NoopHooks, EmitPolicy::default(), &mut emit_issues, model.service_id()).unwrap();

    let source = out.finish();
    assert!(source.contains("pub struct MessageOfTheDay"));
    assert!(source.contains("pub struct BadDateValue"));
    assert!(source.contains("BAD_DATE_VALUE_SOURCE"));
    assert!(source.contains("BAD_DATE_VALUE_CODE"));
    assert!(source.contains("BAD_DATE_VALUE_RETRYABLE"));
    assert!(emit_issues.is_empty());
}

#[test]
fn casing_is_re_exported_at_the_crate_root() {
    assert_eq!(smithy_lib::casing::to_snake_case("GetMessage"), "get_message");
}

#[test]
fn builder_can_be_driven_directly_through_the_facade() {
    let mut out = RustSource::new();
    out.begin_type(TypeKind::Struct, "Scratch");
    out.field("value", "i32", None);
    out.end_type();
    assert!(out.finish().contains("pub struct Scratch"));
}
