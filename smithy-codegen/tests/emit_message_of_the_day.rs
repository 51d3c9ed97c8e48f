use smithy_codegen::builder::{Builder, RustSource};
use smithy_codegen::emitter::write_script;
use smithy_codegen::hooks::Hooks;
use smithy_codegen::readme::{render_readme, ReadmeContext};
use smithy_json::parser::parse_json;
use smithy_json::tokenizer::JsonTokenizer;
use smithy_symbols::identity::ShapeId;
use smithy_symbols::issues::IssueBag;
use smithy_symbols::model::Model;
use smithy_symbols::policy::EmitPolicy;
use smithy_symbols::registry::TraitRegistry;
use smithy_symbols::shapes::Operation;
use smithy_test_support::examples::message_of_the_day::message_of_the_day_json;

struct TestHooks;

impl Hooks for TestHooks {
    fn write_error_shape(&self, out: &mut dyn Builder, _model: &Model, _id: ShapeId) {
        out.statement("// error shape side-constants would go here");
    }

    fn write_operation_body(&self, out: &mut dyn Builder, _model: &Model, _id: ShapeId, _operation: &Operation) {
        out.statement("unimplemented!()");
    }
}

fn build_model() -> Model {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    parse_json(&registry, Default::default(), &mut issues, &mut reader).unwrap()
}

#[test]
fn emits_the_service_resource_and_operation_structures() {
    let model = build_model();
    let mut out = RustSource::new();
    let mut issues = IssueBag::new();

    write_script(&model, &mut out, &TestHooks, EmitPolicy::default(), &mut issues, model.service_id()).unwrap();

    let source = out.finish();
    assert!(source.contains("pub struct MessageOfTheDay"), "{}", source);
    assert!(source.contains("pub struct Message"), "{}", source);
    assert!(source.contains("pub struct GetMessageInput"), "{}", source);
    assert!(source.contains("pub struct GetMessageOutput"), "{}", source);
    assert!(source.contains("pub struct BadDateValue"), "{}", source);
    assert!(source.contains("pub fn getMessage"), "{}", source);
    assert!(source.contains("BAD_DATE_VALUE_SOURCE"), "{}", source);
    assert!(source.contains("BAD_DATE_VALUE_CODE"), "{}", source);
    assert!(source.contains("BAD_DATE_VALUE_RETRYABLE"), "{}", source);
    assert!(issues.is_empty());
}

#[test]
fn invalid_root_shape_is_routed_through_policy() {
    let model = build_model();
    let mut out = RustSource::new();
    let mut issues = IssueBag::new();
    let date_shape = ShapeId::of("example.motd#Date");

    let result = write_script(&model, &mut out, &TestHooks, EmitPolicy::strict(), &mut issues, date_shape);
    assert!(result.is_err());

    let mut issues = IssueBag::new();
    write_script(&model, &mut out, &TestHooks, EmitPolicy::lenient(), &mut issues, date_shape).unwrap();
    assert_eq!(issues.len(), 1);
}

#[test]
fn readme_renders_the_service_documentation() {
    let model = build_model();
    let context = ReadmeContext::from_service(&model, model.service_id(), "motd");

    let rendered = render_readme(&context).unwrap();
    assert!(rendered.contains("Message of the day"));
    assert!(rendered.contains("motd"));
}
