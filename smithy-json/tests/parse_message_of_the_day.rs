use smithy_json::parser::parse_json;
use smithy_json::tokenizer::JsonTokenizer;
use smithy_symbols::identity::ShapeId;
use smithy_symbols::issues::{Issue, IssueBag};
use smithy_symbols::policy::ParsePolicy;
use smithy_symbols::registry::TraitRegistry;
use smithy_symbols::shapes::Shape;
use smithy_test_support::examples::message_of_the_day::message_of_the_day_json;

#[test]
fn parses_service_and_sets_service_id() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());

    let model = parse_json(&registry, ParsePolicy::default(), &mut issues, &mut reader).unwrap();

    let service_id = ShapeId::of("example.motd#MessageOfTheDay");
    assert_eq!(model.service_id(), service_id);
    match model.shape(service_id) {
        Some(Shape::Service(service)) => {
            assert_eq!(service.version.as_deref(), Some("2020-06-21"));
            assert_eq!(service.resources, vec![ShapeId::of("example.motd#Message")]);
        }
        other => panic!("expected a service shape, found {:?}", other),
    }
}

#[test]
fn parses_resource_lifecycle_binding() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    let model = parse_json(&registry, ParsePolicy::default(), &mut issues, &mut reader).unwrap();

    let resource_id = ShapeId::of("example.motd#Message");
    match model.shape(resource_id) {
        Some(Shape::Resource(resource)) => {
            assert_eq!(resource.read, Some(ShapeId::of("example.motd#GetMessage")));
            assert_eq!(
                resource.identifiers,
                vec![("date".to_string(), ShapeId::of("example.motd#Date"))]
            );
        }
        other => panic!("expected a resource shape, found {:?}", other),
    }
}

#[test]
fn required_member_carries_required_trait() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    let model = parse_json(&registry, ParsePolicy::default(), &mut issues, &mut reader).unwrap();

    let member_id = ShapeId::compose("example.motd#GetMessageOutput", "message");
    let required_trait = ShapeId::of("smithy.api#required");
    assert!(model.has_trait(member_id, required_trait));
    assert_eq!(model.name(member_id), Some("message"));
}

#[test]
fn error_structure_carries_error_trait_value() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    let model = parse_json(&registry, ParsePolicy::default(), &mut issues, &mut reader).unwrap();

    let error_id = ShapeId::of("example.motd#BadDateValue");
    let error_trait = ShapeId::of("smithy.api#error");
    let value = model.trait_value(error_id, error_trait).unwrap().as_ref().unwrap();
    assert_eq!(value.as_str(), Some("client"));
}

#[test]
fn unregistered_traits_are_recorded_as_issues_under_lenient_policy() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    let _ = parse_json(&registry, ParsePolicy::lenient(), &mut issues, &mut reader).unwrap();

    let unknown_trait_issues: Vec<&Issue> = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::ParseUnknownTrait { .. }))
        .collect();
    // `smithy.api#readonly` and `smithy.api#pattern` have no registered parser.
    assert_eq!(unknown_trait_issues.len(), 2);
}

#[test]
fn strict_trait_policy_aborts_on_unregistered_trait() {
    let registry = TraitRegistry::with_builtin_traits();
    let mut issues = IssueBag::new();
    let mut reader = JsonTokenizer::new(message_of_the_day_json());
    let result = parse_json(&registry, ParsePolicy::strict(), &mut issues, &mut reader);
    assert!(result.is_err());
}
