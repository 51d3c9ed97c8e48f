use smithy_json::tokenizer::JsonTokenizer;
use smithy_rules::generator::{generate_resolver, generate_tests, Expected, TestCase};
use smithy_rules::model::{ArgValue, ParamType, Rule};
use smithy_rules::parser::parse_rule_set;
use smithy_test_support::examples::endpoint_rules::endpoint_rules_json;

#[test]
fn parses_parameters_with_builtin_and_default() {
    let mut reader = JsonTokenizer::new(endpoint_rules_json());
    let rule_set = parse_rule_set(&mut reader).unwrap();

    assert_eq!(rule_set.parameters.len(), 2);
    let (name, region) = &rule_set.parameters[0];
    assert_eq!(name, "Region");
    assert_eq!(region.built_in.as_deref(), Some("AWS::Region"));
    assert!(region.required);
    assert!(matches!(&region.param_type, ParamType::String(None)));

    let (name, use_fips) = &rule_set.parameters[1];
    assert_eq!(name, "UseFips");
    assert!(matches!(use_fips.param_type, ParamType::Boolean(Some(false))));
}

#[test]
fn disambiguates_tree_endpoint_and_error_rules_by_explicit_type() {
    let mut reader = JsonTokenizer::new(endpoint_rules_json());
    let rule_set = parse_rule_set(&mut reader).unwrap();

    assert_eq!(rule_set.rules.len(), 2);
    match &rule_set.rules[0] {
        Rule::Tree { conditions, rules, .. } => {
            assert_eq!(conditions.len(), 1);
            assert_eq!(conditions[0].function, "isSet");
            assert_eq!(rules.len(), 2);
            assert!(matches!(rules[0], Rule::Endpoint { .. }));
            assert!(matches!(rules[1], Rule::Endpoint { .. }));
        }
        other => panic!("expected a tree rule, found {:?}", other),
    }
    assert!(matches!(&rule_set.rules[1], Rule::Error { .. }));
}

#[test]
fn rejects_an_empty_rule_list() {
    let mut reader = JsonTokenizer::new(r#"{"version": "1.0", "parameters": {}, "rules": []}"#);
    let result = parse_rule_set(&mut reader);
    assert!(result.is_err());
}

#[test]
fn generates_a_resolver_function_with_parameter_bindings_and_rule_bodies() {
    let mut reader = JsonTokenizer::new(endpoint_rules_json());
    let rule_set = parse_rule_set(&mut reader).unwrap();

    let generated = generate_resolver("resolve_endpoint", "Config", &rule_set).unwrap();

    assert!(generated.contains("fn resolve_endpoint(config: &Config)"));
    assert!(generated.contains("let region: String = config.region.clone().or_else(|| builtin_"));
    assert!(generated.contains("let use_fips: bool = config.use_fips.clone().unwrap_or_else(|| false);"));
    assert!(generated.contains("'pass1: loop"));
    assert!(generated.contains("region.is_some()"));
    assert!(generated.contains("return Ok(format!("));
    assert!(generated.contains("return Err(ReachedErrorRule);"));
}

#[test]
fn required_parameter_with_no_builtin_or_default_is_a_generation_error() {
    let mut reader = JsonTokenizer::new(
        r#"{
            "version": "1.0",
            "parameters": {
                "Bare": {"type": "string", "required": true}
            },
            "rules": [
                {"type": "error", "conditions": [], "error": "unreachable"}
            ]
        }"#,
    );
    let rule_set = parse_rule_set(&mut reader).unwrap();
    let result = generate_resolver("resolve_endpoint", "Config", &rule_set);
    assert!(result.is_err());
}

#[test]
fn generated_resolver_guards_its_error_rule_with_is_test() {
    let mut reader = JsonTokenizer::new(endpoint_rules_json());
    let rule_set = parse_rule_set(&mut reader).unwrap();

    let generated = generate_resolver("resolve_endpoint", "Config", &rule_set).unwrap();

    assert!(generated.contains("const IS_TEST: bool = cfg!(test);"));
    assert!(generated.contains("if !IS_TEST {"));
    assert!(generated.contains("log::error!(\"no region was provided\");"));
}

#[test]
fn generates_tests_covering_both_endpoint_and_error_outcomes() {
    let cases = [
        TestCase {
            name: "resolves_the_fips_endpoint".to_string(),
            config: vec![
                ("Region".to_string(), ArgValue::String("us-east-1".to_string())),
                ("UseFips".to_string(), ArgValue::Boolean(true)),
            ],
            expected: Expected::Endpoint("https://example-fips.us-east-1.amazonaws.com".to_string()),
        },
        TestCase {
            name: "falls_through_to_the_error_rule".to_string(),
            config: vec![("UseFips".to_string(), ArgValue::Boolean(false))],
            expected: Expected::Error,
        },
    ];

    let generated = generate_tests("resolve_endpoint", "Config", &cases);

    assert!(generated.contains("fn resolve_endpoint_resolves_the_fips_endpoint() {"));
    assert!(generated.contains("region: Some(\"us-east-1\".to_string()),"));
    assert!(generated.contains(
        "assert_eq!(resolve_endpoint(&config).unwrap(), \"https://example-fips.us-east-1.amazonaws.com\");"
    ));

    assert!(generated.contains("fn resolve_endpoint_falls_through_to_the_error_rule() {"));
    assert!(generated.contains("assert!(resolve_endpoint(&config).is_err());"));
}
