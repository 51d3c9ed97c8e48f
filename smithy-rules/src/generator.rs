/*!
Lowering from a parsed rule set to a generated Rust resolver function (spec.md §4.6).
*/

use crate::model::{ArgValue, Condition, EndpointSpec, Parameter, ParamType, Rule, RuleSet};
use smithy_casing::to_snake_case;
use smithy_symbols::error::{ErrorKind, Result};
use std::fmt::Write as _;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// One case for [`generate_tests`]: a config literal plus the expected resolver outcome.
#[derive(Clone, Debug)]
pub struct TestCase {
    /// The test function's name suffix.
    pub name: String,
    /// Parameter name/value pairs the generated `config` literal is populated with.
    pub config: Vec<(String, ArgValue)>,
    /// What the resolver is expected to produce for this `config`.
    pub expected: Expected,
}

/// The outcome a [`TestCase`] asserts (spec.md §4.6 `generateTests`).
#[derive(Clone, Debug)]
pub enum Expected {
    /// The resolver returns `Ok(url)`.
    Endpoint(String),
    /// The resolver returns `Err(ReachedErrorRule)`.
    Error,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Emit `fn <name>(config: &<config_type>) -> Result<String, ReachedErrorRule>` implementing
/// `rule_set` (spec.md §4.6 `generateResolver`).
///
pub fn generate_resolver(name: &str, config_type: &str, rule_set: &RuleSet) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "fn {}(config: &{}) -> std::result::Result<String, ReachedErrorRule> {{",
        name, config_type
    )
    .unwrap();
    writeln!(out, "    const IS_TEST: bool = cfg!(test);").unwrap();

    for (param_name, param) in &rule_set.parameters {
        write_parameter_binding(&mut out, param_name, param)?;
    }

    let mut labels = 0usize;
    for rule in &rule_set.rules {
        write_rule(&mut out, rule, 1, &mut labels)?;
    }

    writeln!(out, "    Err(ReachedErrorRule)").unwrap();
    writeln!(out, "}}").unwrap();
    Ok(out)
}

///
/// Emit one `#[test]` block per case, each building a `config` literal and asserting the
/// resolver's outcome against it (spec.md §4.6 `generateTests`).
///
pub fn generate_tests(func_name: &str, config_type: &str, cases: &[TestCase]) -> String {
    let mut out = String::new();
    for case in cases {
        writeln!(out, "#[test]").unwrap();
        writeln!(out, "fn {}_{}() {{", func_name, case.name).unwrap();
        writeln!(out, "    let config = {} {{", config_type).unwrap();
        for (name, value) in &case.config {
            writeln!(out, "        {}: {},", to_snake_case(name), lower_literal(value)).unwrap();
        }
        writeln!(out, "    }};").unwrap();
        match &case.expected {
            Expected::Endpoint(url) => {
                writeln!(out, "    assert_eq!({}(&config).unwrap(), {:?});", func_name, url).unwrap();
            }
            Expected::Error => {
                writeln!(out, "    assert!({}(&config).is_err());", func_name).unwrap();
            }
        }
        writeln!(out, "}}").unwrap();
        writeln!(out).unwrap();
    }
    out
}

// ------------------------------------------------------------------------------------------------
// Private Functions: parameter bindings
// ------------------------------------------------------------------------------------------------

fn write_parameter_binding(out: &mut String, name: &str, param: &Parameter) -> Result<()> {
    let snake = to_snake_case(name);
    let ty = param_type_name(&param.param_type);
    let default = default_literal(&param.param_type);
    let builtin = param
        .built_in
        .as_ref()
        .map(|b| format!("builtin_{}(config)", to_snake_case(b)));

    match (builtin, default) {
        (Some(b), Some(d)) => {
            writeln!(
                out,
                "    let {snake}: {ty} = config.{snake}.clone().or_else(|| {b}).unwrap_or_else(|| {d});",
                snake = snake,
                ty = ty,
                b = b,
                d = d
            )
            .unwrap();
        }
        (Some(b), None) => {
            writeln!(
                out,
                "    let {snake}: {ty} = config.{snake}.clone().or_else(|| {b}).expect(\"required parameter '{name}' has no value\");",
                snake = snake,
                ty = ty,
                b = b,
                name = name
            )
            .unwrap();
        }
        (None, Some(d)) => {
            writeln!(
                out,
                "    let {snake}: {ty} = config.{snake}.clone().unwrap_or_else(|| {d});",
                snake = snake,
                ty = ty,
                d = d
            )
            .unwrap();
        }
        (None, None) => {
            if param.required {
                return Err(ErrorKind::RulesRequiredParamHasNoValue(name.to_string()).into());
            }
            writeln!(
                out,
                "    let {snake}: Option<{ty}> = config.{snake}.clone();",
                snake = snake,
                ty = ty
            )
            .unwrap();
        }
    }
    Ok(())
}

fn param_type_name(param_type: &ParamType) -> &'static str {
    match param_type {
        ParamType::String(_) => "String",
        ParamType::Boolean(_) => "bool",
        ParamType::StringArray(_) => "Vec<String>",
    }
}

fn default_literal(param_type: &ParamType) -> Option<String> {
    match param_type {
        ParamType::String(default) => default.as_ref().map(|s| format!("{:?}.to_string()", s)),
        ParamType::Boolean(default) => default.map(|b| b.to_string()),
        ParamType::StringArray(default) => default.as_ref().map(|items| {
            let rendered: Vec<String> = items.iter().map(|s| format!("{:?}.to_string()", s)).collect();
            format!("vec![{}]", rendered.join(", "))
        }),
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions: rule bodies
// ------------------------------------------------------------------------------------------------

fn write_rule(out: &mut String, rule: &Rule, indent: usize, labels: &mut usize) -> Result<()> {
    let pad = "    ".repeat(indent);
    let conditions = rule.conditions();

    if conditions.is_empty() {
        write_rule_body(out, rule, indent, labels)?;
        return Ok(());
    }

    *labels += 1;
    let label = format!("'pass{}", labels);
    writeln!(out, "{pad}let did_pass = {label}: loop {{", pad = pad, label = label).unwrap();
    for condition in conditions {
        write_condition(out, condition, indent + 1, &label)?;
    }
    writeln!(out, "{pad}    break {label} true;", pad = pad, label = label).unwrap();
    writeln!(out, "{pad}}};", pad = pad).unwrap();
    writeln!(out, "{pad}if did_pass {{", pad = pad).unwrap();
    write_rule_body(out, rule, indent + 1, labels)?;
    writeln!(out, "{pad}}}", pad = pad).unwrap();
    Ok(())
}

fn write_condition(out: &mut String, condition: &Condition, indent: usize, label: &str) -> Result<()> {
    let pad = "    ".repeat(indent);
    let lowered = lower_function(&condition.function, &condition.args)?;

    match &condition.assign {
        Some(name) => {
            let snake = to_snake_case(name);
            writeln!(out, "{pad}let {snake} = {expr};", pad = pad, snake = snake, expr = lowered.expr).unwrap();
            let test = if lowered.optional {
                format!("{}.is_some()", snake)
            } else {
                snake
            };
            writeln!(out, "{pad}if !({test}) {{ break {label} false; }}", pad = pad, test = test, label = label).unwrap();
        }
        None => {
            writeln!(
                out,
                "{pad}if !({expr}) {{ break {label} false; }}",
                pad = pad,
                expr = lowered.expr,
                label = label
            )
            .unwrap();
        }
    }
    Ok(())
}

fn write_rule_body(out: &mut String, rule: &Rule, indent: usize, labels: &mut usize) -> Result<()> {
    let pad = "    ".repeat(indent);
    match rule {
        Rule::Endpoint { endpoint, .. } => write_endpoint_body(out, endpoint, indent),
        Rule::Error { message, .. } => {
            let (format_str, args) = lower_template(&to_template_string(message)?);
            writeln!(out, "{pad}if !IS_TEST {{", pad = pad).unwrap();
            writeln!(out, "{pad}    log::error!({fmt}{args});", pad = pad, fmt = format_str, args = format_args_suffix(&args)).unwrap();
            writeln!(out, "{pad}}}", pad = pad).unwrap();
            writeln!(out, "{pad}return Err(ReachedErrorRule);", pad = pad).unwrap();
            Ok(())
        }
        Rule::Tree { rules, .. } => {
            for nested in rules {
                write_rule(out, nested, indent, labels)?;
            }
            Ok(())
        }
    }
}

fn write_endpoint_body(out: &mut String, endpoint: &EndpointSpec, indent: usize) -> Result<()> {
    let pad = "    ".repeat(indent);
    let (format_str, args) = lower_template(&endpoint.url);
    writeln!(
        out,
        "{pad}return Ok(format!({fmt}{args}));",
        pad = pad,
        fmt = format_str,
        args = format_args_suffix(&args)
    )
    .unwrap();
    Ok(())
}

fn to_template_string(value: &ArgValue) -> Result<String> {
    match value {
        ArgValue::String(s) => Ok(s.clone()),
        other => Err(ErrorKind::RulesAnyTypeNotSupported(format!("{:?}", other)).into()),
    }
}

fn format_args_suffix(args: &[String]) -> String {
    if args.is_empty() {
        String::new()
    } else {
        format!(", {}", args.join(", "))
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions: template-string lowering
// ------------------------------------------------------------------------------------------------

/// Lower a `{Name}` / `{Name#path}` template string to a format literal plus its argument
/// expressions (spec.md §4.6 "Template strings").
fn lower_template(template: &str) -> (String, Vec<String>) {
    let mut format_str = String::from('"');
    let mut args = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let mut reference = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    reference.push(next);
                }
                if !closed {
                    // a `{` with no matching `}` is literal text (spec.md §4.6).
                    format_str.push('{');
                    format_str.push_str(&reference);
                    continue;
                }
                format_str.push_str("{}");
                if let Some((name, path)) = reference.split_once('#') {
                    args.push(lower_get_attr_reference(name, path));
                } else {
                    args.push(to_snake_case(&reference));
                }
            }
            '"' => format_str.push_str("\\\""),
            other => format_str.push(other),
        }
    }

    format_str.push('"');
    (format_str, args)
}

fn lower_get_attr_reference(name: &str, path: &str) -> String {
    format!("{}.{}", to_snake_case(name), lower_get_attr_path(path))
}

// ------------------------------------------------------------------------------------------------
// Private Functions: function lowering
// ------------------------------------------------------------------------------------------------

struct LoweredExpr {
    expr: String,
    optional: bool,
}

/// Lower one of `standardFunctions` (spec.md §4.6) applied to `args`.
fn lower_function(name: &str, args: &[ArgValue]) -> Result<LoweredExpr> {
    match name {
        "booleanEquals" => {
            let [a, b] = require_two(name, args)?;
            let lowered = lower_boolean_equals(&lower_arg(a), &lower_arg(b));
            Ok(LoweredExpr { expr: lowered, optional: false })
        }
        "isSet" => {
            let [a] = require_one(name, args)?;
            Ok(LoweredExpr { expr: format!("{}.is_some()", lower_arg(a)), optional: false })
        }
        "not" => {
            let [a] = require_one(name, args)?;
            Ok(LoweredExpr { expr: format!("!({})", lower_arg(a)), optional: false })
        }
        "getAttr" => {
            let [v, path] = require_two(name, args)?;
            let path = match path {
                ArgValue::String(s) => s.as_str(),
                other => return Err(ErrorKind::RulesAnyTypeNotSupported(format!("{:?}", other)).into()),
            };
            Ok(LoweredExpr {
                expr: format!("{}.{}", lower_arg(v), lower_get_attr_path(path)),
                optional: true,
            })
        }
        "stringEquals" => {
            let [a, b] = require_two(name, args)?;
            Ok(LoweredExpr {
                expr: format!("{} == {}", lower_arg(a), lower_arg(b)),
                optional: false,
            })
        }
        "isValidHostLabel" => {
            let [s, allow_subdomains] = require_two(name, args)?;
            Ok(LoweredExpr {
                expr: format!("is_valid_host_label({}, {})", lower_arg(s), lower_arg(allow_subdomains)),
                optional: false,
            })
        }
        "parseURL" => {
            let [s] = require_one(name, args)?;
            Ok(LoweredExpr { expr: format!("parse_url({})", lower_arg(s)), optional: true })
        }
        "uriEncode" => {
            let [s] = require_one(name, args)?;
            Ok(LoweredExpr { expr: format!("uri_encode({})", lower_arg(s)), optional: false })
        }
        "substring" => {
            if args.len() != 4 {
                return Err(ErrorKind::RulesFuncUnknown(format!("substring/{}", args.len())).into());
            }
            let rendered: Vec<String> = args.iter().map(lower_arg).collect();
            Ok(LoweredExpr {
                expr: format!("substring({}, {}, {}, {})", rendered[0], rendered[1], rendered[2], rendered[3]),
                optional: true,
            })
        }
        other => Err(ErrorKind::RulesFuncUnknown(other.to_string()).into()),
    }
}

/// `booleanEquals(a,b)` peephole per spec.md §4.6: a literal side collapses the comparison to
/// its other operand (or its negation).
fn lower_boolean_equals(a: &str, b: &str) -> String {
    match (a, b) {
        (lit, other) | (other, lit) if lit == "true" => other.to_string(),
        (lit, other) | (other, lit) if lit == "false" => format!("!({})", other),
        _ => format!("{} == {}", a, b),
    }
}

fn lower_get_attr_path(path: &str) -> String {
    if let Some(index) = path.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return format!("get({})", index);
    }
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut index: Option<String> = None;
    for c in path.chars() {
        match c {
            '.' => {
                if !current.is_empty() {
                    segments.push(to_snake_case(&current));
                    current.clear();
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(to_snake_case(&current));
                    current.clear();
                }
                index = Some(String::new());
            }
            ']' => {}
            c if index.is_some() => index.as_mut().unwrap().push(c),
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        segments.push(to_snake_case(&current));
    }
    let mut rendered = segments.join(".");
    if let Some(index) = index {
        write!(rendered, ".get({})", index).unwrap();
    }
    rendered
}

fn lower_arg(arg: &ArgValue) -> String {
    match arg {
        ArgValue::Boolean(b) => b.to_string(),
        ArgValue::Integer(n) => n.to_string(),
        ArgValue::String(s) => {
            let (fmt, args) = lower_template(s);
            if args.is_empty() {
                fmt
            } else {
                format!("format!({}{})", fmt, format_args_suffix(&args))
            }
        }
        ArgValue::Array(items) => {
            let rendered: Vec<String> = items.iter().map(lower_arg).collect();
            format!("vec![{}]", rendered.join(", "))
        }
        ArgValue::Reference(name) => to_snake_case(name),
        ArgValue::Function(call) => lower_function(&call.function, &call.args)
            .map(|lowered| lowered.expr)
            .unwrap_or_else(|err| format!("/* {} */", err)),
    }
}

/// Render an `ArgValue` as a literal Rust expression for a test's `config` struct (spec.md
/// §4.6 `generateTests`); unlike [`lower_arg`], strings are never treated as templates.
fn lower_literal(value: &ArgValue) -> String {
    match value {
        ArgValue::Boolean(b) => format!("Some({})", b),
        ArgValue::Integer(n) => format!("Some({})", n),
        ArgValue::String(s) => format!("Some({:?}.to_string())", s),
        ArgValue::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| match item {
                    ArgValue::String(s) => format!("{:?}.to_string()", s),
                    other => lower_literal(other),
                })
                .collect();
            format!("Some(vec![{}])", rendered.join(", "))
        }
        ArgValue::Reference(name) => to_snake_case(name),
        ArgValue::Function(_) => "None".to_string(),
    }
}

fn require_one<'a>(name: &str, args: &'a [ArgValue]) -> Result<[&'a ArgValue; 1]> {
    match args {
        [a] => Ok([a]),
        _ => Err(ErrorKind::RulesFuncUnknown(format!("{}/{}", name, args.len())).into()),
    }
}

fn require_two<'a>(name: &str, args: &'a [ArgValue]) -> Result<[&'a ArgValue; 2]> {
    match args {
        [a, b] => Ok([a, b]),
        _ => Err(ErrorKind::RulesFuncUnknown(format!("{}/{}", name, args.len())).into()),
    }
}
