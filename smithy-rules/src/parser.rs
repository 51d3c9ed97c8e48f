/*!
The endpoint rule-set JSON parser (spec.md §4.6, §6.2).
*/

use crate::model::{ArgValue, Condition, Deprecated, EndpointSpec, FunctionCall, Parameter, ParamType, Rule, RuleSet};
use smithy_symbols::error::{ErrorKind, Result};
use smithy_symbols::reader::{JsonReader, ScopeItem, TokenKind, Token};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Parse a `{ version, parameters, rules }` rule-set document (spec.md §4.6).
///
pub fn parse_rule_set(reader: &mut dyn JsonReader) -> Result<RuleSet> {
    let mut parameters = Vec::new();
    let mut rules = Vec::new();

    reader.next_scope(&mut |item, reader| {
        let key = object_key(item);
        match key.as_str() {
            "version" => reader.next_string().map(|_| ()),
            "parameters" => {
                parameters = parse_parameters(reader)?;
                Ok(())
            }
            "rules" => {
                rules = parse_rule_list(reader)?;
                Ok(())
            }
            _ => reader.skip_value_or_scope(),
        }
    })?;

    if rules.is_empty() {
        return Err(ErrorKind::EmptyRuleSet.into());
    }

    Ok(RuleSet { parameters, rules })
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn object_key(item: ScopeItem<'_>) -> String {
    match item {
        ScopeItem::ObjectProperty(key) => key.to_string(),
        ScopeItem::ArrayElement(_) => unreachable!("caller guarantees an object scope"),
    }
}

fn parse_parameters(reader: &mut dyn JsonReader) -> Result<Vec<(String, Parameter)>> {
    let mut out = Vec::new();
    reader.next_scope(&mut |item, reader| {
        let name = object_key(item);
        let param = parse_parameter(reader)?;
        out.push((name, param));
        Ok(())
    })?;
    Ok(out)
}

fn parse_parameter(reader: &mut dyn JsonReader) -> Result<Parameter> {
    let mut kind: Option<String> = None;
    let mut default_bool: Option<bool> = None;
    let mut default_string: Option<String> = None;
    let mut default_array: Option<Vec<String>> = None;
    let mut built_in: Option<String> = None;
    let mut required = false;
    let mut documentation: Option<String> = None;
    let mut deprecated: Option<Deprecated> = None;

    reader.next_scope(&mut |item, reader| {
        match object_key(item).as_str() {
            "type" => {
                kind = Some(reader.next_string()?);
                Ok(())
            }
            "default" => match reader.peek()? {
                TokenKind::Boolean => {
                    default_bool = Some(reader.next_boolean()?);
                    Ok(())
                }
                TokenKind::String => {
                    default_string = Some(reader.next_string()?);
                    Ok(())
                }
                TokenKind::ArrayBegin => {
                    let mut items = Vec::new();
                    reader.next_scope(&mut |_item, reader| {
                        items.push(reader.next_string()?);
                        Ok(())
                    })?;
                    default_array = Some(items);
                    Ok(())
                }
                other => Err(ErrorKind::RulesAnyTypeNotSupported(format!("{:?}", other)).into()),
            },
            "builtIn" => {
                built_in = Some(reader.next_string()?);
                Ok(())
            }
            "required" => {
                required = reader.next_boolean()?;
                Ok(())
            }
            "documentation" => {
                documentation = Some(reader.next_string()?);
                Ok(())
            }
            "deprecated" => {
                let mut message = None;
                let mut since = None;
                reader.next_scope(&mut |item, reader| match object_key(item).as_str() {
                    "message" => {
                        message = Some(reader.next_string()?);
                        Ok(())
                    }
                    "since" => {
                        since = Some(reader.next_string()?);
                        Ok(())
                    }
                    _ => reader.skip_value_or_scope(),
                })?;
                deprecated = Some(Deprecated { message, since });
                Ok(())
            }
            _ => reader.skip_value_or_scope(),
        }
    })?;

    let kind = kind.ok_or_else(|| ErrorKind::InvalidShapeProperty("parameter".to_string(), "type".to_string()))?;
    let param_type = match kind.as_str() {
        "string" => ParamType::String(default_string),
        "boolean" => ParamType::Boolean(default_bool),
        "stringArray" => ParamType::StringArray(default_array),
        other => return Err(ErrorKind::UnknownType(other.to_string()).into()),
    };

    Ok(Parameter {
        param_type,
        built_in,
        required,
        documentation,
        deprecated,
    })
}

fn parse_rule_list(reader: &mut dyn JsonReader) -> Result<Vec<Rule>> {
    let mut out = Vec::new();
    reader.next_scope(&mut |_item, reader| {
        out.push(parse_rule(reader)?);
        Ok(())
    })?;
    Ok(out)
}

fn parse_rule(reader: &mut dyn JsonReader) -> Result<Rule> {
    let mut explicit_type: Option<String> = None;
    let mut first_discriminator: Option<&'static str> = None;
    let mut conditions = Vec::new();
    let mut endpoint: Option<EndpointSpec> = None;
    let mut error_message: Option<ArgValue> = None;
    let mut nested_rules: Vec<Rule> = Vec::new();
    let mut documentation: Option<String> = None;

    reader.next_scope(&mut |item, reader| {
        let key = object_key(item);
        match key.as_str() {
            "type" => {
                explicit_type = Some(reader.next_string()?);
                Ok(())
            }
            "conditions" => {
                conditions = parse_condition_list(reader)?;
                Ok(())
            }
            "documentation" => {
                documentation = Some(reader.next_string()?);
                Ok(())
            }
            "endpoint" => {
                first_discriminator.get_or_insert("endpoint");
                endpoint = Some(parse_endpoint_spec(reader)?);
                Ok(())
            }
            "error" => {
                first_discriminator.get_or_insert("error");
                error_message = Some(parse_arg_value(reader)?);
                Ok(())
            }
            "rules" => {
                first_discriminator.get_or_insert("rules");
                nested_rules = parse_rule_list(reader)?;
                Ok(())
            }
            _ => reader.skip_value_or_scope(),
        }
    })?;

    let kind = explicit_type
        .as_deref()
        .or(first_discriminator)
        .ok_or_else(|| ErrorKind::InvalidShapeProperty("rule".to_string(), "type".to_string()))?;

    match kind {
        "endpoint" => Ok(Rule::Endpoint {
            conditions,
            endpoint: endpoint.ok_or_else(|| ErrorKind::InvalidShapeProperty("rule".to_string(), "endpoint".to_string()))?,
            documentation,
        }),
        "error" => Ok(Rule::Error {
            conditions,
            message: error_message.ok_or_else(|| ErrorKind::InvalidShapeProperty("rule".to_string(), "error".to_string()))?,
            documentation,
        }),
        "tree" => Ok(Rule::Tree {
            conditions,
            rules: nested_rules,
            documentation,
        }),
        other => Err(ErrorKind::UnknownType(other.to_string()).into()),
    }
}

fn parse_condition_list(reader: &mut dyn JsonReader) -> Result<Vec<Condition>> {
    let mut out = Vec::new();
    reader.next_scope(&mut |_item, reader| {
        out.push(parse_condition(reader)?);
        Ok(())
    })?;
    Ok(out)
}

fn parse_condition(reader: &mut dyn JsonReader) -> Result<Condition> {
    let mut function: Option<String> = None;
    let mut args = Vec::new();
    let mut assign: Option<String> = None;

    reader.next_scope(&mut |item, reader| match object_key(item).as_str() {
        "fn" => {
            function = Some(reader.next_string()?);
            Ok(())
        }
        "argv" => {
            args = parse_arg_array(reader)?;
            Ok(())
        }
        "assign" => {
            assign = Some(reader.next_string()?);
            Ok(())
        }
        _ => reader.skip_value_or_scope(),
    })?;

    Ok(Condition {
        function: function.ok_or_else(|| ErrorKind::InvalidShapeProperty("condition".to_string(), "fn".to_string()))?,
        args,
        assign,
    })
}

fn parse_endpoint_spec(reader: &mut dyn JsonReader) -> Result<EndpointSpec> {
    let mut url: Option<String> = None;
    let mut properties = Vec::new();
    let mut headers = Vec::new();

    reader.next_scope(&mut |item, reader| match object_key(item).as_str() {
        "url" => {
            url = Some(reader.next_string()?);
            Ok(())
        }
        "properties" => {
            reader.next_scope(&mut |item, reader| {
                let name = object_key(item);
                properties.push((name, parse_arg_value(reader)?));
                Ok(())
            })
        }
        "headers" => {
            reader.next_scope(&mut |item, reader| {
                let name = object_key(item);
                headers.push((name, parse_arg_array(reader)?));
                Ok(())
            })
        }
        _ => reader.skip_value_or_scope(),
    })?;

    Ok(EndpointSpec {
        url: url.ok_or_else(|| ErrorKind::InvalidShapeProperty("endpoint".to_string(), "url".to_string()))?,
        properties,
        headers,
    })
}

fn parse_arg_array(reader: &mut dyn JsonReader) -> Result<Vec<ArgValue>> {
    let mut out = Vec::new();
    reader.next_scope(&mut |_item, reader| {
        out.push(parse_arg_value(reader)?);
        Ok(())
    })?;
    Ok(out)
}

fn parse_arg_value(reader: &mut dyn JsonReader) -> Result<ArgValue> {
    match reader.peek()? {
        TokenKind::Boolean => Ok(ArgValue::Boolean(reader.next_boolean()?)),
        TokenKind::Number => match reader.next()? {
            Token::Integer(n) => Ok(ArgValue::Integer(n)),
            Token::Float(f) => Ok(ArgValue::Integer(f as i64)),
            other => Err(ErrorKind::UnexpectedToken("number".to_string(), format!("{:?}", other)).into()),
        },
        TokenKind::String => Ok(ArgValue::String(reader.next_string()?)),
        TokenKind::ArrayBegin => parse_arg_array(reader).map(ArgValue::Array),
        TokenKind::ObjectBegin => parse_arg_object(reader),
        other => Err(ErrorKind::UnexpectedToken("argument value".to_string(), format!("{:?}", other)).into()),
    }
}

fn parse_arg_object(reader: &mut dyn JsonReader) -> Result<ArgValue> {
    let mut reference: Option<String> = None;
    let mut function: Option<String> = None;
    let mut args = Vec::new();

    reader.next_scope(&mut |item, reader| match object_key(item).as_str() {
        "ref" => {
            reference = Some(reader.next_string()?);
            Ok(())
        }
        "fn" => {
            function = Some(reader.next_string()?);
            Ok(())
        }
        "argv" => {
            args = parse_arg_array(reader)?;
            Ok(())
        }
        _ => reader.skip_value_or_scope(),
    })?;

    if let Some(name) = reference {
        return Ok(ArgValue::Reference(name));
    }
    if let Some(function) = function {
        return Ok(ArgValue::Function(FunctionCall { function, args }));
    }
    Err(ErrorKind::InvalidShapeProperty("argument".to_string(), "ref|fn".to_string()).into())
}
