/*!
A small endpoint rule-set exercising a builtin-backed parameter, a conditional
`endpoint` rule, and a fallback `error` rule (spec.md §3.5, §4.6, §6.2).
*/

///
/// The raw endpoint rule-set JSON text. `Region` carries a builtin id the resolver binds
/// directly from config; `UseFips` defaults to `false`. The single rule resolves a
/// regional endpoint when `Region` is set, and otherwise falls through to the error rule.
///
pub fn endpoint_rules_json() -> &'static str {
    r#"{
        "version": "1.0",
        "parameters": {
            "Region": {
                "type": "string",
                "builtIn": "AWS::Region",
                "required": true,
                "documentation": "The AWS region to dispatch this request to."
            },
            "UseFips": {
                "type": "boolean",
                "default": false,
                "required": true,
                "documentation": "When true, dispatch to a FIPS-compliant endpoint."
            }
        },
        "rules": [
            {
                "type": "tree",
                "conditions": [
                    {"fn": "isSet", "argv": [{"ref": "Region"}]}
                ],
                "rules": [
                    {
                        "type": "endpoint",
                        "conditions": [
                            {"fn": "booleanEquals", "argv": [{"ref": "UseFips"}, true]}
                        ],
                        "endpoint": {
                            "url": "https://example-fips.{Region}.amazonaws.com"
                        }
                    },
                    {
                        "type": "endpoint",
                        "conditions": [],
                        "endpoint": {
                            "url": "https://example.{Region}.amazonaws.com"
                        }
                    }
                ]
            },
            {
                "type": "error",
                "conditions": [],
                "error": "no region was provided"
            }
        ]
    }"#
}
