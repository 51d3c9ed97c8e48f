/*!
The "message of the day" service, adapted from the teacher's own example model:
a service with one resource (`Message`) whose `read` operation returns today's message,
plus a client error shape for a malformed date.
*/

///
/// The raw Smithy JSON AST text for the message-of-the-day service. Parsing this under
/// the default (lenient) policy produces one `ParseUnknownTrait` issue for
/// `smithy.api#readonly`, since the registry only carries the handful of traits needed
/// for code shape.
///
pub fn message_of_the_day_json() -> &'static str {
    r#"{
        "smithy": "2.0",
        "shapes": {
            "example.motd#MessageOfTheDay": {
                "type": "service",
                "version": "2020-06-21",
                "resources": [{"target": "example.motd#Message"}],
                "traits": {
                    "smithy.api#documentation": "Provides a Message of the day."
                }
            },
            "example.motd#Message": {
                "type": "resource",
                "identifiers": {
                    "date": {"target": "example.motd#Date"}
                },
                "read": {"target": "example.motd#GetMessage"}
            },
            "example.motd#Date": {
                "type": "string",
                "traits": {
                    "smithy.api#pattern": "^\\d\\d\\d\\d\\-\\d\\d-\\d\\d$"
                }
            },
            "example.motd#GetMessage": {
                "type": "operation",
                "input": {"target": "example.motd#GetMessageInput"},
                "output": {"target": "example.motd#GetMessageOutput"},
                "errors": [{"target": "example.motd#BadDateValue"}],
                "traits": {
                    "smithy.api#readonly": {}
                }
            },
            "example.motd#GetMessageInput": {
                "type": "structure",
                "members": {
                    "date": {"target": "example.motd#Date"}
                }
            },
            "example.motd#GetMessageOutput": {
                "type": "structure",
                "members": {
                    "message": {
                        "target": "smithy.api#String",
                        "traits": {
                            "smithy.api#required": {}
                        }
                    }
                }
            },
            "example.motd#BadDateValue": {
                "type": "structure",
                "members": {
                    "errorMessage": {
                        "target": "smithy.api#String",
                        "traits": {
                            "smithy.api#required": {}
                        }
                    }
                },
                "traits": {
                    "smithy.api#error": "client"
                }
            }
        }
    }"#
}
