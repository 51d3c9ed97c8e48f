/*!
Standard `Error`, `ErrorKind`, and `Result` types shared by every crate downstream of the
symbol store.
*/

#![allow(missing_docs)]

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

error_chain! {
    errors {
        #[doc("A model declared a `smithy` version other than \"2.0\" or \"2\"")]
        InvalidVersion(v: String) {
            description("invalid smithy version")
            display("invalid smithy version: '{}'", v)
        }
        #[doc("A member's `target` does not resolve to a shape this model knows about")]
        InvalidShapeTarget(id: String) {
            description("invalid shape target")
            display("invalid shape target: '{}'", id)
        }
        #[doc("A member target is structurally invalid for its owning shape kind")]
        InvalidMemberTarget(parent: String, member: String) {
            description("invalid member target")
            display("invalid member target: '{}${}'", parent, member)
        }
        #[doc("A shape's `type` property named a kind this parser does not recognize")]
        UnknownType(t: String) {
            description("unknown shape type")
            display("unknown shape type: '{}'", t)
        }
        #[doc("A shape object carried a property that is invalid for its declared kind")]
        InvalidShapeProperty(context: String, property: String) {
            description("invalid shape property")
            display("invalid property '{}' for shape '{}'", property, context)
        }
        #[doc("A trait id has no registered parser and the active trait policy is `abort`")]
        UnknownTrait(id: String) {
            description("unknown trait")
            display("unknown trait: '{}'", id)
        }
        #[doc("A trait id is already registered in the trait registry")]
        DuplicateTraitRegistration(id: String) {
            description("duplicate trait registration")
            display("trait already registered: '{}'", id)
        }
        #[doc("The active parser or emitter policy is `abort` and a policy-controlled issue occurred")]
        PolicyAbort(detail: String) {
            description("policy abort")
            display("aborted by policy: {}", detail)
        }
        #[doc("A root shape passed to the emitter is a primitive the emitter cannot start from")]
        InvalidRootShape(id: String) {
            description("invalid root shape")
            display("invalid root shape: '{}' is a primitive shape with no enum constraint", id)
        }
        #[doc("A shape id referenced during emission has no entry in the symbol store")]
        UnknownShape(id: String) {
            description("unknown shape")
            display("unknown shape id: {:?}", id)
        }
        #[doc("Shape-specific code generation failed")]
        ShapeCodegenFail(id: String, detail: String) {
            description("shape codegen failed")
            display("codegen failed for '{}': {}", id, detail)
        }
        #[doc("A rule set had no rules at all")]
        EmptyRuleSet {
            description("empty rule set")
            display("rule set contains no rules")
        }
        #[doc("A rules function reference named a function with no registered lowering")]
        RulesFuncUnknown(name: String) {
            description("unknown rules function")
            display("unknown rules function: '{}'", name)
        }
        #[doc("A required rules parameter has neither a config field, a builtin, nor a default")]
        RulesRequiredParamHasNoValue(name: String) {
            description("required rules parameter has no value")
            display("required parameter '{}' has no way to resolve a value", name)
        }
        #[doc("A rules argument used a JSON type the lowering does not support")]
        RulesAnyTypeNotSupported(detail: String) {
            description("unsupported rules argument type")
            display("unsupported rules argument type: {}", detail)
        }
        #[doc("The JSON reader encountered a token of the wrong kind")]
        UnexpectedToken(expected: String, found: String) {
            description("unexpected token")
            display("expected {} but found {}", expected, found)
        }
        #[doc("The JSON reader read a string value that did not match what was expected")]
        UnexpectedValue(expected: String, found: String) {
            description("unexpected value")
            display("expected value '{}' but found '{}'", expected, found)
        }
        #[doc("The underlying byte stream is not well-formed JSON")]
        MalformedJson(detail: String) {
            description("malformed JSON")
            display("malformed JSON: {}", detail)
        }
    }

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
    }
}

///
/// The identification of an error's source used by the `error` trait (spec.md §4.5).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSource {
    /// The error originated in the client.
    Client,
    /// The error originated in the server.
    Server,
}

impl std::fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ErrorSource::Client => "client",
                ErrorSource::Server => "server",
            }
        )
    }
}

impl std::str::FromStr for ErrorSource {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            _ => Err(ErrorKind::InvalidShapeProperty("error".to_string(), s.to_string()).into()),
        }
    }
}
