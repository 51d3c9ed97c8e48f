/*!
The endpoint rule-set data model (spec.md §3.5).
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// `{ version: "1.0", parameters: {...}, rules: [...] }` (spec.md §6.2).
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSet {
    /// Declared parameters, in declaration order.
    pub parameters: Vec<(String, Parameter)>,
    /// The rule tree, in declaration order.
    pub rules: Vec<Rule>,
}

/// One declared rule-set parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    /// The parameter's declared type and optional default.
    pub param_type: ParamType,
    /// A built-in identifier this parameter is bound to (e.g. `"AWS::Region"`), if any.
    pub built_in: Option<String>,
    /// Whether a resolver that leaves this parameter unset is a compile-time error.
    pub required: bool,
    /// Human-readable documentation for this parameter.
    pub documentation: Option<String>,
    /// Deprecation metadata, if this parameter is deprecated.
    pub deprecated: Option<Deprecated>,
}

/// A rule-set parameter's type and optional default value (spec.md §3.5).
#[derive(Clone, Debug, PartialEq)]
pub enum ParamType {
    /// `string`, with an optional default.
    String(Option<String>),
    /// `boolean`, with an optional default.
    Boolean(Option<bool>),
    /// `stringArray`, with an optional default.
    StringArray(Option<Vec<String>>),
}

/// `deprecated { message?, since? }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deprecated {
    /// Why this parameter is deprecated.
    pub message: Option<String>,
    /// The version it was deprecated in.
    pub since: Option<String>,
}

/// One node of the rule tree (spec.md §3.5).
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Resolve to a concrete endpoint when its conditions hold.
    Endpoint {
        /// Conditions gating this rule; an empty list always passes.
        conditions: Vec<Condition>,
        /// The endpoint to resolve to.
        endpoint: EndpointSpec,
        /// Human-readable documentation for this rule.
        documentation: Option<String>,
    },
    /// Fail resolution when its conditions hold.
    Error {
        /// Conditions gating this rule; an empty list always passes.
        conditions: Vec<Condition>,
        /// The error message to report, a template string or function result.
        message: ArgValue,
        /// Human-readable documentation for this rule.
        documentation: Option<String>,
    },
    /// Inline a nested set of rules when its conditions hold.
    Tree {
        /// Conditions gating this rule; an empty list always passes.
        conditions: Vec<Condition>,
        /// The nested rules, evaluated in order if `conditions` holds.
        rules: Vec<Rule>,
        /// Human-readable documentation for this rule.
        documentation: Option<String>,
    },
}

impl Rule {
    /// The conditions gating this rule, common to every variant.
    pub fn conditions(&self) -> &[Condition] {
        match self {
            Rule::Endpoint { conditions, .. } | Rule::Error { conditions, .. } | Rule::Tree { conditions, .. } => conditions,
        }
    }
}

/// `endpoint { url, properties?, headers? }` (spec.md §3.5).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EndpointSpec {
    /// The endpoint URL template string.
    pub url: String,
    /// Additional endpoint properties, in declaration order.
    pub properties: Vec<(String, ArgValue)>,
    /// Additional request headers, in declaration order; each maps to one or more
    /// template-string values.
    pub headers: Vec<(String, Vec<ArgValue>)>,
}

/// One condition of a rule (spec.md §3.5).
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    /// The function being invoked.
    pub function: String,
    /// The function's argument list, in declaration order.
    pub args: Vec<ArgValue>,
    /// A name the condition's result is bound to, if this condition produces a value
    /// later conditions or the rule body reference.
    pub assign: Option<String>,
}

/// A function-reference argument (spec.md §3.5).
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    /// The function being invoked.
    pub function: String,
    /// The function's argument list, in declaration order.
    pub args: Vec<ArgValue>,
}

/// One argument to a condition or function call (spec.md §3.5).
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// A literal boolean.
    Boolean(bool),
    /// A literal integer.
    Integer(i64),
    /// A literal string, possibly a `{Name}`/`{Name#path}` template (spec.md §4.6).
    String(String),
    /// A literal array of arguments.
    Array(Vec<ArgValue>),
    /// A `{ ref: Name }` variable reference.
    Reference(String),
    /// A `{ fn, argv }` nested function call.
    Function(FunctionCall),
}
