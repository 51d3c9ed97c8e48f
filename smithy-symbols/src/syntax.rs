/*!
String constants for the handful of prelude traits this crate understands directly
(spec.md §1: "Individual trait implementations beyond the handful required for code
shape" are out of scope; these are that handful).
*/

/// The namespace every prelude shape and trait lives in.
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

/// `smithy.api#documentation` — attaches a Markdown/HTML doc string to a shape.
pub const TRAIT_DOCUMENTATION: &str = "documentation";

/// `smithy.api#default` — a structural zero value a member falls back to.
pub const TRAIT_DEFAULT: &str = "default";

/// `smithy.api#required` — marks a structure member as non-optional.
pub const TRAIT_REQUIRED: &str = "required";

/// `smithy.api#enumValue` — the wire value backing an enum/intEnum member.
pub const TRAIT_ENUM_VALUE: &str = "enumValue";

/// `smithy.api#sparse` — marks a list/map as permitting null elements/values.
pub const TRAIT_SPARSE: &str = "sparse";

/// `smithy.api#error` — marks a structure as an error shape (`"client"`/`"server"`).
pub const TRAIT_ERROR: &str = "error";

/// `smithy.api#httpError` — the HTTP status code an error shape maps to.
pub const TRAIT_HTTP_ERROR: &str = "httpError";

/// `smithy.api#retryable` — marks an error as safe to retry.
pub const TRAIT_RETRYABLE: &str = "retryable";

/// `smithy.api#uniqueItems` — marks a list as a set.
pub const TRAIT_UNIQUE_ITEMS: &str = "uniqueItems";

/// `smithy.api#mixin` — marks a shape as usable as a mixin.
pub const TRAIT_MIXIN: &str = "mixin";

/// `smithy.api#clientOptional` — keeps an otherwise-required member optional client-side.
pub const TRAIT_CLIENT_OPTIONAL: &str = "clientOptional";

/// `smithy.api#deprecated` — carried through to the emitted doc comment (SPEC_FULL
/// ambient addition; not in the handful spec.md §1 names explicitly but present in
/// every real Smithy model and harmless to surface as an opaque trait).
pub const TRAIT_DEPRECATED: &str = "deprecated";

/// `smithy.api#since` — paired with `deprecated` in real models.
pub const TRAIT_SINCE: &str = "since";

/// `smithy.api#paginated` — SPEC_FULL addition (see SPEC_FULL.md "Supplemented features").
pub const TRAIT_PAGINATED: &str = "paginated";
