/*!
Deterministic identifier-casing transforms.

Smithy shape and member names arrive in whatever case the model author chose; the code
emitter needs each name in a specific case depending on where it lands in the generated
source (a struct name is `PascalCase`, a field is `snake_case`, an enum variant built
from a trait value keeps its own casing rules). This crate centralizes those transforms
so the emitter never hand-rolls a casing routine twice.

All functions are pure and total: every `&str` input, including the empty string and
strings that are already in the target case, produces a deterministic output.
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]

use heck::{CamelCase, SnakeCase, TitleCase};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Convert a Smithy identifier to `snake_case`, the casing used for struct/enum field
/// names and function-local bindings in the generated code.
pub fn to_snake_case(name: &str) -> String {
    name.to_snake_case()
}

/// Convert a Smithy identifier to `camelCase`, the casing used for method names (e.g.
/// an operation's method on its enclosing service or resource).
pub fn to_camel_case(name: &str) -> String {
    name.to_camel_case()
}

/// Convert a Smithy identifier to `PascalCase`, the casing used for type names
/// (structs, unions, enums, type aliases).
pub fn to_pascal_case(name: &str) -> String {
    let camel = name.to_camel_case();
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert a Smithy identifier to `Title Case`, used for human-readable headings in
/// generated documentation (e.g. the Readme hook's service title).
pub fn to_title_case(name: &str) -> String {
    name.to_title_case()
}

/// Strip a common error-name suffix (`Exception` or `Error`) and return the
/// `snake_case` form, used when naming `<Op>Errors` tagged-union variants from error
/// shape names.
pub fn error_variant_name(shape_name: &str) -> String {
    let stripped = shape_name
        .strip_suffix("Exception")
        .or_else(|| shape_name.strip_suffix("Error"))
        .unwrap_or(shape_name);
    let stripped = if stripped.is_empty() {
        shape_name
    } else {
        stripped
    };
    to_snake_case(stripped)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_from_various_inputs() {
        assert_eq!(to_snake_case("fooBar"), "foo_bar");
        assert_eq!(to_snake_case("FooBar"), "foo_bar");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn camel_case_from_various_inputs() {
        assert_eq!(to_camel_case("foo_bar"), "fooBar");
        assert_eq!(to_camel_case("FooBar"), "fooBar");
    }

    #[test]
    fn pascal_case_from_various_inputs() {
        assert_eq!(to_pascal_case("fooBar"), "FooBar");
        assert_eq!(to_pascal_case("foo_bar"), "FooBar");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn error_variant_strips_known_suffixes() {
        assert_eq!(error_variant_name("InvalidInputException"), "invalid_input");
        assert_eq!(error_variant_name("NotFoundError"), "not_found");
        assert_eq!(error_variant_name("Throttled"), "throttled");
        // a shape literally named "Exception" has nothing left after stripping: fall
        // back to the original name rather than produce an empty identifier.
        assert_eq!(error_variant_name("Exception"), "exception");
    }
}
