/*!
Combined crate over this workspace's individual Smithy crates, incorporated as features.

# Features

| Feature name | Default | Individual crate  | Target module path | Purpose                                             |
|--------------|---------|--------------------|---------------------|------------------------------------------------------|
| N/A          | **Yes** | `smithy_symbols`   | `::symbols`         | Shape identity, the symbol store, traits, policy.     |
| N/A          | **Yes** | `smithy_casing`    | `::casing`          | Identifier casing conversions shared by every crate.  |
| "json"       | Yes     | `smithy_json`      | `::json`            | Parsing the Smithy JSON AST representation.           |
| "codegen"    | Yes     | `smithy_codegen`   | `::codegen`         | Driving a source builder from a parsed model.         |
| "rules"      | Yes     | `smithy_rules`     | `::rules`           | Parsing and evaluating endpoint rule-sets.            |
*/

#![warn(
    // ---------- Stylistic
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    // ---------- Public
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
)]

pub use smithy_symbols as symbols;

pub use smithy_casing as casing;

#[cfg(feature = "json")]
pub use smithy_json as json;

#[cfg(feature = "codegen")]
pub use smithy_codegen as codegen;

#[cfg(feature = "rules")]
pub use smithy_rules as rules;
