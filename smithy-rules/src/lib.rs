/*!
The endpoint rule-set data model, JSON parser, and resolver-code generator (spec.md §3.5,
§4.6, §6.2).

A rule set is attached to a service out-of-band from the Smithy model itself (this crate
does not read it off a trait); the caller hands [`parser::parse_rule_set`] a reader
positioned at the rule-set document's root, then passes the resulting [`model::RuleSet`]
to [`generator::generate_resolver`] to lower it to a Rust function body.
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

pub mod generator;
pub mod model;
pub mod parser;

pub use generator::{generate_resolver, generate_tests, Expected, TestCase};
pub use model::RuleSet;
pub use parser::parse_rule_set;
