/*!
Fixture models shared by the Smithy crates' own test suites (spec.md §4.4 input, §4.6
input), kept as raw source text rather than a constructed in-memory value: every
consumer exercises its own parser against exactly the bytes a real pipeline would read.
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
    unused_qualifications,
)]

pub mod examples;
