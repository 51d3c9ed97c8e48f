/*!
A hand-rolled, pull-style JSON tokenizer and the Smithy JSON AST parser built on top of
it, populating a `smithy_symbols::model::Model`.

* [`tokenizer`] — the concrete [`smithy_symbols::reader::JsonReader`] implementation.
* [`parser`] — `parse_json`, which drives a reader and a trait registry into a `Model`.
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

#[macro_use]
extern crate log;

pub mod parser;

pub mod tokenizer;

pub use parser::parse_json;
pub use tokenizer::JsonTokenizer;
