/*!
A relational, interned representation of a Smithy JSON AST model: shapes, traits, mixins,
and metadata, keyed by a stable 32-bit [`identity::ShapeId`] rather than a parsed string
identifier.

This crate provides:

1. [`identity`] — interning of shape/member identity, and dense dispatch over the
   recognized JSON AST property keys.
1. [`value`] — the generic JSON-like value used for metadata and trait payloads.
1. [`reader`] — the pull-style `JsonReader` interface a concrete tokenizer implements.
1. [`registry`] — the extensible trait registry.
1. [`shapes`] — the shape-body data model (`Shape`, `Operation`, `Resource`, `Service`).
1. [`model`] — the symbol store itself, the `Model` a parser populates and an emitter
   walks.
1. [`issues`] — non-fatal condition tracking.
1. [`policy`] — the skip/abort resolutions that route a condition to the issue bag or a
   fatal abort.
1. [`syntax`] — prelude trait name constants shared across the registry and parser.
1. A common [`error`] module used by every crate that builds on this one.
*/

#![warn(
    // ---------- Stylistic
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    // ---------- Public
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    // ---------- Unsafe
    unsafe_code,
    // ---------- Unused
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
)]

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate lazy_static;

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod error;

pub mod identity;

pub mod issues;

pub mod model;

pub mod policy;

pub mod reader;

pub mod registry;

pub mod shapes;

pub mod syntax;

pub mod value;
