/*!
The shape emitter: drives an abstract source [`builder::Builder`] from a parsed
[`smithy_symbols::model::Model`], plus a Markdown Readme hook.

This crate provides:

1. [`builder`] — the abstract, target-language-agnostic source builder and its concrete
   `RustSource` implementation.
1. [`hooks`] — the extension points an emitter caller plugs in (error-shape rendering,
   operation bodies, return types).
1. [`docstring`] — HTML-to-Markdown conversion for `documentation` trait values.
1. [`emitter`] — the shape-kind dispatch that drives a `Builder` from a `Model`.
1. [`readme`] — the Markdown Readme hook built on `somedoc`.
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
extern crate log;

pub mod builder;

pub mod docstring;

pub mod emitter;

pub mod hooks;

pub mod readme;

pub use builder::{Builder, RustSource, TypeKind};
pub use emitter::write_script;
pub use hooks::Hooks;
pub use readme::{render_readme, ReadmeContext};
