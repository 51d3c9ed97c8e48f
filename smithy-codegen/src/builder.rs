/*!
The abstract source builder the shape emitter drives (spec.md §6.3).

`write_script` (see [`crate::emitter`]) only ever calls these methods, in the order the
shape dispatch rules of spec.md §4.5 require; it never formats target syntax itself. The
concrete syntax is entirely up to the `Builder` implementation — [`RustSource`] renders
Rust, the target this workspace actually emits.
*/

use std::fmt::Write as _;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The kind of type declaration opened by [`Builder::begin_type`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// A plain struct.
    Struct,
    /// A string-backed tagged union (strEnum, taggedUnion).
    TaggedUnion,
    /// An integer-backed enumeration.
    IntEnum,
    /// A type alias (`list`/`map` shapes): the full right-hand-side type expression,
    /// e.g. `Vec<Foo>` or `std::collections::BTreeMap<String, Foo>`.
    Alias(String),
}

///
/// Declarations, fields, functions, and control flow, called in document order (spec.md
/// §6.3). Every method appends to whatever the implementation is accumulating; there is
/// no return value to thread through, since the emitter never inspects its own output.
///
pub trait Builder {
    /// A doc comment attached to whatever declaration follows.
    fn doc_comment(&mut self, text: &str);

    /// `pub const <name>: <ty> = <expr>;`
    fn constant(&mut self, name: &str, ty: &str, expr: &str);

    /// `use <path>;`, de-duplicated and hoisted by the implementation.
    fn import(&mut self, path: &str);

    /// Open a type declaration of the given `kind` and `name`.
    fn begin_type(&mut self, kind: TypeKind, name: &str);

    /// Close the most recently opened [`Builder::begin_type`].
    fn end_type(&mut self);

    /// `<name>: <ty>[ = <default>],` inside the open type declaration.
    fn field(&mut self, name: &str, ty: &str, default: Option<&str>);

    /// `<name>[(<payload>)],` inside an open [`TypeKind::TaggedUnion`]/[`TypeKind::IntEnum`].
    fn variant(&mut self, name: &str, payload: Option<&str>);

    /// Open `fn <name>(<args>) -> <returns> {`; `args` are `(name, type)` pairs.
    fn begin_function(&mut self, name: &str, args: &[(String, String)], returns: &str);

    /// Close the most recently opened [`Builder::begin_function`].
    fn end_function(&mut self);

    /// `if <cond> {`.
    fn begin_if(&mut self, cond: &str);

    /// Close the innermost open `if`/`else` block.
    fn end_if(&mut self);

    /// `match <scrutinee> {`.
    fn begin_match(&mut self, scrutinee: &str);

    /// `<pattern> => <body>,` inside the open `match`.
    fn match_arm(&mut self, pattern: &str, body: &str);

    /// Close the innermost open `match`.
    fn end_match(&mut self);

    /// A bare statement.
    fn statement(&mut self, code: &str);

    /// `return <expr>;`
    fn return_stmt(&mut self, expr: &str);
}

///
/// A [`Builder`] that renders Rust source text directly into a `String`.
///
#[derive(Debug, Default)]
pub struct RustSource {
    head: String,
    body: String,
    indent: usize,
    imports: std::collections::BTreeSet<String>,
    pending_doc: Vec<String>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl RustSource {
    /// An empty builder with nothing accumulated yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the accumulated source: hoisted imports first, then every declaration in
    /// call order.
    pub fn finish(self) -> String {
        let mut out = self.head;
        for import in &self.imports {
            writeln!(out, "use {};", import).unwrap();
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.body);
        out
    }

    fn pad(&self) -> String {
        "    ".repeat(self.indent)
    }

    fn flush_doc_comment(&mut self) {
        for line in self.pending_doc.drain(..) {
            let pad = "    ".repeat(self.indent);
            for doc_line in line.lines() {
                writeln!(self.body, "{}/// {}", pad, doc_line).unwrap();
            }
        }
    }
}

impl Builder for RustSource {
    fn doc_comment(&mut self, text: &str) {
        self.pending_doc.push(text.to_string());
    }

    fn constant(&mut self, name: &str, ty: &str, expr: &str) {
        self.flush_doc_comment();
        writeln!(self.body, "{}pub const {}: {} = {};", self.pad(), name, ty, expr).unwrap();
    }

    fn import(&mut self, path: &str) {
        let _ = self.imports.insert(path.to_string());
    }

    fn begin_type(&mut self, kind: TypeKind, name: &str) {
        self.flush_doc_comment();
        let pad = self.pad();
        let is_alias = matches!(kind, TypeKind::Alias(_));
        match kind {
            TypeKind::Struct => writeln!(self.body, "{}#[derive(Clone, Debug, PartialEq)]\n{}pub struct {} {{", pad, pad, name).unwrap(),
            TypeKind::TaggedUnion => writeln!(self.body, "{}#[derive(Clone, Debug, PartialEq)]\n{}pub enum {} {{", pad, pad, name).unwrap(),
            TypeKind::IntEnum => writeln!(self.body, "{}#[derive(Clone, Copy, Debug, PartialEq, Eq)]\n{}pub enum {} {{", pad, pad, name).unwrap(),
            TypeKind::Alias(target) => {
                writeln!(self.body, "{}pub type {} = {};", pad, name, target).unwrap();
            }
        }
        if !is_alias {
            self.indent += 1;
        }
    }

    fn end_type(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
        writeln!(self.body, "{}}}", self.pad()).unwrap();
    }

    fn field(&mut self, name: &str, ty: &str, default: Option<&str>) {
        self.flush_doc_comment();
        match default {
            Some(default) => writeln!(self.body, "{}pub {}: {}, // default: {}", self.pad(), name, ty, default).unwrap(),
            None => writeln!(self.body, "{}pub {}: {},", self.pad(), name, ty).unwrap(),
        }
    }

    fn variant(&mut self, name: &str, payload: Option<&str>) {
        self.flush_doc_comment();
        match payload {
            Some(payload) => writeln!(self.body, "{}{}({}),", self.pad(), name, payload).unwrap(),
            None => writeln!(self.body, "{}{},", self.pad(), name).unwrap(),
        }
    }

    fn begin_function(&mut self, name: &str, args: &[(String, String)], returns: &str) {
        self.flush_doc_comment();
        let rendered_args: Vec<String> = args.iter().map(|(n, t)| format!("{}: {}", n, t)).collect();
        writeln!(
            self.body,
            "{}pub fn {}({}) -> {} {{",
            self.pad(),
            name,
            rendered_args.join(", "),
            returns
        )
        .unwrap();
        self.indent += 1;
    }

    fn end_function(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
        writeln!(self.body, "{}}}", self.pad()).unwrap();
    }

    fn begin_if(&mut self, cond: &str) {
        writeln!(self.body, "{}if {} {{", self.pad(), cond).unwrap();
        self.indent += 1;
    }

    fn end_if(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
        writeln!(self.body, "{}}}", self.pad()).unwrap();
    }

    fn begin_match(&mut self, scrutinee: &str) {
        writeln!(self.body, "{}match {} {{", self.pad(), scrutinee).unwrap();
        self.indent += 1;
    }

    fn match_arm(&mut self, pattern: &str, body: &str) {
        writeln!(self.body, "{}{} => {},", self.pad(), pattern, body).unwrap();
    }

    fn end_match(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
        writeln!(self.body, "{}}}", self.pad()).unwrap();
    }

    fn statement(&mut self, code: &str) {
        writeln!(self.body, "{}{};", self.pad(), code).unwrap();
    }

    fn return_stmt(&mut self, expr: &str) {
        writeln!(self.body, "{}return {};", self.pad(), expr).unwrap();
    }
}
