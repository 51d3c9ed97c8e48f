/*!
The Readme hook (spec.md §6.5): renders a service's `documentation` trait into a
Markdown file, using `somedoc` the way `atelier-describe` already builds a `Document`
from a model.
*/

use crate::docstring::html_to_markdown;
use smithy_symbols::error::{ErrorKind, Result};
use smithy_symbols::identity::ShapeId;
use smithy_symbols::model::Model;
use smithy_symbols::syntax::{PRELUDE_NAMESPACE, TRAIT_DOCUMENTATION};
use somedoc::model::block::{HasBlockContent, Heading};
use somedoc::model::Document;
use somedoc::write::markdown::MarkdownFlavor;
use somedoc::write::{write_document_to_string, OutputFormat};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The context a caller supplies to [`render_readme`] (spec.md §6.5: `{slug, title,
/// intro?}`).
#[derive(Clone, Debug)]
pub struct ReadmeContext {
    /// The generated crate's package name, used for the install/usage snippet.
    pub slug: String,
    /// The document's top-level title, typically the service's display name.
    pub title: String,
    /// Free-form introductory text, already Markdown (see [`html_to_markdown`]); `None`
    /// when the service carries no `documentation` trait.
    pub intro: Option<String>,
}

impl ReadmeContext {
    /// Build a context from a service shape's name and its `documentation` trait, if
    /// any.
    pub fn from_service(model: &Model, service_id: ShapeId, slug: impl Into<String>) -> Self {
        let title = model.name(service_id).unwrap_or("Service").to_string();
        let doc_trait = ShapeId::of(&format!("{}#{}", PRELUDE_NAMESPACE, TRAIT_DOCUMENTATION));
        let intro = model
            .trait_value(service_id, doc_trait)
            .and_then(|v| v.as_ref())
            .and_then(|v| v.as_str())
            .map(html_to_markdown);
        Self { slug: slug.into(), title, intro }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Render `context` to a Markdown string.
pub fn render_readme(context: &ReadmeContext) -> Result<String> {
    let mut document = Document::default();
    let doc = document.set_title(&context.title);

    if let Some(intro) = &context.intro {
        let _ = doc.add_paragraph(intro.clone().into());
    }

    let doc = doc.add_heading(Heading::section("Installation"));
    let _ = doc.add_paragraph(format!("Add `{}` to your `Cargo.toml` dependencies.", context.slug).into());

    write_document_to_string(&document, OutputFormat::Markdown(MarkdownFlavor::CommonMark)).map_err(|err| ErrorKind::PolicyAbort(format!("readme render failed: {}", err)).into())
}
