//! Recursive tree parser.
//!
//! Walks an annotated root type and the custom types reachable from its
//! public properties, producing the document trees of one generation pass.
//! Two layouts are available, picked from
//! [`ComplexLayout`](crate::options::ComplexLayout):
//!
//! - [`InlineParser`] flattens nested properties into a single table,
//!   naming rows by their colon-joined path (`Database:Port`).
//! - [`SeparateTablesParser`] emits one tree per custom type and links to
//!   it from the parent table.
//!
//! Both walks expand each type at most once per pass, which terminates
//! reference cycles.

mod entry;
mod inline;
mod separate;

pub use entry::DocumentationEntry;
pub use inline::InlineParser;
pub use separate::SeparateTablesParser;

use crate::{
    model::{TypeId, TypeModel},
    options::{ComplexLayout, DocumentationOptions},
    output::FileLedger,
    tree::Document,
};

/// Joins nested property names in inline layout.
pub const PATH_SEPARATOR: &str = ":";

/// Heading of every root document.
pub const ROOT_TITLE: &str = "Configuration Documentation";

/// A document tree and the type it documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTree {
    /// Documented type.
    pub type_id: TypeId,
    /// File name claimed for this tree, when the layout assigns one.
    pub file_name: Option<String>,
    /// The tree itself.
    pub document: Document,
}

/// Builds the document trees of one generation pass.
pub trait DocumentationParser {
    /// Parses `root` into one or more trees, root first. File names are
    /// claimed from `ledger` when the layout produces several files.
    fn parse(
        &self,
        model: &TypeModel,
        root: TypeId,
        options: &DocumentationOptions,
        ledger: &mut FileLedger,
    ) -> Vec<ParsedTree>;
}

/// Parser implementing `layout`.
pub fn parser_for(layout: ComplexLayout) -> Box<dyn DocumentationParser> {
    match layout {
        ComplexLayout::InlineFlatten => Box::new(InlineParser),
        ComplexLayout::SeparateTables => Box::new(SeparateTablesParser),
    }
}

fn root_document(model: &TypeModel, id: TypeId, options: &DocumentationOptions) -> Document {
    Document::new(ROOT_TITLE)
        .with_subtitle(model.friendly_name(id, options.include_namespaces))
        .with_summary(model.type_summary(id))
}

fn nested_document(model: &TypeModel, id: TypeId, options: &DocumentationOptions) -> Document {
    let name = model.friendly_name(id, options.include_namespaces);
    Document::new(format!("{name} Configuration")).with_summary(model.type_summary(id))
}
