//! Format renderers.
//!
//! Each renderer is a [`Visitor`] accumulating markup in its own buffer.
//! The buffer is read with [`Renderer::result`] and reset with
//! [`Renderer::clear`] between documents.

mod asciidoc;
mod html;
mod markdown;

pub use asciidoc::AsciiDocRenderer;
pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;

use crate::{
    options::Format,
    tree::{Document, Visitor},
};

/// A visitor producing markup text.
pub trait Renderer: Visitor {
    /// Markup accumulated so far.
    fn result(&self) -> &str;

    /// Discards the accumulated markup.
    fn clear(&mut self);

    /// Renders a whole document from a clean buffer.
    fn render(&mut self, document: &Document) -> String {
        self.clear();
        self.visit_document(document);
        self.result().to_string()
    }
}

impl Format {
    /// Renderer producing this format.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Format::AsciiDoc => Box::new(AsciiDocRenderer::new()),
            Format::Markdown => Box::new(MarkdownRenderer::new()),
            Format::Html => Box::new(HtmlRenderer::new()),
        }
    }
}

/// Replaces line breaks with spaces so cell text stays on one line.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
