use super::Renderer;
use crate::tree::{
    Document, Link, Subtitle, Summary, Table, TableBody, TableCell, TableHeader, TableHeaderCell,
    TableRow, Text, Title, Visitor, walk_document, walk_table, walk_table_body, walk_table_cell,
    walk_table_header, walk_table_row,
};

/// Renders a standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    /// Creates a renderer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for HtmlRenderer {
    fn visit_document(&mut self, document: &Document) {
        self.output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        self.output.push_str("<meta charset=\"utf-8\">\n");
        self.output.push_str(&format!(
            "<title>{}</title>\n",
            html_escape(&document.title.0)
        ));
        self.output.push_str("</head>\n<body>\n");

        walk_document(self, document);

        self.output.push_str("</body>\n</html>\n");
    }

    fn visit_title(&mut self, title: &Title) {
        self.output
            .push_str(&format!("<h1>{}</h1>\n", html_escape(&title.0)));
    }

    fn visit_subtitle(&mut self, subtitle: &Subtitle) {
        self.output
            .push_str(&format!("<h2>{}</h2>\n", html_escape(&subtitle.0)));
    }

    fn visit_summary(&mut self, summary: &Summary) {
        if !summary.0.is_empty() {
            self.output
                .push_str(&format!("<p>{}</p>\n", html_escape(&summary.0)));
        }
    }

    fn visit_table(&mut self, table: &Table) {
        self.output.push_str("<table>\n");
        walk_table(self, table);
        self.output.push_str("</table>\n");
    }

    fn visit_table_header(&mut self, header: &TableHeader) {
        self.output.push_str("<thead>\n<tr>");
        walk_table_header(self, header);
        self.output.push_str("</tr>\n</thead>\n");
    }

    fn visit_table_header_cell(&mut self, cell: &TableHeaderCell) {
        self.output
            .push_str(&format!("<th>{}</th>", html_escape(&cell.0)));
    }

    fn visit_table_body(&mut self, body: &TableBody) {
        self.output.push_str("<tbody>\n");
        walk_table_body(self, body);
        self.output.push_str("</tbody>\n");
    }

    fn visit_table_row(&mut self, row: &TableRow) {
        self.output.push_str("<tr>");
        walk_table_row(self, row);
        self.output.push_str("</tr>\n");
    }

    fn visit_table_cell(&mut self, cell: &TableCell) {
        self.output.push_str("<td>");
        walk_table_cell(self, cell);
        self.output.push_str("</td>");
    }

    fn visit_link(&mut self, link: &Link) {
        self.output.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            html_escape(&link.target),
            html_escape(&link.text)
        ));
    }

    fn visit_text(&mut self, text: &Text) {
        self.output.push_str(&html_escape(&text.0));
    }
}

impl Renderer for HtmlRenderer {
    fn result(&self) -> &str {
        &self.output
    }

    fn clear(&mut self) {
        self.output.clear();
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
