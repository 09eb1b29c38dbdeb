use super::{Renderer, single_line};
use crate::tree::{
    Link, Subtitle, Summary, TableCell, TableHeader, TableHeaderCell, TableHeaderRow, TableRow,
    Text, Title, Visitor, walk_table_cell, walk_table_header_row, walk_table_row,
};

const SPECIAL_CHARACTERS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '!', '|', '<', '>',
];

/// Renders GitHub flavored Markdown.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    output: String,
}

impl MarkdownRenderer {
    /// Creates a renderer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for MarkdownRenderer {
    fn visit_title(&mut self, title: &Title) {
        self.output.push_str(&format!("# {}\n\n", escape(&title.0)));
    }

    fn visit_subtitle(&mut self, subtitle: &Subtitle) {
        self.output.push_str(&format!("## {}\n\n", escape(&subtitle.0)));
    }

    fn visit_summary(&mut self, summary: &Summary) {
        if !summary.0.is_empty() {
            self.output.push_str(&format!("{}\n\n", summary.0));
        }
    }

    fn visit_table_header(&mut self, header: &TableHeader) {
        self.visit_table_header_row(&header.row);

        if !header.row.cells.is_empty() {
            self.output.push('|');
            for _ in &header.row.cells {
                self.output.push_str(" --- |");
            }
            self.output.push('\n');
        }
    }

    fn visit_table_header_row(&mut self, row: &TableHeaderRow) {
        if row.cells.is_empty() {
            return;
        }
        self.output.push('|');
        walk_table_header_row(self, row);
        self.output.push('\n');
    }

    fn visit_table_header_cell(&mut self, cell: &TableHeaderCell) {
        self.output.push_str(&format!(" {} |", escape(&cell.0)));
    }

    fn visit_table_row(&mut self, row: &TableRow) {
        if row.cells.is_empty() {
            return;
        }
        self.output.push('|');
        walk_table_row(self, row);
        self.output.push('\n');
    }

    fn visit_table_cell(&mut self, cell: &TableCell) {
        self.output.push(' ');
        walk_table_cell(self, cell);
        self.output.push_str(" |");
    }

    fn visit_link(&mut self, link: &Link) {
        self.output
            .push_str(&format!("[{}]({})", escape(&link.text), link.target));
    }

    fn visit_text(&mut self, text: &Text) {
        self.output.push_str(&escape(&text.0));
    }
}

impl Renderer for MarkdownRenderer {
    fn result(&self) -> &str {
        &self.output
    }

    fn clear(&mut self) {
        self.output.clear();
    }
}

/// Backslash-escapes Markdown control characters.
pub(crate) fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in single_line(input).chars() {
        if SPECIAL_CHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
