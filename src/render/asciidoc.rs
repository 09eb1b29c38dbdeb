use super::{Renderer, single_line};
use crate::tree::{
    Link, Subtitle, Summary, Table, TableCell, TableHeaderCell, TableHeaderRow, TableRow, Text,
    Title, Visitor, walk_table, walk_table_cell, walk_table_header_row, walk_table_row,
};

/// Renders AsciiDoc with `|===` tables and `xref:` links.
#[derive(Debug, Default)]
pub struct AsciiDocRenderer {
    output: String,
}

impl AsciiDocRenderer {
    /// Creates a renderer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    fn end_line(&mut self) {
        let trimmed = self.output.trim_end_matches([' ', '\t']).len();
        self.output.truncate(trimmed);
        self.output.push('\n');
    }
}

impl Visitor for AsciiDocRenderer {
    fn visit_title(&mut self, title: &Title) {
        self.output
            .push_str(&format!("= {}\n\n", single_line(&title.0)));
    }

    fn visit_subtitle(&mut self, subtitle: &Subtitle) {
        self.output
            .push_str(&format!("== {}\n\n", single_line(&subtitle.0)));
    }

    fn visit_summary(&mut self, summary: &Summary) {
        if !summary.0.is_empty() {
            self.output.push_str(&format!("{}\n\n", summary.0));
        }
    }

    fn visit_table(&mut self, table: &Table) {
        self.output.push_str("[options=\"header\"]\n|===\n");
        walk_table(self, table);
        self.output.push_str("|===\n");
    }

    fn visit_table_header_row(&mut self, row: &TableHeaderRow) {
        walk_table_header_row(self, row);
        self.end_line();
    }

    fn visit_table_header_cell(&mut self, cell: &TableHeaderCell) {
        self.output.push_str(&format!("| {} ", escape(&cell.0)));
    }

    fn visit_table_row(&mut self, row: &TableRow) {
        walk_table_row(self, row);
        self.end_line();
    }

    fn visit_table_cell(&mut self, cell: &TableCell) {
        self.output.push_str("| ");
        walk_table_cell(self, cell);
        self.output.push(' ');
    }

    fn visit_link(&mut self, link: &Link) {
        self.output
            .push_str(&format!("xref:{}[{}]", link.target, escape(&link.text)));
    }

    fn visit_text(&mut self, text: &Text) {
        self.output.push_str(&escape(&text.0));
    }
}

impl Renderer for AsciiDocRenderer {
    fn result(&self) -> &str {
        &self.output
    }

    fn clear(&mut self) {
        self.output.clear();
    }
}

/// Escapes cell separators and folds the text onto one line.
pub(crate) fn escape(input: &str) -> String {
    single_line(input).replace('|', "\\|")
}
