//! Format-agnostic document tree.
//!
//! The parser builds a [`Document`] per output file; renderers walk it
//! through the [`Visitor`] protocol. Building a tree never renders it, so
//! one tree can be rendered to every format.

mod visit;

pub use visit::{
    Visitor, walk_document, walk_inline, walk_table, walk_table_body, walk_table_cell,
    walk_table_header, walk_table_header_row, walk_table_row,
};

/// Fixed column labels of every documentation table.
pub const COLUMN_LABELS: [&str; 5] = [
    "Parameter",
    "Type",
    "Default Value",
    "Example Value",
    "Description",
];

/// One output document: heading, optional subtitle and summary, one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Main heading.
    pub title: Title,
    /// Secondary heading.
    pub subtitle: Option<Subtitle>,
    /// Introductory paragraph.
    pub summary: Option<Summary>,
    /// The parameter table.
    pub table: Table,
}

impl Document {
    /// Creates a document with an empty table.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title(title.into()),
            subtitle: None,
            summary: None,
            table: Table::default(),
        }
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(Subtitle(subtitle.into()));
        self
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(Summary(summary.into()));
        self
    }
}

/// Document heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(pub String);

/// Secondary heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle(pub String);

/// Summary paragraph; may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(pub String);

/// A table with the fixed header and any number of rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column labels.
    pub header: TableHeader,
    /// Data rows.
    pub body: TableBody,
}

impl Table {
    /// Appends a row.
    pub fn push_row(&mut self, row: TableRow) {
        self.body.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.body.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.body.rows.is_empty()
    }
}

/// Table header section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableHeader {
    /// The single header row.
    pub row: TableHeaderRow,
}

/// Header row holding the column labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeaderRow {
    /// Column label cells.
    pub cells: Vec<TableHeaderCell>,
}

impl Default for TableHeaderRow {
    fn default() -> Self {
        Self {
            cells: COLUMN_LABELS
                .iter()
                .map(|label| TableHeaderCell(label.to_string()))
                .collect(),
        }
    }
}

/// Column label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeaderCell(pub String);

/// Table body section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableBody {
    /// Rows in insertion order.
    pub rows: Vec<TableRow>,
}

/// One data row; always as many cells as there are columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Cells in column order.
    pub cells: Vec<TableCell>,
}

/// A data cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Cell content.
    pub content: Inline,
}

impl TableCell {
    /// A plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Inline::Text(Text(text.into())),
        }
    }

    /// A hyperlink cell.
    pub fn link(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content: Inline::Link(Link {
                target: target.into(),
                text: text.into(),
            }),
        }
    }
}

/// Inline content of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text.
    Text(Text),
    /// Cross-reference to another output file.
    Link(Link),
}

/// Plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

/// A cross-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// File name or anchor the link points at.
    pub target: String,
    /// Display text.
    pub text: String,
}

#[cfg(test)]
mod tests;
