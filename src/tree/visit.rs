use super::{
    Document, Inline, Link, Subtitle, Summary, Table, TableBody, TableCell, TableHeader,
    TableHeaderCell, TableHeaderRow, TableRow, Text, Title,
};

/// Callbacks for each node kind of a [`Document`].
///
/// Leaf kinds must be implemented; container kinds default to visiting
/// their children in order through the matching `walk_*` function, so an
/// implementation only overrides them to emit surrounding markup.
pub trait Visitor {
    /// Whole document.
    fn visit_document(&mut self, document: &Document) {
        walk_document(self, document);
    }

    /// Main heading.
    fn visit_title(&mut self, title: &Title);

    /// Secondary heading.
    fn visit_subtitle(&mut self, subtitle: &Subtitle);

    /// Summary paragraph.
    fn visit_summary(&mut self, summary: &Summary);

    /// Table.
    fn visit_table(&mut self, table: &Table) {
        walk_table(self, table);
    }

    /// Table header section.
    fn visit_table_header(&mut self, header: &TableHeader) {
        walk_table_header(self, header);
    }

    /// Header row.
    fn visit_table_header_row(&mut self, row: &TableHeaderRow) {
        walk_table_header_row(self, row);
    }

    /// Column label.
    fn visit_table_header_cell(&mut self, cell: &TableHeaderCell);

    /// Table body section.
    fn visit_table_body(&mut self, body: &TableBody) {
        walk_table_body(self, body);
    }

    /// Data row.
    fn visit_table_row(&mut self, row: &TableRow) {
        walk_table_row(self, row);
    }

    /// Data cell.
    fn visit_table_cell(&mut self, cell: &TableCell) {
        walk_table_cell(self, cell);
    }

    /// Hyperlink.
    fn visit_link(&mut self, link: &Link);

    /// Plain text.
    fn visit_text(&mut self, text: &Text);
}

/// Visits title, subtitle, summary and table in that order.
pub fn walk_document<V: Visitor + ?Sized>(visitor: &mut V, document: &Document) {
    visitor.visit_title(&document.title);
    if let Some(subtitle) = &document.subtitle {
        visitor.visit_subtitle(subtitle);
    }
    if let Some(summary) = &document.summary {
        visitor.visit_summary(summary);
    }
    visitor.visit_table(&document.table);
}

/// Visits header then body.
pub fn walk_table<V: Visitor + ?Sized>(visitor: &mut V, table: &Table) {
    visitor.visit_table_header(&table.header);
    visitor.visit_table_body(&table.body);
}

/// Visits the header row.
pub fn walk_table_header<V: Visitor + ?Sized>(visitor: &mut V, header: &TableHeader) {
    visitor.visit_table_header_row(&header.row);
}

/// Visits each column label.
pub fn walk_table_header_row<V: Visitor + ?Sized>(visitor: &mut V, row: &TableHeaderRow) {
    for cell in &row.cells {
        visitor.visit_table_header_cell(cell);
    }
}

/// Visits each row.
pub fn walk_table_body<V: Visitor + ?Sized>(visitor: &mut V, body: &TableBody) {
    for row in &body.rows {
        visitor.visit_table_row(row);
    }
}

/// Visits each cell.
pub fn walk_table_row<V: Visitor + ?Sized>(visitor: &mut V, row: &TableRow) {
    for cell in &row.cells {
        visitor.visit_table_cell(cell);
    }
}

/// Visits the cell content.
pub fn walk_table_cell<V: Visitor + ?Sized>(visitor: &mut V, cell: &TableCell) {
    walk_inline(visitor, &cell.content);
}

/// Dispatches on the inline kind.
pub fn walk_inline<V: Visitor + ?Sized>(visitor: &mut V, inline: &Inline) {
    match inline {
        Inline::Text(text) => visitor.visit_text(text),
        Inline::Link(link) => visitor.visit_link(link),
    }
}
