//! Unit tests for tree module
//!
//! Tests node construction and the default traversal order of the
//! visitor protocol.

use crate::tree::{
    COLUMN_LABELS, Document, Inline, Link, Subtitle, Summary, TableCell, TableHeaderCell,
    TableRow, Text, Title, Visitor,
};

/// Records the leaf nodes it is shown, in order.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Visitor for Recorder {
    fn visit_title(&mut self, title: &Title) {
        self.events.push(format!("title:{}", title.0));
    }

    fn visit_subtitle(&mut self, subtitle: &Subtitle) {
        self.events.push(format!("subtitle:{}", subtitle.0));
    }

    fn visit_summary(&mut self, summary: &Summary) {
        self.events.push(format!("summary:{}", summary.0));
    }

    fn visit_table_header_cell(&mut self, cell: &TableHeaderCell) {
        self.events.push(format!("th:{}", cell.0));
    }

    fn visit_link(&mut self, link: &Link) {
        self.events.push(format!("link:{}->{}", link.text, link.target));
    }

    fn visit_text(&mut self, text: &Text) {
        self.events.push(format!("text:{}", text.0));
    }
}

#[test]
fn new_document_has_fixed_header_and_no_rows() {
    let document = Document::new("Title");

    assert_eq!(document.subtitle, None);
    assert_eq!(document.summary, None);
    assert!(document.table.is_empty());
    let labels: Vec<&str> = document
        .table
        .header
        .row
        .cells
        .iter()
        .map(|cell| cell.0.as_str())
        .collect();
    assert_eq!(labels, COLUMN_LABELS);
}

#[test]
fn cells_build_text_and_links() {
    assert_eq!(
        TableCell::text("int").content,
        Inline::Text(Text("int".to_string()))
    );
    assert_eq!(
        TableCell::link("Db.md", "Database").content,
        Inline::Link(Link {
            target: "Db.md".to_string(),
            text: "Database".to_string(),
        })
    );
}

#[test]
fn default_traversal_visits_in_document_order() {
    let mut document = Document::new("Root")
        .with_subtitle("AppConfig")
        .with_summary("Settings.");
    document.table.push_row(TableRow {
        cells: vec![TableCell::link("Db.md", "Database"), TableCell::text("Db")],
    });
    document.table.push_row(TableRow {
        cells: vec![TableCell::text("MaxItems")],
    });

    let mut recorder = Recorder::default();
    recorder.visit_document(&document);

    let mut expected = vec![
        "title:Root".to_string(),
        "subtitle:AppConfig".to_string(),
        "summary:Settings.".to_string(),
    ];
    expected.extend(COLUMN_LABELS.iter().map(|label| format!("th:{label}")));
    expected.extend([
        "link:Database->Db.md".to_string(),
        "text:Db".to_string(),
        "text:MaxItems".to_string(),
    ]);
    assert_eq!(recorder.events, expected);
    assert_eq!(document.table.len(), 2);
}

#[test]
fn optional_nodes_are_skipped() {
    let mut recorder = Recorder::default();
    recorder.visit_document(&Document::new("Only"));

    assert_eq!(recorder.events[0], "title:Only");
    assert_eq!(recorder.events[1], "th:Parameter");
    assert_eq!(recorder.events.len(), 1 + COLUMN_LABELS.len());
}
