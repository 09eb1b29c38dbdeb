use crate::{
    model::{PropertyDescriptor, TypeId, TypeModel},
    tree::{TableCell, TableRow},
};

/// One documented property, ready to become a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationEntry {
    /// Type declaring the property.
    pub owner: TypeId,
    /// Colon-joined path in inline layout, bare name otherwise.
    pub parameter_name: String,
    /// Declared type as displayed.
    pub parameter_type: String,
    /// Initializer text or enum fallback.
    pub default_value: String,
    /// Doc-comment summary.
    pub summary: String,
    /// Doc-comment example or synthesized sample.
    pub example_value: String,
}

impl DocumentationEntry {
    /// Collects the entry for `property` declared on `owner`.
    pub fn from_property(
        model: &TypeModel,
        owner: TypeId,
        property: &PropertyDescriptor,
        parameter_name: String,
    ) -> Self {
        Self {
            owner,
            parameter_name,
            parameter_type: property.type_ref.to_string(),
            default_value: model.default_value(owner, property),
            summary: model.property_summary(property),
            example_value: model.example_value(owner, property),
        }
    }

    /// Row with plain text in every column.
    pub fn into_row(self) -> TableRow {
        self.row_with(TableCell::text)
    }

    /// Row whose parameter cell links to `target`.
    pub fn into_link_row(self, target: &str) -> TableRow {
        self.row_with(|name| TableCell::link(target, name))
    }

    fn row_with(self, name_cell: impl FnOnce(String) -> TableCell) -> TableRow {
        let Self {
            parameter_name,
            parameter_type,
            default_value,
            summary,
            example_value,
            ..
        } = self;

        TableRow {
            cells: vec![
                name_cell(parameter_name),
                TableCell::text(parameter_type),
                TableCell::text(default_value),
                TableCell::text(example_value),
                TableCell::text(summary),
            ],
        }
    }
}
