use std::collections::HashSet;

use tracing::debug;

use super::{DocumentationEntry, DocumentationParser, PATH_SEPARATOR, ParsedTree, root_document};
use crate::{
    model::{TypeId, TypeModel},
    options::DocumentationOptions,
    output::FileLedger,
    tree::Table,
};

/// Flattens every leaf property reachable from the root into one table.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineParser;

impl DocumentationParser for InlineParser {
    fn parse(
        &self,
        model: &TypeModel,
        root: TypeId,
        options: &DocumentationOptions,
        _ledger: &mut FileLedger,
    ) -> Vec<ParsedTree> {
        let mut visited = HashSet::new();
        let mut document = root_document(model, root, options);

        collect_rows(model, root, "", &mut visited, &mut document.table);

        vec![ParsedTree {
            type_id: root,
            file_name: None,
            document,
        }]
    }
}

fn collect_rows(
    model: &TypeModel,
    current: TypeId,
    prefix: &str,
    visited: &mut HashSet<TypeId>,
    table: &mut Table,
) {
    if !visited.insert(current) {
        debug!(
            type_name = %model.get(current).full_name(),
            "Type already expanded in this pass, skipping"
        );
        return;
    }

    for property in model.documented_properties(current) {
        let parameter_name = if prefix.is_empty() {
            property.name.clone()
        } else {
            format!("{prefix}{PATH_SEPARATOR}{}", property.name)
        };

        match model.custom_target(current, property) {
            Some(target) => collect_rows(model, target, &parameter_name, visited, table),
            None => {
                let entry =
                    DocumentationEntry::from_property(model, current, property, parameter_name);
                table.push_row(entry.into_row());
            }
        }
    }
}
