use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{
    DocumentationEntry, DocumentationParser, ParsedTree, nested_document, root_document,
};
use crate::{
    model::{TypeId, TypeModel},
    options::DocumentationOptions,
    output::{FileLedger, base_file_name},
};

/// Produces one tree per custom type, with link rows pointing from each
/// parent table to the nested type's file.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparateTablesParser;

impl DocumentationParser for SeparateTablesParser {
    fn parse(
        &self,
        model: &TypeModel,
        root: TypeId,
        options: &DocumentationOptions,
        ledger: &mut FileLedger,
    ) -> Vec<ParsedTree> {
        let mut walk = SeparateWalk {
            model,
            options,
            ledger,
            visited: HashSet::new(),
            file_names: HashMap::new(),
            trees: Vec::new(),
        };

        let (file_name, _) = walk.file_name_for(root);
        walk.trees.push(ParsedTree {
            type_id: root,
            file_name: Some(file_name),
            document: root_document(model, root, options),
        });
        walk.expand(root, 0);

        walk.trees
    }
}

struct SeparateWalk<'a> {
    model: &'a TypeModel,
    options: &'a DocumentationOptions,
    ledger: &'a mut FileLedger,
    visited: HashSet<TypeId>,
    file_names: HashMap<TypeId, String>,
    trees: Vec<ParsedTree>,
}

impl SeparateWalk<'_> {
    /// File name of a type's tree, claiming one on first sight. The flag
    /// reports whether the name was newly claimed.
    fn file_name_for(&mut self, id: TypeId) -> (String, bool) {
        if let Some(existing) = self.file_names.get(&id) {
            return (existing.clone(), false);
        }

        let base = base_file_name(self.model, id, self.options.include_namespaces);
        let file_name = self
            .ledger
            .claim(&base, self.options.format.file_extension());
        self.file_names.insert(id, file_name.clone());
        (file_name, true)
    }

    fn expand(&mut self, current: TypeId, tree_index: usize) {
        if !self.visited.insert(current) {
            debug!(
                type_name = %self.model.get(current).full_name(),
                "Type already expanded in this pass, skipping"
            );
            return;
        }

        let model = self.model;
        for property in model.documented_properties(current) {
            let entry =
                DocumentationEntry::from_property(model, current, property, property.name.clone());

            let Some(target) = model.custom_target(current, property) else {
                self.trees[tree_index].document.table.push_row(entry.into_row());
                continue;
            };

            let (file_name, is_new) = self.file_name_for(target);
            self.trees[tree_index]
                .document
                .table
                .push_row(entry.into_link_row(&file_name));

            if is_new {
                self.trees.push(ParsedTree {
                    type_id: target,
                    file_name: Some(file_name),
                    document: nested_document(model, target, self.options),
                });
                let nested_index = self.trees.len() - 1;
                self.expand(target, nested_index);
            }
        }
    }
}
