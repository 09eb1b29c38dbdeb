//! Type introspection layer.
//!
//! The host compiler hands over its symbol model as a serialized
//! [`ModelFile`]: every type with its public surface, attributes and doc
//! comments. [`TypeModel`] indexes those descriptors and answers the
//! questions the documentation walk asks about them.

pub mod doc_comment;
mod introspect;
mod loading;
mod type_ref;

pub use introspect::Resolved;
pub use type_ref::{SpecialType, TypeRef};

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ConfdocError, Result};

/// Attribute requesting documentation for a type.
pub const DOCUMENTATION_ATTRIBUTE: &str = "Documentation";

/// Attribute removing a type or property from generated documentation.
pub const EXCLUDE_ATTRIBUTE: &str = "ExcludeFromDocumentation";

/// Namespaces treated as framework code unless configured otherwise.
pub const DEFAULT_RESERVED_NAMESPACES: &[&str] = &["System", "Microsoft"];

/// Serialized form of a type model, as produced by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ModelFile {
    /// Every type visible to the generator.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Reference type.
    #[default]
    Class,
    /// Record type.
    Record,
    /// Value type.
    Struct,
    /// Interface.
    Interface,
    /// Enumeration.
    Enum,
    /// Delegate.
    Delegate,
}

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    /// Visible everywhere.
    #[default]
    Public,
    /// Visible within the assembly.
    Internal,
    /// Visible to derived types.
    Protected,
    /// Visible to the declaring type only.
    Private,
}

/// A positional attribute argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal, including enum ordinals.
    Integer(i64),
    /// String literal, or an enum member name.
    String(String),
}

/// An attribute instance applied to a type or member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Attribute {
    /// Attribute class name, optionally namespace-qualified.
    pub name: String,
    /// Constructor arguments in declaration order.
    #[serde(default)]
    pub arguments: Vec<AttributeValue>,
}

impl Attribute {
    /// Whether this attribute is `short_name`, ignoring namespace and an
    /// `Attribute` suffix.
    pub fn is(&self, short_name: &str) -> bool {
        let simple = self.name.rsplit('.').next().unwrap_or(&self.name);
        let simple = simple.strip_suffix("Attribute").unwrap_or(simple);
        simple == short_name
    }
}

/// A public property of a type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    #[schemars(with = "String")]
    pub type_ref: TypeRef,
    /// Declared accessibility.
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Attributes applied to the property.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Doc-comment XML.
    #[serde(default)]
    pub documentation: Option<String>,
    /// Initializer expression as written in source.
    #[serde(default)]
    pub initializer: Option<String>,
}

impl PropertyDescriptor {
    /// Whether the property carries the exclusion marker.
    pub fn is_excluded(&self) -> bool {
        self.attributes.iter().any(|attr| attr.is(EXCLUDE_ATTRIBUTE))
    }
}

/// A class, record, struct or enum known to the host.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TypeDescriptor {
    /// Simple type name.
    pub name: String,
    /// Containing namespace, empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    /// Type kind.
    #[serde(default)]
    pub kind: TypeKind,
    /// Enum members in declaration order.
    #[serde(default)]
    pub members: Vec<String>,
    /// Whether the type enumerates its single type argument.
    #[serde(default)]
    pub sequence: bool,
    /// Doc-comment XML.
    #[serde(default)]
    pub documentation: Option<String>,
    /// Attributes applied to the type.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Namespace-qualified name.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Whether the type carries the exclusion marker.
    pub fn is_excluded(&self) -> bool {
        self.attributes.iter().any(|attr| attr.is(EXCLUDE_ATTRIBUTE))
    }

    /// Whether the type requests documentation.
    pub fn is_documented(&self) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.is(DOCUMENTATION_ATTRIBUTE))
    }
}

/// Identity handle of a type within one [`TypeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(usize);

/// Indexed, read-only view over the host's types.
#[derive(Debug, Clone)]
pub struct TypeModel {
    types: Vec<TypeDescriptor>,
    by_full_name: HashMap<String, TypeId>,
    by_simple_name: HashMap<String, Vec<TypeId>>,
    reserved_namespaces: Vec<String>,
}

impl TypeModel {
    /// Builds a model from type descriptors.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::DuplicateType` if two descriptors share a
    /// fully qualified name.
    pub fn new(types: Vec<TypeDescriptor>) -> Result<Self> {
        let mut by_full_name = HashMap::new();
        let mut by_simple_name: HashMap<String, Vec<TypeId>> = HashMap::new();

        for (index, descriptor) in types.iter().enumerate() {
            let id = TypeId(index);
            let full_name = descriptor.full_name();
            if by_full_name.insert(full_name.clone(), id).is_some() {
                return Err(ConfdocError::DuplicateType(full_name));
            }
            by_simple_name
                .entry(descriptor.name.clone())
                .or_default()
                .push(id);
        }

        Ok(Self {
            types,
            by_full_name,
            by_simple_name,
            reserved_namespaces: DEFAULT_RESERVED_NAMESPACES
                .iter()
                .map(|ns| ns.to_string())
                .collect(),
        })
    }

    /// Replaces the namespaces whose types are never expanded.
    pub fn with_reserved_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.reserved_namespaces = namespaces;
        self
    }

    /// Namespaces whose types are never expanded.
    pub fn reserved_namespaces(&self) -> &[String] {
        &self.reserved_namespaces
    }

    /// Descriptor for a handle from this model.
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.0]
    }

    /// All types in model order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (TypeId(index), descriptor))
    }

    /// Types requesting documentation, in model order.
    pub fn documented_types(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.iter().filter(|(_, descriptor)| descriptor.is_documented())
    }

    /// Number of types in the model.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the model has no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolves a type name as seen from `context_namespace`.
    ///
    /// Tries the name as fully qualified, then relative to the context
    /// namespace, then as an unambiguous simple name.
    pub fn lookup(&self, name: &str, context_namespace: &str) -> Option<TypeId> {
        let name = name.strip_prefix("global::").unwrap_or(name);
        if let Some(id) = self.by_full_name.get(name) {
            return Some(*id);
        }

        if !context_namespace.is_empty() {
            let relative = format!("{context_namespace}.{name}");
            if let Some(id) = self.by_full_name.get(&relative) {
                return Some(*id);
            }
        }

        if name.contains('.') {
            return None;
        }

        match self.by_simple_name.get(name).map(Vec::as_slice) {
            Some([only]) => Some(*only),
            _ => None,
        }
    }

    /// Finds a type by simple or fully qualified name.
    pub fn find(&self, name: &str) -> Option<TypeId> {
        self.lookup(name, "")
    }
}

#[cfg(test)]
mod tests;
