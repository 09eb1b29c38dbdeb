use super::{
    Accessibility, PropertyDescriptor, SpecialType, TypeDescriptor, TypeId, TypeKind, TypeModel,
    TypeRef, doc_comment,
};

/// What a declared type refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// A compiler-special primitive.
    Special(SpecialType),
    /// A type described by the model.
    Model(TypeId),
    /// Anything else: arrays, framework types absent from the model,
    /// unknown names.
    Unresolved,
}

impl TypeModel {
    /// Resolves a type reference as seen from a type in `context_namespace`.
    /// Nullable wrappers are transparent.
    pub fn resolve(&self, type_ref: &TypeRef, context_namespace: &str) -> Resolved {
        match type_ref.strip_nullable() {
            named @ TypeRef::Named { name, .. } => {
                if let Some(special) = named.special() {
                    return Resolved::Special(special);
                }
                self.lookup(name, context_namespace)
                    .map_or(Resolved::Unresolved, Resolved::Model)
            }
            _ => Resolved::Unresolved,
        }
    }

    /// Type used for classification: the element of an array or of a
    /// single-argument sequence, otherwise the declared type itself.
    ///
    /// Only one level is unwrapped; a sequence of sequences yields the
    /// inner sequence.
    pub fn effective_type<'a>(&self, type_ref: &'a TypeRef, context_namespace: &str) -> &'a TypeRef {
        let declared = type_ref.strip_nullable();
        match declared {
            TypeRef::Array(element) => element.strip_nullable(),
            TypeRef::Named { name, args } if args.len() == 1 => {
                if self.is_sequence(name, context_namespace) {
                    args[0].strip_nullable()
                } else {
                    declared
                }
            }
            _ => declared,
        }
    }

    fn is_sequence(&self, name: &str, context_namespace: &str) -> bool {
        match self.lookup(name, context_namespace) {
            Some(id) => self.get(id).sequence,
            None => TypeRef::is_well_known_sequence(name),
        }
    }

    /// Whether the type is expanded by the documentation walk: a class,
    /// record or struct outside the reserved namespaces.
    pub fn is_custom(&self, id: TypeId) -> bool {
        let descriptor = self.get(id);
        matches!(
            descriptor.kind,
            TypeKind::Class | TypeKind::Record | TypeKind::Struct
        ) && !self.is_reserved_namespace(&descriptor.namespace)
    }

    fn is_reserved_namespace(&self, namespace: &str) -> bool {
        self.reserved_namespaces.iter().any(|reserved| {
            namespace == reserved
                || namespace
                    .strip_prefix(reserved.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// The custom type a property expands into, after unwrapping.
    pub fn custom_target(&self, owner: TypeId, property: &PropertyDescriptor) -> Option<TypeId> {
        let namespace = &self.get(owner).namespace;
        let effective = self.effective_type(&property.type_ref, namespace);
        match self.resolve(effective, namespace) {
            Resolved::Model(id) if self.is_custom(id) => Some(id),
            _ => None,
        }
    }

    /// Public, non-excluded properties of a type in declaration order.
    ///
    /// A property is also skipped when its effective type is a model type
    /// carrying the exclusion marker.
    pub fn documented_properties(
        &self,
        id: TypeId,
    ) -> impl Iterator<Item = &PropertyDescriptor> + '_ {
        let descriptor = self.get(id);
        descriptor.properties.iter().filter(move |property| {
            property.accessibility == Accessibility::Public
                && !property.is_excluded()
                && !self.targets_excluded_type(descriptor, property)
        })
    }

    fn targets_excluded_type(&self, owner: &TypeDescriptor, property: &PropertyDescriptor) -> bool {
        let effective = self.effective_type(&property.type_ref, &owner.namespace);
        match self.resolve(effective, &owner.namespace) {
            Resolved::Model(target) => self.get(target).is_excluded(),
            _ => false,
        }
    }

    /// Display name, namespace-qualified on request.
    pub fn friendly_name(&self, id: TypeId, include_namespaces: bool) -> String {
        let descriptor = self.get(id);
        if include_namespaces {
            descriptor.full_name()
        } else {
            descriptor.name.clone()
        }
    }

    /// Summary text of a type's doc comment.
    pub fn type_summary(&self, id: TypeId) -> String {
        doc_comment::summary(self.get(id).documentation.as_deref())
    }

    /// Summary text of a property's doc comment.
    pub fn property_summary(&self, property: &PropertyDescriptor) -> String {
        doc_comment::summary(property.documentation.as_deref())
    }

    /// Default value: the initializer as written, else the first member of
    /// an enum-typed property, else empty.
    pub fn default_value(&self, owner: TypeId, property: &PropertyDescriptor) -> String {
        if let Some(initializer) = property
            .initializer
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
        {
            return initializer.to_string();
        }

        self.enum_members(owner, &property.type_ref)
            .and_then(<[String]>::first)
            .cloned()
            .unwrap_or_default()
    }

    /// Example value: the doc-comment example, else one synthesized from
    /// the declared type.
    pub fn example_value(&self, owner: TypeId, property: &PropertyDescriptor) -> String {
        let documented = doc_comment::example(property.documentation.as_deref());
        if !documented.is_empty() {
            return documented;
        }
        self.synthesize_example(owner, &property.type_ref)
    }

    fn synthesize_example(&self, owner: TypeId, type_ref: &TypeRef) -> String {
        if let Some(members) = self.enum_members(owner, type_ref) {
            return members.first().cloned().unwrap_or_default();
        }

        let declared = type_ref.strip_nullable();
        if let Some(special) = declared.special() {
            match special {
                SpecialType::String => return "example".to_string(),
                SpecialType::Boolean => return "true".to_string(),
                SpecialType::Char => return "c".to_string(),
                numeric if numeric.is_numeric() => return "123".to_string(),
                _ => {}
            }
        }

        match declared {
            TypeRef::Array(_) => "[ ]".to_string(),
            TypeRef::Named { args, .. } if args.len() == 1 => {
                if args[0].special() == Some(SpecialType::String) {
                    "[ \"en\" ]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            _ => "{ }".to_string(),
        }
    }

    fn enum_members(&self, owner: TypeId, type_ref: &TypeRef) -> Option<&[String]> {
        let namespace = &self.get(owner).namespace;
        match self.resolve(type_ref, namespace) {
            Resolved::Model(id) if self.get(id).kind == TypeKind::Enum => {
                Some(self.get(id).members.as_slice())
            }
            _ => None,
        }
    }
}
