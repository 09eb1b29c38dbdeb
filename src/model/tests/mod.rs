//! Unit tests for model module
//!
//! Tests type reference parsing, doc-comment extraction, name lookup and
//! the introspection queries used by the documentation walk.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use crate::ConfdocError;
use crate::model::{
    ModelFile, PropertyDescriptor, Resolved, SpecialType, TypeDescriptor, TypeModel, TypeRef,
    doc_comment,
};

const SAMPLE: &str = r#"{
  "types": [
    {
      "name": "AppConfig",
      "namespace": "Sample",
      "documentation": "<summary>Application settings.</summary>",
      "attributes": [{ "name": "Documentation", "arguments": [1, "docs/"] }],
      "properties": [
        { "name": "MaxItems", "type": "int", "initializer": " 100 " },
        { "name": "Name", "type": "string" },
        { "name": "Enabled", "type": "bool" },
        { "name": "Separator", "type": "char" },
        { "name": "Ratio", "type": "double?" },
        { "name": "Level", "type": "LogLevel" },
        { "name": "Empty", "type": "EmptyEnum" },
        { "name": "Tags", "type": "string[]" },
        { "name": "Cultures", "type": "List<string>" },
        { "name": "Ports", "type": "List<int>" },
        { "name": "Limits", "type": "Dictionary<string, int>" },
        { "name": "Database", "type": "DatabaseConfig" },
        { "name": "Replicas", "type": "List<DatabaseConfig>" },
        { "name": "Endpoint", "type": "System.Uri" },
        {
          "name": "Timeout",
          "type": "int",
          "documentation": "<summary>Request timeout.</summary><example>30</example>"
        },
        { "name": "Secret", "type": "string", "attributes": [{ "name": "ExcludeFromDocumentation" }] },
        { "name": "Internal", "type": "string", "accessibility": "internal" },
        { "name": "Hidden", "type": "HiddenConfig" }
      ]
    },
    {
      "name": "DatabaseConfig",
      "namespace": "Sample",
      "properties": [{ "name": "Port", "type": "int", "initializer": "5432" }]
    },
    {
      "name": "HiddenConfig",
      "namespace": "Sample",
      "attributes": [{ "name": "Sample.ExcludeFromDocumentationAttribute" }]
    },
    { "name": "LogLevel", "namespace": "Sample", "kind": "enum", "members": ["Information", "Debug"] },
    { "name": "EmptyEnum", "namespace": "Sample", "kind": "enum" },
    { "name": "Uri", "namespace": "System" }
  ]
}"#;

fn sample_model() -> TypeModel {
    TypeModel::try_from(ModelFile::from_json_str(SAMPLE).unwrap()).unwrap()
}

fn property<'a>(model: &'a TypeModel, owner: &str, name: &str) -> &'a PropertyDescriptor {
    let id = model.find(owner).unwrap();
    model
        .get(id)
        .properties
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("no property {owner}.{name}"))
}

fn example_of(model: &TypeModel, name: &str) -> String {
    let owner = model.find("AppConfig").unwrap();
    model.example_value(owner, property(model, "AppConfig", name))
}

fn default_of(model: &TypeModel, name: &str) -> String {
    let owner = model.find("AppConfig").unwrap();
    model.default_value(owner, property(model, "AppConfig", name))
}

fn plain_type(name: &str) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        namespace: String::new(),
        kind: Default::default(),
        members: Vec::new(),
        sequence: false,
        documentation: None,
        attributes: Vec::new(),
        properties: Vec::new(),
    }
}

#[test]
fn type_ref_parses_arrays_generics_and_nullables() {
    assert_eq!(
        TypeRef::parse("string[]").unwrap(),
        TypeRef::Array(Box::new(TypeRef::named("string")))
    );
    assert_eq!(
        TypeRef::parse("List<string>").unwrap(),
        TypeRef::Named {
            name: "List".to_string(),
            args: vec![TypeRef::named("string")],
        }
    );
    assert_eq!(
        TypeRef::parse("int?").unwrap(),
        TypeRef::Nullable(Box::new(TypeRef::named("int")))
    );
    assert_eq!(
        TypeRef::parse("global::Sample.DatabaseConfig").unwrap(),
        TypeRef::named("Sample.DatabaseConfig")
    );
}

#[test]
fn type_ref_displays_minimally_qualified() {
    let parsed =
        TypeRef::parse("System.Collections.Generic.Dictionary<System.String, Sample.Item[]>?")
            .unwrap();
    assert_eq!(parsed.to_string(), "Dictionary<string, Item[]>?");
    assert_eq!(TypeRef::parse("System.Int32").unwrap().to_string(), "int");
}

#[test]
fn type_ref_written_form_keeps_namespaces() {
    let text = "System.Collections.Generic.List<Sample.Item>";
    assert_eq!(TypeRef::parse(text).unwrap().to_written(), text);
}

#[test]
fn type_ref_rejects_malformed_text() {
    for text in ["", "List<int", "int[,]", "Sample..Item", "int>"] {
        assert!(
            matches!(TypeRef::parse(text), Err(ConfdocError::InvalidTypeRef { .. })),
            "'{text}' should not parse"
        );
    }
}

#[test]
fn special_type_from_keyword_or_framework_name() {
    assert_eq!(SpecialType::from_name("int"), Some(SpecialType::Int32));
    assert_eq!(SpecialType::from_name("System.Int32"), Some(SpecialType::Int32));
    assert_eq!(SpecialType::from_name("String"), None);
    assert!(SpecialType::Decimal.is_numeric());
    assert!(!SpecialType::Char.is_numeric());
}

#[test]
fn doc_comment_summary_strips_markup() {
    let xml = "<summary>\n  Maximum number of <see cref=\"Item\"/> entries,\n  &lt;= 100.\n</summary>";
    assert_eq!(
        doc_comment::summary(Some(xml)),
        "Maximum number of entries, <= 100."
    );
}

#[test]
fn doc_comment_missing_parts_are_empty() {
    assert_eq!(doc_comment::summary(None), "");
    assert_eq!(doc_comment::summary(Some("   ")), "");
    assert_eq!(doc_comment::example(Some("<summary>x</summary>")), "");
    assert_eq!(
        doc_comment::example(Some("<summary>x</summary><example> 42 </example>")),
        "42"
    );
}

#[test]
fn model_rejects_duplicate_types() {
    let result = TypeModel::new(vec![plain_type("Config"), plain_type("Config")]);
    assert!(matches!(result, Err(ConfdocError::DuplicateType(name)) if name == "Config"));
}

#[test]
fn lookup_prefers_full_then_relative_then_unique_simple_name() {
    let mut first = plain_type("Config");
    first.namespace = "A".to_string();
    let mut second = plain_type("Config");
    second.namespace = "B".to_string();
    let mut unique = plain_type("Only");
    unique.namespace = "A.Inner".to_string();
    let model = TypeModel::new(vec![first, second, unique]).unwrap();

    let a = model.lookup("A.Config", "").unwrap();
    assert_eq!(model.get(a).namespace, "A");
    let b = model.lookup("Config", "B").unwrap();
    assert_eq!(model.get(b).namespace, "B");
    assert_eq!(model.lookup("Config", ""), None);
    assert!(model.lookup("Only", "").is_some());
    assert_eq!(model.lookup("Missing.Only", ""), None);
}

#[test]
fn custom_types_exclude_enums_and_reserved_namespaces() {
    let model = sample_model();

    assert!(model.is_custom(model.find("DatabaseConfig").unwrap()));
    assert!(!model.is_custom(model.find("LogLevel").unwrap()));
    assert!(!model.is_custom(model.find("System.Uri").unwrap()));
}

#[test]
fn reserved_namespaces_match_whole_segments() {
    let mut framework = plain_type("Client");
    framework.namespace = "System.Net".to_string();
    let mut lookalike = plain_type("Client");
    lookalike.namespace = "Systematic".to_string();
    let model = TypeModel::new(vec![framework, lookalike]).unwrap();

    assert!(!model.is_custom(model.find("System.Net.Client").unwrap()));
    assert!(model.is_custom(model.find("Systematic.Client").unwrap()));

    let model = model.with_reserved_namespaces(vec!["Systematic".to_string()]);
    assert!(model.is_custom(model.find("System.Net.Client").unwrap()));
    assert!(!model.is_custom(model.find("Systematic.Client").unwrap()));
}

#[test]
fn custom_target_unwraps_one_sequence_level() {
    let model = sample_model();
    let owner = model.find("AppConfig").unwrap();
    let database = model.find("DatabaseConfig");

    assert_eq!(
        model.custom_target(owner, property(&model, "AppConfig", "Database")),
        database
    );
    assert_eq!(
        model.custom_target(owner, property(&model, "AppConfig", "Replicas")),
        database
    );
    assert_eq!(
        model.custom_target(owner, property(&model, "AppConfig", "Endpoint")),
        None
    );
    assert_eq!(
        model.custom_target(owner, property(&model, "AppConfig", "Limits")),
        None
    );
}

#[test]
fn documented_properties_skip_hidden_members() {
    let model = sample_model();
    let names: Vec<&str> = model
        .documented_properties(model.find("AppConfig").unwrap())
        .map(|p| p.name.as_str())
        .collect();

    assert!(names.contains(&"MaxItems"));
    assert!(!names.contains(&"Secret"));
    assert!(!names.contains(&"Internal"));
    assert!(!names.contains(&"Hidden"));
    assert_eq!(names.first(), Some(&"MaxItems"));
}

#[test]
fn default_value_uses_initializer_then_enum_member() {
    let model = sample_model();

    assert_eq!(default_of(&model, "MaxItems"), "100");
    assert_eq!(default_of(&model, "Level"), "Information");
    assert_eq!(default_of(&model, "Empty"), "");
    assert_eq!(default_of(&model, "Name"), "");
}

#[test]
fn example_value_synthesized_from_type() {
    let model = sample_model();

    assert_eq!(example_of(&model, "MaxItems"), "123");
    assert_eq!(example_of(&model, "Ratio"), "123");
    assert_eq!(example_of(&model, "Name"), "example");
    assert_eq!(example_of(&model, "Enabled"), "true");
    assert_eq!(example_of(&model, "Separator"), "c");
    assert_eq!(example_of(&model, "Level"), "Information");
    assert_eq!(example_of(&model, "Empty"), "");
    assert_eq!(example_of(&model, "Tags"), "[ ]");
    assert_eq!(example_of(&model, "Cultures"), "[ \"en\" ]");
    assert_eq!(example_of(&model, "Ports"), "[ ]");
    assert_eq!(example_of(&model, "Database"), "{ }");
    assert_eq!(example_of(&model, "Limits"), "{ }");
}

#[test]
fn example_value_prefers_doc_comment() {
    let model = sample_model();
    assert_eq!(example_of(&model, "Timeout"), "30");
}

#[test]
fn summaries_and_names() {
    let model = sample_model();
    let app = model.find("AppConfig").unwrap();

    assert_eq!(model.type_summary(app), "Application settings.");
    assert_eq!(
        model.property_summary(property(&model, "AppConfig", "Timeout")),
        "Request timeout."
    );
    assert_eq!(model.friendly_name(app, false), "AppConfig");
    assert_eq!(model.friendly_name(app, true), "Sample.AppConfig");
}

#[test]
fn documented_types_in_model_order() {
    let model = sample_model();
    let names: Vec<String> = model
        .documented_types()
        .map(|(_, descriptor)| descriptor.full_name())
        .collect();

    assert_eq!(names, vec!["Sample.AppConfig"]);
}

#[test]
fn model_file_from_toml() {
    let toml_str = r#"
        [[types]]
        name = "Settings"
        namespace = "App"

        [[types.properties]]
        name = "Retries"
        type = "int"
        initializer = "3"
    "#;

    let file = ModelFile::from_toml_str(toml_str).unwrap();
    let model = TypeModel::try_from(file).unwrap();
    let id = model.find("App.Settings").unwrap();

    assert_eq!(model.get(id).properties[0].type_ref, TypeRef::named("int"));
}

#[test]
fn model_file_keeps_bad_type_unparsed() {
    let json = r#"{ "types": [{ "name": "A", "properties": [{ "name": "x", "type": "List<" }] }] }"#;
    let model = TypeModel::try_from(ModelFile::from_json_str(json).unwrap()).unwrap();
    let id = model.find("A").unwrap();
    let property = &model.get(id).properties[0];

    assert_eq!(property.type_ref, TypeRef::Unparsed("List<".to_string()));
    assert_eq!(property.type_ref.to_string(), "List<");
    assert_eq!(property.type_ref.to_written(), "List<");
}

#[test]
fn unparsed_type_is_a_leaf() {
    let json = r#"{ "types": [{ "name": "A", "properties": [{ "name": "x", "type": "Dictionary<string," }] }] }"#;
    let model = TypeModel::try_from(ModelFile::from_json_str(json).unwrap()).unwrap();
    let id = model.find("A").unwrap();
    let property = &model.get(id).properties[0];

    assert_eq!(model.resolve(&property.type_ref, ""), Resolved::Unresolved);
    assert_eq!(model.custom_target(id, property), None);
    assert_eq!(property.type_ref.special(), None);
    assert_eq!(model.example_value(id, property), "{ }");
}

#[test]
fn type_ref_rejects_deep_nesting() {
    let generic = format!("{}int{}", "List<".repeat(200), ">".repeat(200));
    let wrapped = format!("int{}", "[]".repeat(200));
    for text in [generic, wrapped] {
        assert!(matches!(
            TypeRef::parse(&text),
            Err(ConfdocError::InvalidTypeRef { details, .. }) if details == "type nesting too deep"
        ));
    }

    let shallow = format!("{}int{}", "List<".repeat(10), ">".repeat(10));
    assert!(TypeRef::parse(&shallow).is_ok());
}

#[test]
fn load_merges_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("a.json");
    let toml_path = dir.path().join("b.toml");
    fs::write(&json_path, r#"{ "types": [{ "name": "First" }] }"#).unwrap();
    fs::write(&toml_path, "[[types]]\nname = \"Second\"\n").unwrap();

    let model = TypeModel::load(&[&json_path, &toml_path]).unwrap();
    let names: Vec<&str> = model.iter().map(|(_, t)| t.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);

    let duplicate = TypeModel::load(&[&json_path, &json_path]);
    assert!(matches!(duplicate, Err(ConfdocError::DuplicateType(_))));
}
