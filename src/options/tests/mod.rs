//! Unit tests for options module
//!
//! Tests decoding of `Documentation` attribute instances.

#![allow(clippy::unwrap_used)]

use crate::model::{Attribute, AttributeValue, ModelFile, TypeModel};
use crate::options::{ComplexLayout, DocumentationOptions, Format, OptionsError};

fn attribute(arguments: Vec<AttributeValue>) -> Attribute {
    Attribute {
        name: "Documentation".to_string(),
        arguments,
    }
}

fn text(value: &str) -> AttributeValue {
    AttributeValue::String(value.to_string())
}

#[test]
fn decode_required_arguments_only() {
    let options = DocumentationOptions::decode(&attribute(vec![
        AttributeValue::Integer(1),
        text("docs/config.md"),
    ]))
    .unwrap();

    assert_eq!(
        options,
        DocumentationOptions {
            format: Format::Markdown,
            output_path: "docs/config.md".to_string(),
            complex_layout: ComplexLayout::InlineFlatten,
            include_namespaces: false,
        }
    );
}

#[test]
fn decode_all_arguments() {
    let options = DocumentationOptions::decode(&attribute(vec![
        AttributeValue::Integer(2),
        text("site/"),
        AttributeValue::Integer(1),
        AttributeValue::Bool(true),
    ]))
    .unwrap();

    assert_eq!(options.format, Format::Html);
    assert_eq!(options.complex_layout, ComplexLayout::SeparateTables);
    assert!(options.include_namespaces);
}

#[test]
fn decode_accepts_member_names() {
    let options = DocumentationOptions::decode(&attribute(vec![
        text("DocumentationFormat.Markdown"),
        text("docs/"),
        text("ComplexParameterFormat.SeparateTables"),
    ]))
    .unwrap();

    assert_eq!(options.format, Format::Markdown);
    assert_eq!(options.complex_layout, ComplexLayout::SeparateTables);

    let legacy = DocumentationOptions::decode(&attribute(vec![
        text("AsciiDoc"),
        text("docs/"),
        text("InlineJsonShort"),
    ]))
    .unwrap();
    assert_eq!(legacy.complex_layout, ComplexLayout::InlineFlatten);
}

#[test]
fn decode_unknown_values_fall_back_to_defaults() {
    let options = DocumentationOptions::decode(&attribute(vec![
        AttributeValue::Integer(42),
        text("docs/"),
        text("Sideways"),
        text("yes"),
    ]))
    .unwrap();

    assert_eq!(options.format, Format::AsciiDoc);
    assert_eq!(options.complex_layout, ComplexLayout::InlineFlatten);
    assert!(!options.include_namespaces);
}

#[test]
fn decode_rejects_incomplete_instances() {
    assert_eq!(
        DocumentationOptions::decode(&attribute(vec![AttributeValue::Integer(1)])),
        Err(OptionsError::MissingArguments(1))
    );
    assert_eq!(
        DocumentationOptions::decode(&attribute(vec![
            AttributeValue::Integer(1),
            AttributeValue::Integer(7),
        ])),
        Err(OptionsError::InvalidOutputPath(AttributeValue::Integer(7)))
    );
}

#[test]
fn for_type_keeps_declaration_order() {
    let json = r#"{
      "types": [{
        "name": "AppConfig",
        "attributes": [
          { "name": "Documentation", "arguments": [1, "docs/md/"] },
          { "name": "Obsolete" },
          { "name": "DocumentationAttribute", "arguments": [0] },
          { "name": "Sample.Documentation", "arguments": [0, "docs/adoc/", 1] }
        ]
      }]
    }"#;
    let model = TypeModel::try_from(ModelFile::from_json_str(json).unwrap()).unwrap();
    let id = model.find("AppConfig").unwrap();

    let decoded = DocumentationOptions::for_type(&model, id);

    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].as_ref().unwrap().output_path, "docs/md/");
    assert_eq!(decoded[1], Err(OptionsError::MissingArguments(1)));
    let third = decoded[2].as_ref().unwrap();
    assert_eq!(third.format, Format::AsciiDoc);
    assert_eq!(third.complex_layout, ComplexLayout::SeparateTables);
}

#[test]
fn format_extensions_and_display() {
    assert_eq!(Format::AsciiDoc.file_extension(), ".adoc");
    assert_eq!(Format::Markdown.file_extension(), ".md");
    assert_eq!(Format::Html.file_extension(), ".html");
    assert_eq!(Format::default(), Format::AsciiDoc);

    let options = DocumentationOptions {
        format: Format::Markdown,
        output_path: "docs/".to_string(),
        complex_layout: ComplexLayout::SeparateTables,
        include_namespaces: true,
    };
    assert_eq!(
        options.to_string(),
        "Format=Markdown, ComplexLayout=SeparateTables, IncludeNamespaces=true, OutputPath=docs/"
    );
}
