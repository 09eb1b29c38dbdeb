//! Documentation options decoded from `Documentation` attributes.
//!
//! An attribute carries its settings positionally: format, output path,
//! then optionally the complex-type layout and the namespace flag. Each
//! instance decodes independently into a [`DocumentationOptions`].

use std::fmt;

use thiserror::Error;

use crate::model::{Attribute, AttributeValue, DOCUMENTATION_ATTRIBUTE, TypeId, TypeModel};

/// Output markup format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// AsciiDoc (`.adoc`).
    #[default]
    AsciiDoc,
    /// GitHub flavored Markdown (`.md`).
    Markdown,
    /// HTML page (`.html`).
    Html,
}

impl Format {
    /// File extension including the leading dot.
    pub fn file_extension(self) -> &'static str {
        match self {
            Format::AsciiDoc => ".adoc",
            Format::Markdown => ".md",
            Format::Html => ".html",
        }
    }

    fn from_ordinal(ordinal: i64) -> Option<Format> {
        match ordinal {
            0 => Some(Format::AsciiDoc),
            1 => Some(Format::Markdown),
            2 => Some(Format::Html),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Format> {
        match member_name(name).to_ascii_lowercase().as_str() {
            "asciidoc" | "adoc" => Some(Format::AsciiDoc),
            "markdown" | "md" => Some(Format::Markdown),
            "html" => Some(Format::Html),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::AsciiDoc => write!(f, "AsciiDoc"),
            Format::Markdown => write!(f, "Markdown"),
            Format::Html => write!(f, "Html"),
        }
    }
}

/// How properties of custom types are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexLayout {
    /// Flatten nested properties into one table with colon-joined paths.
    #[default]
    InlineFlatten,
    /// One table and output file per custom type, linked from parent rows.
    SeparateTables,
}

impl ComplexLayout {
    fn from_ordinal(ordinal: i64) -> Option<ComplexLayout> {
        match ordinal {
            0 => Some(ComplexLayout::InlineFlatten),
            1 => Some(ComplexLayout::SeparateTables),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<ComplexLayout> {
        match member_name(name).to_ascii_lowercase().as_str() {
            "inlinejsonshort" | "inlineflatten" | "inline" => Some(ComplexLayout::InlineFlatten),
            "separatetables" | "separate" => Some(ComplexLayout::SeparateTables),
            _ => None,
        }
    }
}

impl fmt::Display for ComplexLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexLayout::InlineFlatten => write!(f, "InlineFlatten"),
            ComplexLayout::SeparateTables => write!(f, "SeparateTables"),
        }
    }
}

/// Settings for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationOptions {
    /// Output format.
    pub format: Format,
    /// Requested output file or directory.
    pub output_path: String,
    /// Layout of custom-typed properties.
    pub complex_layout: ComplexLayout,
    /// Qualify type names with their namespace in titles and file names.
    pub include_namespaces: bool,
}

impl fmt::Display for DocumentationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Format={}, ComplexLayout={}, IncludeNamespaces={}, OutputPath={}",
            self.format, self.complex_layout, self.include_namespaces, self.output_path
        )
    }
}

/// Why an attribute instance could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Format and output path are both required.
    #[error("expected at least 2 arguments (format, output path), found {0}")]
    MissingArguments(usize),

    /// The output path argument is not a string.
    #[error("output path must be a string, found {0:?}")]
    InvalidOutputPath(AttributeValue),
}

impl DocumentationOptions {
    /// Decodes one `Documentation` attribute instance.
    ///
    /// Unrecognized format or layout values fall back to their defaults;
    /// a missing or non-string output path rejects the instance.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` when the instance must be skipped.
    pub fn decode(attribute: &Attribute) -> Result<DocumentationOptions, OptionsError> {
        let arguments = &attribute.arguments;
        if arguments.len() < 2 {
            return Err(OptionsError::MissingArguments(arguments.len()));
        }

        let format = match &arguments[0] {
            AttributeValue::Integer(ordinal) => Format::from_ordinal(*ordinal),
            AttributeValue::String(name) => Format::from_name(name),
            AttributeValue::Bool(_) => None,
        }
        .unwrap_or_default();

        let output_path = match &arguments[1] {
            AttributeValue::String(path) => path.clone(),
            other => return Err(OptionsError::InvalidOutputPath(other.clone())),
        };

        let complex_layout = match arguments.get(2) {
            Some(AttributeValue::Integer(ordinal)) => ComplexLayout::from_ordinal(*ordinal),
            Some(AttributeValue::String(name)) => ComplexLayout::from_name(name),
            _ => None,
        }
        .unwrap_or_default();

        let include_namespaces = matches!(arguments.get(3), Some(AttributeValue::Bool(true)));

        Ok(DocumentationOptions {
            format,
            output_path,
            complex_layout,
            include_namespaces,
        })
    }

    /// Decodes every `Documentation` attribute on a type, in declaration
    /// order. Each entry is either usable options or the reason that
    /// instance is skipped.
    pub fn for_type(
        model: &TypeModel,
        id: TypeId,
    ) -> Vec<Result<DocumentationOptions, OptionsError>> {
        model
            .get(id)
            .attributes
            .iter()
            .filter(|attr| attr.is(DOCUMENTATION_ATTRIBUTE))
            .map(Self::decode)
            .collect()
    }
}

fn member_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests;
