//! confdoc - configuration documentation generator.
//!
//! Reads a serialized type model, finds the types annotated with
//! `Documentation`, and writes a parameter table for each one. The
//! pipeline works like a small compiler:
//!
//! - [`model`] indexes the types and answers introspection queries
//! - [`parser`] walks a root type's public properties into [`tree`] documents
//! - [`render`] turns documents into Markdown, AsciiDoc or HTML
//! - [`output`] names files and resolves output paths
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use confdoc::{generator::DocsGenerator, model::TypeModel};
//!
//! let model = TypeModel::load(&["types.json"])?;
//! let report = DocsGenerator::new(model)
//!     .with_project_dir("my-project")
//!     .generate_all();
//!
//! for path in &report.written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), confdoc::ConfdocError>(())
//! ```

/// Tool configuration loaded from `confdoc.toml`.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Advisory messages raised during generation.
pub mod diagnostics;

/// Generation passes and file output.
pub mod generator;

/// Type model and introspection queries.
pub mod model;

/// Decoding of `Documentation` attributes.
pub mod options;

/// File naming and output path resolution.
pub mod output;

/// Recursive walk from a root type to document trees.
pub mod parser;

/// Markup renderers.
pub mod render;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Format-agnostic document tree.
pub mod tree;

/// Re-exported core types for convenience.
pub use core::{ConfdocError, Result};
