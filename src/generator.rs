use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    ConfdocError, Result,
    diagnostics::{Diagnostic, DiagnosticId},
    model::{TypeId, TypeModel},
    options::{ComplexLayout, DocumentationOptions},
    output::{FileLedger, OutputTarget, base_file_name, resolve_output},
    parser::parser_for,
};

/// A rendered output file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Destination path.
    pub path: PathBuf,
    /// Markup to write.
    pub contents: String,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Diagnostics raised along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Whether any warning was raised.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }

    fn extend(&mut self, other: GenerationReport) {
        self.written.extend(other.written);
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Generates configuration documentation for annotated types.
///
/// Every `Documentation` attribute on a type is one independent pass:
/// the type is parsed into document trees with its layout, each tree is
/// rendered with its format, and the results are written under the
/// resolved output path. Passes share nothing, so a failing pass never
/// affects another.
#[derive(Debug, Clone)]
pub struct DocsGenerator {
    model: TypeModel,
    project_dir: PathBuf,
    project_name: Option<String>,
}

impl DocsGenerator {
    /// Creates a generator over `model`, resolving relative output paths
    /// against the current directory.
    pub fn new(model: TypeModel) -> Self {
        Self {
            model,
            project_dir: PathBuf::new(),
            project_name: None,
        }
    }

    /// Sets the directory relative output paths are resolved against.
    pub fn with_project_dir(mut self, project_dir: impl Into<PathBuf>) -> Self {
        self.project_dir = project_dir.into();
        self
    }

    /// Sets the project name reported in diagnostics.
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    /// Replaces the namespaces whose types are never expanded.
    pub fn with_reserved_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.model = self.model.with_reserved_namespaces(namespaces);
        self
    }

    /// The model being documented.
    pub fn model(&self) -> &TypeModel {
        &self.model
    }

    /// Runs every pass of every annotated type, in model order.
    pub fn generate_all(&self) -> GenerationReport {
        let mut report = GenerationReport::default();
        for (id, _) in self.model.documented_types() {
            report.extend(self.generate_for(id));
        }

        info!(
            files = report.written.len(),
            warnings = report.diagnostics.iter().filter(|d| d.is_warning()).count(),
            "Documentation generation finished"
        );
        report
    }

    /// Runs the passes of one type, found by simple or full name.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::UnknownType` if no such type exists.
    pub fn generate_type(&self, name: &str) -> Result<GenerationReport> {
        let id = self
            .model
            .find(name)
            .ok_or_else(|| ConfdocError::UnknownType(name.to_string()))?;

        Ok(self.generate_for(id))
    }

    /// Names of the types requesting documentation.
    pub fn list_documented_types(&self) -> Vec<String> {
        self.model
            .documented_types()
            .map(|(_, descriptor)| descriptor.full_name())
            .collect()
    }

    /// Decoded passes of a type. Undecodable instances are reported and
    /// left out.
    pub fn passes_for(
        &self,
        id: TypeId,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<DocumentationOptions> {
        let type_name = self.model.get(id).full_name();
        DocumentationOptions::for_type(&self.model, id)
            .into_iter()
            .filter_map(|decoded| match decoded {
                Ok(options) => Some(options),
                Err(err) => {
                    diagnostics.push(Diagnostic::emit(
                        DiagnosticId::InvalidAnnotation,
                        format!("Skipping documentation attribute on {type_name}: {err}"),
                    ));
                    None
                }
            })
            .collect()
    }

    /// Parses and renders one pass without writing anything. Diagnostics
    /// raised while planning are appended to `diagnostics`, and are logged
    /// as they are raised like every other diagnostic.
    pub fn render_pass(
        &self,
        id: TypeId,
        options: &DocumentationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<RenderedFile> {
        self.plan_pass(id, options, diagnostics)
    }

    fn generate_for(&self, id: TypeId) -> GenerationReport {
        let mut report = GenerationReport::default();
        for options in self.passes_for(id, &mut report.diagnostics) {
            let pass = self.run_pass(id, &options);
            report.extend(pass);
        }
        report
    }

    #[instrument(skip(self, options), fields(type_name = %self.model.get(id).full_name()))]
    fn run_pass(&self, id: TypeId, options: &DocumentationOptions) -> GenerationReport {
        let mut report = GenerationReport::default();
        let files = self.plan_pass(id, options, &mut report.diagnostics);

        for file in files {
            if let Err(err) = write_file(&file.path, &file.contents) {
                report.diagnostics.push(Diagnostic::emit(
                    DiagnosticId::WriteFailed,
                    format!("Failed to write documentation file: {err}"),
                ));
                break;
            }

            debug!(path = %file.path.display(), "Wrote documentation file");
            report.written.push(file.path);
        }

        report
    }

    fn plan_pass(
        &self,
        id: TypeId,
        options: &DocumentationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<RenderedFile> {
        let type_name = self.model.get(id).full_name();
        let project = self.project_name.as_deref().unwrap_or("<unnamed>");
        diagnostics.push(Diagnostic::emit(
            DiagnosticId::PassInfo,
            format!("Generating documentation for {type_name} in {project}: {options}"),
        ));

        let mut ledger = FileLedger::new();
        let target = resolve_output(&options.output_path, &self.project_dir);
        let trees = parser_for(options.complex_layout).parse(&self.model, id, options, &mut ledger);

        let directory = match (&target, options.complex_layout) {
            (OutputTarget::File(path), ComplexLayout::SeparateTables) => {
                let parent = target.directory().to_path_buf();
                diagnostics.push(Diagnostic::emit(
                    DiagnosticId::NotADirectory,
                    format!(
                        "Output path {} is not a directory; writing separate tables to {}",
                        path.display(),
                        parent.display()
                    ),
                ));
                parent
            }
            _ => target.directory().to_path_buf(),
        };

        let mut renderer = options.format.renderer();
        let files: Vec<RenderedFile> = trees
            .into_iter()
            .map(|tree| {
                let path = match (&target, tree.file_name) {
                    (_, Some(file_name)) => directory.join(file_name),
                    (OutputTarget::File(path), None) => path.clone(),
                    (OutputTarget::Directory(dir), None) => {
                        let base =
                            base_file_name(&self.model, tree.type_id, options.include_namespaces);
                        dir.join(ledger.claim(&base, options.format.file_extension()))
                    }
                };

                RenderedFile {
                    path,
                    contents: renderer.render(&tree.document),
                }
            })
            .collect();

        for file in &files {
            diagnostics.push(Diagnostic::emit(
                DiagnosticId::PassInfo,
                format!("Resolved output file {}", file.path.display()),
            ));
        }

        files
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfdocError::io(e, parent))?;
    }
    fs::write(path, contents).map_err(|e| ConfdocError::io(e, path))
}
