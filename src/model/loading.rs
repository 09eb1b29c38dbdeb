use std::{fs, path::Path};

use tracing::debug;

use super::{ModelFile, TypeModel};
use crate::{ConfdocError, Result};

impl ModelFile {
    /// Parses a model from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::ModelParse` if the JSON is malformed. Type
    /// references that do not parse are kept as `TypeRef::Unparsed`.
    pub fn from_json_str(content: &str) -> Result<ModelFile> {
        serde_json::from_str(content).map_err(|e| ConfdocError::parse(e, None))
    }

    /// Parses a model from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::ModelParse` if the TOML is malformed. Type
    /// references that do not parse are kept as `TypeRef::Unparsed`.
    pub fn from_toml_str(content: &str) -> Result<ModelFile> {
        toml::from_str(content).map_err(|e| ConfdocError::parse(e, None))
    }

    /// Reads a model file, choosing the format from its extension
    /// (`.toml`, anything else is JSON).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<ModelFile> {
        let content = fs::read_to_string(path).map_err(|e| ConfdocError::io(e, path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            toml::from_str(&content).map_err(|e| ConfdocError::parse(e, Some(path)))
        } else {
            serde_json::from_str(&content).map_err(|e| ConfdocError::parse(e, Some(path)))
        }?;

        debug!(path = %path.display(), "Loaded type model file");
        Ok(parsed)
    }
}

impl TypeModel {
    /// Loads and merges several model files into one model.
    ///
    /// # Errors
    ///
    /// Returns an error if any file fails to load, or if the same type is
    /// declared in more than one file.
    pub fn load(paths: &[impl AsRef<Path>]) -> Result<TypeModel> {
        let files = paths
            .iter()
            .map(|path| ModelFile::from_file(path.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Self::merge(files)
    }

    /// Merges parsed model files, keeping file order then declaration order.
    ///
    /// # Errors
    ///
    /// Returns `ConfdocError::DuplicateType` if a type is declared twice.
    pub fn merge(files: Vec<ModelFile>) -> Result<TypeModel> {
        let types = files.into_iter().flat_map(|file| file.types).collect();
        TypeModel::new(types)
    }
}

impl TryFrom<ModelFile> for TypeModel {
    type Error = ConfdocError;

    fn try_from(file: ModelFile) -> Result<Self> {
        TypeModel::new(file.types)
    }
}
