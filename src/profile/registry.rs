// Model registry
// Central registry for looking up keyboard tables by laptop model name

use super::builtin;
use super::json::{load_presets, LoadError};
use crate::error::DriverError;
use msi_keyboard::{ModelTables, Presets};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

struct ModelEntry {
    name: String,
    tables: Arc<ModelTables>,
}

/// Registry of supported models
/// Models of one family share their tables until one of them gets extra presets
pub struct ModelRegistry {
    /// Registration order is listing order
    models: Vec<ModelEntry>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Create a registry with builtin families pre-loaded
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.load_builtins();
        registry
    }

    /// Load all builtin families
    pub fn load_builtins(&mut self) {
        match builtin::full_size() {
            Ok(tables) => self.register_family(builtin::FULL_SIZE_MODELS, tables),
            Err(e) => warn!("Builtin full-size tables unusable: {}", e),
        }
        match builtin::compact() {
            Ok(tables) => self.register_family(builtin::COMPACT_MODELS, tables),
            Err(e) => warn!("Builtin compact tables unusable: {}", e),
        }
    }

    /// Register models sharing one set of tables
    /// A model registered again replaces the earlier entry
    pub fn register_family(&mut self, models: &[&str], tables: ModelTables) {
        let tables = Arc::new(tables);
        for &model in models {
            let name = model.to_ascii_uppercase();
            self.models.retain(|m| m.name != name);
            self.models.push(ModelEntry {
                name,
                tables: Arc::clone(&tables),
            });
        }
    }

    /// Canonical (uppercase) model name, matched case-insensitively
    pub fn parse_model(&self, model: &str) -> Result<&str, DriverError> {
        self.entry(model).map(|m| m.name.as_str())
    }

    /// Tables for a model
    pub fn tables(&self, model: &str) -> Result<Arc<ModelTables>, DriverError> {
        self.entry(model).map(|m| Arc::clone(&m.tables))
    }

    fn entry(&self, model: &str) -> Result<&ModelEntry, DriverError> {
        self.models
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(model))
            .ok_or_else(|| DriverError::UnknownModel {
                model: model.to_string(),
                supported: self.models().collect::<Vec<_>>().join(", "),
            })
    }

    /// All model names in registration order
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }

    /// Get the number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Merge extra presets into one model
    pub fn add_presets(&mut self, model: &str, presets: Presets) -> Result<(), DriverError> {
        let name = self.parse_model(model)?.to_string();
        if let Some(entry) = self.models.iter_mut().find(|m| m.name == name) {
            Arc::make_mut(&mut entry.tables).presets.merge(presets);
        }
        Ok(())
    }

    /// Load `<MODEL>.json` preset files from a directory
    /// Files for unknown models or with bad content are skipped with a warning
    pub fn load_presets_from_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize, LoadError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(LoadError::Io(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let mut count = 0;
        for entry in std::fs::read_dir(dir).map_err(|e| LoadError::Io(e.to_string()))? {
            let entry = entry.map_err(|e| LoadError::Io(e.to_string()))?;
            let path = entry.path();

            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            let Some(model) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let result = load_presets(&path)
                .map_err(|e| e.to_string())
                .and_then(|presets| self.add_presets(model, presets).map_err(|e| e.to_string()));
            match result {
                Ok(()) => {
                    debug!("Loaded presets for {} from {}", model, path.display());
                    count += 1;
                }
                Err(e) => warn!("Failed to load presets from {}: {}", path.display(), e),
            }
        }

        Ok(count)
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_builtins() {
        let registry = ModelRegistry::with_builtins();
        assert_eq!(registry.len(), 11);
        let models: Vec<&str> = registry.models().collect();
        assert_eq!(models[0], "GE63");
        assert_eq!(models[10], "GS65");
    }

    #[test]
    fn test_parse_model_is_case_insensitive() {
        let registry = ModelRegistry::with_builtins();
        assert_eq!(registry.parse_model("ge63").unwrap(), "GE63");
        assert_eq!(registry.parse_model("Gs65").unwrap(), "GS65");
    }

    #[test]
    fn test_unknown_model_lists_supported() {
        let registry = ModelRegistry::with_builtins();
        match registry.parse_model("GF75") {
            Err(DriverError::UnknownModel { model, supported }) => {
                assert_eq!(model, "GF75");
                assert!(supported.contains("GE63"));
                assert!(supported.contains("GS65"));
            }
            _ => panic!("expected UnknownModel"),
        }
        assert!(registry.tables("GF75").is_err());
    }

    #[test]
    fn test_families_share_tables() {
        let registry = ModelRegistry::with_builtins();
        let ge63 = registry.tables("GE63").unwrap();
        let gt75 = registry.tables("gt75").unwrap();
        let gs65 = registry.tables("GS65").unwrap();
        assert!(Arc::ptr_eq(&ge63, &gt75));
        assert!(gs65.keymap.len() < ge63.keymap.len());
    }

    #[test]
    fn test_extra_presets_apply_to_one_model() {
        let mut registry = ModelRegistry::with_builtins();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ge75.json"), r#"{"sunset": ["0e002a00"]}"#).unwrap();
        std::fs::write(dir.path().join("GX99.json"), r#"{"x": ["00"]}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(registry.load_presets_from_directory(dir.path()).unwrap(), 1);

        let ge75 = registry.tables("GE75").unwrap();
        assert!(ge75.presets.names().any(|n| n == "sunset"));
        assert!(ge75.presets.names().any(|n| n == "white"));
        let ge63 = registry.tables("GE63").unwrap();
        assert!(!ge63.presets.names().any(|n| n == "sunset"));
    }

    #[test]
    fn test_presets_dir_must_exist() {
        let mut registry = ModelRegistry::with_builtins();
        assert!(matches!(
            registry.load_presets_from_directory("/nonexistent/presets"),
            Err(LoadError::Io(_))
        ));
    }
}
