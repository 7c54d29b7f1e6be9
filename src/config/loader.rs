//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the
//! component catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DeductionRole;

use super::types::{
    ComponentCatalog, ComponentsFile, DeductionComponent, DeductionComponentsFile,
    EarningComponent,
};

/// Loads and provides access to the component catalog.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/pph21/
/// ├── components.yaml            # Earning components with taxable flags
/// └── deduction_components.yaml  # Deduction components with roles
/// ```
///
/// # Example
///
/// ```no_run
/// use pph21_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/pph21").unwrap();
/// let component = loader.get_component("gaji_pokok").unwrap();
/// println!("Component: {}", component.name);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ComponentCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a file is missing and
    /// [`EngineError::ConfigParseError`] when a file contains invalid
    /// YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let components_path = path.join("components.yaml");
        let components_file = Self::load_yaml::<ComponentsFile>(&components_path)?;

        let deductions_path = path.join("deduction_components.yaml");
        let deductions_file = Self::load_yaml::<DeductionComponentsFile>(&deductions_path)?;

        let catalog = ComponentCatalog::new(
            components_file.components,
            deductions_file.deduction_components,
        );

        Ok(Self { catalog })
    }

    /// Builds a loader around an in-memory catalog (used in tests).
    pub fn from_catalog(catalog: ComponentCatalog) -> Self {
        Self { catalog }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Looks up an earning component, failing on unknown codes.
    pub fn get_component(&self, code: &str) -> EngineResult<&EarningComponent> {
        self.catalog
            .component(code)
            .ok_or_else(|| EngineError::ComponentNotFound {
                code: code.to_string(),
            })
    }

    /// Looks up a deduction component, failing on unknown codes.
    pub fn get_deduction_component(&self, code: &str) -> EngineResult<&DeductionComponent> {
        self.catalog
            .deduction_component(code)
            .ok_or_else(|| EngineError::DeductionComponentNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the role configured for a deduction component code.
    pub fn deduction_role(&self, code: &str) -> EngineResult<DeductionRole> {
        Ok(self.get_deduction_component(code)?.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_loader() -> CatalogLoader {
        let catalog = ComponentCatalog::new(
            vec![EarningComponent {
                code: "gaji_pokok".to_string(),
                name: "Gaji Pokok".to_string(),
                taxable: true,
            }],
            vec![DeductionComponent {
                code: "iuran_pensiun".to_string(),
                name: "Iuran Pensiun".to_string(),
                role: DeductionRole::IuranPensiun,
            }],
        );
        CatalogLoader::from_catalog(catalog)
    }

    #[test]
    fn test_get_component_known_code() {
        let loader = test_loader();
        let component = loader.get_component("gaji_pokok").unwrap();
        assert_eq!(component.name, "Gaji Pokok");
    }

    #[test]
    fn test_get_component_unknown_code_errors() {
        let loader = test_loader();
        match loader.get_component("bonus_thr").unwrap_err() {
            EngineError::ComponentNotFound { code } => assert_eq!(code, "bonus_thr"),
            other => panic!("Expected ComponentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_deduction_role_lookup() {
        let loader = test_loader();
        assert_eq!(
            loader.deduction_role("iuran_pensiun").unwrap(),
            DeductionRole::IuranPensiun
        );
    }

    #[test]
    fn test_unknown_deduction_component_errors() {
        let loader = test_loader();
        match loader.get_deduction_component("zakat").unwrap_err() {
            EngineError::DeductionComponentNotFound { code } => assert_eq!(code, "zakat"),
            other => panic!("Expected DeductionComponentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_errors() {
        let result = CatalogLoader::load("/nonexistent/catalog");
        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigNotFound { .. }
        ));
    }
}
