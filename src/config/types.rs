//! Catalog configuration types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::DeductionRole;

/// An earning component (salary, allowance, bonus, reimbursement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningComponent {
    /// Stable component code (e.g. "gaji_pokok").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Whether amounts on this component count toward gross taxable
    /// income.
    pub taxable: bool,
}

/// A deduction component with its tax-law role assigned at configuration
/// time.
///
/// Renaming a component does not change its tax treatment; only the
/// `role` field does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionComponent {
    /// Stable component code (e.g. "iuran_pensiun").
    pub code: String,
    /// Display name.
    pub name: String,
    /// The tax-law role of amounts on this component.
    pub role: DeductionRole,
}

/// File layout of `components.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ComponentsFile {
    pub components: Vec<EarningComponent>,
}

/// File layout of `deduction_components.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct DeductionComponentsFile {
    pub deduction_components: Vec<DeductionComponent>,
}

/// The loaded component catalog, keyed by code.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    components: HashMap<String, EarningComponent>,
    deduction_components: HashMap<String, DeductionComponent>,
}

impl ComponentCatalog {
    /// Builds a catalog from component lists.
    pub fn new(
        components: Vec<EarningComponent>,
        deduction_components: Vec<DeductionComponent>,
    ) -> Self {
        Self {
            components: components
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
            deduction_components: deduction_components
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
        }
    }

    /// Looks up an earning component by code.
    pub fn component(&self, code: &str) -> Option<&EarningComponent> {
        self.components.get(code)
    }

    /// Looks up a deduction component by code.
    pub fn deduction_component(&self, code: &str) -> Option<&DeductionComponent> {
        self.deduction_components.get(code)
    }

    /// Returns the number of earning components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of deduction components.
    pub fn deduction_component_count(&self) -> usize {
        self.deduction_components.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ComponentCatalog {
        ComponentCatalog::new(
            vec![
                EarningComponent {
                    code: "gaji_pokok".to_string(),
                    name: "Gaji Pokok".to_string(),
                    taxable: true,
                },
                EarningComponent {
                    code: "penggantian_medis".to_string(),
                    name: "Penggantian Biaya Medis".to_string(),
                    taxable: false,
                },
            ],
            vec![DeductionComponent {
                code: "zakat".to_string(),
                name: "Zakat".to_string(),
                role: DeductionRole::Zakat,
            }],
        )
    }

    #[test]
    fn test_lookup_by_code() {
        let catalog = sample_catalog();
        assert!(catalog.component("gaji_pokok").unwrap().taxable);
        assert!(!catalog.component("penggantian_medis").unwrap().taxable);
        assert_eq!(
            catalog.deduction_component("zakat").unwrap().role,
            DeductionRole::Zakat
        );
    }

    #[test]
    fn test_unknown_code_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.component("unknown").is_none());
        assert!(catalog.deduction_component("unknown").is_none());
    }

    #[test]
    fn test_counts() {
        let catalog = sample_catalog();
        assert_eq!(catalog.component_count(), 2);
        assert_eq!(catalog.deduction_component_count(), 1);
    }

    #[test]
    fn test_deduction_component_yaml_roles() {
        let yaml = r#"
deduction_components:
  - code: iuran_pensiun
    name: Iuran Pensiun
    role: iuran_pensiun
  - code: potongan_koperasi
    name: Potongan Koperasi
    role: none
"#;
        let file: DeductionComponentsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.deduction_components[0].role, DeductionRole::IuranPensiun);
        assert_eq!(file.deduction_components[1].role, DeductionRole::None);
    }
}
