//! Module requirements: global and per-module exclusions combined.

use crate::model::{DependencyEntry, GlobalExclusionSet, PerModuleExclusionMap};
use crate::validated::{Validated, zip};

/// Exclusions to apply to parsed dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRequirements {
    pub global: GlobalExclusionSet,
    pub per_module: PerModuleExclusionMap,
}

impl ModuleRequirements {
    pub fn new(global: GlobalExclusionSet, per_module: PerModuleExclusionMap) -> Self {
        Self { global, per_module }
    }

    /// Add exclusions to every dependency.
    ///
    /// Global exclusions always apply. Per-module exclusions apply when the
    /// dependency's `org:name` equals a parent key. Exclusions the dependency
    /// already had are kept.
    pub fn apply(&self, entries: Vec<DependencyEntry>) -> Vec<DependencyEntry> {
        entries
            .into_iter()
            .map(|(dependency, params)| {
                let local = self.per_module.get(&dependency.module.org_name());
                let dependency = dependency
                    .with_added_exclusions(&self.global)
                    .with_added_exclusions(local.into_iter().flatten());
                (dependency, params)
            })
            .collect()
    }
}

/// Combine both exclusion sources. Errors from either side are all kept.
pub fn module_requirements(
    exclusions: &Validated<GlobalExclusionSet>,
    per_module: &Validated<PerModuleExclusionMap>,
) -> Validated<ModuleRequirements> {
    zip(exclusions.clone(), per_module.clone())
        .map(|(global, per_module)| ModuleRequirements::new(global, per_module))
}
