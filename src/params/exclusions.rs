//! Global exclusion validation.

use crate::coords::ModuleParser;
use crate::model::{GlobalExclusionSet, Module};
use crate::validated::{Validated, invalid};
use tracing::debug;

/// Validate the global exclusion strings.
///
/// Every parser error is reported under one heading. Parsed modules carrying
/// attributes are rejected, listing each of them; exclusions only match on
/// organization and name.
pub fn validate_exclusions<P: ModuleParser + ?Sized>(
    parser: &P,
    exclude: &[String],
    scala_version: &str,
) -> Validated<GlobalExclusionSet> {
    let modules = parser
        .parse_modules(exclude, scala_version)
        .map_err(|errors| errors.with_heading("Cannot parse excluded modules:"))?;

    let (plain, attributed): (Vec<Module>, Vec<Module>) =
        modules.into_iter().partition(|module| !module.has_attributes());

    if !attributed.is_empty() {
        let listing: Vec<String> = attributed
            .iter()
            .map(|module| format!("  {}", module))
            .collect();
        return invalid(format!(
            "Excluded modules with attributes not supported:\n{}",
            listing.join("\n")
        ));
    }

    let exclusions: GlobalExclusionSet = plain.iter().map(Module::exclusion_pair).collect();
    debug!(
        inputs = exclude.len(),
        exclusions = exclusions.len(),
        "validated global exclusions"
    );
    Ok(exclusions)
}
