//! Local (per-module) exclusion file.
//!
//! One rule per line:
//!
//! ```text
//! com.example:app--org.slf4j:slf4j-log4j12
//! ```
//!
//! The part before `--` is the parent, matched against a dependency's `org:name`
//! as a plain string. The part after it is the excluded `org:name`.

use crate::error::{ParamsError, Result};
use crate::model::{ExclusionPair, ModuleName, Organization, PerModuleExclusionMap};
use crate::validated::{Validated, traverse};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load and parse the local exclusion file, if one is configured.
///
/// # Returns
///
/// * `Ok(Ok(map))` - No file configured (empty map), or every line parsed
/// * `Ok(Err(errors))` - One error per malformed line
/// * `Err(ParamsError::ExcludeFileRead)` - The file could not be opened or read;
///   no line is parsed in that case
pub fn load_local_exclusions(path: Option<&Path>) -> Result<Validated<PerModuleExclusionMap>> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(Ok(PerModuleExclusionMap::new()));
    };

    let content = read_exclusion_file(path)?;
    info!(path = %path.display(), "loaded local exclusion file");

    Ok(parse_local_exclusions(&content))
}

/// Read the whole file. The handle is dropped before this returns, on every path.
///
/// Content is decoded as UTF-8; invalid bytes are reported as a read failure.
fn read_exclusion_file(path: &Path) -> Result<String> {
    let read_error = |source: std::io::Error| ParamsError::ExcludeFileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut content = String::new();
    let mut file = File::open(path).map_err(read_error)?;
    file.read_to_string(&mut content).map_err(read_error)?;
    drop(file);

    Ok(content)
}

/// Parse exclusion file content, grouping rules by parent.
///
/// Every malformed line contributes one `Failed to parse <line>` error; no map
/// is produced unless all lines are well formed. Blank lines are malformed;
/// empty content has no lines and gives an empty map.
pub fn parse_local_exclusions(content: &str) -> Validated<PerModuleExclusionMap> {
    let rules = traverse(content.lines(), parse_rule)?;

    let mut map = PerModuleExclusionMap::new();
    for (parent, exclusion) in rules {
        map.entry(parent).or_default().insert(exclusion);
    }

    debug!(parents = map.len(), "parsed local exclusions");
    Ok(map)
}

fn parse_rule(line: &str) -> std::result::Result<(String, ExclusionPair), String> {
    let failed = || format!("Failed to parse {}", line);

    let segments: Vec<&str> = line.split("--").collect();
    let [parent, child] = segments.as_slice() else {
        return Err(failed());
    };

    let coordinates: Vec<&str> = child.split(':').collect();
    let [organization, name] = coordinates.as_slice() else {
        return Err(failed());
    };

    Ok((
        parent.to_string(),
        (Organization::new(*organization), ModuleName::new(*name)),
    ))
}
