use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tabgrade_core::{from_json_slice, ErrorInfo, GradeError, TableConfig, TableSpec};

/// A table description together with its resolved configuration.
pub struct LoadedTable {
    pub spec: TableSpec,
    pub config: TableConfig,
}

fn read(path: &Path, what: &str) -> Result<String, GradeError> {
    fs::read_to_string(path).map_err(|err| {
        GradeError::Serde(
            ErrorInfo::new(format!("cli.read_{what}"), format!("failed to read {what}: {err}"))
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reads a TOML table description and resolves it.
pub fn load_table(path: &Path) -> Result<LoadedTable, GradeError> {
    let text = read(path, "table")?;
    let spec: TableSpec = toml::from_str(&text).map_err(|err| {
        GradeError::Serde(
            ErrorInfo::new("cli.parse_table", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let config = spec.resolve()?;
    log::debug!("loaded table {} from {}", config.name, path.display());
    Ok(LoadedTable { spec, config })
}

/// Reads a JSON object mapping cell names to raw submitted strings.
pub fn load_submission(path: &Path) -> Result<BTreeMap<String, String>, GradeError> {
    let text = read(path, "submission")?;
    from_json_slice(text.as_bytes()).map_err(|err| {
        GradeError::Serde(
            err.info()
                .clone()
                .with_context("path", path.display().to_string())
                .with_hint("submissions are a JSON object of cell name to string"),
        )
    })
}
