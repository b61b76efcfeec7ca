use crate::domain::errors::RefitError;
use crate::domain::models::{DumpConfig, DumpConfigFile, LiteralTable, SignatureTable};
use serde::de::DeserializeOwned;
use std::path::Path;

fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, RefitError> {
    let raw = std::fs::read_to_string(path).map_err(|e| RefitError::io(path, e))?;
    toml::from_str(&raw).map_err(|e| RefitError::Table {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn reject_empty_find<'a>(
    path: &Path,
    finds: impl IntoIterator<Item = &'a str>,
) -> Result<(), RefitError> {
    if finds.into_iter().any(str::is_empty) {
        return Err(RefitError::Table {
            path: path.to_path_buf(),
            message: "empty find string".to_string(),
        });
    }
    Ok(())
}

pub fn load_signature_table(path: Option<&Path>) -> Result<SignatureTable, RefitError> {
    let Some(path) = path else {
        return Ok(SignatureTable::builtin());
    };
    let table: SignatureTable = load_toml(path)?;
    reject_empty_find(
        path,
        table
            .signature
            .iter()
            .chain(&table.call_site)
            .map(|r| r.find.as_str()),
    )?;
    tracing::debug!(
        path = %path.display(),
        signatures = table.signature.len(),
        call_sites = table.call_site.len(),
        "loaded signature table"
    );
    Ok(table)
}

pub fn load_literal_table(path: Option<&Path>) -> Result<LiteralTable, RefitError> {
    let Some(path) = path else {
        return Ok(LiteralTable::builtin());
    };
    let table: LiteralTable = load_toml(path)?;
    reject_empty_find(path, table.replacement.iter().map(|r| r.find.as_str()))?;
    tracing::debug!(
        path = %path.display(),
        entries = table.replacement.len(),
        "loaded literal table"
    );
    Ok(table)
}

/// Defaults, then the config file, then explicit `--root`/`--output`.
/// A relative root resolves against `base`.
pub fn load_dump_config(
    base: &Path,
    config: Option<&Path>,
    root: Option<&Path>,
    output: Option<&str>,
) -> Result<DumpConfig, RefitError> {
    let mut cfg = DumpConfig::default();
    if let Some(path) = config {
        let file: DumpConfigFile = load_toml(path)?;
        apply_overrides(&mut cfg, file);
    }
    if let Some(root) = root {
        cfg.root = root.to_path_buf();
    }
    if let Some(output) = output {
        cfg.output = output.to_string();
    }
    cfg.root = base.join(&cfg.root);
    Ok(cfg)
}

fn apply_overrides(cfg: &mut DumpConfig, file: DumpConfigFile) {
    if let Some(root) = file.root {
        cfg.root = root;
    }
    if let Some(output) = file.output {
        cfg.output = output;
    }
    if let Some(extensions) = file.extensions {
        cfg.extensions = extensions;
    }
    if let Some(dirs) = file.exclude_dirs {
        cfg.exclude_dirs = dirs.into_iter().collect();
    }
    if let Some(files) = file.exclude_files {
        cfg.exclude_files = files.into_iter().collect();
    }
    if let Some(subs) = file.exclude_substrings {
        cfg.exclude_substrings = subs;
    }
    if let Some(names) = file.suppress_content {
        cfg.suppress_content = names.into_iter().collect();
    }
}
