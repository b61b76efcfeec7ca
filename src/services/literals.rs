use crate::domain::errors::RefitError;
use crate::domain::models::{FileReplacement, LiteralOutcome};
use crate::services::files::{read_text, write_text};
use regex::{NoExpand, Regex};
use std::path::Path;

/// Names from `sentinels` that are not present in `dir`.
pub fn missing_sentinels(dir: &Path, sentinels: &[&str]) -> Vec<String> {
    sentinels
        .iter()
        .filter(|name| !dir.join(name).exists())
        .map(|name| name.to_string())
        .collect()
}

/// Literal find/replace on both sides: `find` is escaped before the pattern
/// is built and `replace` is inserted without `$name` expansion.
/// Returns `None` when nothing matched.
pub fn replace_literal(
    content: &str,
    find: &str,
    replace: &str,
) -> Result<Option<(String, usize)>, RefitError> {
    let re = Regex::new(&regex::escape(find))?;
    let hits = re.find_iter(content).count();
    if hits == 0 {
        return Ok(None);
    }
    let out = re.replace_all(content, NoExpand(replace)).into_owned();
    Ok(Some((out, hits)))
}

fn rewrite(path: &Path, entry: &FileReplacement) -> Result<usize, RefitError> {
    let content = read_text(path)?;
    match replace_literal(&content, &entry.find, &entry.replace)? {
        Some((updated, hits)) => {
            write_text(path, &updated)?;
            Ok(hits)
        }
        None => Ok(0),
    }
}

/// One table entry: fresh read, replace, write only when something matched.
pub fn rewrite_literal(dir: &Path, entry: &FileReplacement) -> LiteralOutcome {
    let mut outcome = LiteralOutcome {
        file: entry.file.clone(),
        find: entry.find.clone(),
        replace: entry.replace.clone(),
        status: String::new(),
        matches: 0,
        error: None,
    };
    match rewrite(&dir.join(&entry.file), entry) {
        Ok(0) => {
            tracing::debug!(file = %entry.file, "literal not found");
            outcome.status = "not_found".to_string();
        }
        Ok(hits) => {
            tracing::debug!(file = %entry.file, hits, "literal replaced");
            outcome.status = "replaced".to_string();
            outcome.matches = hits;
        }
        Err(RefitError::FileNotFound(_)) => {
            outcome.status = "missing_file".to_string();
        }
        Err(e) => {
            tracing::warn!(file = %entry.file, error = %e, "literal rewrite failed");
            outcome.status = "error".to_string();
            outcome.error = Some(e.to_string());
        }
    }
    outcome
}

pub fn rewrite_literals(dir: &Path, table: &[FileReplacement]) -> Vec<LiteralOutcome> {
    table.iter().map(|entry| rewrite_literal(dir, entry)).collect()
}
