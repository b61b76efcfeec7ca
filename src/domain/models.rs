use crate::domain::constants::{
    CALL_SITE_REPLACEMENTS, DEFAULT_DUMP_OUTPUT, DEFAULT_DUMP_ROOT, DUMP_EXCLUDE_DIRS,
    DUMP_EXCLUDE_FILES, DUMP_EXCLUDE_SUBSTRINGS, DUMP_EXTENSIONS, DUMP_SUPPRESS_CONTENT,
    LITERAL_REPLACEMENTS, SIGNATURE_REPLACEMENTS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub find: String,
    pub replace: String,
}

impl Replacement {
    pub fn new(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FileReplacement {
    pub file: String,
    pub find: String,
    pub replace: String,
}

/// Signature table followed by call-site table, both applied in order.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct SignatureTable {
    #[serde(default)]
    pub signature: Vec<Replacement>,
    #[serde(default)]
    pub call_site: Vec<Replacement>,
}

impl SignatureTable {
    pub fn builtin() -> Self {
        let pairs = |table: &'static [(&'static str, &'static str)]| -> Vec<Replacement> {
            table.iter().map(|(f, r)| Replacement::new(f, r)).collect()
        };
        Self {
            signature: pairs(SIGNATURE_REPLACEMENTS),
            call_site: pairs(CALL_SITE_REPLACEMENTS),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct LiteralTable {
    #[serde(default)]
    pub replacement: Vec<FileReplacement>,
}

impl LiteralTable {
    pub fn builtin() -> Self {
        Self {
            replacement: LITERAL_REPLACEMENTS
                .iter()
                .map(|(file, find, replace)| FileReplacement {
                    file: file.to_string(),
                    find: find.to_string(),
                    replace: replace.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DumpConfig {
    pub root: PathBuf,
    pub output: String,
    pub extensions: Vec<String>,
    pub exclude_dirs: BTreeSet<String>,
    pub exclude_files: BTreeSet<String>,
    pub exclude_substrings: Vec<String>,
    /// Listed in the tree, body replaced by a placeholder.
    pub suppress_content: BTreeSet<String>,
}

fn owned<C: FromIterator<String>>(names: &[&str]) -> C {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_DUMP_ROOT),
            output: DEFAULT_DUMP_OUTPUT.to_string(),
            extensions: owned(DUMP_EXTENSIONS),
            exclude_dirs: owned(DUMP_EXCLUDE_DIRS),
            exclude_files: owned(DUMP_EXCLUDE_FILES),
            exclude_substrings: owned(DUMP_EXCLUDE_SUBSTRINGS),
            suppress_content: owned(DUMP_SUPPRESS_CONTENT),
        }
    }
}

/// On-disk dump settings; every key is optional and falls back to the default.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DumpConfigFile {
    pub root: Option<PathBuf>,
    pub output: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub exclude_files: Option<Vec<String>>,
    pub exclude_substrings: Option<Vec<String>>,
    pub suppress_content: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SignatureReport {
    pub file: String,
    pub status: String,
    pub matched_signatures: usize,
    pub matched_call_sites: usize,
    pub replacements: usize,
    pub unmatched: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct LiteralOutcome {
    pub file: String,
    pub find: String,
    pub replace: String,
    pub status: String,
    pub matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SentinelFailure {
    pub missing: Vec<String>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct DumpReport {
    pub root: String,
    pub output: String,
    pub directories: usize,
    pub files: usize,
    pub suppressed: usize,
    pub latin1_fallbacks: usize,
    pub read_errors: usize,
    pub bytes: u64,
    pub sha256: String,
}
