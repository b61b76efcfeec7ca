//! Project content dump: tree section, content section, instructions.

use crate::domain::constants::{CONTENT_EXCLUDED_MARKER, DUMP_INSTRUCTIONS, LATIN1_WARNING_MARKER};
use crate::domain::errors::RefitError;
use crate::domain::models::{DumpConfig, DumpReport};
use crate::services::files::{decode_latin1, read_bytes};
use crate::services::walk::{display_path, tree_lines, EntryKind, FilteredWalk, WalkEntry};
use sha2::{Digest, Sha256};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Counts and hashes every byte on its way to `inner`.
struct DigestWriter<W: Write> {
    inner: W,
    hasher: Sha256,
    bytes: u64,
}

impl<W: Write> DigestWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            bytes: 0,
        }
    }

    fn finish(self) -> (W, String, u64) {
        (self.inner, hex::encode(self.hasher.finalize()), self.bytes)
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

enum Body {
    Text(String),
    Latin1(String),
    Failed(String),
}

fn read_body(path: &Path) -> Body {
    match read_bytes(path) {
        Ok(raw) => match String::from_utf8(raw) {
            Ok(text) => Body::Text(text),
            Err(e) => {
                tracing::warn!(file = %path.display(), "not UTF-8, falling back to latin-1");
                Body::Latin1(decode_latin1(e.as_bytes()))
            }
        },
        Err(e) => Body::Failed(e.to_string()),
    }
}

pub fn resolve_root(cfg: &DumpConfig) -> Result<PathBuf, RefitError> {
    cfg.root
        .canonicalize()
        .map_err(|e| RefitError::io(&cfg.root, e))
}

/// The dump's own file is matched by full path so a nested `output`
/// (`out/dump.txt`) is never read back into itself.
fn is_suppressed(cfg: &DumpConfig, out_path: &Path, entry: &WalkEntry) -> bool {
    entry.path == out_path
        || out_path.file_name().is_some_and(|n| n == entry.name.as_str())
        || cfg.suppress_content.contains(&entry.name)
}

/// Writes the dump to `<root>/<output>`, replacing any previous one.
///
/// The output file is created before the walk, so it is always part of the
/// tree and its own body is always suppressed. Two runs over an unchanged
/// tree produce identical bytes.
pub fn write_dump(cfg: &DumpConfig) -> Result<DumpReport, RefitError> {
    let root = resolve_root(cfg)?;
    let out_path = root.join(&cfg.output);
    let file = std::fs::File::create(&out_path).map_err(|e| RefitError::io(&out_path, e))?;
    let mut out = DigestWriter::new(BufWriter::new(file));
    let mut report = DumpReport {
        root: root.display().to_string(),
        output: out_path.display().to_string(),
        ..DumpReport::default()
    };

    write_sections(cfg, &root, &out_path, &mut out, &mut report)
        .map_err(|e| RefitError::io(&out_path, e))?;

    out.flush().map_err(|e| RefitError::io(&out_path, e))?;
    let (_, sha256, bytes) = out.finish();
    report.sha256 = sha256;
    report.bytes = bytes;
    tracing::info!(
        output = %report.output,
        files = report.files,
        bytes = report.bytes,
        "dump written"
    );
    Ok(report)
}

fn write_sections<W: Write>(
    cfg: &DumpConfig,
    root: &Path,
    out_path: &Path,
    out: &mut W,
    report: &mut DumpReport,
) -> std::io::Result<()> {
    writeln!(out, "=== Project Directory Structure ===")?;
    writeln!(out, "Root: {}", root.display())?;
    writeln!(out, "Relevant files and folders (excluding specified patterns):\n")?;
    for line in tree_lines(cfg, root) {
        writeln!(out, "{}", line)?;
    }

    write!(out, "\n\n=== File Contents ===\n\n")?;
    for entry in FilteredWalk::new(cfg, root) {
        match entry.kind {
            EntryKind::Dir => {
                report.directories += 1;
                continue;
            }
            EntryKind::File => report.files += 1,
        }
        writeln!(out, "=== {} ===", display_path(root, &entry.path))?;
        if is_suppressed(cfg, out_path, &entry) {
            report.suppressed += 1;
            out.write_all(CONTENT_EXCLUDED_MARKER.as_bytes())?;
        } else {
            tracing::debug!(file = %entry.path.display(), "dumping");
            match read_body(&entry.path) {
                Body::Text(text) => out.write_all(text.as_bytes())?,
                Body::Latin1(text) => {
                    report.latin1_fallbacks += 1;
                    out.write_all(text.as_bytes())?;
                    out.write_all(LATIN1_WARNING_MARKER.as_bytes())?;
                }
                Body::Failed(err) => {
                    report.read_errors += 1;
                    writeln!(out, "--- Error reading file: {} ---", err)?;
                }
            }
        }
        out.write_all(b"\n\n")?;
    }

    out.write_all(DUMP_INSTRUCTIONS.as_bytes())?;
    Ok(())
}
