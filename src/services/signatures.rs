use crate::domain::errors::RefitError;
use crate::domain::models::{Replacement, SignatureReport, SignatureTable};
use crate::services::files::{read_text, write_text};
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub matched: usize,
    pub occurrences: usize,
    pub unmatched: Vec<String>,
}

/// Applies each pair in order to the whole text. Later pairs see the
/// output of earlier ones.
pub fn apply_literal_pass(content: &mut String, table: &[Replacement]) -> PassStats {
    let mut stats = PassStats::default();
    for r in table {
        let hits = content.matches(r.find.as_str()).count();
        if hits == 0 {
            stats.unmatched.push(r.find.clone());
            continue;
        }
        *content = content.replace(r.find.as_str(), &r.replace);
        stats.matched += 1;
        stats.occurrences += hits;
    }
    stats
}

fn rewrite(path: &Path, table: &SignatureTable) -> Result<(PassStats, PassStats), RefitError> {
    let mut content = read_text(path)?;
    let signatures = apply_literal_pass(&mut content, &table.signature);
    let call_sites = apply_literal_pass(&mut content, &table.call_site);
    write_text(path, &content)?;
    Ok((signatures, call_sites))
}

/// Signature pass, then call-site pass, then an unconditional write-back.
/// A missing file is never created.
pub fn rewrite_signatures(dir: &Path, file: &str, table: &SignatureTable) -> SignatureReport {
    let path = dir.join(file);
    let mut report = SignatureReport {
        file: file.to_string(),
        status: String::new(),
        matched_signatures: 0,
        matched_call_sites: 0,
        replacements: 0,
        unmatched: Vec::new(),
        error: None,
    };
    match rewrite(&path, table) {
        Ok((signatures, call_sites)) => {
            for find in signatures.unmatched.iter().chain(&call_sites.unmatched) {
                tracing::warn!(file, find = %find, "no match for table entry");
            }
            report.status = "updated".to_string();
            report.matched_signatures = signatures.matched;
            report.matched_call_sites = call_sites.matched;
            report.replacements = signatures.occurrences + call_sites.occurrences;
            report.unmatched = signatures.unmatched;
            report.unmatched.extend(call_sites.unmatched);
            tracing::info!(
                file,
                replacements = report.replacements,
                "signatures rewritten"
            );
        }
        Err(RefitError::FileNotFound(_)) => {
            report.status = "not_found".to_string();
        }
        Err(e) => {
            report.status = "error".to_string();
            report.error = Some(e.to_string());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::{apply_literal_pass, rewrite_signatures};
    use crate::domain::models::{Replacement, SignatureTable};
    use tempfile::TempDir;

    fn table() -> SignatureTable {
        SignatureTable {
            signature: vec![Replacement::new(
                "function drawCenterSymbol(ctx, point, dataToScreen)",
                "function drawCenterSymbol(ctx, point, dataToScreen, colors)",
            )],
            call_site: vec![Replacement::new(
                "drawCenterSymbol(ctx, point, dataToScreen);",
                "drawCenterSymbol(ctx, point, dataToScreen, colors);",
            )],
        }
    }

    #[test]
    fn pass_replaces_every_occurrence_in_order() {
        let mut text = "a a b".to_string();
        let stats = apply_literal_pass(
            &mut text,
            &[Replacement::new("a", "b"), Replacement::new("b", "c")],
        );
        assert_eq!(text, "c c c");
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.occurrences, 5);
    }

    #[test]
    fn pass_records_unmatched_entries() {
        let mut text = "drawGrid(ctx);".to_string();
        let stats = apply_literal_pass(&mut text, &[Replacement::new("drawAxes(", "x")]);
        assert_eq!(text, "drawGrid(ctx);");
        assert_eq!(stats.unmatched, vec!["drawAxes(".to_string()]);
    }

    #[test]
    fn signature_and_call_site_are_rewritten_and_rest_is_untouched() {
        let tmp = TempDir::new().expect("temp dir");
        let src = "// header\nfunction drawCenterSymbol(ctx, point, dataToScreen) {\n}\n\
                   drawCenterSymbol(ctx, point, dataToScreen);\n// footer\n";
        std::fs::write(tmp.path().join("renderer.js"), src).expect("write");

        let report = rewrite_signatures(tmp.path(), "renderer.js", &table());

        assert_eq!(report.status, "updated");
        assert_eq!(report.matched_signatures, 1);
        assert_eq!(report.matched_call_sites, 1);
        let out = std::fs::read_to_string(tmp.path().join("renderer.js")).expect("read");
        assert_eq!(
            out,
            "// header\nfunction drawCenterSymbol(ctx, point, dataToScreen, colors) {\n}\n\
             drawCenterSymbol(ctx, point, dataToScreen, colors);\n// footer\n"
        );
    }

    #[test]
    fn missing_target_is_not_created() {
        let tmp = TempDir::new().expect("temp dir");
        let report = rewrite_signatures(tmp.path(), "renderer.js", &table());
        assert_eq!(report.status, "not_found");
        assert!(!tmp.path().join("renderer.js").exists());
    }

    #[test]
    fn non_utf8_target_is_an_error_and_left_alone() {
        let tmp = TempDir::new().expect("temp dir");
        let p = tmp.path().join("renderer.js");
        std::fs::write(&p, b"\xc3\x28").expect("write");
        let report = rewrite_signatures(tmp.path(), "renderer.js", &table());
        assert_eq!(report.status, "error");
        assert!(report.error.is_some());
        assert_eq!(std::fs::read(&p).expect("read"), b"\xc3\x28");
    }
}
