use crate::*;
use std::path::Path;

pub fn handle_rewrite_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Signatures { file, table } => {
            run_signatures(cli, file, table.as_deref())?;
        }
        Commands::Literals { table } => {
            run_literals(cli, table.as_deref())?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn run_signatures(cli: &Cli, file: &str, table: Option<&Path>) -> anyhow::Result<()> {
    let table = match load_signature_table(table) {
        Ok(t) => t,
        Err(e) => {
            return print_failure(cli.json, e.to_string(), |e| vec![format!("ERROR: {}", e)]);
        }
    };

    if !cli.json {
        println!("--- Starting Signature Refactoring Script ---");
    }
    let report = rewrite_signatures(&cli.dir, file, &table);
    let ok = report.status == "updated";
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data: &report })?
        );
    } else {
        match report.status.as_str() {
            "updated" => println!("SUCCESS: Updated function signatures in '{}'.", report.file),
            "not_found" => println!("ERROR: File '{}' not found.", report.file),
            _ => println!(
                "ERROR processing {}: {}",
                report.file,
                report.error.as_deref().unwrap_or("unknown error")
            ),
        }
        println!("--- Script Finished ---");
    }
    Ok(())
}

fn run_literals(cli: &Cli, table: Option<&Path>) -> anyhow::Result<()> {
    let missing = missing_sentinels(&cli.dir, LITERAL_SENTINELS);
    if !missing.is_empty() {
        return print_failure(cli.json, SentinelFailure { missing }, |_| {
            vec![
                "❌ ERROR: This script must be run from the root of your project directory."
                    .to_string(),
                "         (The directory containing 'script.js', 'index.html', etc.)".to_string(),
            ]
        });
    }

    let table = match load_literal_table(table) {
        Ok(t) => t,
        Err(e) => {
            return print_failure(cli.json, e.to_string(), |e| vec![format!("❌ ERROR: {}", e)]);
        }
    };

    if cli.json {
        let outcomes = rewrite_literals(&cli.dir, &table.replacement);
        let ok = outcomes
            .iter()
            .all(|o| o.status != "error" && o.status != "missing_file");
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok,
                data: &outcomes
            })?
        );
        return Ok(());
    }

    println!("--- Starting File Replacements ---\n");
    for entry in &table.replacement {
        let outcome = rewrite_literal(&cli.dir, entry);
        for line in literal_status_lines(&outcome) {
            println!("{}", line);
        }
    }
    println!("\n--- Refactoring Complete ---");
    Ok(())
}

fn literal_status_lines(o: &LiteralOutcome) -> Vec<String> {
    match o.status.as_str() {
        "replaced" => vec![
            format!("✅ Replaced in '{}':", o.file),
            format!("   -'{}'", o.find),
            format!("   +'{}'", o.replace),
            String::new(),
        ],
        "not_found" => vec![format!("⚠️  String not found in '{}': '{}'", o.file, o.find)],
        "missing_file" => vec![format!("❌ ERROR: File not found: {}", o.file)],
        _ => vec![format!(
            "❌ ERROR processing {}: {}",
            o.file,
            o.error.as_deref().unwrap_or("unknown error")
        )],
    }
}
