use crate::*;

pub fn handle_dump_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Dump {
        root,
        output,
        config,
    } = &cli.command
    else {
        return Ok(false);
    };

    let loaded = load_dump_config(
        &cli.dir,
        config.as_deref(),
        root.as_deref(),
        output.as_deref(),
    );
    let cfg = match loaded {
        Ok(c) => c,
        Err(e) => {
            print_failure(cli.json, e.to_string(), |e| {
                vec![format!("An error occurred: {}", e)]
            })?;
            return Ok(true);
        }
    };

    if !cli.json {
        let shown = resolve_root(&cfg)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| cfg.root.display().to_string());
        println!("Starting directory: {}", shown);
        println!("Output file: {}", cfg.output);
    }

    match write_dump(&cfg) {
        Ok(report) => print_one(cli.json, report, |_| {
            "Successfully generated project content file.".to_string()
        })?,
        Err(e) => print_failure(cli.json, e.to_string(), |e| {
            vec![format!("An error occurred: {}", e)]
        })?,
    }
    Ok(true)
}
