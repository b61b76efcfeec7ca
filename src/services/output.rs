use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Reported failures still exit 0; `ok: false` is the only signal.
pub fn print_failure<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: false, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
