//! `agrc show` handler

use anyhow::{Context, Result};

use agrc::color::{escape_sequence, RESET};
use agrc::{LoadReport, Options};

/// Load the config (or defaults) and print the settings.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: Option<&str>, json: bool) -> Result<()> {
    let path = match config {
        Some(path) => Options::resolve_path(path),
        None => Options::config_path(),
    };
    let (options, report) = Options::load_or_default(&path);

    if json {
        let text = serde_json::to_string_pretty(&options).context("Failed to serialize options")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", format_report(&path.display().to_string(), report.as_ref()));
    println!("{}", format_options(&options));
    Ok(())
}

fn format_report(path: &str, report: Option<&LoadReport>) -> String {
    match report {
        Some(report) => {
            let mut line = format!(
                "config: {} ({} applied, {} ignored",
                path, report.applied, report.ignored
            );
            if !report.malformed_lines.is_empty() {
                let lines: Vec<String> =
                    report.malformed_lines.iter().map(|n| n.to_string()).collect();
                line.push_str(&format!(", malformed lines {}", lines.join(", ")));
            }
            line.push(')');
            line
        }
        None => format!("config: {} (not loaded, using defaults)", path),
    }
}

fn format_options(options: &Options) -> String {
    let colors = [
        ("linenumber", &options.color_line_number),
        ("match", &options.color_match),
        ("filename", &options.color_path),
    ];

    let mut lines: Vec<String> = colors
        .iter()
        .map(|(key, sequence)| {
            format!(
                "{:<10} = {:<14} {}sample{}",
                key,
                escape_sequence(sequence),
                sequence,
                RESET
            )
        })
        .collect();
    lines.push(format!("{:<10} = {:?}", "case", options.casing).to_lowercase());
    lines.push(format!(
        "{:<10} = {}",
        "pager",
        options.pager.as_deref().unwrap_or("(none)")
    ));
    lines.join("\n")
}
