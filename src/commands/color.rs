//! `agrc color` handler

use anyhow::Result;
use std::io::{self, Write};

use agrc::color::{escape_sequence, ColorSpec, WordOutcome};
use agrc::Color;

/// Print the compiled sequence for every spec, one per line.
#[cfg(not(tarpaulin_include))]
pub fn handle(specs: &[String], raw: bool, explain: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for spec in specs {
        let (parsed, outcomes) = ColorSpec::parse_with_outcomes(spec);
        let rendered = parsed.render();

        if raw {
            writeln!(out, "{}", rendered)?;
            continue;
        }

        writeln!(out, "{}", escape_sequence(&rendered))?;
        if explain {
            for (word, outcome) in outcomes {
                writeln!(out, "  {:<12} {}", word, describe(outcome))?;
            }
        }
    }

    Ok(())
}

/// Human-readable description of a word outcome.
pub fn describe(outcome: WordOutcome) -> String {
    match outcome {
        WordOutcome::Foreground(color) => format!("foreground {}", describe_color(color)),
        WordOutcome::Background(color) => format!("background {}", describe_color(color)),
        WordOutcome::Attribute(code) => format!("attribute {}", code),
        WordOutcome::Ignored => "ignored".to_string(),
    }
}

fn describe_color(color: Color) -> String {
    match color {
        Color::Unspecified => "unspecified".to_string(),
        Color::Normal => "normal".to_string(),
        Color::Ansi(code) => format!("ansi {}", code),
        Color::Indexed256(index) => format!("256-color {}", index),
    }
}
