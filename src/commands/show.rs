//! Show command implementation

use std::fmt::Write;

use console::Style;
use mdmatter::config::Config;
use mdmatter::{Document, Result, Value};

use super::helpers::{display_name, read_input, render_value};
use crate::cli::ShowArgs;

pub fn run(config: &Config, args: ShowArgs) -> Result<()> {
    let content = read_input(&args.file)?;
    let document = config.parser().parse(&content)?;

    println!();
    print!("{}", summarize(&display_name(&args.file), &document)?);
    if args.body {
        println!();
        print!("{}", document.body());
    }
    Ok(())
}

fn summarize(name: &str, document: &Document) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "  {}", Style::new().bold().yellow().apply_to(name));

    let metadata = document.metadata();
    if metadata.is_empty() {
        let _ = writeln!(
            out,
            "    {} {}",
            Style::new().bold().apply_to("Metadata:"),
            Style::new().dim().apply_to("none")
        );
    } else {
        let _ = writeln!(
            out,
            "    {} {} keys",
            Style::new().bold().apply_to("Metadata:"),
            metadata.len()
        );
        for (key, value) in metadata.iter() {
            let _ = writeln!(
                out,
                "      {} {}",
                Style::new().cyan().apply_to(format!("{key}:")),
                describe(value)?
            );
        }
    }

    let body = document.body();
    let _ = writeln!(
        out,
        "    {} {} lines, {} bytes",
        Style::new().bold().apply_to("Body:"),
        body.lines().count(),
        body.len()
    );
    Ok(out)
}

fn describe(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(format!("{s:?}")),
        Value::Null => Ok(Style::new().dim().apply_to("null").to_string()),
        other => render_value(other),
    }
}
