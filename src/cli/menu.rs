//! Interactive menu - the default when no subcommand is given

use super::{analyze, batch, compare, read_statement, Session};
use crate::reporters::{render_statement, OutputFormat};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const RULE_WIDTH: usize = 65;

enum Choice {
    Analyze,
    Compare,
    Batch,
    Exit,
    Unknown(String),
}

impl Choice {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => Choice::Analyze,
            "2" => Choice::Compare,
            "3" => Choice::Batch,
            "4" => Choice::Exit,
            other => Choice::Unknown(other.to_string()),
        }
    }
}

/// Print `label` and read one line. `None` on end of input.
fn prompt(input: &mut dyn BufRead, out: &mut dyn Write, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Paths pasted from a file manager often arrive quoted
fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(['"', ' ']))
}

fn banner(out: &mut dyn Write) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}\n         LYAR: INTELLIGENCE & FORENSICS\n{}", rule, rule)?;
    writeln!(
        out,
        "1. Analyze Statement | 2. Compare Statements | 3. Batch Process Folder | 4. Exit"
    )?;
    Ok(())
}

fn analyze_statement(session: &Session, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool> {
    let Some(raw) = prompt(input, out, "File Path: ")? else {
        return Ok(false);
    };
    let path = clean_path(&raw);
    let text = read_statement(&path)?;
    let Some(report) = analyze::build_report(session, &text) else {
        writeln!(out, "No words to analyze in {}; skipping.", path.display())?;
        return Ok(true);
    };
    out.write_all(render_statement(&report, OutputFormat::Text, session.color)?.as_bytes())?;

    let Some(answer) = prompt(input, out, "Export HTML Report? (y/n): ")? else {
        return Ok(false);
    };
    if answer.trim().eq_ignore_ascii_case("y") {
        let target = session.config.html_output();
        analyze::export_html(&report, &target)?;
        writeln!(
            out,
            "\n[SUCCESS] Comprehensive HTML report with legend saved: {}",
            target.display()
        )?;
    }
    Ok(true)
}

fn compare_statements(session: &Session, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool> {
    let Some(first) = prompt(input, out, "File 1 Path: ")? else {
        return Ok(false);
    };
    let Some(second) = prompt(input, out, "File 2 Path: ")? else {
        return Ok(false);
    };
    compare::run(
        session,
        &clean_path(&first),
        &clean_path(&second),
        OutputFormat::Text,
        out,
    )?;
    Ok(true)
}

fn batch_folder(session: &Session, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool> {
    let Some(raw) = prompt(input, out, "Folder path: ")? else {
        return Ok(false);
    };
    let chart = session.config.chart_output();
    batch::run(
        session,
        &clean_path(&raw),
        session.config.extension(),
        OutputFormat::Text,
        None,
        Some(&chart),
        out,
    )?;
    Ok(true)
}

/// Run the menu loop until the user exits or input ends.
///
/// Errors from a single action are reported and the loop continues.
pub fn run(session: &Session, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
    loop {
        banner(out)?;
        let Some(line) = prompt(input, out, "\nOption: ")? else {
            writeln!(out)?;
            return Ok(());
        };

        let outcome = match Choice::parse(&line) {
            Choice::Analyze => analyze_statement(session, input, out),
            Choice::Compare => compare_statements(session, input, out),
            Choice::Batch => batch_folder(session, input, out),
            Choice::Exit => {
                writeln!(out, "Closing LYAR engine...")?;
                return Ok(());
            }
            Choice::Unknown(other) => {
                writeln!(out, "Unknown option '{}'. Choose 1-4.", other)?;
                Ok(true)
            }
        };

        match outcome {
            Ok(true) => {}
            Ok(false) => {
                writeln!(out)?;
                return Ok(());
            }
            Err(e) => writeln!(out, "System Error: {:#}", e)?,
        }
    }
}
