//! Compare command - relative credibility of two statements

use super::{read_statement, Session, SkipNotice};
use crate::compare::{Comparison, Statement};
use crate::reporters::{render_comparison, OutputFormat};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn run(
    session: &Session,
    first: &Path,
    second: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let first_text = read_statement(first)?;
    let second_text = read_statement(second)?;

    let first_result = session.engine.analyze(&first_text);
    let second_result = session.engine.analyze(&second_text);

    let (Some(a), Some(b)) = (first_result.clone(), second_result.clone()) else {
        if format == OutputFormat::Json {
            let empty = [(first, &first_result), (second, &second_result)]
                .into_iter()
                .filter(|(_, result)| result.is_none())
                .map(|(path, _)| path);
            return SkipNotice::no_words(empty).write_json(out);
        }
        for (slot, path, result) in [
            (Statement::First, first, &first_result),
            (Statement::Second, second, &second_result),
        ] {
            if result.is_none() {
                writeln!(
                    out,
                    "{} ({}) has no words to analyze; comparison skipped.",
                    slot,
                    path.display()
                )?;
            }
        }
        return Ok(());
    };

    let comparison = Comparison::from_results(a, b);
    let rendered = render_comparison(&comparison, session.engine.lexicon(), format, session.color)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
