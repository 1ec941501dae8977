//! Line-oriented prompt loop.

use std::io::{BufRead, Write};

use common::{Action, EntityKind};
use domain::{Dispatcher, Field, Outcome, parse_entity};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};

/// A parsed prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Empty,
    Help,
    Exit,
    Command {
        action: Action,
        keyword: String,
        tokens: Vec<String>,
    },
}

/// Splits a prompt line into its action, entity keyword and flag tokens.
///
/// Words follow shell quoting rules, so `-s "Cold water"` is one value.
/// The entity keyword is passed on unchecked; the dispatcher rejects
/// unknown ones.
pub fn parse_line(line: &str) -> Result<Line> {
    let words = shlex::split(line).ok_or_else(|| CliError::UnbalancedQuotes {
        line: line.trim().to_string(),
    })?;
    let mut words = words.into_iter();
    let Some(first) = words.next() else {
        return Ok(Line::Empty);
    };

    match first.as_str() {
        "help" => return Ok(Line::Help),
        "exit" | "quit" => return Ok(Line::Exit),
        _ => {}
    }

    let action = first.parse::<Action>().map_err(CliError::UnknownAction)?;
    let keyword = words.next().ok_or(CliError::MissingEntity { action })?;

    Ok(Line::Command {
        action,
        keyword,
        tokens: words.collect(),
    })
}

/// Runs the prompt over any buffered reader until `exit` or end of input.
///
/// Rejected commands are reported on `err` as `error: <message>` and the
/// loop continues, including lines that are not valid UTF-8. Only I/O and
/// serialization failures end the session.
pub fn run<R, W, E>(
    dispatcher: &Dispatcher,
    config: &Config,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let result = std::str::from_utf8(&buf)
            .map_err(CliError::from)
            .and_then(|line| {
                let line = line.trim_end_matches(['\n', '\r']);
                handle_line(dispatcher, config, line, out)
            });
        if !settle(result, err)? {
            break;
        }
    }
    Ok(())
}

/// Runs the prompt on a terminal with line editing and in-session history.
///
/// Ctrl-C abandons the current line; Ctrl-D ends the session like `exit`.
pub fn run_interactive<W, E>(
    dispatcher: &Dispatcher,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    W: Write,
    E: Write,
{
    let mut editor = DefaultEditor::new()?;
    loop {
        let result = match editor.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    editor.add_history_entry(trimmed)?;
                }
                handle_line(dispatcher, config, trimmed, out)
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(err, "interrupted, type 'exit' to quit")?;
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !settle(result, err)? {
            break;
        }
    }
    Ok(())
}

/// Reports a recoverable error on `err`. Returns whether to keep reading.
fn settle<E: Write>(result: Result<bool>, err: &mut E) -> Result<bool> {
    match result {
        Ok(keep_going) => Ok(keep_going),
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "line rejected");
            writeln!(err, "error: {e}")?;
            Ok(true)
        }
        Err(e) => Err(e),
    }
}

/// Handles one line. Returns `false` when the session should end.
fn handle_line<W: Write>(
    dispatcher: &Dispatcher,
    config: &Config,
    line: &str,
    out: &mut W,
) -> Result<bool> {
    match parse_line(line)? {
        Line::Empty => {}
        Line::Help => out.write_all(help_text().as_bytes())?,
        Line::Exit => return Ok(false),
        Line::Command {
            action,
            keyword,
            tokens,
        } => {
            let kind = parse_entity(&keyword)?;
            let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
            if let Outcome::Listing(records) = dispatcher.dispatch(kind, &tokens, action)? {
                for record in &records {
                    match config.output {
                        OutputFormat::Text => writeln!(out, "{record}")?,
                        OutputFormat::Json => {
                            writeln!(out, "{}", serde_json::to_string(record)?)?
                        }
                    }
                }
            }
        }
    }
    Ok(true)
}

/// Usage text listing actions, entities and flags.
pub fn help_text() -> String {
    let actions: Vec<&str> = Action::ALL.iter().map(Action::keyword).collect();
    let entities: Vec<&str> = EntityKind::ALL.iter().map(EntityKind::keyword).collect();
    let flags: String = Field::ALL
        .iter()
        .map(|field| {
            let values = if field.arity() == 2 {
                "<street> <number>"
            } else {
                "<value>"
            };
            format!("  {:<14} {:<4} {values}\n", field.long(), field.short())
        })
        .collect();

    format!(
        "usage: <action> <entity> [flags]\n\n\
         actions: {}\n\
         entities: {}\n\n\
         flags:\n{flags}\n\
         quote values that contain spaces: -s \"Cold water\"\n\
         other: help, exit\n",
        actions.join(" "),
        entities.join(" "),
    )
}
