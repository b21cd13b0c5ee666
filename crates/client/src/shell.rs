//! Line-oriented shell loop.
use std::io::{BufRead, Write};

use anyhow::Result;

use crate::command::{Command, HELP};
use crate::message::MessageEntry;
use crate::session::Session;

/// Reads commands from `input` until EOF or `quit`, writing the menu and
/// notices to `output`.
///
/// Lines that are not valid UTF-8 are rejected with a notice; only I/O
/// failures end the loop early.
pub fn run<R, W>(session: &mut Session, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", session.frame())?;
    prompt(&mut output)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::warn!(bytes = buf.len(), "Rejected input that is not valid UTF-8");
            writeln!(output, "! input is not valid UTF-8")?;
            prompt(&mut output)?;
            continue;
        };
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        let command = match Command::parse(line, &session.content().catalog) {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(input = %line, error = %err, "Rejected command");
                writeln!(output, "! {err} (type 'help' for commands)")?;
                prompt(&mut output)?;
                continue;
            }
        };

        let redraw = match command {
            Command::Select(element) => session.select(element),
            Command::Combine => {
                let created = session.combine().is_some();
                if created && session.is_complete() {
                    session_complete(&mut output)?;
                }
                true
            }
            Command::Show => true,
            Command::Reset => {
                session.reset();
                true
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                false
            }
            Command::Quit => break,
        };

        write_messages(&mut output, session.dismiss_messages())?;
        if redraw {
            write!(output, "{}", session.frame())?;
        }
        prompt(&mut output)?;
    }

    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

fn write_messages<W: Write>(output: &mut W, messages: Vec<MessageEntry>) -> Result<()> {
    for message in messages {
        writeln!(output, "{}{}", message.level.prefix(), message.text)?;
    }
    Ok(())
}

fn session_complete<W: Write>(output: &mut W) -> Result<()> {
    tracing::info!("All elements discovered");
    writeln!(output, "Every element has been discovered!")?;
    Ok(())
}
