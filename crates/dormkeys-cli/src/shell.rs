//! Interactive shell: one loaded dormitory, many commands.

use std::io::{self, BufRead, Write};

use clap::Parser;
use dormkeys::{FrontDesk, Store};

use crate::cli::ShellLine;
use crate::commands::execute;

const PROMPT: &str = "dormkeys> ";

/// Reads commands from `input` until end of input or `quit`, writing
/// each result to `out`. Operation errors are reported and the loop
/// keeps going; only I/O errors on `input`/`out` end it early.
pub fn run<S, R, W>(desk: &mut FrontDesk<S>, mut input: R, out: &mut W) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Type `help` for commands, `quit` to leave.")?;
    let mut buf = Vec::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            writeln!(out, "Error: line is not valid UTF-8")?;
            continue;
        };
        let words = match split_words(line) {
            Ok(words) => words,
            Err(reason) => {
                writeln!(out, "Error: {reason}")?;
                continue;
            }
        };
        match words.first().map(String::as_str) {
            None => continue,
            Some("quit" | "exit") => break,
            Some(_) => {}
        }

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => match execute(desk, parsed.op) {
                Ok(message) => writeln!(out, "{message}")?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            Err(e) => write!(out, "{}", e.render())?,
        }
    }
    Ok(())
}

/// Splits a line into words, keeping double-quoted text together so
/// names like `"Mary Ann"` survive.
fn split_words(line: &str) -> Result<Vec<String>, &'static str> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if quoted {
        return Err("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
