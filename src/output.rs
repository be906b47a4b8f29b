//! Output formatting for dictionary lookup results

use crate::index::types::Payload;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a found entry: headword, pronunciation wrapped in slashes when
/// present, then the definition line by line.
pub fn print_entry(word: &str, payload: &Payload, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", word)?;
    stdout.reset()?;

    if !payload.pronunciation.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, " /{}/", payload.pronunciation)?;
        stdout.reset()?;
    }
    writeln!(stdout)?;

    for line in payload.definition.lines() {
        writeln!(stdout, "  {}", line)?;
    }

    Ok(())
}

/// Print the not-found state with any did-you-mean candidates
pub fn print_not_found(word: &str, suggestions: &[&str], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    write!(stdout, "Not found")?;
    stdout.reset()?;
    writeln!(stdout, ": {}", word)?;

    if !suggestions.is_empty() {
        writeln!(stdout, "Did you mean:")?;
        for suggestion in suggestions {
            write!(stdout, "  ")?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(stdout, "{}", suggestion)?;
            stdout.reset()?;
        }
    }

    Ok(())
}

/// Print a plain word list (suggestions, completions), one per line
pub fn print_word_list<S: AsRef<str>>(words: &[S], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    for word in words {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", word.as_ref())?;
        stdout.reset()?;
    }
    Ok(())
}
