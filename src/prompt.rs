//! Interactive CSV path resolution

use std::path::{Path, PathBuf};

use anyhow::Result;
use rustyline::completion::FilenameCompleter;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Editor, Helper, Highlighter, Hinter, Validator};

/// Readline helper providing filename tab completion
#[derive(Helper, Completer, Hinter, Highlighter, Validator)]
struct PathHelper {
    #[rustyline(Completer)]
    completer: FilenameCompleter,
}

/// Prompt until the user names an existing file or cancels.
///
/// Returns `None` on empty input, a quit sentinel (`q`/`quit`), Ctrl-C, or
/// Ctrl-D; other readline failures propagate.
pub fn prompt_for_csv_path() -> Result<Option<PathBuf>> {
    let mut editor: Editor<PathHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(PathHelper {
        completer: FilenameCompleter::new(),
    }));

    loop {
        let line = match editor.readline("Enter path to CSV file (or 'q' to quit): ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty()
            || input.eq_ignore_ascii_case("q")
            || input.eq_ignore_ascii_case("quit")
        {
            return Ok(None);
        }

        let path = expand_home(input);
        if path.is_file() {
            return Ok(Some(path));
        }
        println!("File not found: {}. Try again.", input);
    }
}

/// Expand a leading `~/` against $HOME
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return Path::new(&home).join(rest);
        }
    }
    PathBuf::from(input)
}
