use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use crate::errors::errors::{Error, ErrorImpl};

/// Where the raw source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    File(PathBuf),
    Interactive,
    Menu,
}

impl SourceInput {
    /// `stdin` feeds the interactive forms; `stdout` only shows the menu.
    pub fn load<R: BufRead, W: Write>(&self, stdin: R, stdout: &mut W) -> Result<String, Error> {
        match self {
            SourceInput::File(path) => read_source_file(path),
            SourceInput::Interactive => read_source_interactive(stdin),
            SourceInput::Menu => prompt_for_source(stdin, stdout),
        }
    }
}

/// Reads a whole file. Bytes that are not valid UTF-8 become `U+FFFD`.
pub fn read_source_file(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| ErrorImpl::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let source = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source file");
    Ok(source)
}

/// Reads lines until EOF, terminating each one with `\n`.
///
/// Like files, invalid UTF-8 is replaced rather than rejected.
pub fn read_source_interactive<R: BufRead>(mut reader: R) -> Result<String, Error> {
    let mut source = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| ErrorImpl::StdinRead { source })?;
        if read == 0 {
            break;
        }

        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        source.push_str(&String::from_utf8_lossy(&line));
        source.push('\n');
    }

    Ok(source)
}

/// Runs the two-option menu: analyse a named file, or read code until EOF.
pub fn prompt_for_source<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<String, Error> {
    let terminal = |source| ErrorImpl::Terminal { source };

    writeln!(output, "Interactive Lexical Analyzer\n============================").map_err(terminal)?;
    writeln!(output, "1. Analyze from file\n2. Enter code manually").map_err(terminal)?;
    write!(output, "Choose an option (1 or 2): ").map_err(terminal)?;
    output.flush().map_err(terminal)?;

    let choice = read_answer(&mut input)?;

    match choice.as_str() {
        "1" => {
            write!(output, "Enter file name: ").map_err(terminal)?;
            output.flush().map_err(terminal)?;

            let file_name = read_answer(&mut input)?;
            read_source_file(Path::new(&file_name))
        }
        "2" => {
            writeln!(output, "Enter C++ code (Ctrl+Z or Ctrl+D to end):").map_err(terminal)?;
            read_source_interactive(input)
        }
        _ => Err(ErrorImpl::InvalidChoice { choice }.into()),
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String, Error> {
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|source| ErrorImpl::StdinRead { source })?;

    Ok(answer.trim().to_string())
}
