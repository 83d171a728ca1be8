use std::io::{BufRead, Write};

use crate::command::USAGE;
use crate::dispatcher::{dispatch, Outcome};
use crate::virtual_file_sys::FileSys;

/// Commands the reference presentation layer ran as its sample session.
pub const DEMO_SCRIPT: &[&str] = &[
    "CREATE D root/Documents",
    "CREATE U root/Documents/TestFile.txt",
    "WRITE root/Documents/TestFile.txt Hello World",
    "READ root/Documents/TestFile.txt",
    "DELETE root/Documents/TestFile.txt",
];

/// Line-oriented front end over a `FileSys`.
pub struct Shell<R, W> {
    fs: FileSys,
    input: R,
    output: W,
    show_tree: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(fs: FileSys, input: R, output: W) -> Self {
        Self {
            fs,
            input,
            output,
            show_tree: false,
        }
    }

    pub fn show_tree(mut self, show: bool) -> Self {
        self.show_tree = show;
        self
    }

    pub fn file_sys(&self) -> &FileSys {
        &self.fs
    }

    /// Prompts and runs commands until `exit`, `quit` or end of input.
    pub fn run(&mut self, prompt: bool) -> std::io::Result<()> {
        loop {
            if prompt {
                write!(self.output, ">> ")?;
                self.output.flush()?;
            }
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            match buf.trim() {
                "" => {}
                "--help" | "help" => self.help()?,
                "exit" | "quit" => break,
                line => {
                    self.run_line(line)?;
                }
            }
        }
        Ok(())
    }

    pub fn run_script<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> std::io::Result<()> {
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            writeln!(self.output, ">> {line}")?;
            self.run_line(line)?;
        }
        Ok(())
    }

    pub fn run_line(&mut self, line: &str) -> std::io::Result<Outcome> {
        let outcome = dispatch(&mut self.fs, line);
        match outcome.kind {
            None => writeln!(self.output, "OK {}", outcome.message)?,
            Some(kind) => writeln!(self.output, "ERR {kind:?}: {}", outcome.message)?,
        }
        if self.show_tree {
            let tree = serde_json::to_string_pretty(&outcome.snapshot)?;
            writeln!(self.output, "{tree}")?;
        }
        Ok(outcome)
    }

    pub fn help(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "{USAGE}")?;
        writeln!(self.output, "exit")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
