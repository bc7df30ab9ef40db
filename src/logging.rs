//! A small trace sink, modeled on the host crate's `Bus::log_string`/`log_trace`:
//! println! plus an optional file writer, upgraded with `chrono` timestamps
//! so a trace.log can be correlated against wall-clock pacing.

use chrono::Local;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct Logger {
    file: RefCell<Option<BufWriter<File>>>,
    echo: bool,
}

impl Logger {
    /// A logger that only prints to stdout, no file sink.
    pub fn stdout() -> Self {
        Logger { file: RefCell::new(None), echo: true }
    }

    /// A logger that writes timestamped lines to `path`, truncating any
    /// previous contents, and optionally echoes to stdout too.
    pub fn to_file(path: impl AsRef<Path>, echo: bool) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).write(true).truncate(true).open(path)?;
        Ok(Logger { file: RefCell::new(Some(BufWriter::new(file))), echo })
    }

    /// Log a line with a timestamp prefix, echoing to stdout if configured.
    pub fn trace(&self, message: &str) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S%.3f"), message);
        if self.echo {
            println!("{}", line);
        }
        if let Some(writer) = self.file.borrow_mut().as_mut() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}
