use std::{
    io::{Stdout, Write, stdout},
    sync::Mutex,
};

use log::error;

use crate::DisplaySink;

/// A display field printed as a labelled block on a terminal.
pub struct ConsoleSink<W: Write + Send = Stdout> {
    label: String,
    writer: Mutex<W>,
}

impl ConsoleSink {
    /// Creates a new `ConsoleSink` instance printing to stdout.
    pub fn new(label: &str) -> Self {
        Self::with_writer(label, stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Creates a new `ConsoleSink` instance printing to the given writer.
    pub fn with_writer(label: &str, writer: W) -> Self {
        Self {
            label: label.to_string(),
            writer: Mutex::new(writer),
        }
    }

    fn write_block(&self, text: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| std::io::Error::other("Console writer lock poisoned"))?;
        writeln!(writer, "[{}]", self.label)?;
        write!(writer, "{text}")?;
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(writer)?;
        }
        writer.flush()
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer.into_inner().unwrap()
    }
}

impl<W: Write + Send> DisplaySink for ConsoleSink<W> {
    fn display(&self, text: &str) {
        if let Err(e) = self.write_block(text) {
            error!("Failed to display {}: {e}", self.label);
        }
    }
}
