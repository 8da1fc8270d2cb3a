use std::{fmt::Display, io::Write};

use crate::error::SinkError;

/// Line oriented writer for reports.
///
/// A reader that went away (`BrokenPipe`) is reported as [`SinkError::Closed`] so that callers
/// can stop rendering without treating it as a failure.
pub struct ReportSink<W> {
    writer: W,
    lines_written: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    SinkClosed,
}

impl<W: Write> ReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    pub fn line(&mut self, line: impl Display) -> Result<(), SinkError> {
        writeln!(self.writer, "{line}")?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines<I>(&mut self, lines: I) -> Result<(), SinkError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for line in lines {
            self.line(line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SinkError> {
        Ok(self.writer.flush()?)
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
