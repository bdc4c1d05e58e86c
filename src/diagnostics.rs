//! Free-text diagnostic lines written while auditing.
//!
//! Every finding is one line of the form `<SEVERITY>: <message>`. Progress
//! lines (`>>>> Processing ...`, `Done.`) carry no prefix.

use std::fmt;
use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Best-effort field left empty; informational only.
    Optional,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Optional => "OPTIONAL",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line-oriented writer for findings and progress output.
pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn finding(&mut self, severity: Severity, message: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{}: {}", severity, message)?;
        Ok(())
    }

    pub fn error(&mut self, message: impl fmt::Display) -> Result<()> {
        self.finding(Severity::Error, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> Result<()> {
        self.finding(Severity::Warning, message)
    }

    pub fn optional(&mut self, message: impl fmt::Display) -> Result<()> {
        self.finding(Severity::Optional, message)
    }

    /// Section header, preceded by a blank line.
    pub fn section(&mut self, title: impl fmt::Display) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, ">>>> {}", title)?;
        Ok(())
    }

    pub fn line(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
