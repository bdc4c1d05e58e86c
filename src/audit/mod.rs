//! The audit walk: select groups by name, then check each one in turn.
//!
//! Findings are written as they are found and never collected; the only
//! errors returned from here are output failures.

mod group;
mod subproject;


use crate::Result;
use crate::config::AuditConfig;
use crate::diagnostics::Emitter;
use crate::fetch::Fetcher;
use crate::governance::Context;
use crate::owners::OwnerUrlPatterns;
use std::io::Write;

/// Filter token selecting every group.
pub const ALL: &str = "all";

pub struct Auditor<'a, F: Fetcher, W: Write> {
    context: &'a Context,
    config: &'a AuditConfig,
    fetcher: &'a F,
    patterns: OwnerUrlPatterns,
    out: Emitter<W>,
}

impl<'a, F: Fetcher, W: Write> Auditor<'a, F, W> {
    pub fn new(context: &'a Context, config: &'a AuditConfig, fetcher: &'a F, out: W) -> Result<Self> {
        Ok(Self {
            context,
            config,
            fetcher,
            patterns: OwnerUrlPatterns::new()?,
            out: Emitter::new(out),
        })
    }

    /// Audit every group whose name or dir contains one of `names`
    /// (or every group for `all`), then print `Done.`.
    pub fn run(&mut self, names: &[String]) -> Result<()> {
        let context = self.context;
        for name in names {
            let mut found = false;
            for (category, group) in context.iter() {
                if name.as_str() == ALL
                    || group.name.contains(name.as_str())
                    || group.dir.contains(name.as_str())
                {
                    self.audit_group(category, group)?;
                    found = true;
                }
            }
            if !found {
                tracing::debug!(filter = %name, "filter matched no group");
                self.out.line(format!("[{}] not found", name))?;
            }
        }
        self.out.line("Done.")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out.into_inner()
    }
}
