// src/output/mod.rs

use crate::core_types::DetectionVerdict;
use log::debug;
use std::io::{self, Write};

pub mod formatter;
pub mod writer; // Manages the output destination

pub use writer::OutputDestination;

/// Report formats understood by [`write_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `{"matched": ..., "component_file": ..., "checklist": [...]}`.
    #[default]
    Json,
    /// A Markdown checklist for a PR comment; empty when nothing matched.
    Markdown,
}

/// Writes the report for `verdict` in `format` and flushes the writer.
pub fn write_report(
    verdict: &DetectionVerdict,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> io::Result<()> {
    debug!("Writing {:?} report (matched: {})", format, verdict.matched);
    let rendered = match format {
        OutputFormat::Json => formatter::render_json(verdict)?,
        OutputFormat::Markdown => formatter::render_markdown(verdict),
    };
    writer.write_all(rendered.as_bytes())?;
    writer.flush()
}
