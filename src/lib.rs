#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::struct_excessive_bools,    // regex flag set, CLI struct derives clap
    clippy::missing_errors_doc,        // every error is a RegError variant documented in error.rs
    clippy::missing_panics_doc,        // same
)]

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod render;
pub mod subject;
pub mod template;
pub mod types;

use std::io::Write;

use error::RegError;
use pattern::Pattern;
use subject::Subject;
use template::Template;
use types::{GroupMapping, MatchSet};

/// Everything derived from one invocation's three inputs, before rendering.
#[derive(Debug)]
pub struct Prepared {
    pub template: Template,
    pub mapping: GroupMapping,
    pub matches: MatchSet,
    pub line_count: usize,
}

/// Normalize the template, match the whole subject, build the group mapping.
/// A bad pattern fails here, before anything is rendered.
pub fn prepare(pattern: &str, template: &str, subject: &Subject) -> Result<Prepared, RegError> {
    let template = Template::parse(template)?;
    let pattern = Pattern::parse(pattern)?;
    let matches = matcher::match_all(&pattern, subject.text())?;
    let mapping = GroupMapping::positional(template.references());
    Ok(Prepared {
        template,
        mapping,
        matches,
        line_count: subject.line_count(),
    })
}

/// The single public API: pattern + template + subject → one rendered string per non-blank line.
pub fn run(pattern: &str, template: &str, subject: &Subject) -> Result<Vec<String>, RegError> {
    let prepared = prepare(pattern, template, subject)?;
    render::render_all(
        &prepared.template,
        &prepared.mapping,
        &prepared.matches,
        prepared.line_count,
    )
}

/// Write each rendered string followed by a newline.
pub fn emit<W: Write>(lines: &[String], out: &mut W) -> Result<(), RegError> {
    let io_err = |source| RegError::Io {
        context: "writing output",
        source,
    };
    for line in lines {
        writeln!(out, "{line}").map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}
