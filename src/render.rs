use crate::error::RegError;
use crate::template::Template;
use crate::types::{GroupMapping, MatchSet};

/// Render the template for filtered line `line`.
///
/// Walks the mapping in template order. Each slot's token text is replaced
/// everywhere in the working string by its source group's capture from the
/// `line`-th whole match. Replacements apply one after another, so a later
/// slot sees the output of earlier ones.
pub fn render(
    line: usize,
    template: &Template,
    mapping: &GroupMapping,
    matches: &MatchSet,
) -> Result<String, RegError> {
    let mut out = template.text().to_string();
    for slot in mapping.slots() {
        let capture = matches.capture(slot.source, line)?;
        out = out.replace(&slot.token, &capture.text);
    }
    Ok(out)
}

/// Render lines `0..line_count` in order. The first failing line aborts the lot.
pub fn render_all(
    template: &Template,
    mapping: &GroupMapping,
    matches: &MatchSet,
    line_count: usize,
) -> Result<Vec<String>, RegError> {
    (0..line_count)
        .map(|line| render(line, template, mapping, matches))
        .collect()
}
