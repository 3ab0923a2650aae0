use grep_regex::{RegexMatcher, RegexMatcherBuilder};

use crate::error::RegError;

/// Characters accepted as pattern delimiters, as in `/(\w+)/i` or `#a|b#`.
/// Brackets are left out: `(\w+)-(\w+)` is a bare pattern, not `(...)`-delimited.
const DELIMITERS: &[u8] = b"/#~!@%,;=|";

/// Engine options selected by trailing flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub swap_greed: bool,
}

/// A pattern split into its engine body and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The argument as given, for error messages.
    pub source: String,
    pub body: String,
    pub flags: Flags,
}

impl Pattern {
    /// Split a `/body/flags` pattern, or take a bare pattern verbatim.
    pub fn parse(source: &str) -> Result<Self, RegError> {
        let Some((body, flag_str)) = split_delimited(source) else {
            return Ok(Self {
                source: source.to_string(),
                body: source.to_string(),
                flags: Flags::default(),
            });
        };

        let mut flags = Flags::default();
        for c in flag_str.chars() {
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.ignore_whitespace = true,
                'U' => flags.swap_greed = true,
                // Unicode is always on.
                'u' => {}
                other => {
                    return Err(RegError::InvalidPattern {
                        pattern: source.to_string(),
                        reason: format!("unknown flag '{other}'"),
                    });
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            body: body.to_string(),
            flags,
        })
    }

    /// Compile into a matcher. A malformed body is an `InvalidPattern` error.
    pub fn compile(&self) -> Result<RegexMatcher, RegError> {
        RegexMatcherBuilder::new()
            .case_insensitive(self.flags.case_insensitive)
            .multi_line(self.flags.multi_line)
            .dot_matches_new_line(self.flags.dot_matches_new_line)
            .ignore_whitespace(self.flags.ignore_whitespace)
            .swap_greed(self.flags.swap_greed)
            .build(&self.body)
            .map_err(|e| RegError::InvalidPattern {
                pattern: self.source.clone(),
                reason: e.to_string(),
            })
    }
}

/// `Some((body, flags))` when `source` opens with a delimiter that closes again later.
/// The *last* occurrence closes, so `/a/b/` has body `a/b` and inner delimiters need no escaping.
fn split_delimited(source: &str) -> Option<(&str, &str)> {
    let &first = source.as_bytes().first()?;
    if !DELIMITERS.contains(&first) {
        return None;
    }
    let close = source.rfind(char::from(first))?;
    if close == 0 {
        return None;
    }
    Some((&source[1..close], &source[close + 1..]))
}
