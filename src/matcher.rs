use grep_matcher::{Captures, Match, Matcher};

use crate::error::RegError;
use crate::pattern::Pattern;
use crate::types::{Capture, MatchSet};

/// Run `pattern` once over the whole, unfiltered `subject` and collect every
/// non-overlapping match with all of its groups.
///
/// Zero matches is not an error: the set is simply empty.
pub fn match_all(pattern: &Pattern, subject: &str) -> Result<MatchSet, RegError> {
    let matcher = pattern.compile()?;
    collect(&matcher, subject).map_err(|reason| RegError::InvalidPattern {
        pattern: pattern.source.clone(),
        reason,
    })
}

/// Generic over the matcher so the engine stays behind the `grep-matcher` seam.
fn collect<M: Matcher>(matcher: &M, subject: &str) -> Result<MatchSet, String> {
    let mut caps = matcher.new_captures().map_err(|e| e.to_string())?;
    // capture_count includes the implicit whole-match group.
    let group_count = matcher.capture_count().saturating_sub(1);
    let mut set = MatchSet::with_groups(group_count);

    matcher
        .captures_iter(subject.as_bytes(), &mut caps, |caps| {
            set.matches.push(capture(subject, caps.get(0)));
            for (idx, column) in set.groups.iter_mut().enumerate() {
                column.push(capture(subject, caps.get(idx + 1)));
            }
            true
        })
        .map_err(|e| e.to_string())?;

    Ok(set)
}

fn capture(subject: &str, span: Option<Match>) -> Capture {
    match span {
        Some(m) => Capture {
            text: String::from_utf8_lossy(&subject.as_bytes()[m.start()..m.end()]).into_owned(),
            offset: Some(m.start()),
        },
        None => Capture {
            text: String::new(),
            offset: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, subject: &str) -> MatchSet {
        match_all(&Pattern::parse(pattern).unwrap(), subject).unwrap()
    }

    fn texts(caps: &[Capture]) -> Vec<&str> {
        caps.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn collects_groups_column_wise() {
        let set = run(r"/(\w+)-(\w+)/", "a-1\nb-2\nc-3");
        assert_eq!(set.len(), 3);
        assert_eq!(set.group_count(), 2);
        assert_eq!(texts(&set.matches), vec!["a-1", "b-2", "c-3"]);
        assert_eq!(texts(set.group(1).unwrap()), vec!["a", "b", "c"]);
        assert_eq!(texts(set.group(2).unwrap()), vec!["1", "2", "3"]);
    }

    #[test]
    fn records_byte_offsets() {
        let set = run(r"(\w+)-(\w+)", "a-1\nbb-2");
        let offsets: Vec<_> = set.group(2).unwrap().iter().map(|c| c.offset).collect();
        assert_eq!(offsets, vec![Some(2), Some(7)]);
        assert_eq!(set.matches[1].offset, Some(4));
    }

    #[test]
    fn matches_across_the_whole_subject() {
        // One match spanning two lines: the subject is matched as a whole, not per line.
        let set = run(r"/a\n(b)/", "a\nb\n");
        assert_eq!(set.len(), 1);
        assert_eq!(texts(set.group(1).unwrap()), vec!["b"]);
    }

    #[test]
    fn non_participating_group_is_empty() {
        let set = run(r"(x)?(\d)", "5");
        let g1 = &set.group(1).unwrap()[0];
        assert_eq!(g1.text, "");
        assert_eq!(g1.offset, None);
        assert_eq!(set.group(2).unwrap()[0].text, "5");
    }

    #[test]
    fn zero_matches_keeps_group_shape() {
        let set = run(r"(\d+)", "no digits here");
        assert!(set.is_empty());
        assert_eq!(set.group_count(), 1);
        assert!(set.group(1).unwrap().is_empty());
    }

    #[test]
    fn case_insensitive_flag() {
        let set = run(r"/A-(\d)/i", "a-1 A-2");
        assert_eq!(texts(set.group(1).unwrap()), vec!["1", "2"]);
    }

    #[test]
    fn malformed_pattern_is_an_error() {
        let err = match_all(&Pattern::parse("/[a-/").unwrap(), "abc").unwrap_err();
        assert!(matches!(err, RegError::InvalidPattern { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
