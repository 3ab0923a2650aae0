use serde::Serialize;

use crate::error::RegError;

/// One captured span: the matched text and its byte offset in the subject.
/// A group that didn't participate in a match has empty text and no offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capture {
    pub text: String,
    pub offset: Option<usize>,
}

/// Every match of the pattern across the whole subject, collected in one pass.
///
/// Stored column-wise: `groups[g - 1][k]` is group `g` of the k-th whole match,
/// so a (group, line index) lookup is two slice indexes.
#[derive(Debug, Default, Serialize)]
pub struct MatchSet {
    /// Whole-match spans (group 0), in subject order.
    pub matches: Vec<Capture>,
    /// Per capture group (1-based group `g` lives at `g - 1`), one entry per whole match.
    pub groups: Vec<Vec<Capture>>,
}

impl MatchSet {
    /// Empty set for a pattern with `group_count` capture groups.
    #[must_use]
    pub fn with_groups(group_count: usize) -> Self {
        Self {
            matches: Vec::new(),
            groups: vec![Vec::new(); group_count],
        }
    }

    /// Number of whole-match occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of capture groups in the pattern, excluding the whole match.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Captures of 1-based group `group`, or `None` if the pattern has no such group.
    #[must_use]
    pub fn group(&self, group: usize) -> Option<&[Capture]> {
        let idx = group.checked_sub(1)?;
        self.groups.get(idx).map(Vec::as_slice)
    }

    /// Group `group`'s capture in the `line`-th whole match.
    pub fn capture(&self, group: usize, line: usize) -> Result<&Capture, RegError> {
        let captures = self.group(group).unwrap_or(&[]);
        captures.get(line).ok_or(RegError::IndexOutOfRange {
            line,
            group,
            available: captures.len(),
        })
    }
}

/// A backreference token found in the template, e.g. `\2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Exact token text, used for literal replacement.
    pub token: String,
    /// The group number as written in the token.
    pub group: usize,
    /// Byte offset of the token in the normalized template.
    pub position: usize,
}

/// One row of a [`GroupMapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub token: String,
    /// Group the token names literally. Informational only.
    pub written: usize,
    /// Group whose captures replace the token.
    pub source: usize,
}

/// Which capture group feeds each backreference occurrence.
///
/// The n-th token in the template (0-based) is filled from group n + 1, no
/// matter which digit it spells. `\2:\1` therefore renders exactly like
/// `\1:\2`. The digits only decide the token text that gets replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMapping {
    slots: Vec<Slot>,
}

impl GroupMapping {
    #[must_use]
    pub fn positional(references: &[Reference]) -> Self {
        let slots = references
            .iter()
            .enumerate()
            .map(|(j, r)| Slot {
                token: r.token.clone(),
                written: r.group,
                source: j + 1,
            })
            .collect();
        Self { slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
