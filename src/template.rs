use memchr::memchr_iter;

use crate::error::RegError;
use crate::types::Reference;

/// What `\t` expands to. Four spaces, not a tab character.
const TAB: &str = "    ";

/// A replacement template after escape expansion, with its backreference tokens.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    references: Vec<Reference>,
}

impl Template {
    /// Normalize `raw` and find its backreferences. Built once per run.
    pub fn parse(raw: &str) -> Result<Self, RegError> {
        let text = normalize(raw);
        let references = references(&text)?;
        Ok(Self { text, references })
    }

    /// The normalized template text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

/// Expand the three symbolic escapes: `\n` → newline, `\t` → four spaces, `\s` → space.
///
/// Literal, single pass, left to right. Any other backslash sequence is kept as is.
pub fn normalize(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;

    for pos in memchr_iter(b'\\', bytes) {
        let expansion = match bytes.get(pos + 1) {
            Some(b'n') => "\n",
            Some(b't') => TAB,
            Some(b's') => " ",
            _ => continue,
        };
        out.push_str(&raw[last..pos]);
        out.push_str(expansion);
        last = pos + 2;
    }

    out.push_str(&raw[last..]);
    out
}

/// Every `\<digits>` token in `template`, left to right. Repeats are kept.
pub fn references(template: &str) -> Result<Vec<Reference>, RegError> {
    let bytes = template.as_bytes();
    let mut refs = Vec::new();

    for pos in memchr_iter(b'\\', bytes) {
        let digits = bytes[pos + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            continue;
        }
        // Backslash and ASCII digits are single bytes, so this slice is on char boundaries.
        let token = &template[pos..=pos + digits];
        let group = token[1..]
            .parse::<usize>()
            .map_err(|e| RegError::InvalidTemplate {
                token: token.to_string(),
                reason: e.to_string(),
            })?;
        refs.push(Reference {
            token: token.to_string(),
            group,
            position: pos,
        });
    }

    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_all_three_markers() {
        assert_eq!(
            normalize(r"func ()\s{\n\th.\1\n}"),
            "func () {\n    h.\\1\n}"
        );
    }

    #[test]
    fn tab_is_four_spaces() {
        let out = normalize(r"\t");
        assert_eq!(out, "    ");
        assert!(!out.contains('\t'));
    }

    #[test]
    fn normalize_is_idempotent_without_markers() {
        let plain = "a \\1 b\\2 \\x \\\\";
        assert_eq!(normalize(plain), plain);
        let once = normalize(r"x\ny\sz");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn unknown_escapes_untouched() {
        assert_eq!(normalize(r"\r\w\"), r"\r\w\");
    }

    #[test]
    fn escaped_backslash_before_marker() {
        // `\\n`: the second backslash still pairs with `n`.
        assert_eq!(normalize(r"\\n"), "\\\n");
    }

    #[test]
    fn finds_references_in_order() {
        let refs = references(r"\2:\1 and \10 again \2").unwrap();
        let got: Vec<_> = refs.iter().map(|r| (r.token.as_str(), r.group)).collect();
        assert_eq!(
            got,
            vec![("\\2", 2), ("\\1", 1), ("\\10", 10), ("\\2", 2)]
        );
        assert_eq!(refs[0].position, 0);
        assert_eq!(refs[1].position, 3);
    }

    #[test]
    fn no_references() {
        assert!(references("plain text \\x").unwrap().is_empty());
        assert!(references("trailing \\").unwrap().is_empty());
    }

    #[test]
    fn huge_group_number_rejected() {
        let err = references(r"\99999999999999999999999999").unwrap_err();
        assert!(matches!(err, RegError::InvalidTemplate { .. }));
    }

    #[test]
    fn parse_normalizes_before_extracting() {
        let t = Template::parse(r"\1\s\2").unwrap();
        assert_eq!(t.text(), "\\1 \\2");
        assert_eq!(t.references().len(), 2);
        assert_eq!(t.references()[1].position, 3);
    }
}
