use std::io::Read;

use crate::error::RegError;

/// Subject argument meaning "read standard input".
pub const STDIN_SENTINEL: &str = "-";

/// Characters trimmed before deciding a line is blank.
const BLANK: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// The full input text. Matched as a whole; its non-blank lines only count iterations.
#[derive(Debug, Clone)]
pub struct Subject {
    text: String,
}

impl Subject {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Resolve the subject argument: `-` drains `stdin` to the end, anything else is literal text.
    /// Invalid UTF-8 on stdin is replaced with U+FFFD rather than rejected.
    pub fn resolve(arg: &str, mut stdin: impl Read) -> Result<Self, RegError> {
        if arg != STDIN_SENTINEL {
            return Ok(Self::new(arg));
        }
        let mut bytes = Vec::new();
        stdin
            .read_to_end(&mut bytes)
            .map_err(|source| RegError::Io {
                context: "reading subject from stdin",
                source,
            })?;
        Ok(Self::new(String::from_utf8_lossy(&bytes)))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-blank lines, in order. Position in this sequence is the render index.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .filter(|line| !line.trim_matches(BLANK).is_empty())
    }

    /// Number of lines that get a rendered output.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_filtered() {
        let s = Subject::new("a-1\n\nb-2\n");
        assert_eq!(s.lines().collect::<Vec<_>>(), vec!["a-1", "b-2"]);
        assert_eq!(s.line_count(), 2);
    }

    #[test]
    fn whitespace_only_lines_filtered() {
        let s = Subject::new("x\n  \t\r\n\x0B\ny\r\n");
        assert_eq!(s.line_count(), 2);
    }

    #[test]
    fn literal_argument_kept_verbatim() {
        let s = Subject::resolve("x-9", std::io::empty()).unwrap();
        assert_eq!(s.text(), "x-9");
    }

    #[test]
    fn sentinel_reads_stdin() {
        let s = Subject::resolve("-", "x-9\n".as_bytes()).unwrap();
        assert_eq!(s.text(), "x-9\n");
        assert_eq!(s.line_count(), 1);
    }

    #[test]
    fn invalid_utf8_on_stdin_is_replaced_not_rejected() {
        let s = Subject::resolve("-", &b"k-\xff1\nz-2\n"[..]).unwrap();
        assert_eq!(s.text(), "k-\u{FFFD}1\nz-2\n");
        assert_eq!(s.line_count(), 2);
    }

    #[test]
    fn stdin_read_failure_is_io_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("pipe closed"))
            }
        }
        let err = Subject::resolve("-", Broken).unwrap_err();
        assert!(matches!(err, RegError::Io { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
