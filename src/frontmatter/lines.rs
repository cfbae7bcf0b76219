//! Line scanning with byte offsets, so the body can be sliced verbatim.

use super::DELIMITER;

/// One line of input without its terminator.
///
/// `start..end` spans the line including its `\n` / `\r\n`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Line<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Line<'_> {
    /// `---` with optional trailing spaces or tabs
    pub fn is_delimiter(&self) -> bool {
        self.text.trim_end_matches([' ', '\t']) == DELIMITER
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_terminated(&self) -> bool {
        self.end > self.start + self.text.len()
    }
}

pub(super) fn lines(input: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    input.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let text = raw
            .strip_suffix('\n')
            .map_or(raw, |t| t.strip_suffix('\r').unwrap_or(t));
        Line {
            text,
            start,
            end: offset,
        }
    })
}
