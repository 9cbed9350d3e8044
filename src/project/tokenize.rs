// src/project/tokenize.rs
use std::ops::Range;

/// Field separators for header and data lines.
const DELIMITERS: &[u8] = b" \t\n";

#[inline]
fn is_delimiter(b: u8) -> bool {
    DELIMITERS.contains(&b)
}

/// Byte ranges of the fields in `line`. Runs of delimiters count as one
/// separator, so no field is ever empty.
pub fn spans(line: &[u8]) -> Spans<'_> {
    Spans { line, pos: 0 }
}

/// Fields of `line` as slices.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    spans(line).map(move |span| &line[span])
}

pub struct Spans<'a> {
    line: &'a [u8],
    pos: usize,
}

impl Iterator for Spans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let start = self.pos + self.line[self.pos..].iter().position(|b| !is_delimiter(*b))?;
        let end = self.line[start..]
            .iter()
            .position(|b| is_delimiter(*b))
            .map_or(self.line.len(), |n| start + n);
        self.pos = end;
        Some(start..end)
    }
}
