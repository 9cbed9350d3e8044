// src/project/mod.rs
pub mod tokenize;

use std::ops::Range;

use crate::spec::{ColumnSpec, HeaderIndex};
use tokenize::spans;

/// What happened to one data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// The rendered row was appended to the output buffer.
    Emitted,
    /// The line had the wrong number of fields and produced no output.
    Skipped { observed: usize, expected: usize },
}

/// Appends the display names, space separated, plus a newline.
pub fn render_header(specs: &[ColumnSpec], out: &mut Vec<u8>) {
    for (i, spec) in specs.iter().enumerate() {
        if i > 0 {
            out.push(b' ');
        }
        out.extend_from_slice(spec.display_name.as_bytes());
    }
    out.push(b'\n');
}

/// Re-projects data lines through a resolved header.
///
/// Holds one slot per spec. The slots are reset for every line so nothing
/// carries over between rows.
pub struct Projector<'a> {
    specs: &'a [ColumnSpec],
    index: &'a HeaderIndex,
    /// Byte range in the current line feeding each output slot.
    slots: Vec<Option<Range<usize>>>,
}

impl<'a> Projector<'a> {
    pub fn new(specs: &'a [ColumnSpec], index: &'a HeaderIndex) -> Self {
        Self {
            specs,
            index,
            slots: vec![None; specs.len()],
        }
    }

    /// Lowercases `line` in place (ASCII only), splits it and, when the field
    /// count matches the header, appends the rendered row to `out`.
    ///
    /// Slots render in spec order: the fixed value if the spec has one, else
    /// the field taken from the row. A slot with neither is left out entirely,
    /// separator included.
    pub fn project_line(&mut self, line: &mut [u8], out: &mut Vec<u8>) -> Projection {
        line.make_ascii_lowercase();
        self.slots.iter_mut().for_each(|slot| *slot = None);

        let expected = self.index.column_count();
        let mut observed = 0;
        for (column, span) in spans(line).enumerate() {
            if let Some(slot) = self.index.slot(column) {
                self.slots[slot] = Some(span);
            }
            observed = column + 1;
        }

        if observed != expected {
            return Projection::Skipped { observed, expected };
        }

        let mut first = true;
        for (spec, slot) in self.specs.iter().zip(&self.slots) {
            let value = match (&spec.fixed_value, slot) {
                (Some(fixed), _) => fixed.as_bytes(),
                (None, Some(span)) => &line[span.clone()],
                (None, None) => continue,
            };
            if !first {
                out.push(b' ');
            }
            out.extend_from_slice(value);
            first = false;
        }
        out.push(b'\n');

        Projection::Emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::parse_specs;

    fn project(header: &[&str], args: &[&str], line: &str) -> (Projection, String) {
        let specs = parse_specs(args);
        let index = HeaderIndex::build(header, &specs);
        let mut projector = Projector::new(&specs, &index);
        let mut buf = line.as_bytes().to_vec();
        let mut out = Vec::new();
        let result = projector.project_line(&mut buf, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reorders_and_overrides() {
        let (result, out) = project(
            &["id", "name", "score"],
            &["name", "id", "score=pending"],
            "7 Alice 42\n",
        );
        assert_eq!(result, Projection::Emitted);
        assert_eq!(out, "alice 7 pending\n");
    }

    #[test]
    fn test_lowercases_data() {
        let (_, out) = project(&["a", "b"], &["a", "b"], "Alpha Beta\n");
        assert_eq!(out, "alpha beta\n");
    }

    #[test]
    fn test_fixed_value_wins_without_a_match() {
        let (_, out) = project(&["id"], &["id", "source=manual"], "3\n");
        assert_eq!(out, "3 manual\n");
    }

    #[test]
    fn test_fixed_value_is_not_lowercased() {
        let (_, out) = project(&["id"], &["id:ID", "tag=MiXed"], "X1\n");
        assert_eq!(out, "x1 MiXed\n");
    }

    #[test]
    fn test_unmatched_slot_adds_no_separator() {
        let (_, out) = project(&["id", "name"], &["id", "missing:ghost", "name"], "1 Bob\n");
        assert_eq!(out, "1 bob\n");

        let (_, out) = project(&["id", "name"], &["missing:ghost"], "1 Bob\n");
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_dropped_columns() {
        let (_, out) = project(&["a", "b", "c"], &["c"], "1 2 3\n");
        assert_eq!(out, "3\n");
    }

    #[test]
    fn test_too_few_fields_skipped() {
        let (result, out) = project(&["a", "b", "c"], &["a"], "1 2\n");
        assert_eq!(
            result,
            Projection::Skipped {
                observed: 2,
                expected: 3
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_too_many_fields_skipped() {
        let (result, out) = project(&["a", "b"], &["b"], "1 2 3 4\n");
        assert_eq!(
            result,
            Projection::Skipped {
                observed: 4,
                expected: 2
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_blank_line_skipped() {
        let (result, _) = project(&["a"], &["a"], "\n");
        assert_eq!(
            result,
            Projection::Skipped {
                observed: 0,
                expected: 1
            }
        );
    }

    #[test]
    fn test_slots_reset_between_lines() {
        let specs = parse_specs(&["a", "b"]);
        let index = HeaderIndex::build(&["a", "b"], &specs);
        let mut projector = Projector::new(&specs, &index);
        let mut out = Vec::new();

        let mut first = b"1 2\n".to_vec();
        projector.project_line(&mut first, &mut out);
        let mut bad = b"9\n".to_vec();
        projector.project_line(&mut bad, &mut out);
        let mut second = b"3 4\n".to_vec();
        projector.project_line(&mut second, &mut out);

        assert_eq!(String::from_utf8(out).unwrap(), "1 2\n3 4\n");
    }

    #[test]
    fn test_render_header() {
        let specs = parse_specs(&["name", "id:key", "score=pending"]);
        let mut out = Vec::new();
        render_header(&specs, &mut out);
        assert_eq!(out, b"name key score\n");
    }

    #[test]
    fn test_render_header_without_specs() {
        let mut out = Vec::new();
        render_header(&[], &mut out);
        assert_eq!(out, b"\n");
    }
}
