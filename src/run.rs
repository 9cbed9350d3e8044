// src/run.rs
use anyhow::{Context, Result};
use std::{
    io::{BufRead, Write},
    time::Instant,
};
use tracing::{debug, info, trace};

use crate::{
    project::{render_header, tokenize::tokens, Projection, Projector},
    spec::{ColumnSpec, HeaderIndex},
};

/// Counters for one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Columns declared by the header line.
    pub header_columns: usize,
    /// Data lines read after the header.
    pub rows_read: u64,
    pub rows_emitted: u64,
    pub rows_skipped: u64,
}

/// Reads the header from `input`, writes the rendered header to `output`,
/// then projects every remaining line.
///
/// Rows with the wrong field count are not errors: each one produces a
/// `skipping:` line on `diagnostics` and the run continues. Empty input
/// writes nothing. Only I/O failures end the run early.
#[tracing::instrument(level = "debug", skip_all, fields(specs = specs.len()))]
pub fn run<R, W, E>(
    mut input: R,
    mut output: W,
    mut diagnostics: E,
    specs: &[ColumnSpec],
) -> Result<RunStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let start = Instant::now();
    let mut stats = RunStats::default();
    let mut line = Vec::new();

    // ─── header ──────────────────────────────────────────────────────
    if read_line(&mut input, &mut line)? == 0 {
        debug!("empty input, no header");
        return Ok(stats);
    }
    let index = {
        let header: Vec<&[u8]> = tokens(&line).collect();
        HeaderIndex::build(&header, specs)
    };
    stats.header_columns = index.column_count();
    debug!(columns = index.column_count(), "header resolved");
    for spec in index.unmatched(specs) {
        debug!(
            column = %spec.match_name,
            display = %spec.display_name,
            fixed = spec.fixed_value.is_some(),
            "spec matches no header column"
        );
    }

    let mut rendered = Vec::new();
    render_header(specs, &mut rendered);
    output
        .write_all(&rendered)
        .context("Failed to write header")?;

    // ─── rows ────────────────────────────────────────────────────────
    let mut projector = Projector::new(specs, &index);
    let mut line_no: u64 = 1;
    loop {
        line.clear();
        if read_line(&mut input, &mut line)? == 0 {
            break;
        }
        line_no += 1;
        stats.rows_read += 1;

        rendered.clear();
        match projector.project_line(&mut line, &mut rendered) {
            Projection::Emitted => {
                output
                    .write_all(&rendered)
                    .with_context(|| format!("Failed to write row from line {}", line_no))?;
                stats.rows_emitted += 1;
            }
            Projection::Skipped { observed, expected } => {
                trace!(line = line_no, observed, expected, "row skipped");
                writeln!(
                    diagnostics,
                    "skipping: #cols = {}, expected {}",
                    observed, expected
                )
                .context("Failed to write diagnostic")?;
                stats.rows_skipped += 1;
            }
        }
    }

    output.flush().context("Failed to flush output")?;
    info!(
        rows_read = stats.rows_read,
        rows_emitted = stats.rows_emitted,
        rows_skipped = stats.rows_skipped,
        elapsed = ?start.elapsed(),
        "completed"
    );
    Ok(stats)
}

fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> Result<usize> {
    input.read_until(b'\n', buf).context("Failed to read input")
}
