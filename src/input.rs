// src/input.rs
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Opens `path` for line reading. `None` or `-` selects stdin.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file =
                File::open(p).with_context(|| format!("Failed to open input file: {:?}", p))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
