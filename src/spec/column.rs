// src/spec/column.rs

/// One column directive from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header column this spec reads from. Empty when the spec is malformed,
    /// which leaves its output slot unfilled.
    pub match_name: String,
    /// Name written in the rendered header.
    pub display_name: String,
    /// Literal that replaces the row value in every accepted row.
    pub fixed_value: Option<String>,
}

impl ColumnSpec {
    /// Parses `name`, `name:alias`, `name=literal` or `name:alias=literal`.
    ///
    /// Never fails. A stray `:` with nothing on one side yields an empty
    /// `match_name`, so the spec simply matches no header column. An empty
    /// literal (`name=`) carries no fixed value.
    pub fn parse(arg: &str) -> Self {
        let (base, fixed_value) = match arg.split_once('=') {
            Some((base, literal)) if !literal.is_empty() => (base, Some(literal.to_string())),
            Some((base, _)) => (base, None),
            None => (arg, None),
        };

        let (match_name, display_name) = match base.split_once(':') {
            Some((name, alias)) if !name.is_empty() && !alias.is_empty() => (name, alias),
            Some((_, alias)) if !alias.is_empty() => ("", alias),
            Some(_) => ("", base),
            None => (base, base),
        };

        Self {
            match_name: match_name.to_string(),
            display_name: display_name.to_string(),
            fixed_value,
        }
    }
}

/// Parses every argument in order, one spec per argument.
pub fn parse_specs<S: AsRef<str>>(args: &[S]) -> Vec<ColumnSpec> {
    args.iter().map(|a| ColumnSpec::parse(a.as_ref())).collect()
}
