pub mod column;
pub mod header;

pub use column::{parse_specs, ColumnSpec};
pub use header::HeaderIndex;
