pub mod input;
pub mod project;
pub mod run;
pub mod spec;

pub use project::{render_header, Projection, Projector};
pub use run::{run, RunStats};
pub use spec::{parse_specs, ColumnSpec, HeaderIndex};
