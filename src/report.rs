//! Statistics report input and output
//!
//! Reports are line-oriented: `owner.name value flags description...`,
//! interleaved with headers, separators and blank lines that carry no data.

mod parser;
mod reader;
mod render;

pub use parser::{ReportParser, StatLine, parse};
pub use reader::ReportReader;
pub use render::{
    OwnerValue, RenderOptions, Selection, StatSnapshot, render_json, render_table, snapshot,
};
