//! CLI domain: parse, route, and output only.
//! No manifest logic lives here; the route dispatches to the manifest pipeline.

mod output;
mod parse;
mod route;

pub use output::{format_summary, map_error};
pub use parse::Cli;
pub use route::RunContext;
