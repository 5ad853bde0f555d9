//! CLI domain: parse, route, output, and presentation only.
//! Resolution itself lives in the library; the CLI only feeds it and prints.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, ResolveArgs};
pub use presentation::{
    build_resolution_report, format_config_validation_text, format_resolution_text,
    FieldOrigin, FieldRow, ResolutionReport,
};
pub use route::RunContext;
