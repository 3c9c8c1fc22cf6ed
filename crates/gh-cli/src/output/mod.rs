mod json;
mod table;

pub use json::{json_project, json_project_field, json_project_item};
pub use table::TablePrinter;

use crate::CommandResult;

use std::io::Write;

/// Write one JSON document followed by a newline
pub fn write_json(out: &mut dyn Write, document: &str) -> CommandResult<()> {
    writeln!(out, "{document}")?;
    Ok(())
}
