//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Render a list of records as a table of `D` rows or as wrapped JSON.
pub fn render_list<T, D>(items: &[T], format: OutputFormat) -> Result<String>
where
    T: Serialize + Clone + Into<D>,
    D: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<D> = items.iter().cloned().map(Into::into).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Json => Ok(json::format_json(items)?),
    }
}
