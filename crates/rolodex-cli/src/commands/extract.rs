use rolodex_core::export;
use rolodex_core::extraction::TextMode;
use rolodex_core::ExtractOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    text_mode: TextMode,
    output_format: &str,
    json_file: Option<PathBuf>,
    table_file: Option<PathBuf>,
) -> Result<(), rolodex_core::error::RolodexError> {
    let options = ExtractOptions { text_mode };
    let parsed = rolodex_core::extract_file(&input_file, &options)?;

    if let Some(path) = &json_file {
        export::write_json(&parsed.companies, path)?;
        eprintln!(
            "Extracted {} company(ies), written to {}",
            parsed.companies.len(),
            path.display()
        );
    }

    if let Some(path) = &table_file {
        let sheet = export::flatten(&parsed.companies);
        export::write_table(&sheet, path)?;
        eprintln!(
            "Table with {} column(s), written to {}",
            sheet.headers.len(),
            path.display()
        );
    }

    if json_file.is_none() && table_file.is_none() {
        match output_format {
            "json" => output::json::print(&parsed.companies)?,
            _ => output::table::print(&parsed),
        }
    }

    if !parsed.warnings.is_empty() {
        eprintln!(
            "  {} block(s) skipped during parsing",
            parsed.warnings.len()
        );
    }

    Ok(())
}
