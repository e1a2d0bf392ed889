use rolodex_core::export;
use std::path::Path;

pub fn run(json_file: &Path, table_file: &Path) -> Result<(), rolodex_core::error::RolodexError> {
    let companies = export::load_companies(json_file)?;
    let sheet = export::flatten(&companies);
    export::write_table(&sheet, table_file)?;
    eprintln!(
        "Exported {} company(ies), written to {}",
        sheet.rows.len(),
        table_file.display()
    );
    Ok(())
}
