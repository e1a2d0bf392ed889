use rolodex_core::error::RolodexError;
use rolodex_core::model::Company;

pub fn print(companies: &[Company]) -> Result<(), RolodexError> {
    let json = serde_json::to_string_pretty(companies)?;
    println!("{json}");
    Ok(())
}
