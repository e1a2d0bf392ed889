//! Output shapes: the JSON document and the flattened spreadsheet table.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::RolodexError;
use crate::model::{Company, Contact};

const COMPANY_COLUMNS: [&str; 5] = [
    "company_name",
    "address",
    "company_tel",
    "website",
    "company_email",
];

const CONTACT_FIELDS: [&str; 5] = ["name", "title", "email", "tel", "cell"];

/// A rectangular table: every row has one cell per header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Flatten companies into one row each.
///
/// Contact columns repeat as `contact_{i}_{field}` up to the longest contact
/// list; shorter lists leave empty cells. `main_activity` is always last.
pub fn flatten(companies: &[Company]) -> Sheet {
    let max_contacts = companies
        .iter()
        .map(|c| c.contacts.len())
        .max()
        .unwrap_or(0);

    let mut headers: Vec<String> = COMPANY_COLUMNS.iter().map(|s| s.to_string()).collect();
    for i in 0..max_contacts {
        for field in CONTACT_FIELDS {
            headers.push(format!("contact_{i}_{field}"));
        }
    }
    headers.push("main_activity".into());

    let rows = companies
        .iter()
        .map(|company| {
            let mut row = Vec::with_capacity(headers.len());
            row.push(company.company_name.clone());
            for value in [
                &company.address,
                &company.company_tel,
                &company.website,
                &company.company_email,
            ] {
                row.push(cell(value));
            }
            for i in 0..max_contacts {
                match company.contacts.get(i) {
                    Some(contact) => row.extend(contact_cells(contact)),
                    None => row.extend(CONTACT_FIELDS.iter().map(|_| String::new())),
                }
            }
            row.push(cell(&company.main_activity));
            row
        })
        .collect();

    Sheet { headers, rows }
}

fn contact_cells(contact: &Contact) -> [String; 5] {
    [
        cell(&contact.name),
        cell(&contact.title),
        cell(&contact.email),
        cell(&contact.tel),
        cell(&contact.cell),
    ]
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Write the table as CSV, header row first.
pub fn write_csv<W: Write>(sheet: &Sheet, writer: W) -> Result<(), RolodexError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the table as an Excel workbook with a single sheet.
///
/// Empty cells are left blank rather than written as empty strings.
pub fn write_xlsx(sheet: &Sheet, path: &Path) -> Result<(), RolodexError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &bold)?;
    }
    for (i, row) in sheet.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(i as u32 + 1, col as u16, value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Write the table to `path`, as CSV for a `.csv` extension and as an
/// Excel workbook otherwise.
pub fn write_table(sheet: &Sheet, path: &Path) -> Result<(), RolodexError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        write_csv(sheet, std::fs::File::create(path)?)
    } else {
        write_xlsx(sheet, path)
    }
}

pub fn to_json(companies: &[Company]) -> Result<String, RolodexError> {
    Ok(serde_json::to_string_pretty(companies)?)
}

pub fn write_json(companies: &[Company], path: &Path) -> Result<(), RolodexError> {
    std::fs::write(path, to_json(companies)?)?;
    Ok(())
}

/// Load a JSON document previously written by [`write_json`].
pub fn load_companies(path: &Path) -> Result<Vec<Company>, RolodexError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, contacts: &[&str]) -> Company {
        let mut company = Company::new(name);
        company.main_activity = Some("Widgets, Gadgets".into());
        company.contacts = contacts
            .iter()
            .map(|n| Contact {
                name: Some(n.to_string()),
                email: Some(format!("{}@acme.com", n.to_lowercase())),
                ..Contact::default()
            })
            .collect();
        company
    }

    #[test]
    fn test_flatten_headers_follow_longest_contact_list() {
        let sheet = flatten(&[company("ACME", &["Ann"]), company("BETA", &["Bob", "Cy"])]);
        assert_eq!(sheet.headers.len(), 5 + 2 * 5 + 1);
        assert_eq!(sheet.headers[5], "contact_0_name");
        assert_eq!(sheet.headers[14], "contact_1_cell");
        assert_eq!(sheet.headers.last().map(String::as_str), Some("main_activity"));
    }

    #[test]
    fn test_flatten_pads_short_contact_lists() {
        let sheet = flatten(&[company("ACME", &["Ann"]), company("BETA", &["Bob", "Cy"])]);
        let acme = &sheet.rows[0];
        assert_eq!(acme.len(), sheet.headers.len());
        assert_eq!(acme[5], "Ann");
        assert_eq!(acme[7], "ann@acme.com");
        assert!(acme[10..15].iter().all(String::is_empty));
        assert_eq!(acme[15], "Widgets, Gadgets");
        assert_eq!(sheet.rows[1][10], "Cy");
    }

    #[test]
    fn test_flatten_without_contacts() {
        let sheet = flatten(&[company("ACME", &[])]);
        assert_eq!(
            sheet.headers,
            vec![
                "company_name",
                "address",
                "company_tel",
                "website",
                "company_email",
                "main_activity"
            ]
        );
        assert_eq!(sheet.rows[0][1], "");
    }

    #[test]
    fn test_write_csv() {
        let sheet = flatten(&[company("ACME, INC", &[])]);
        let mut out = Vec::new();
        write_csv(&sheet, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "company_name,address,company_tel,website,company_email,main_activity\n\"ACME, INC\",,,,,\"Widgets, Gadgets\"\n"
        );
    }

    #[test]
    fn test_write_table_picks_format_by_extension() {
        let sheet = flatten(&[company("ACME", &["Ann"])]);
        let dir = tempfile::tempdir().unwrap();

        let xlsx = dir.path().join("data.xlsx");
        write_table(&sheet, &xlsx).unwrap();
        let bytes = std::fs::read(&xlsx).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");

        let csv_path = dir.path().join("data.CSV");
        write_table(&sheet, &csv_path).unwrap();
        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert!(text.starts_with("company_name,address,"));
    }

    #[test]
    fn test_write_xlsx_without_extension() {
        let sheet = flatten(&[company("ACME", &[])]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data");
        write_table(&sheet, &path).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_json_file_round_trip() {
        let companies = vec![company("ACME", &["Ann", "Bob"])];
        let file = tempfile::NamedTempFile::new().unwrap();
        write_json(&companies, file.path()).unwrap();
        let back = load_companies(file.path()).unwrap();
        assert_eq!(back, companies);
    }

    #[test]
    fn test_json_nulls() {
        let json = to_json(&[Company::new("ACME")]).unwrap();
        assert!(json.contains("\"address\": null"));
        assert!(json.contains("\"contacts\": []"));
    }
}
