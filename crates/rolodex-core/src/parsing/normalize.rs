use crate::model::{Company, Contact};

/// Normalize one extracted string for output.
///
/// Steps:
/// 1. Trim surrounding whitespace
/// 2. Drop everything outside printable ASCII, keeping line breaks and tabs
/// 3. Trim again, since dropped characters can expose new edge whitespace
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || (' '..='~').contains(&c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize every string field of a company, contacts included.
///
/// Optional fields that normalize to an empty string become None. Returns
/// false when the company name itself normalizes to an empty string.
pub fn normalize_company(company: &mut Company) -> bool {
    company.company_name = normalize_text(&company.company_name);
    normalize_field(&mut company.address);
    normalize_field(&mut company.company_tel);
    normalize_field(&mut company.website);
    normalize_field(&mut company.company_email);
    normalize_field(&mut company.main_activity);
    company.contacts.iter_mut().for_each(normalize_contact);
    !company.company_name.is_empty()
}

fn normalize_contact(contact: &mut Contact) {
    normalize_field(&mut contact.name);
    normalize_field(&mut contact.title);
    normalize_field(&mut contact.email);
    normalize_field(&mut contact.tel);
    normalize_field(&mut contact.cell);
}

fn normalize_field(field: &mut Option<String>) {
    *field = field
        .as_deref()
        .map(normalize_text)
        .filter(|value| !value.is_empty());
}
