use crate::model::Company;

use super::contacts::extract_contacts;
use super::patterns::{
    search, ADDRESS, ANY_CONTACT_MARKER, BULLET, COMPANY_NAME, CONTACTS_MARKER, CONTACT_MARKER,
    EMAIL, MAIN_ACTIVITY, MAIN_ACTIVITY_MARKER, PHONE_AFTER_TEL, WEBSITE,
};

/// Extract one company from its block.
///
/// Returns None when no name can be found; every other field is optional.
pub fn extract_company(block: &str) -> Option<Company> {
    let text = block.trim();

    let caps = COMPANY_NAME.captures(text)?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    let after_code = &text[caps.get(0)?.end()..];

    // Company phone and email live above the contact list.
    let header = header_region(text);

    let mut company = Company::new(name);
    company.address = search(&ADDRESS, after_code, 1).map(str::to_string);
    company.company_tel = search(&PHONE_AFTER_TEL, header, 1).map(str::to_string);
    company.website = find_website(text);
    company.company_email = search(&EMAIL, header, 0).map(str::to_string);
    company.main_activity = search(&MAIN_ACTIVITY, text, 1).and_then(join_bullets);

    if let Some(raw) = contacts_text(text) {
        company.contacts = extract_contacts(raw);
    }

    Some(company)
}

fn header_region(text: &str) -> &str {
    match ANY_CONTACT_MARKER.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

/// Text after the `CONTACT` marker (falling back to `CONTACTS`), up to the
/// main activity heading.
fn contacts_text(text: &str) -> Option<&str> {
    let marker = CONTACT_MARKER
        .find(text)
        .or_else(|| CONTACTS_MARKER.find(text))?;
    let rest = &text[marker.end()..];
    let end = MAIN_ACTIVITY_MARKER
        .find(rest)
        .map_or(rest.len(), |m| m.start());
    let raw = rest[..end].trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn find_website(text: &str) -> Option<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| matches!(c, ',' | ';' | '(' | ')' | '<' | '>'))
                .trim_end_matches('.')
        })
        .find(|token| WEBSITE.is_match(token))
        .map(str::to_string)
}

fn join_bullets(section: &str) -> Option<String> {
    let items: Vec<&str> = section
        .split(BULLET)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}
