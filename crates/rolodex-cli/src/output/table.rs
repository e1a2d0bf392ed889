use rolodex_core::model::{Company, Contact, ParsedDirectory};

pub fn print(parsed: &ParsedDirectory) {
    println!("{}", format_directory(parsed));
}

pub fn format_directory(parsed: &ParsedDirectory) -> String {
    let mut out = String::new();

    for company in &parsed.companies {
        out.push_str(&format_company(company));
        out.push('\n');
    }

    out.push_str(&format!(
        "{} company(ies) from {} page(s)",
        parsed.companies.len(),
        parsed.pages
    ));

    if !parsed.warnings.is_empty() {
        out.push_str(&format!(", {} block(s) skipped", parsed.warnings.len()));
        for w in &parsed.warnings {
            out.push_str(&format!("\n  warning (page {}): {}", w.page_number, w.reason));
        }
    }

    out
}

fn format_company(company: &Company) -> String {
    let mut out = format!("=== {} ===\n", company.company_name);

    let fields = [
        ("Address", &company.address),
        ("Tel", &company.company_tel),
        ("Website", &company.website),
        ("Email", &company.company_email),
        ("Activity", &company.main_activity),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            // Addresses span lines; indent continuation lines under the value.
            let value = value.replace('\n', "\n             ");
            out.push_str(&format!("  {:<10} {}\n", format!("{label}:"), value));
        }
    }

    if !company.contacts.is_empty() {
        out.push_str("  Contacts:\n");
        for contact in &company.contacts {
            out.push_str(&format!("    {}\n", format_contact(contact)));
        }
    }

    out
}

fn format_contact(contact: &Contact) -> String {
    let mut parts = Vec::new();

    match (&contact.name, &contact.title) {
        (Some(name), Some(title)) => parts.push(format!("{name} ({title})")),
        (Some(name), None) => parts.push(name.clone()),
        (None, Some(title)) => parts.push(format!("({title})")),
        (None, None) => parts.push("-".into()),
    }
    if let Some(email) = &contact.email {
        parts.push(email.clone());
    }
    if let Some(tel) = &contact.tel {
        parts.push(format!("tel {tel}"));
    }
    if let Some(cell) = &contact.cell {
        parts.push(format!("cell {cell}"));
    }

    parts.join("  ")
}
