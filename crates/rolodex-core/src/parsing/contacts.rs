use regex::Match;

use crate::model::Contact;

use super::patterns::{search, CONTACT_TRAILER, EMAIL, PHONE_AFTER_CELL, PHONE_AFTER_TEL};

/// Parse the raw contact list of one company, in document order.
pub fn extract_contacts(raw: &str) -> Vec<Contact> {
    split_contacts(raw)
        .into_iter()
        .map(extract_contact)
        .collect()
}

/// Split the contact list into one slice per person.
///
/// Every entry ends with its own email, optionally followed by `TEL`/`CELL`/
/// `FAX` lines; the next person starts right after. With fewer than two
/// email tokens the whole text is a single contact.
pub fn split_contacts(raw: &str) -> Vec<&str> {
    let emails: Vec<Match<'_>> = EMAIL.find_iter(raw).collect();

    if emails.len() < 2 {
        return vec![raw];
    }

    let mut contacts = Vec::with_capacity(emails.len());
    let mut from = 0;
    for pair in emails.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let mut to = current.end();
        if let Some(trailer) = CONTACT_TRAILER.find(&raw[to..]) {
            to += trailer.end();
        }
        to = to.min(next.start());
        contacts.push(&raw[from..to]);
        from = to;
    }
    contacts.push(&raw[from..]);

    contacts
}

/// Pull the fields of one person out of its slice.
pub fn extract_contact(text: &str) -> Contact {
    let text = text.trim();
    let mut lines = text.lines().map(str::trim);

    let name = lines
        .next()
        .filter(|line| !line.is_empty())
        .map(str::to_string);
    let title = lines
        .find(|line| is_title_line(line))
        .map(str::to_string);

    Contact {
        name,
        title,
        email: search(&EMAIL, text, 0).map(str::to_string),
        tel: search(&PHONE_AFTER_TEL, text, 1).map(str::to_string),
        cell: search(&PHONE_AFTER_CELL, text, 1).map(str::to_string),
    }
}

fn is_title_line(line: &str) -> bool {
    line.contains(':')
        && !["TEL", "CELL", "FAX"]
            .iter()
            .any(|marker| line.starts_with(marker))
        && !EMAIL.is_match(line)
}
