//! Structural patterns of the directory layout.
//!
//! The address-code (`12A34`, `12 A 34`) follows every company name and is
//! the anchor everything else hangs off. Markers are matched uppercase only.

use std::sync::LazyLock;

use regex::Regex;

/// Record Locator anchor: name run + address-code, then `CONTACT`, `TEL`,
/// `MAIN ACTIVITY`/`MAIN ACTIVITIES` and `MAIN APPLICATION SECTOR`, in that
/// order. Every quantifier after the address-code is lazy, so one match ends
/// at the first complete marker chain. No capture groups.
pub static COMPANY_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)[^a-z®]+?\d+\s*[a-zA-Z]\s*\d+.+?CONTACT.+?TEL.+?MAIN\s*ACTIVIT(?:Y|IES).+?MAIN\s*APPLICATION\s*SECTOR",
    )
    .unwrap()
});

/// Company title: a run without lowercase letters ending in an address-code.
/// Used by the Block Splitter to find where each company starts.
pub static COMPANY_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]+?\d+\s*[a-zA-Z]\s*\d+").unwrap());

/// Same shape as [`COMPANY_TITLE`]; group 1 is the name before the code.
pub static COMPANY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^a-z]+?)\s*\d+\s*[a-zA-Z]\s*\d+").unwrap());

/// Applied to the text right after the address-code. Group 1 is the address,
/// which ends at the next `TEL` marker, or at the contact marker for entries
/// that list no company phone.
pub static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*?)\b(?:TEL|CONTACTS?)\b").unwrap());

/// Group 1 is the phone-shaped token after a `TEL` marker.
pub static PHONE_AFTER_TEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bTEL\b[\s:.]*([+(]*\d[+()\d \t]*)").unwrap());

/// Group 1 is the phone-shaped token after a `CELL` marker.
pub static PHONE_AFTER_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCELL\b[\s:.]*([+(]*\d[+()\d \t]*)").unwrap());

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.*+-]+@[\w-]+(?:\.[\w-]+)+").unwrap());

/// Whole-token URL shape: optional scheme, two or more dot-separated labels,
/// alphabetic TLD, optional path. Tokens with `@` never match.
pub static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:https?://)?(?:[\w-]+\.)+[A-Za-z]{2,}(?:/\S*)?$").unwrap()
});

/// Group 1 is the bullet list between `MAIN ACTIVITY` and `MAIN APPLICATION`.
/// A block cut short by the splitter has no closing heading; the list then
/// runs to the end of the block.
pub static MAIN_ACTIVITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)MAIN\s*ACTIVIT(?:Y|IES)\s*(.+?)(?:MAIN\s*APPLICATION|\z)").unwrap()
});

/// Start of the main activity section; closes the contacts text.
pub static MAIN_ACTIVITY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MAIN\s*ACTIVIT(?:Y|IES)").unwrap());

pub static CONTACT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCONTACT\b").unwrap());

pub static CONTACTS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCONTACTS\b").unwrap());

/// Either contact marker. The company header ends where this first matches.
pub static ANY_CONTACT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCONTACTS?\b").unwrap());

/// Phone lines that directly follow a contact's email and still belong to it.
pub static CONTACT_TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:\s*(?:TEL|CELL|FAX)\b[^\n]*)+").unwrap());

pub const BULLET: char = '•';

/// First match of `re` in `text`, or its capture `group`, trimmed.
///
/// Blank results count as no match.
pub fn search<'t>(re: &Regex, text: &'t str, group: usize) -> Option<&'t str> {
    let caps = re.captures(text)?;
    let value = caps.get(group)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
