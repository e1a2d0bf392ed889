use serde::{Deserialize, Serialize};

/// One person listed under a company entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    /// Line holding a colon, e.g. "Manager: Sales".
    pub title: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
    pub cell: Option<String>,
}

/// One directory entry. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_name: String,
    pub address: Option<String>,
    pub company_tel: Option<String>,
    pub website: Option<String>,
    pub company_email: Option<String>,
    pub contacts: Vec<Contact>,
    /// Bullet items joined with ", ".
    pub main_activity: Option<String>,
}

impl Company {
    pub fn new(company_name: impl Into<String>) -> Self {
        Company {
            company_name: company_name.into(),
            address: None,
            company_tel: None,
            website: None,
            company_email: None,
            contacts: Vec::new(),
            main_activity: None,
        }
    }
}

/// A candidate block that was dropped during parsing.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    pub page_number: usize,
    pub reason: String,
    pub text: String,
}

/// Result of parsing a single page.
#[derive(Debug, Clone, Default)]
pub struct PageParse {
    pub companies: Vec<Company>,
    pub warnings: Vec<ParseWarning>,
}

/// Result of a whole run, owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct ParsedDirectory {
    pub pages: usize,
    pub companies: Vec<Company>,
    pub warnings: Vec<ParseWarning>,
}
