pub mod company;
pub mod contacts;
pub mod locate;
pub mod normalize;
pub mod patterns;

use tracing::{debug, info, warn};

use crate::extraction::PageContent;
use crate::model::{PageParse, ParseWarning, ParsedDirectory};
use company::extract_company;
use locate::{locate_blocks, split_block};
use normalize::normalize_company;

/// Parse every page in document order and normalize the result.
///
/// Blocks without a company name are dropped with a warning, including
/// names that normalize to nothing; nothing on a page can fail the run.
pub fn parse_pages(pages: &[PageContent]) -> ParsedDirectory {
    let mut directory = ParsedDirectory {
        pages: pages.len(),
        ..ParsedDirectory::default()
    };

    for page in pages {
        let parsed = parse_page(page);
        directory.warnings.extend(parsed.warnings);

        for mut company in parsed.companies {
            let raw_name = company.company_name.clone();
            if normalize_company(&mut company) {
                directory.companies.push(company);
            } else {
                warn!(page = page.page_number, "No ASCII company name: \n {}", raw_name);
                directory.warnings.push(ParseWarning {
                    page_number: page.page_number,
                    reason: "company name empty after normalization".into(),
                    text: raw_name,
                });
            }
        }

        info!(
            "Page: {}/{} || Total Companies: {}",
            page.page_number,
            pages.len(),
            directory.companies.len()
        );
    }

    directory
}

/// Parse the companies on a single page.
pub fn parse_page(page: &PageContent) -> PageParse {
    let mut parsed = PageParse::default();

    let blocks = locate_blocks(&page.text);
    debug!(page = page.page_number, blocks = blocks.len(), "located company blocks");

    for block in blocks {
        for text in split_block(block) {
            match extract_company(text) {
                Some(company) => parsed.companies.push(company),
                None => {
                    warn!(page = page.page_number, "No company name: \n {}", text);
                    parsed.warnings.push(ParseWarning {
                        page_number: page.page_number,
                        reason: "no company name".into(),
                        text: text.to_string(),
                    });
                }
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, text: &str) -> PageContent {
        PageContent {
            page_number: number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_page_without_code_yields_nothing() {
        let parsed = parse_page(&page(1, "MEMBERS DIRECTORY\nIntroduction and index"));
        assert!(parsed.companies.is_empty());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_pages_accumulate_in_order() {
        let first = "ALPHA LTD 11A22\nRoad 1\nTEL 111\nCONTACT\nAnn\nann@alpha.com\nTEL 112\nMAIN ACTIVITY\n• Pumps\nMAIN APPLICATION SECTOR";
        let second = "BETA LTD 33B44\nRoad 2\nTEL 222\nCONTACT\nBob\nbob@beta.com\nTEL 223\nMAIN ACTIVITY\n• Valves\nMAIN APPLICATION SECTOR";
        let directory = parse_pages(&[page(1, first), page(2, ""), page(3, second)]);
        assert_eq!(directory.pages, 3);
        let names: Vec<_> = directory
            .companies
            .iter()
            .map(|c| c.company_name.as_str())
            .collect();
        assert_eq!(names, vec!["ALPHA LTD", "BETA LTD"]);
    }

    #[test]
    fn test_results_are_normalized() {
        let text = "ÉLAN SA 12A34\nRue 1\nTEL 1\nCONTACT\nRené\nrene@elan.fr\nTEL 9\nMAIN ACTIVITY\n• Câbles\nMAIN APPLICATION SECTOR";
        let directory = parse_pages(&[page(1, text)]);
        assert_eq!(directory.companies.len(), 1);
        let company = &directory.companies[0];
        assert_eq!(company.company_name, "LAN SA");
        assert_eq!(company.main_activity.as_deref(), Some("Cbles"));
        assert_eq!(company.contacts[0].name.as_deref(), Some("Ren"));
    }

    #[test]
    fn test_non_ascii_name_is_dropped_with_warning() {
        let text = "ÖÄÅ 12A34\nRoad 1\nTEL 1\nCONTACT\nAnn\nann@x.com\nTEL 2\nMAIN ACTIVITY\n• X\nMAIN APPLICATION SECTOR";
        let directory = parse_pages(&[page(4, text)]);
        assert!(directory.companies.is_empty());
        assert_eq!(directory.warnings.len(), 1);
        assert_eq!(directory.warnings[0].page_number, 4);
        assert_eq!(directory.warnings[0].text, "ÖÄÅ");
    }
}
