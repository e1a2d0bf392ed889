use super::patterns::{COMPANY_BLOCK, COMPANY_TITLE};

/// Find coarse company blocks in one page's text, in scan order.
///
/// A block may hold several companies when a later entry has no
/// `MAIN APPLICATION SECTOR` heading of its own. Leading dots left over
/// from the directory's leader lines are removed.
pub fn locate_blocks(page_text: &str) -> Vec<&str> {
    COMPANY_BLOCK
        .find_iter(page_text)
        .map(|m| m.as_str().trim_start().trim_start_matches('.'))
        .collect()
}

/// Split a coarse block into one slice per company.
///
/// Each company runs from its title to the start of the next title. The
/// first slice also keeps any text before the first title and the last
/// slice keeps everything after the last title, so the slices concatenate
/// back to `block`.
pub fn split_block(block: &str) -> Vec<&str> {
    let starts: Vec<usize> = COMPANY_TITLE.find_iter(block).map(|m| m.start()).collect();

    if starts.len() < 2 {
        return vec![block];
    }

    let mut companies = Vec::with_capacity(starts.len());
    let mut from = 0;
    for &next in &starts[1..] {
        companies.push(&block[from..next]);
        from = next;
    }
    companies.push(&block[from..]);

    companies
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_IN_ONE: &str = "ALPHA LTD 11A22\nRoad 1\nTEL 111\nCONTACT\nAnn\nann@alpha.com\nMAIN ACTIVITY\n• Pumps\nBETA LTD 33B44\nRoad 2\nTEL 222\nCONTACT\nBob\nbob@beta.com\nMAIN ACTIVITY\n• Valves\nMAIN APPLICATION SECTOR";

    #[test]
    fn test_no_address_code_no_blocks() {
        let blocks = locate_blocks("Index of members\nCONTACT TEL MAIN ACTIVITY MAIN APPLICATION SECTOR");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_locate_two_separate_blocks() {
        let page = format!(
            "{}\n{}",
            "ALPHA LTD 11A22\nCONTACT\nAnn\nTEL 1\nMAIN ACTIVITY\n• Pumps\nMAIN APPLICATION SECTOR\n• Oil",
            "....BETA LTD 33B44\nCONTACT\nBob\nTEL 2\nMAIN ACTIVITIES\n• Valves\nMAIN APPLICATION SECTOR"
        );
        let blocks = locate_blocks(&page);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("ALPHA LTD"));
        assert!(blocks[1].starts_with("BETA LTD"));
    }

    #[test]
    fn test_locate_greedy_across_companies() {
        let blocks = locate_blocks(TWO_IN_ONE);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], TWO_IN_ONE);
    }

    #[test]
    fn test_split_single_title_is_whole_block() {
        let block = "ACME CORP\n12A34\n123 Main St\nTEL +1 555 000\nCONTACT\nJohn Doe";
        assert_eq!(split_block(block), vec![block]);
    }

    #[test]
    fn test_split_two_titles() {
        let parts = split_block(TWO_IN_ONE);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("ALPHA LTD 11A22"));
        assert!(parts[0].trim_end().ends_with("• Pumps"));
        assert!(parts[1].trim_start().starts_with("BETA LTD 33B44"));
        assert_eq!(parts.concat(), TWO_IN_ONE);
    }

    #[test]
    fn test_split_three_titles_keeps_remainder() {
        let block = "A CO 1A1\nx\nB CO 2B2\ny\nC CO 3C3\nz tail";
        let parts = split_block(block);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].trim(), "C CO 3C3\nz tail");
        assert_eq!(parts.concat(), block);
    }
}
