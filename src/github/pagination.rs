// file: src/github/pagination.rs
// description: Link header parsing for paginated GitHub listings
// reference: https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINK_RELATION: Regex = Regex::new(
        r#"<([^>]+)>\s*;\s*rel="([^"]+)""#
    ).expect("LINK_RELATION regex is valid");

    static ref PAGE_PARAM: Regex = Regex::new(
        r"[?&]page=(\d+)"
    ).expect("PAGE_PARAM regex is valid");
}

/// Extracts the page number of the `rel="next"` link, if any.
pub fn next_page(link_header: &str) -> Option<u32> {
    LINK_RELATION
        .captures_iter(link_header)
        .find(|caps| &caps[2] == "next")
        .and_then(|caps| {
            PAGE_PARAM
                .captures(&caps[1])
                .and_then(|page| page[1].parse().ok())
        })
        .filter(|page| *page != 0)
}
