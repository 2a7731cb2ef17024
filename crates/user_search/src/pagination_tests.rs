use super::*;

const GITHUB_LINK: &str = "<https://api.github.com/search/users?q=rust&per_page=10&page=2>; rel=\"next\", <https://api.github.com/search/users?q=rust&per_page=10&page=100>; rel=\"last\"";

#[test]
fn test_link_has_next() {
    assert!(link_has_next(GITHUB_LINK));
}

#[test]
fn test_link_without_next() {
    let header = "<https://api.github.com/search/users?q=rust&page=1>; rel=\"first\", <https://api.github.com/search/users?q=rust&page=2>; rel=\"prev\"";

    assert!(!link_has_next(header));
}

#[test]
fn test_link_with_multiple_relations() {
    let header = "<https://example.com/page/3>; rel=\"next last\"";

    assert!(link_has_next(header));
}

#[test]
fn test_link_unquoted_relation() {
    assert!(link_has_next("<https://example.com/page/3>; rel=next"));
}

#[test]
fn test_link_ignores_comma_inside_uri() {
    let header = "<https://example.com/search?q=a,rel=next>; rel=\"prev\"";

    assert!(!link_has_next(header));
}

#[test]
fn test_link_does_not_match_next_in_uri() {
    let header = "<https://example.com/next>; rel=\"last\"";

    assert!(!link_has_next(header));
}

#[test]
fn test_empty_link_header() {
    assert!(!link_has_next(""));
}

#[test]
fn test_arithmetic_has_more() {
    assert!(arithmetic_has_more(1, 10, 25));
    assert!(arithmetic_has_more(2, 10, 25));
    assert!(!arithmetic_has_more(3, 10, 25));
    assert!(!arithmetic_has_more(1, 10, 10));
    assert!(!arithmetic_has_more(1, 10, 0));
}

#[test]
fn test_arithmetic_uses_actual_page_size() {
    assert!(!arithmetic_has_more(1, 30, 25));
    assert!(arithmetic_has_more(2, 5, 25));
}

#[test]
fn test_has_more_falls_back_without_header() {
    assert!(has_more(None, 1, 10, 25));
    assert!(!has_more(None, 3, 10, 25));
}

#[test]
fn test_has_more_prefers_header_when_it_disagrees() {
    // Totals say there is more, header says this is the last page.
    let last_page = "<https://api.github.com/search/users?q=rust&page=1>; rel=\"first\"";
    assert!(!has_more(Some(last_page), 1, 10, 25));

    // Totals say this is the last page, header says there is more.
    assert!(has_more(Some(GITHUB_LINK), 3, 10, 25));
}
