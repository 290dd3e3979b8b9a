use super::*;

#[test]
fn browse_href_without_query() {
    assert_eq!(browse_href(""), "/browse");
    assert_eq!(browse_href("   "), "/browse");
}

#[test]
fn browse_href_encodes_spaces() {
    assert_eq!(browse_href(" Asian Fusion "), "/browse?q=Asian%20Fusion");
    assert_eq!(browse_href("Italian"), "/browse?q=Italian");
}

#[test]
fn browse_href_encodes_query_delimiters() {
    assert_eq!(browse_href("fish & chips"), "/browse?q=fish%20%26%20chips");
    assert_eq!(browse_href("a#b"), "/browse?q=a%23b");
    assert_eq!(browse_href("50%"), "/browse?q=50%25");
    assert_eq!(browse_href("a+b"), "/browse?q=a%2Bb");
}

#[test]
fn browse_href_round_trips_through_decoding() {
    let query = "crème brûlée & co.";
    let href = browse_href(query);
    let encoded = href.trim_start_matches("/browse?q=");
    assert_eq!(urlencoding::decode(encoded).unwrap(), query);
}
