use super::*;

#[test]
fn skips_whitespace_commas_and_semicolons() {
    let mut c = Cursor::new(" ,;\t\n x");
    c.skip_separators();
    assert_eq!(c.peek(), Some(b'x'));
}

#[test]
fn token_stops_at_delimiters() {
    let mut c = Cursor::new("count(n)");
    assert_eq!(c.eat_token(), "count");
    assert_eq!(c.peek(), Some(b'('));
    assert_eq!(c.eat_token(), "");

    let mut c = Cursor::new("<= a");
    assert_eq!(c.eat_token(), "<=");
}

#[test]
fn matching_paren_counts_depth() {
    let c = Cursor::new("(f (g x) (h))rest");
    assert_eq!(c.find_matching_paren(0), Some(12));
    assert_eq!(c.find_matching_paren(3), Some(7));
}

#[test]
fn matching_paren_ignores_quoted_parens() {
    let src = r#"(print ")" "\")")"#;
    let c = Cursor::new(src);
    assert_eq!(c.find_matching_paren(0), Some(src.len() - 1));
}

#[test]
fn unmatched_paren_is_none() {
    let c = Cursor::new("(f (g)");
    assert_eq!(c.find_matching_paren(0), None);
}

#[test]
fn limit_hides_text_beyond_it() {
    let mut c = Cursor::new("a b) c");
    c.set_limit(3);
    assert_eq!(c.rest(), "a b");
    c.set_position(3);
    assert!(c.is_at_end());
    assert_eq!(c.peek(), None);
}

#[test]
fn block_open_skips_nested_calls_and_strings() {
    let c = Cursor::new(r#"(= s "{") {"#);
    assert_eq!(c.find_block_open(), Some(10));

    let c = Cursor::new("x y");
    assert_eq!(c.find_block_open(), None);
}
