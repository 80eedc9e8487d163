use super::*;

#[test]
fn plain_text_is_quoted() {
    assert_eq!(lua_string("foo"), r#""foo""#);
}

#[test]
fn empty_text() {
    assert_eq!(lua_string(""), r#""""#);
}

#[test]
fn quotes_and_backslashes() {
    assert_eq!(lua_string(r#"say "hi"\"#), r#""say \"hi\"\\""#);
}

#[test]
fn single_quotes_pass_through() {
    assert_eq!(lua_string("'foo'"), r#""'foo'""#);
}

#[test]
fn named_control_escapes() {
    assert_eq!(lua_string("\n\r\t\u{07}\u{08}\u{0C}\u{0B}"), r#""\n\r\t\a\b\f\v""#);
}

#[test]
fn other_controls_use_decimal_escapes() {
    assert_eq!(lua_string("\u{0}\u{1b}\u{7f}"), r#""\000\027\127""#);
}

#[test]
fn decimal_escape_followed_by_digit_stays_three_digits() {
    // Fixed width keeps the following digit out of the escape.
    assert_eq!(lua_string("\u{1}1"), r#""\0011""#);
}

#[test]
fn non_ascii_passes_through() {
    assert_eq!(lua_string("h\u{e9}\u{1F600}"), "\"h\u{e9}\u{1F600}\"");
}

#[test]
fn push_appends() {
    let mut out = String::from("Io.output(");
    push_lua_string(&mut out, "x");
    assert_eq!(out, r#"Io.output("x""#);
}
