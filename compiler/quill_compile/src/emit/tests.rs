use pretty_assertions::assert_eq;
use quill_lexer_core::Token;

use super::*;
use TokenKind::{Code, Comment, Expr, Newline, Plain, Text, Whitespace};

fn emit_tokens(tokens: &[(TokenKind, &str)]) -> String {
    let list = TokenList::from_tokens(tokens.iter().map(|&(kind, value)| Token::new(kind, value)));
    emit(&list, "Io.output")
}

#[test]
fn empty_list_emits_nothing() {
    assert_eq!(emit(&TokenList::new(), "Io.output"), "");
}

#[test]
fn text_is_quoted() {
    assert_eq!(emit_tokens(&[(Text, "foo")]), r#"Io.output("foo");"#);
}

#[test]
fn text_is_escaped() {
    assert_eq!(emit_tokens(&[(Text, r#"a"b\c"#)]), r#"Io.output("a\"b\\c");"#);
}

#[test]
fn whitespace_is_output_raw() {
    assert_eq!(emit_tokens(&[(Whitespace, " \t ")]), r#"Io.output(" \t ");"#);
}

#[test]
fn newline_adds_source_newline() {
    assert_eq!(emit_tokens(&[(Newline, "\n")]), "Io.output(\"\\n\");\n");
}

#[test]
fn expr_is_wrapped_unquoted() {
    assert_eq!(emit_tokens(&[(Expr, " name ")]), "Io.output( name );");
}

#[test]
fn code_and_plain_are_verbatim() {
    assert_eq!(
        emit_tokens(&[(Code, " if x then "), (Plain, "\n"), (Plain, "  ")]),
        " if x then \n  "
    );
}

#[test]
fn comment_emits_nothing() {
    assert_eq!(emit_tokens(&[(Text, "a"), (Comment, " note "), (Text, "b")]), r#"Io.output("a");Io.output("b");"#);
}

#[test]
fn custom_output_function() {
    let list = TokenList::from_tokens([Token::new(Text, "x"), Token::new(Expr, "y")]);
    assert_eq!(emit(&list, "out.write"), r#"out.write("x");out.write(y);"#);
}

#[test]
fn emission_follows_sequence_order() {
    let mut list = TokenList::new();
    let b = list.push(Token::new(Text, "b"));
    list.insert_before(b, Token::new(Text, "a"));
    list.insert_after(b, Token::new(Text, "c"));
    assert_eq!(emit(&list, "o"), r#"o("a");o("b");o("c");"#);
}
