use pretty_assertions::assert_eq;
use quill_compile::{TagRole, TagSyntax};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn parse(list: &[&str]) -> Result<Options, OptionsError> {
    Options::parse(&args(list))
}

#[test]
fn path_only_uses_defaults() {
    let Ok(options) = parse(&["page.tmpl"]) else {
        panic!("plain path rejected");
    };
    assert_eq!(options.path, Some(PathBuf::from("page.tmpl")));
    assert_eq!(options.config, Config::default());
}

#[test]
fn dash_reads_stdin() {
    let Ok(options) = parse(&["-"]) else {
        panic!("`-` rejected");
    };
    assert_eq!(options.path, None);
}

#[test]
fn single_flag_uses_hash_tags() {
    let Ok(options) = parse(&["--single", "t"]) else {
        panic!("--single rejected");
    };
    assert_eq!(options.config.syntax(), &TagSyntax::default_single());
}

#[test]
fn tag_option_sets_single_delimiters() {
    let Ok(options) = parse(&["t", "--tag=<?,?>"]) else {
        panic!("--tag rejected");
    };
    let TagSyntax::Single(pair) = options.config.syntax() else {
        panic!("expected single syntax");
    };
    assert_eq!((pair.start(), pair.end()), ("<?", "?>"));
}

#[test]
fn tag_option_is_not_overridden_by_single() {
    let Ok(options) = parse(&["--tag=<?,?>", "--single", "t"]) else {
        panic!("options rejected");
    };
    let TagSyntax::Single(pair) = options.config.syntax() else {
        panic!("expected single syntax");
    };
    assert_eq!(pair.start(), "<?");
}

#[test]
fn role_options_replace_one_role() {
    let Ok(options) = parse(&["t", "--expr=<%=,%>"]) else {
        panic!("--expr rejected");
    };
    let TagSyntax::Roles { code, expr, comment } = options.config.syntax() else {
        panic!("expected role syntax");
    };
    assert_eq!((code.start(), code.end()), ("{%", "%}"));
    assert_eq!((expr.start(), expr.end()), ("<%=", "%>"));
    assert_eq!((comment.start(), comment.end()), ("{#", "#}"));
}

#[test]
fn output_function_option() {
    let Ok(options) = parse(&["t", "--output-fn=print"]) else {
        panic!("--output-fn rejected");
    };
    assert_eq!(options.config.output_function(), "print");
}

// === Errors ===

#[test]
fn missing_path() {
    assert_eq!(parse(&["--single"]), Err(OptionsError::MissingPath));
}

#[test]
fn extra_argument() {
    assert_eq!(parse(&["a", "b"]), Err(OptionsError::Extra("b".to_owned())));
}

#[test]
fn unknown_option() {
    assert_eq!(parse(&["t", "--fast"]), Err(OptionsError::Unknown("--fast".to_owned())));
}

#[test]
fn pair_without_comma() {
    assert_eq!(
        parse(&["t", "--code=<%"]),
        Err(OptionsError::BadPair {
            option: "--code".to_owned(),
            value: "<%".to_owned(),
        })
    );
}

#[test]
fn empty_delimiter_is_a_config_error() {
    let err = parse(&["t", "--comment=,#}"]);
    assert!(matches!(
        err,
        Err(OptionsError::Config(ConfigError::Delimiter {
            role: TagRole::Comment,
            ..
        }))
    ));
}

#[test]
fn blank_output_function_is_rejected() {
    assert_eq!(
        parse(&["t", "--output-fn="]),
        Err(OptionsError::Config(ConfigError::EmptyOutputFunction))
    );
}
