// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! File-backed runs of `stencil lex`, from argument parsing to printed
//! output, without spawning the binary.

use std::io::Write;

use pretty_assertions::assert_eq;
use stencil_cli::{lex_source, load_source, parse_lex_options, write_report, LexOutcome};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn template_file(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file
}

fn lex_file(bytes: &[u8], extra: &[&str]) -> (String, LexOutcome) {
    let file = template_file(bytes);
    let path = file.path().to_str().expect("utf-8 temp path").to_owned();
    let mut list = args(extra);
    list.push("--file".to_owned());
    list.push(path);

    let options = parse_lex_options(&list).unwrap();
    let source = load_source(&options).unwrap();
    let mut out = Vec::new();
    let outcome = lex_source(&source, &options, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), outcome)
}

#[test]
fn file_with_multiple_lines() {
    let (out, outcome) = lex_file(b"total: {{ +10 -3 }}\nbye\n", &[]);
    assert_eq!(
        out,
        "lexing \"total: {{ +10 -3 }}\\nbye\\n\"...\n\
         \"total: \"\n\
         \"{{\"\n\
         \"+10\"\n\
         \"-3\"\n\
         \"}}\"\n\
         \"\\nbye\\n\"\n"
    );
    assert!(outcome.error.is_none());
}

#[test]
fn invalid_utf8_becomes_replacement_text() {
    let (out, outcome) = lex_file(b"a\xFFb {{ 1 }}", &["--show-eof"]);
    assert!(out.contains("\"a\u{fffd}b \""), "{out}");
    assert!(out.ends_with("EOF\n"), "{out}");
    assert!(outcome.error.is_none());
}

#[test]
fn named_file_error_report() {
    let file = template_file(b"{{ 1\n}}");
    let path = file.path().to_str().unwrap().to_owned();
    let options = parse_lex_options(&args(&["--name=page", "--file", &path])).unwrap();
    let source = load_source(&options).unwrap();

    let mut out = Vec::new();
    let outcome = lex_source(&source, &options, &mut out).unwrap();
    assert_eq!(outcome.items, 3);
    let error = outcome.error.expect("newline inside block is an error");

    let mut report = Vec::new();
    write_report(&source, &error, false, &mut report).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(report.contains("page"), "{report}");
    assert!(report.contains("unclosed block"), "{report}");
}
