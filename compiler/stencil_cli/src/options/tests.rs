use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn parse(list: &[&str]) -> Result<LexOptions, CliError> {
    parse_lex_options(&args(list))
}

// === Defaults ===

#[test]
fn defaults_match_the_classic_driver() {
    let options = LexOptions::default();
    assert_eq!(options.name, "number lexer");
    assert_eq!(options.width, 10);
    assert!(!options.spans);
    assert!(!options.show_eof);
    assert!(options.report);
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(options.input, None);
}

#[test]
fn literal_text_only() {
    let options = parse(&["hello {{ 42 }}"]);
    assert!(matches!(
        options,
        Ok(LexOptions { input: Some(InputSource::Text(ref t)), .. }) if t == "hello {{ 42 }}"
    ));
}

// === Flags ===

#[test]
fn all_flags() {
    let Ok(options) = parse(&[
        "--spans",
        "--show-eof",
        "--no-report",
        "--name=greeting",
        "--width=4",
        "--color=never",
        "x",
    ]) else {
        panic!("flags should parse");
    };
    assert_eq!(
        options,
        LexOptions {
            name: "greeting".to_owned(),
            input: Some(InputSource::Text("x".to_owned())),
            spans: true,
            width: 4,
            show_eof: true,
            report: false,
            color: ColorMode::Never,
        }
    );
}

#[test]
fn flags_may_follow_the_input() {
    let options = parse(&["x", "--spans"]);
    assert!(matches!(options, Ok(LexOptions { spans: true, .. })));
}

#[test]
fn file_input_forms() {
    let expected = Some(InputSource::File(PathBuf::from("page.tpl")));
    assert_eq!(parse(&["--file", "page.tpl"]).ok().and_then(|o| o.input), expected);
    assert_eq!(parse(&["-f", "page.tpl"]).ok().and_then(|o| o.input), expected);
    assert_eq!(parse(&["--file=page.tpl"]).ok().and_then(|o| o.input), expected);
}

#[test]
fn dash_selects_stdin() {
    for form in [&["-"][..], &["--file", "-"], &["--file=-"]] {
        assert_eq!(
            parse(form).ok().and_then(|o| o.input),
            Some(InputSource::Stdin),
            "{form:?}"
        );
    }
}

#[test]
fn double_dash_makes_rest_positional() {
    assert_eq!(
        parse(&["--", "-7 {{ 1 }}"]).ok().and_then(|o| o.input),
        Some(InputSource::Text("-7 {{ 1 }}".to_owned()))
    );
}

// === Errors ===

#[test]
fn missing_input() {
    assert!(matches!(parse(&[]), Err(CliError::MissingInput)));
    assert!(matches!(parse(&["--spans"]), Err(CliError::MissingInput)));
}

#[test]
fn second_input_is_rejected() {
    assert!(matches!(
        parse(&["a", "b"]),
        Err(CliError::UnexpectedArgument(ref arg)) if arg == "b"
    ));
    assert!(matches!(
        parse(&["a", "--file", "b.tpl"]),
        Err(CliError::UnexpectedArgument(_))
    ));
}

#[test]
fn unknown_option() {
    assert!(matches!(
        parse(&["--colour", "x"]),
        Err(CliError::UnknownOption(ref opt)) if opt == "--colour"
    ));
    assert!(matches!(parse(&["-7"]), Err(CliError::UnknownOption(_))));
}

#[test]
fn bad_width() {
    assert!(matches!(
        parse(&["--width=wide", "x"]),
        Err(CliError::InvalidValue { option: "--width", ref value, .. }) if value == "wide"
    ));
    assert!(matches!(
        parse(&["--width=-1", "x"]),
        Err(CliError::InvalidValue { .. })
    ));
}

#[test]
fn bad_color() {
    assert!(matches!(
        parse(&["--color=rainbow", "x"]),
        Err(CliError::InvalidValue { option: "--color", .. })
    ));
}

#[test]
fn options_without_values() {
    assert!(matches!(parse(&["--file"]), Err(CliError::MissingValue("--file"))));
    assert!(matches!(parse(&["--name", "x"]), Err(CliError::MissingValue("--name"))));
    assert!(matches!(parse(&["--width", "x"]), Err(CliError::MissingValue("--width"))));
}
