//! Options for `stencil lex`.

use std::path::PathBuf;

use stencil_lexer::DEFAULT_DISPLAY_WIDTH;

use crate::report::ColorMode;
use crate::CliError;

/// Scanner name used when `--name` is not given.
pub const DEFAULT_NAME: &str = "number lexer";

/// Where the template text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// The literal command-line argument.
    Text(String),
    /// A file read as raw bytes.
    File(PathBuf),
    /// Standard input, selected with `-` or `--file -`.
    Stdin,
}

impl InputSource {
    fn from_path(path: &str) -> Self {
        if path == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(path))
        }
    }
}

/// Configuration for one `stencil lex` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Scanner name, shown in logs and source reports.
    pub name: String,
    pub input: Option<InputSource>,
    /// Print each item's byte span and kind before its value.
    pub spans: bool,
    /// Characters of each value shown before truncating.
    pub width: usize,
    /// Also print the `EndOfInput` item.
    pub show_eof: bool,
    /// Render a source report to stderr when the scan fails.
    pub report: bool,
    pub color: ColorMode,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            name: DEFAULT_NAME.to_owned(),
            input: None,
            spans: false,
            width: DEFAULT_DISPLAY_WIDTH,
            show_eof: false,
            report: true,
            color: ColorMode::Auto,
        }
    }
}

impl LexOptions {
    fn set_input(&mut self, input: InputSource, arg: &str) -> Result<(), CliError> {
        if self.input.is_some() {
            return Err(CliError::UnexpectedArgument(arg.to_owned()));
        }
        self.input = Some(input);
        Ok(())
    }
}

/// Parse the arguments that follow `stencil lex`.
///
/// Everything after `--` is positional, so template text that starts with a
/// dash can still be passed literally.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions::default();
    let mut positional_only = false;
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        i += 1;

        if positional_only || !arg.starts_with('-') {
            options.set_input(InputSource::Text(arg.to_owned()), arg)?;
            continue;
        }

        match arg {
            "--" => positional_only = true,
            "-" => options.set_input(InputSource::Stdin, arg)?,
            "--spans" => options.spans = true,
            "--show-eof" => options.show_eof = true,
            "--no-report" => options.report = false,
            "--file" | "-f" => {
                let path = args.get(i).ok_or(CliError::MissingValue("--file"))?;
                i += 1;
                options.set_input(InputSource::from_path(path), path)?;
            }
            "--name" => return Err(CliError::MissingValue("--name")),
            "--width" => return Err(CliError::MissingValue("--width")),
            "--color" => return Err(CliError::MissingValue("--color")),
            _ => {
                if let Some(name) = arg.strip_prefix("--name=") {
                    name.clone_into(&mut options.name);
                } else if let Some(value) = arg.strip_prefix("--width=") {
                    options.width = value.parse().map_err(|_| CliError::InvalidValue {
                        option: "--width",
                        value: value.to_owned(),
                        expected: "a non-negative integer",
                    })?;
                } else if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = ColorMode::parse(value).ok_or_else(|| CliError::InvalidValue {
                        option: "--color",
                        value: value.to_owned(),
                        expected: "auto, always, or never",
                    })?;
                } else if let Some(path) = arg.strip_prefix("--file=") {
                    options.set_input(InputSource::from_path(path), path)?;
                } else {
                    return Err(CliError::UnknownOption(arg.to_owned()));
                }
            }
        }
    }

    if options.input.is_none() {
        return Err(CliError::MissingInput);
    }
    Ok(options)
}

#[cfg(test)]
mod tests;
