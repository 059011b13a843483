//! Command-line argument parsing
//!
//! Every option has a long and a short form and takes its value either
//! inline (`--flag=value`) or from the following token.

use std::ffi::OsString;
use std::num::IntErrorKind;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use crate::error::CliError;
use crate::pattern::{FilenamePattern, MATCH_ALL};
use crate::request::PlaylistRequest;

/// Binary name used as the first parsed token
pub const APP_NAME: &str = "vlc-playlist-generator";

/// Raw option values, before conversion.
///
/// Required options are checked after parsing so that `--help` wins over
/// a missing one.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = APP_NAME, about, long_about = None)]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct CliArguments {
    /// Directory searched recursively for video files
    #[arg(short = 's', long, value_parser = OsStringValueParser::new().try_map(path_value))]
    pub source_search_directory: Option<PathBuf>,

    /// Where the playlist is written
    #[arg(short = 'o', long, value_parser = OsStringValueParser::new().try_map(path_value))]
    pub output_playlist_file_destination: Option<PathBuf>,

    /// Maximum number of playlist entries
    #[arg(short = 'n', long, value_parser = text_value)]
    pub number_of_results: Option<String>,

    /// Regular expression searched in each file name
    #[arg(short = 'r', long, value_parser = text_value)]
    pub filename_matching_regular_expression: Option<String>,

    /// Pattern modifier letters (i, m, s, u, g, y, d)
    #[arg(short = 'f', long, value_parser = text_value)]
    pub filename_matching_regular_expression_flags: Option<String>,

    /// Print usage and exit
    #[arg(short = 'h', long)]
    pub help: bool,
}

/// What the binary should do
#[derive(Debug)]
pub enum CliCommand {
    Help,
    Generate(PlaylistRequest),
}

/// Usage text shown for `--help` and after errors
pub fn usage() -> String {
    [
        "Usage:",
        "  vlc-playlist-generator --source-search-directory <path> --output-playlist-file-destination <path> --number-of-results <number> [--filename-matching-regular-expression <regex>] [--filename-matching-regular-expression-flags <flags>]",
        "",
        "Required Arguments:",
        "  --source-search-directory, -s",
        "  --output-playlist-file-destination, -o",
        "  --number-of-results, -n",
        "",
        "Optional Arguments:",
        "  --filename-matching-regular-expression, -r   Default: .*",
        "  --filename-matching-regular-expression-flags, -f",
        "  --help, -h",
    ]
    .join("\n")
}

/// Split tokens (without the program name) into option values
pub fn parse_arguments<I, T>(tokens: I) -> Result<CliArguments, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens = std::iter::once(OsString::from(APP_NAME)).chain(tokens.into_iter().map(Into::into));
    CliArguments::try_parse_from(tokens).map_err(cli_error)
}

/// Parse tokens into a command, converting values and compiling the pattern
pub fn parse_command<I, T>(tokens: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let arguments = parse_arguments(tokens)?;
    if arguments.help {
        return Ok(CliCommand::Help);
    }

    let source = arguments
        .source_search_directory
        .ok_or(CliError::MissingRequired("--source-search-directory"))?;
    let output = arguments
        .output_playlist_file_destination
        .ok_or(CliError::MissingRequired("--output-playlist-file-destination"))?;
    let count = arguments
        .number_of_results
        .ok_or(CliError::MissingRequired("--number-of-results"))?;
    let count = parse_whole_number(&count).ok_or(CliError::InvalidNumber(count))?;

    let pattern = FilenamePattern::with_flags(
        arguments
            .filename_matching_regular_expression
            .as_deref()
            .unwrap_or(MATCH_ALL),
        arguments
            .filename_matching_regular_expression_flags
            .as_deref()
            .unwrap_or(""),
    )?;

    Ok(CliCommand::Generate(
        PlaylistRequest::new(source, output, count).with_pattern(pattern),
    ))
}

/// Values may not look like options, even when given inline
fn path_value(value: OsString) -> Result<PathBuf, String> {
    if value.as_encoded_bytes().starts_with(b"-") {
        return Err("value looks like an option".to_string());
    }
    Ok(PathBuf::from(value))
}

fn text_value(value: &str) -> Result<String, String> {
    if value.starts_with('-') {
        return Err("value looks like an option".to_string());
    }
    Ok(value.to_string())
}

/// Map clap's parse errors onto the command-line error kinds
fn cli_error(err: clap::Error) -> CliError {
    let argument = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.split_whitespace().next().map(str::to_string),
        _ => None,
    };

    match (err.kind(), argument) {
        (ErrorKind::UnknownArgument, Some(arg)) => CliError::UnknownArgument(arg),
        (ErrorKind::InvalidValue | ErrorKind::ValueValidation, Some(arg)) => {
            CliError::MissingArgumentValue(arg)
        }
        _ => CliError::Parse(err),
    }
}

/// Accept any numeric text that denotes a whole number; blank text is zero.
///
/// Decimal, exponent and `0x`/`0o`/`0b` spellings are understood; values
/// beyond the `i64` range saturate.
fn parse_whole_number(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }

    let lowered = text.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lowered.strip_prefix(prefix) {
            return match i64::from_str_radix(digits, radix) {
                Ok(value) => Some(value),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
                Err(_) => None,
            };
        }
    }

    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }

    // Reject the spellings f64 accepts that are not plain numbers.
    if lowered.contains("inf") || lowered.contains("nan") {
        return None;
    }
    let value = text.parse::<f64>().ok()?;
    if value.fract() != 0.0 {
        return None;
    }
    // Float to int casts saturate at the i64 bounds.
    Some(value as i64)
}
