//! Code point argument parsing
//!
//! Accepted forms: `U+00A0`, `0xA0`, a decimal number of two or more
//! digits, a single literal character, and an inclusive range `A..B` of
//! any of the numeric forms.

use crate::error::CliError;
use regex::Regex;
use std::sync::OnceLock;

/// Largest number of code points a single range argument may expand to
pub const MAX_RANGE_LEN: u32 = 0x10000;

static NOTATION: OnceLock<Regex> = OnceLock::new();

fn notation() -> &'static Regex {
    NOTATION.get_or_init(|| {
        Regex::new(r"^(?:(?i:u\+|0x)(?P<hex>[0-9a-fA-F]{1,8})|(?P<dec>[0-9]{2,10}))$")
            .expect("code point notation regex is valid")
    })
}

/// Parse a single code point in any accepted notation
pub fn parse_code_point(arg: &str) -> Result<u32, CliError> {
    let invalid = || CliError::InvalidCodePoint(arg.to_string());

    let mut chars = arg.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ch as u32);
    }

    let caps = notation().captures(arg.trim()).ok_or_else(invalid)?;
    let parsed = if let Some(hex) = caps.name("hex") {
        u32::from_str_radix(hex.as_str(), 16)
    } else if let Some(dec) = caps.name("dec") {
        dec.as_str().parse::<u32>()
    } else {
        return Err(invalid());
    };
    parsed.map_err(|_| invalid())
}

/// Parse one argument, expanding `lo..hi` ranges inclusively
pub fn parse_argument(arg: &str) -> Result<Vec<u32>, CliError> {
    let Some((lo, hi)) = arg.split_once("..").filter(|_| arg.chars().count() > 2) else {
        return parse_code_point(arg).map(|cp| vec![cp]);
    };

    let (lo, hi) = (parse_code_point(lo)?, parse_code_point(hi)?);
    if lo > hi {
        return Err(CliError::InvalidCodePoint(format!(
            "{arg} (range start is after range end)"
        )));
    }
    if hi - lo >= MAX_RANGE_LEN {
        return Err(CliError::InvalidCodePoint(format!(
            "{arg} (range exceeds {MAX_RANGE_LEN} code points)"
        )));
    }
    Ok((lo..=hi).collect())
}

/// Parse every argument in order
pub fn parse_arguments(args: &[String]) -> Result<Vec<u32>, CliError> {
    let mut code_points = Vec::new();
    for arg in args {
        code_points.extend(parse_argument(arg)?);
    }
    Ok(code_points)
}
